// ─────────────────────────────────────────────────────────────────────
// HHV Cosmology Kernel — Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for all HHV kernel failures.
#[derive(Error, Debug)]
pub enum HhvError {
    /// Non-positive or non-finite input where positivity is required
    /// (H_I ≤ 0, A_s ≤ 0, sigma ≤ 0, S0 ≤ 0, k_A ≤ 0, NaN/Inf anywhere).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Pivot values for which R_raw(Ne*, H_I*) · P(eps*) evaluates to
    /// zero or non-finite, leaving the calibration scalar mu undefined.
    #[error("calibration error: {0}")]
    Calibration(String),
}

pub type HhvResult<T> = Result<T, HhvError>;
