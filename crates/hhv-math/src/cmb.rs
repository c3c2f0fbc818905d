// ─────────────────────────────────────────────────────────────────────
// HHV Cosmology Kernel — Survey Reference Parameters
// ─────────────────────────────────────────────────────────────────────
//! Survey-derived reference values used to seed the TRP calibration.
//!
//! Data sources:
//!   - A_s: Planck 2018 TT,TE,EE+lowE+lensing best fit
//!   - r_upper: forecast tensor-to-scalar upper bound (r ≲ 0.005)
//!   - N_e: nominal pivot e-fold count for horizon-exit scales
//!   - eps_iso: statistical-isotropy bound on the anisotropy parameter
//!
//! Carried as an immutable value struct rather than process-wide
//! globals, so calibration stays reproducible and test-isolated.

use serde::{Deserialize, Serialize};

use hhv_types::{HhvResult, Pivot};

use crate::inflation;

/// Fixed survey-derived reference parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CmbParams {
    /// Scalar amplitude A_s of the primordial power spectrum.
    pub a_s: f64,
    /// Upper bound on the tensor-to-scalar ratio r.
    pub r_upper: f64,
    /// Nominal pivot e-fold count Ne*.
    pub n_e_pivot: f64,
    /// Anisotropy bound eps* from statistical-isotropy constraints.
    pub eps_iso: f64,
}

impl CmbParams {
    /// Planck 2018 reference values.
    pub fn planck2018() -> Self {
        Self {
            a_s: 2.1e-9,
            r_upper: 0.005,
            n_e_pivot: 60.0,
            eps_iso: 0.02,
        }
    }

    /// Derive the calibration pivot (Ne*, H_I*, eps*) through the
    /// slow-roll relation, in natural units (Mpl = 1).
    pub fn pivot(&self) -> HhvResult<Pivot> {
        let hi_star = inflation::h_from_r_as(self.r_upper, self.a_s, 1.0)?;
        Ok(Pivot::new(self.n_e_pivot, hi_star, self.eps_iso))
    }
}

impl Default for CmbParams {
    fn default() -> Self {
        Self::planck2018()
    }
}
