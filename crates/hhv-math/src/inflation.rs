// ─────────────────────────────────────────────────────────────────────
// HHV Cosmology Kernel — Slow-Roll Relations
// ─────────────────────────────────────────────────────────────────────
//! Closed-form conversions between the tensor-to-scalar ratio r, the
//! inflationary Hubble scale H_I, and the potential energy scale V^(1/4):
//!
//! - H_I = Mpl · sqrt(π² · A_s · r / 2)
//! - r   = 2 · (H_I / Mpl)² / (π² · A_s)   (exact algebraic inverse)
//! - V^(1/4) = (3 · H_I² · Mpl²)^(1/4)     (Friedmann relation)
//! - eps = r / 16                          (slow-roll consistency)
//!
//! Pure, total functions on their valid domain (r ≥ 0, H_I ≥ 0,
//! A_s > 0, Mpl > 0). Each scalar function has an element-wise slice
//! variant that preserves shape.

use std::f64::consts::PI;

use hhv_types::{HhvError, HhvResult};

/// Inflationary Hubble scale H_I from the tensor-to-scalar ratio r and
/// scalar amplitude A_s.
pub fn h_from_r_as(r: f64, a_s: f64, mpl: f64) -> HhvResult<f64> {
    check_non_negative("r", r)?;
    check_positive("A_s", a_s)?;
    check_positive("Mpl", mpl)?;
    Ok(mpl * (PI * PI * a_s * r / 2.0).sqrt())
}

/// Tensor-to-scalar ratio r from the Hubble scale H_I and scalar
/// amplitude A_s. Exact algebraic inverse of [`h_from_r_as`].
pub fn r_from_h_as(h_i: f64, a_s: f64, mpl: f64) -> HhvResult<f64> {
    check_non_negative("H_I", h_i)?;
    check_positive("A_s", a_s)?;
    check_positive("Mpl", mpl)?;
    let h_over_mpl = h_i / mpl;
    Ok(2.0 * h_over_mpl * h_over_mpl / (PI * PI * a_s))
}

/// Quarter-power energy scale V^(1/4) of the inflaton potential from the
/// Friedmann relation V ≈ 3·H_I²·Mpl². Monotone in H_I for fixed Mpl.
pub fn v_quarter_from_h(h_i: f64, mpl: f64) -> HhvResult<f64> {
    check_non_negative("H_I", h_i)?;
    check_positive("Mpl", mpl)?;
    Ok((3.0 * h_i * h_i * mpl * mpl).powf(0.25))
}

/// Slow-roll epsilon from the consistency relation eps = r / 16.
pub fn slow_roll_epsilon_from_r(r: f64) -> HhvResult<f64> {
    check_non_negative("r", r)?;
    Ok(r / 16.0)
}

/// Element-wise [`h_from_r_as`] over a slice of r values.
pub fn h_from_r_as_slice(r: &[f64], a_s: f64, mpl: f64) -> HhvResult<Vec<f64>> {
    r.iter().map(|&ri| h_from_r_as(ri, a_s, mpl)).collect()
}

/// Element-wise [`r_from_h_as`] over a slice of H_I values.
pub fn r_from_h_as_slice(h_i: &[f64], a_s: f64, mpl: f64) -> HhvResult<Vec<f64>> {
    h_i.iter().map(|&hi| r_from_h_as(hi, a_s, mpl)).collect()
}

/// Element-wise [`v_quarter_from_h`] over a slice of H_I values.
pub fn v_quarter_from_h_slice(h_i: &[f64], mpl: f64) -> HhvResult<Vec<f64>> {
    h_i.iter().map(|&hi| v_quarter_from_h(hi, mpl)).collect()
}

/// Element-wise [`slow_roll_epsilon_from_r`] over a slice of r values.
pub fn slow_roll_epsilon_from_r_slice(r: &[f64]) -> HhvResult<Vec<f64>> {
    r.iter().map(|&ri| slow_roll_epsilon_from_r(ri)).collect()
}

fn check_non_negative(name: &str, value: f64) -> HhvResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(HhvError::InvalidParameter(format!(
            "{name} must be non-negative and finite, got {value:e}"
        )));
    }
    Ok(())
}

fn check_positive(name: &str, value: f64) -> HhvResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(HhvError::InvalidParameter(format!(
            "{name} must be positive and finite, got {value:e}"
        )));
    }
    Ok(())
}
