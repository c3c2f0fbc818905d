// ─────────────────────────────────────────────────────────────────────
// HHV Cosmology Kernel — TRP Engine (Calibration + Inversion)
// ─────────────────────────────────────────────────────────────────────
//! Total Resolution Parameter engine:
//!
//!   T(Ne, H_I, eps) = mu · R_raw(Ne, H_I) · P(eps)
//!
//! - R_raw(Ne, H_I) = S_geom / S0 with S_geom = k_A · A / 4 and horizon
//!   area A(Ne, H_I) = 4π · e^(2·Ne) / H_I². Lower H_I means a larger
//!   horizon area, larger entropy, larger resolution capacity; more
//!   e-folds accumulate more resolving power.
//! - P(eps) = exp(−eps² / (2·sigma²)), the Gaussian anisotropy
//!   suppression, with closed-form inverse.
//! - mu = T_min / (R_raw(Ne*, H_I*) · P(eps*)), solved once at
//!   construction.
//!
//! The resolution factor is evaluated in log space relative to the
//! pivot: calibration pins ln R(Ne*, H_I*) = ln T_min − ln P(eps*), so
//! e^(2·Ne) never appears as a bare intermediate and inverting the
//! suppression at the pivot recovers eps* to rounding.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use hhv_types::{HhvError, HhvResult, Pivot, TrpConfig};

/// Factor breakdown of a single TRP evaluation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrpDecomposition {
    /// Calibrated resolution factor R = mu · R_raw(Ne, H_I).
    pub resolution: f64,
    /// Anisotropy suppression P(eps) ∈ (0, 1].
    pub suppression: f64,
    /// Total Resolution Parameter T = R · P.
    pub total: f64,
}

/// Calibrated TRP evaluator.
///
/// Construction validates the configuration and pivot, solves the
/// calibration scalar `mu`, and freezes everything; all queries are
/// pure functions of (Ne, H_I, eps) and the frozen state.
#[derive(Debug, Clone)]
pub struct TrpEngine {
    config: TrpConfig,
    pivot: Pivot,
    /// ln R at the pivot: ln T_min + eps*² / (2·sigma²).
    ln_r_pivot: f64,
    /// −ln P(eps*) = eps*² / (2·sigma²).
    neg_ln_p_star: f64,
    /// 1 / (2·sigma²).
    half_inv_sigma_sq: f64,
    /// Calibration scalar mu = T_min / (R_raw(Ne*, H_I*) · P(eps*)).
    mu: f64,
}

impl TrpEngine {
    /// Calibrate an engine at the given pivot.
    ///
    /// Solves mu algebraically; both R_raw and P are strictly positive
    /// closed forms, so no root-finding is involved. Fails with
    /// [`HhvError::Calibration`] when the pivot leaves mu zero or
    /// non-finite.
    pub fn new(config: TrpConfig, pivot: Pivot) -> HhvResult<Self> {
        config.validate()?;
        pivot.validate()?;

        let half_inv_sigma_sq = 0.5 / (config.sigma * config.sigma);
        let neg_ln_p_star = pivot.eps_star * pivot.eps_star * half_inv_sigma_sq;
        let ln_r_pivot = config.t_min.ln() + neg_ln_p_star;

        // ln R_raw(Ne*, H_I*) = ln(k_A·π/S0) + 2·Ne* − 2·ln H_I*
        let ln_r_raw_star =
            (config.k_a * PI / config.s0).ln() + 2.0 * pivot.ne_star - 2.0 * pivot.hi_star.ln();
        let mu = (ln_r_pivot - ln_r_raw_star).exp();
        if !mu.is_finite() || mu <= 0.0 {
            return Err(HhvError::Calibration(format!(
                "mu undefined at pivot (Ne*={}, H_I*={:e}, eps*={}): \
                 R_raw · P(eps*) evaluates to zero or non-finite",
                pivot.ne_star, pivot.hi_star, pivot.eps_star
            )));
        }

        log::debug!(
            "TRP engine calibrated: mu={mu:e} at Ne*={}, H_I*={:e}, eps*={}",
            pivot.ne_star,
            pivot.hi_star,
            pivot.eps_star
        );

        Ok(Self {
            config,
            pivot,
            ln_r_pivot,
            neg_ln_p_star,
            half_inv_sigma_sq,
            mu,
        })
    }

    /// Total Resolution Parameter T(Ne, H_I, eps).
    pub fn t(&self, ne: f64, h_i: f64, eps: f64) -> HhvResult<f64> {
        Ok(self.decompose_t(ne, h_i, eps)?.total)
    }

    /// Evaluate T together with its factors (R, P, T = R · P).
    ///
    /// `t` calls through this method, so both share the same underlying
    /// R and P evaluations and the factorization cannot drift.
    pub fn decompose_t(&self, ne: f64, h_i: f64, eps: f64) -> HhvResult<TrpDecomposition> {
        let resolution = self.resolution_factor(ne, h_i)?;
        let suppression = self.suppression_factor(eps)?;
        Ok(TrpDecomposition {
            resolution,
            suppression,
            total: resolution * suppression,
        })
    }

    /// Largest eps₀ ≥ 0 with T(Ne, H_I, eps₀) = T_min.
    ///
    /// Inverts the Gaussian suppression in closed form:
    /// eps₀ = sigma · sqrt(2 · ln(R / T_min)). Returns 0.0 when the
    /// unsuppressed floor R(Ne, H_I) already sits below T_min: no
    /// anisotropy is tolerable there, but that is a result, not an
    /// error.
    pub fn epsilon_max(&self, ne: f64, h_i: f64) -> HhvResult<f64> {
        self.check_point(ne, h_i)?;
        let ln_ratio = self.neg_ln_p_star + self.delta_ln_resolution(ne, h_i);
        if ln_ratio <= 0.0 {
            return Ok(0.0);
        }
        Ok(self.config.sigma * (2.0 * ln_ratio).sqrt())
    }

    /// Calibrated resolution factor R(Ne, H_I) = mu · R_raw(Ne, H_I).
    pub fn resolution_factor(&self, ne: f64, h_i: f64) -> HhvResult<f64> {
        self.check_point(ne, h_i)?;
        Ok((self.ln_r_pivot + self.delta_ln_resolution(ne, h_i)).exp())
    }

    /// Anisotropy suppression P(eps) = exp(−eps² / (2·sigma²)).
    pub fn suppression_factor(&self, eps: f64) -> HhvResult<f64> {
        if !eps.is_finite() {
            return Err(HhvError::InvalidParameter(format!(
                "eps must be finite, got {eps}"
            )));
        }
        Ok((-(eps * eps) * self.half_inv_sigma_sq).exp())
    }

    /// Horizon area A(Ne, H_I) = 4π · e^(2·Ne) / H_I² of the inflated
    /// patch.
    pub fn horizon_area(&self, ne: f64, h_i: f64) -> HhvResult<f64> {
        self.check_point(ne, h_i)?;
        Ok(4.0 * PI * (2.0 * ne).exp() / (h_i * h_i))
    }

    /// Geometric entropy S_geom = k_A · A / 4 (area law).
    pub fn geometric_entropy(&self, ne: f64, h_i: f64) -> HhvResult<f64> {
        Ok(self.config.k_a * self.horizon_area(ne, h_i)? / 4.0)
    }

    /// Element-wise T over parallel slices of (Ne, H_I, eps).
    pub fn t_batch(&self, ne: &[f64], h_i: &[f64], eps: &[f64]) -> HhvResult<Vec<f64>> {
        if ne.len() != h_i.len() || ne.len() != eps.len() {
            return Err(HhvError::InvalidParameter(format!(
                "batch length mismatch: Ne={}, H_I={}, eps={}",
                ne.len(),
                h_i.len(),
                eps.len()
            )));
        }
        ne.iter()
            .zip(h_i)
            .zip(eps)
            .map(|((&n, &h), &e)| self.t(n, h, e))
            .collect()
    }

    /// Element-wise `epsilon_max` over parallel slices of (Ne, H_I).
    pub fn epsilon_max_batch(&self, ne: &[f64], h_i: &[f64]) -> HhvResult<Vec<f64>> {
        if ne.len() != h_i.len() {
            return Err(HhvError::InvalidParameter(format!(
                "batch length mismatch: Ne={}, H_I={}",
                ne.len(),
                h_i.len()
            )));
        }
        ne.iter()
            .zip(h_i)
            .map(|(&n, &h)| self.epsilon_max(n, h))
            .collect()
    }

    /// Calibration scalar mu.
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Frozen engine configuration {S0, T_min, k_A, sigma}.
    pub fn config(&self) -> &TrpConfig {
        &self.config
    }

    /// Calibration pivot (Ne*, H_I*, eps*).
    pub fn pivot(&self) -> &Pivot {
        &self.pivot
    }

    /// ln R(Ne, H_I) − ln R(Ne*, H_I*), the pivot-relative log
    /// resolution: 2·(Ne − Ne*) − 2·ln(H_I / H_I*).
    fn delta_ln_resolution(&self, ne: f64, h_i: f64) -> f64 {
        2.0 * (ne - self.pivot.ne_star) - 2.0 * (h_i / self.pivot.hi_star).ln()
    }

    fn check_point(&self, ne: f64, h_i: f64) -> HhvResult<()> {
        if !ne.is_finite() {
            return Err(HhvError::InvalidParameter(format!(
                "Ne must be finite, got {ne}"
            )));
        }
        if !h_i.is_finite() || h_i <= 0.0 {
            return Err(HhvError::InvalidParameter(format!(
                "H_I must be positive and finite, got {h_i:e}"
            )));
        }
        Ok(())
    }
}
