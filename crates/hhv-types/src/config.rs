// ─────────────────────────────────────────────────────────────────────
// HHV Cosmology Kernel — Engine Configuration & Pivot
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::error::{HhvError, HhvResult};

/// Configuration for the TRP viability engine.
///
/// All four scales are frozen at engine construction; the only derived
/// quantity is the calibration scalar `mu`, which the engine computes
/// from these values and the [`Pivot`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrpConfig {
    /// Reference entropy normalization scale S0.
    /// Default: 1e5.
    pub s0: f64,

    /// Minimum viable value of the Total Resolution Parameter T.
    /// Default: 3.0.
    pub t_min: f64,

    /// Area-to-entropy coupling coefficient k_A.
    /// Default: 1e3.
    pub k_a: f64,

    /// Anisotropy suppression width sigma.
    /// Default: 1.0.
    pub sigma: f64,
}

impl Default for TrpConfig {
    fn default() -> Self {
        Self {
            s0: 1e5,
            t_min: 3.0,
            k_a: 1e3,
            sigma: 1.0,
        }
    }
}

impl TrpConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> HhvResult<()> {
        if !self.s0.is_finite() || self.s0 <= 0.0 {
            return Err(HhvError::InvalidParameter(format!(
                "S0 must be positive and finite, got {}",
                self.s0
            )));
        }
        if !self.t_min.is_finite() || self.t_min <= 0.0 {
            return Err(HhvError::InvalidParameter(format!(
                "T_min must be positive and finite, got {}",
                self.t_min
            )));
        }
        if !self.k_a.is_finite() || self.k_a <= 0.0 {
            return Err(HhvError::InvalidParameter(format!(
                "k_A must be positive and finite, got {}",
                self.k_a
            )));
        }
        if !self.sigma.is_finite() || self.sigma <= 0.0 {
            return Err(HhvError::InvalidParameter(format!(
                "sigma must be positive and finite, got {}",
                self.sigma
            )));
        }
        Ok(())
    }

    /// Load from JSON string.
    pub fn from_json(json: &str) -> HhvResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| HhvError::InvalidParameter(format!("JSON parse error: {e}")))
    }
}

/// Calibration pivot (Ne*, H_I*, eps*).
///
/// Immutable once chosen. Typically derived from survey reference
/// parameters through the slow-roll relations, or supplied directly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pivot {
    /// Reference e-fold count Ne*.
    pub ne_star: f64,
    /// Inflationary Hubble scale H_I* in natural units (Mpl = 1).
    pub hi_star: f64,
    /// Anisotropy bound eps* at the pivot.
    pub eps_star: f64,
}

impl Pivot {
    pub fn new(ne_star: f64, hi_star: f64, eps_star: f64) -> Self {
        Self {
            ne_star,
            hi_star,
            eps_star,
        }
    }

    /// Validate pivot values.
    pub fn validate(&self) -> HhvResult<()> {
        if !self.ne_star.is_finite() {
            return Err(HhvError::InvalidParameter(format!(
                "Ne* must be finite, got {}",
                self.ne_star
            )));
        }
        if !self.hi_star.is_finite() || self.hi_star <= 0.0 {
            return Err(HhvError::InvalidParameter(format!(
                "H_I* must be positive and finite, got {:e}",
                self.hi_star
            )));
        }
        if !self.eps_star.is_finite() {
            return Err(HhvError::InvalidParameter(format!(
                "eps* must be finite, got {}",
                self.eps_star
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        assert!(TrpConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_sigma_rejected() {
        let config = TrpConfig {
            sigma: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_s0_rejected() {
        let config = TrpConfig {
            s0: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_finite_k_a_rejected() {
        let config = TrpConfig {
            k_a: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_t_min_rejected() {
        let config = TrpConfig {
            t_min: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_json_roundtrip() {
        let json = r#"{"s0": 1e5, "t_min": 3.0, "k_a": 1e3, "sigma": 1.0}"#;
        let config = TrpConfig::from_json(json).unwrap();
        assert!((config.t_min - 3.0).abs() < 1e-12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(TrpConfig::from_json("{not json").is_err());
    }

    #[test]
    fn test_pivot_valid() {
        let pivot = Pivot::new(60.0, 1.0e-5, 0.02);
        assert!(pivot.validate().is_ok());
    }

    #[test]
    fn test_pivot_zero_hubble_rejected() {
        let pivot = Pivot::new(60.0, 0.0, 0.02);
        assert!(pivot.validate().is_err());
    }

    #[test]
    fn test_pivot_nan_epsilon_rejected() {
        let pivot = Pivot::new(60.0, 1.0e-5, f64::NAN);
        assert!(pivot.validate().is_err());
    }
}
