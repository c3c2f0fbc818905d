// ─────────────────────────────────────────────────────────────────────
// HHV Cosmology Kernel — Unit Conversions
// ─────────────────────────────────────────────────────────────────────
//! Reporting-only conversions from natural (reduced-Planck, Mpl = 1)
//! units into GeV. Internal computation never goes through these.

/// Reduced Planck mass in GeV.
pub const REDUCED_PLANCK_MASS_GEV: f64 = 2.435e18;

/// Hubble scale in GeV from its natural-unit value.
pub fn h_in_gev(h_natural: f64) -> f64 {
    h_natural * REDUCED_PLANCK_MASS_GEV
}

/// Energy scale V^(1/4) in GeV from its natural-unit value.
pub fn v_quarter_in_gev(v_quarter_natural: f64) -> f64 {
    v_quarter_natural * REDUCED_PLANCK_MASS_GEV
}
