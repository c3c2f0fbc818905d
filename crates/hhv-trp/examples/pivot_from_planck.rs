// ─────────────────────────────────────────────────────────────────────
// HHV Cosmology Kernel — Planck Pivot Walkthrough
// ─────────────────────────────────────────────────────────────────────
//! Derives the Planck-like pivot through the slow-roll relations,
//! calibrates the TRP engine there, and prints derived quantities:
//! H_I and V^(1/4) in natural units and GeV, the calibration scalar mu,
//! and the maximum allowed |eps| at and around the pivot.

use hhv_math::{inflation, units, CmbParams};
use hhv_trp::TrpEngine;
use hhv_types::{HhvResult, TrpConfig};

fn main() -> HhvResult<()> {
    let params = CmbParams::planck2018();

    println!("Planck-like pivot parameters:");
    println!("  A_s      = {:.3e}", params.a_s);
    println!("  r_star   = {:.3e}", params.r_upper);
    println!("  Ne_star  = {:.1}", params.n_e_pivot);

    let pivot = params.pivot()?;
    println!("\nDerived H_I from r and A_s:");
    println!("  H_I* (Planck units) = {:.3e}", pivot.hi_star);
    println!("  H_I* (GeV)          = {:.3e} GeV", units::h_in_gev(pivot.hi_star));

    let v_quarter = inflation::v_quarter_from_h(pivot.hi_star, 1.0)?;
    println!("\nApproximate inflation energy scale:");
    println!("  V^(1/4) (Planck units) = {v_quarter:.3e}");
    println!(
        "  V^(1/4) (GeV)          = {:.3e} GeV",
        units::v_quarter_in_gev(v_quarter)
    );

    let config = TrpConfig::default();
    let engine = TrpEngine::new(config, pivot)?;

    println!("\nTRP engine calibrated at pivot:");
    println!("  mu        = {:.3e}", engine.mu());
    println!("  S0        = {:.3e}", engine.config().s0);
    println!("  T_min     = {:.3e}", engine.config().t_min);
    println!("  k_A       = {:.3e}", engine.config().k_a);
    println!("  eps_star  = {:.3e}", pivot.eps_star);

    let eps_max_star = engine.epsilon_max(pivot.ne_star, pivot.hi_star)?;
    println!("\nMax allowed |eps| at pivot:");
    println!(
        "  |eps|_max(Ne*={:.1}, H_I*={:.3e}) = {eps_max_star:.5}",
        pivot.ne_star, pivot.hi_star
    );

    println!("\nSample |eps|_max around pivot (Ne varying, H_I fixed):");
    for ne in [50.0, 55.0, 60.0, 65.0] {
        let eps_max = engine.epsilon_max(ne, pivot.hi_star)?;
        println!("  Ne={ne:5.1} -> |eps|_max = {eps_max:.5}");
    }

    println!("\nSample |eps|_max around pivot (H_I varying, Ne fixed):");
    for hi in [0.5 * pivot.hi_star, pivot.hi_star, 2.0 * pivot.hi_star] {
        let eps_max = engine.epsilon_max(pivot.ne_star, hi)?;
        println!("  H_I={hi:.3e} -> |eps|_max = {eps_max:.5}");
    }

    Ok(())
}
