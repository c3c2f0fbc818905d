// ─────────────────────────────────────────────────────────────────────
// HHV Cosmology Kernel — TRP Viability Engine
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Calibrated evaluator for the factorized Total Resolution Parameter
//!
//!   T(Ne, H_I, eps) = R(Ne, H_I) · P(eps)
//!
//! which gates whether an inflationary configuration is admissible:
//! T ≥ T_min is viable, T < T_min is excluded.
//!
//! # Model invariants
//!
//! 1. **Factorization is exact**: `decompose_t` and `t` share one
//!    resolution and one suppression evaluation; T = R · P never drifts
//!    between code paths.
//!
//! 2. **Calibration is frozen at construction**: the single derived
//!    scalar `mu` is solved algebraically from the pivot so that
//!    T(Ne*, H_I*, eps*) = T_min, and never changes afterwards. By
//!    construction `epsilon_max(Ne*, H_I*)` recovers eps*.
//!
//! 3. **Monotonicity**: R is strictly increasing in Ne and strictly
//!    decreasing in H_I; P is symmetric in eps with P(0) = 1 and
//!    strictly decreasing in |eps|.
//!
//! 4. **Queries are pure**: every operation is closed-form arithmetic
//!    over the frozen configuration; the engine is `Send + Sync` and
//!    safe to share across threads without coordination.

pub mod engine;

pub use engine::{TrpDecomposition, TrpEngine};
