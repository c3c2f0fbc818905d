// ─────────────────────────────────────────────────────────────────────
// HHV Cosmology Kernel — Slow-Roll Math
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Closed-form slow-roll inflation relations, survey-derived reference
//! parameters, and natural-unit → GeV conversions.
//!
//! Everything here is pure arithmetic in natural units (Mpl = 1 unless
//! explicitly parameterized); the GeV conversions exist for reporting
//! only and are never used in internal computation.

pub mod cmb;
pub mod inflation;
pub mod units;

pub use cmb::CmbParams;
