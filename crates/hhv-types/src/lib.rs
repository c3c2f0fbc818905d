// ─────────────────────────────────────────────────────────────────────
// HHV Cosmology Kernel — Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Type definitions, configuration, and error hierarchy for the HHV
//! cosmology kernel: slow-roll inflation relations and the calibrated
//! TRP viability engine.

pub mod config;
pub mod error;

pub use config::{Pivot, TrpConfig};
pub use error::{HhvError, HhvResult};
