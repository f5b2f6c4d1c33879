//! # tricolor-tests
//!
//! Parity and property testing for tricolor.
//!
//! This crate provides:
//! - Wrappers around `palette` as an independent reference implementation
//! - Accuracy measurement using deltaE2000
//! - Seeded and structured color patterns
//! - Known reference colors loaded from a JSON fixture
//!
//! ## Test Categories
//!
//! 1. **Reference parity**: RGB→XYZ→Lab against palette
//! 2. **Exhaustive sweeps**: all 2^24 RGB colors through the round trips
//! 3. **State properties**: consistency after every update operation
//! 4. **Snapshot files**: persistence layout and failure modes

pub mod accuracy;
pub mod fixtures;
pub mod patterns;
pub mod reference;

pub use accuracy::{DeltaEStats, delta_e_2000};
pub use fixtures::{ReferenceColor, reference_colors};
pub use patterns::{TestPattern, generate_pattern};
