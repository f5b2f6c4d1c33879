//! # tricolor - one color, three representations
//!
//! Keeps a single "current color" synchronized across 8-bit sRGB,
//! CIE XYZ (D65, Y of white = 100) and CIELAB, and lets it be driven from
//! any of the three.
//!
//! ## Pipeline
//!
//! - RGB → XYZ: sRGB gamma decode, then the IEC 61966-2-1 matrix
//! - XYZ → RGB: inverse matrix, gamma encode, round, clamp (reported)
//! - XYZ ↔ Lab: CIE piecewise functions relative to D65
//!
//! Lab is never converted to RGB directly; it goes through XYZ so the
//! matrix coefficients exist in one place only.
//!
//! ## Quick Start
//!
//! ```
//! use tricolor_core::{ColorState, Lab, Rgb8, Xyz};
//!
//! let mut state = ColorState::new();
//! state.set_from_rgb(Rgb8::new(255, 0, 0));
//! assert_eq!(state.hex(), "#ff0000");
//!
//! // Far outside sRGB: RGB is clamped and the caller is told
//! let gamut = state.set_from_xyz(Xyz::new(200.0, 0.0, 0.0));
//! assert!(gamut.is_clipped());
//!
//! let gamut = state.set_from_lab(Lab::new(50.0, 0.0, 0.0));
//! assert!(!gamut.is_clipped());
//! ```

pub mod color;
pub mod convert;
pub mod error;
pub mod math;
pub mod snapshot;
pub mod state;
pub mod store;

pub use color::{D65, Lab, ParseHexError, Rgb8, WhitePoint, Xyz};
pub use convert::{GamutMapped, lab_to_xyz, rgb_to_xyz, xyz_to_lab, xyz_to_rgb};
pub use error::{Error, Result};
pub use math::{srgb_gamma_decode, srgb_gamma_encode};
pub use snapshot::ColorSnapshot;
pub use state::{ColorState, ColorUpdate, Gamut, Model};
pub use store::{DEFAULT_STORE_FILE, SnapshotStore};

/// Version of tricolor
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
