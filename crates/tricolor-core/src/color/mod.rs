//! Color representations
//!
//! This module provides:
//! - 8-bit device RGB
//! - CIE XYZ color space
//! - CIELAB (L*a*b*) color space
//! - The D65 reference white

pub mod lab;
pub mod rgb;
pub mod white_point;
pub mod xyz;

pub use lab::Lab;
pub use rgb::{ParseHexError, Rgb8};
pub use white_point::{D65, WhitePoint};
pub use xyz::Xyz;
