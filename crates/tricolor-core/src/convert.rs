//! Conversions between 8-bit sRGB, CIE XYZ and CIELAB
//!
//! All functions are pure. The only lossy step is the final rounding and
//! clamping in [`xyz_to_rgb`], which is reported through
//! [`GamutMapped::out_of_gamut`] rather than treated as an error.

use crate::color::{D65, Lab, Rgb8, Xyz};
use crate::math::{SRGB_TO_XYZ, XYZ_TO_SRGB, srgb_gamma_decode, srgb_gamma_encode};

const DELTA: f64 = 6.0 / 29.0;
const DELTA_CUBED: f64 = DELTA * DELTA * DELTA;

/// Result of mapping an XYZ color onto 8-bit sRGB
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GamutMapped {
    /// Clamped color
    pub rgb: Rgb8,
    /// True when at least one rounded channel fell outside [0, 255]
    pub out_of_gamut: bool,
}

/// 8-bit sRGB to XYZ (Y of white = 100)
pub fn rgb_to_xyz(rgb: Rgb8) -> Xyz {
    let linear = rgb.to_unit().map(srgb_gamma_decode);
    Xyz::from_array(SRGB_TO_XYZ * linear).scale(100.0)
}

/// XYZ to 8-bit sRGB
///
/// Channels are rounded half away from zero and then clamped one by one.
/// The gamut flag looks at the rounded values before the clamp, so a
/// channel that rounds to exactly 0 or 255 is in gamut.
pub fn xyz_to_rgb(xyz: Xyz) -> GamutMapped {
    let linear = XYZ_TO_SRGB * xyz.to_array().map(|c| c / 100.0);
    let rounded = linear.map(|c| (srgb_gamma_encode(c) * 255.0).round());

    let out_of_gamut = rounded.iter().any(|c| !(0.0..=255.0).contains(c));
    let [r, g, b] = rounded.map(clamp_channel);

    GamutMapped {
        rgb: Rgb8::new(r, g, b),
        out_of_gamut,
    }
}

/// Clamp a rounded channel into a byte; NaN maps to 0
#[inline]
fn clamp_channel(value: f64) -> u8 {
    if value.is_nan() {
        0
    } else {
        value.clamp(0.0, 255.0) as u8
    }
}

/// XYZ to CIELAB relative to D65
pub fn xyz_to_lab(xyz: Xyz) -> Lab {
    let white = D65.xyz;
    let fx = lab_f(xyz.x / white.x);
    let fy = lab_f(xyz.y / white.y);
    let fz = lab_f(xyz.z / white.z);

    Lab::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
}

/// CIELAB to XYZ relative to D65
pub fn lab_to_xyz(lab: Lab) -> Xyz {
    let white = D65.xyz;
    let fy = (lab.l + 16.0) / 116.0;
    let fx = lab.a / 500.0 + fy;
    let fz = fy - lab.b / 200.0;

    Xyz::new(
        white.x * lab_f_inv(fx),
        white.y * lab_f_inv(fy),
        white.z * lab_f_inv(fz),
    )
}

/// Lab forward function f(t)
#[inline]
fn lab_f(t: f64) -> f64 {
    if t > DELTA_CUBED {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

/// Lab inverse function f⁻¹(t)
#[inline]
fn lab_f_inv(t: f64) -> f64 {
    if t > DELTA {
        t * t * t
    } else {
        3.0 * DELTA * DELTA * (t - 4.0 / 29.0)
    }
}
