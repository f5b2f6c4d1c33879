//! sRGB transfer function
//!
//! Both directions of the IEC 61966-2-1 piecewise curve. The linear
//! segment includes its threshold in each direction.

/// Encoded-side threshold between the linear and power segments
pub const SRGB_DECODE_THRESHOLD: f64 = 0.04045;

/// Linear-side threshold between the linear and power segments
pub const SRGB_ENCODE_THRESHOLD: f64 = 0.0031308;

/// sRGB gamma decode (encoded → linear)
///
/// Converts a display-encoded channel in [0,1] to linear light.
#[inline]
pub fn srgb_gamma_decode(encoded: f64) -> f64 {
    if encoded <= SRGB_DECODE_THRESHOLD {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB gamma encode (linear → encoded)
///
/// Converts linear light back to a display-encoded channel. Inputs outside
/// [0,1] are accepted; negative values stay on the linear segment.
#[inline]
pub fn srgb_gamma_encode(linear: f64) -> f64 {
    if linear <= SRGB_ENCODE_THRESHOLD {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}
