//! Reference white
//!
//! Only D65 is supported. Coordinates use the same scale as [`Xyz`]
//! values in this crate (Y = 100).

use crate::color::Xyz;

/// Named reference white
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitePoint {
    pub name: &'static str,
    pub xyz: Xyz,
}

impl WhitePoint {
    pub const fn new(name: &'static str, x: f64, y: f64, z: f64) -> Self {
        Self {
            name,
            xyz: Xyz::new(x, y, z),
        }
    }
}

/// Illuminant D65, the sRGB white
pub const D65: WhitePoint = WhitePoint::new("D65", 95.047, 100.000, 108.883);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_d65_values() {
        assert_eq!(D65.xyz.x, 95.047);
        assert_eq!(D65.xyz.y, 100.0);
        assert_eq!(D65.xyz.z, 108.883);
    }
}
