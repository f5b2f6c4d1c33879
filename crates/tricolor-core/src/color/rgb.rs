//! 8-bit device RGB
//!
//! Gamma-encoded sRGB with one byte per channel. The `u8` storage is what
//! keeps every `Rgb8` inside [0,255]; values coming from the XYZ and Lab
//! paths are clamped before they become an `Rgb8`.

use std::fmt;
use std::str::FromStr;

/// 8-bit sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb8 {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb8 {
    /// Create a new RGB color
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create RGB from an array
    #[inline]
    pub const fn from_array(arr: [u8; 3]) -> Self {
        Self {
            r: arr[0],
            g: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels normalized to [0, 1]
    #[inline]
    pub fn to_unit(&self) -> [f64; 3] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        ]
    }

    /// Lowercase `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse `#rrggbb` or `rrggbb` in either case
    pub fn from_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Black
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White
    pub const WHITE: Self = Self::new(255, 255, 255);
}

/// Whether `s` has the exact persisted hex shape: `#` and six lowercase hex digits
pub(crate) fn is_hex_shape(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s.bytes()
            .skip(1)
            .all(|c| c.is_ascii_digit() || (b'a'..=b'f').contains(&c))
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.r, self.g, self.b)
    }
}

/// Error returned when a string is not a hex color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseHexError(String);

impl fmt::Display for ParseHexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a hex color (expected #rrggbb): {:?}", self.0)
    }
}

impl std::error::Error for ParseHexError {}

impl FromStr for Rgb8 {
    type Err = ParseHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s).ok_or_else(|| ParseHexError(s.to_string()))
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from(arr: [u8; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Rgb8> for [u8; 3] {
    fn from(rgb: Rgb8) -> Self {
        rgb.to_array()
    }
}
