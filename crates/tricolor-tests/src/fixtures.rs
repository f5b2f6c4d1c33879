//! Known reference colors
//!
//! `data/reference_colors.json` lists sRGB colors with their XYZ and Lab
//! values (IEC 61966-2-1 matrix, D65, four decimals).

use serde::Deserialize;
use tricolor_core::{Lab, Rgb8, Xyz};

const REFERENCE_COLORS: &str = include_str!("../data/reference_colors.json");

/// One entry of the reference table
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceColor {
    pub name: String,
    pub rgb: [u8; 3],
    pub hex: String,
    pub xyz: [f64; 3],
    pub lab: [f64; 3],
}

impl ReferenceColor {
    pub fn rgb(&self) -> Rgb8 {
        Rgb8::from_array(self.rgb)
    }

    pub fn xyz(&self) -> Xyz {
        Xyz::from_array(self.xyz)
    }

    pub fn lab(&self) -> Lab {
        Lab::from_array(self.lab)
    }
}

/// Parse the embedded reference table
pub fn reference_colors() -> anyhow::Result<Vec<ReferenceColor>> {
    Ok(serde_json::from_str(REFERENCE_COLORS)?)
}
