//! Text rendering of a color

use tricolor_core::ColorState;

/// Message shown when RGB had to be clipped
pub const GAMUT_WARNING: &str = "color is outside the sRGB gamut; RGB values were clipped";

/// HEX, RGB, XYZ and Lab lines; XYZ and Lab at four decimals
pub fn render_panel(state: &ColorState) -> String {
    let xyz = state.xyz();
    let lab = state.lab();

    format!(
        "HEX: {}\nRGB: {}\nXYZ: {:.4}, {:.4}, {:.4}\nLab: {:.4}, {:.4}, {:.4}\n",
        state.hex(),
        state.rgb(),
        xyz.x,
        xyz.y,
        xyz.z,
        lab.l,
        lab.a,
        lab.b
    )
}
