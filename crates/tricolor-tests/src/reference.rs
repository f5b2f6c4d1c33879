//! Reference implementation wrappers
//!
//! `palette` computes its sRGB matrix from the primaries and works on a
//! Y = 1 scale, so results are rescaled to tricolor's Y = 100 and compared
//! with a tolerance rather than exactly.

use palette::white_point::D65;
use palette::convert::FromColorUnclamped;
use palette::{FromColor, Srgb};
use tricolor_core::{Lab, Rgb8, Xyz};

type PaletteXyz = palette::Xyz<D65, f64>;
type PaletteLab = palette::Lab<D65, f64>;

fn to_palette_xyz(xyz: Xyz) -> PaletteXyz {
    PaletteXyz::new(xyz.x / 100.0, xyz.y / 100.0, xyz.z / 100.0)
}

fn from_palette_xyz(xyz: PaletteXyz) -> Xyz {
    Xyz::new(xyz.x * 100.0, xyz.y * 100.0, xyz.z * 100.0)
}

/// RGB → XYZ using palette
pub fn palette_rgb_to_xyz(rgb: Rgb8) -> Xyz {
    let srgb: Srgb<f64> = Srgb::new(rgb.r, rgb.g, rgb.b).into_format();
    from_palette_xyz(PaletteXyz::from_color(srgb))
}

/// XYZ → Lab using palette
pub fn palette_xyz_to_lab(xyz: Xyz) -> Lab {
    let lab = PaletteLab::from_color(to_palette_xyz(xyz));
    Lab::new(lab.l, lab.a, lab.b)
}

/// Lab → XYZ using palette
pub fn palette_lab_to_xyz(lab: Lab) -> Xyz {
    from_palette_xyz(PaletteXyz::from_color(PaletteLab::new(lab.l, lab.a, lab.b)))
}

/// XYZ → unclamped encoded sRGB channels in [0, 1] (or beyond) using palette
pub fn palette_xyz_to_srgb(xyz: Xyz) -> [f64; 3] {
    let srgb = Srgb::<f64>::from_color_unclamped(to_palette_xyz(xyz));
    [srgb.red, srgb.green, srgb.blue]
}

/// RGB → Lab using palette
pub fn palette_rgb_to_lab(rgb: Rgb8) -> Lab {
    palette_xyz_to_lab(palette_rgb_to_xyz(rgb))
}
