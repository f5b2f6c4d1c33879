//! The current color, held in three synchronized representations
//!
//! [`ColorState`] is driven from exactly one representation at a time and
//! recomputes the other two. RGB input is trusted as-is. XYZ and Lab input
//! pass through the 8-bit gamut check, and the result says whether the
//! derived RGB had to be clamped.

use std::fmt;

use rand::Rng;

use crate::color::{Lab, Rgb8, Xyz};
use crate::convert::{lab_to_xyz, rgb_to_xyz, xyz_to_lab, xyz_to_rgb};
use crate::error::{Error, Result};

/// Outcome of driving the state from XYZ or Lab
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gamut {
    /// Derived RGB was representable without clamping
    #[default]
    InGamut,
    /// At least one RGB channel was clamped into [0, 255]
    Clipped,
}

impl Gamut {
    /// True when the stored RGB had to be clamped
    #[inline]
    pub fn is_clipped(self) -> bool {
        matches!(self, Self::Clipped)
    }

    #[inline]
    fn from_flag(out_of_gamut: bool) -> Self {
        if out_of_gamut { Self::Clipped } else { Self::InGamut }
    }
}

/// Which representation a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Model {
    /// 8-bit sRGB
    Rgb,
    /// CIE XYZ
    Xyz,
    /// CIELAB
    Lab,
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Model::Rgb => write!(f, "RGB"),
            Model::Xyz => write!(f, "XYZ"),
            Model::Lab => write!(f, "Lab"),
        }
    }
}

/// A new value for one whole representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorUpdate {
    /// Drive from 8-bit sRGB
    Rgb(Rgb8),
    /// Drive from XYZ
    Xyz(Xyz),
    /// Drive from Lab
    Lab(Lab),
}

impl ColorUpdate {
    /// Representation this update drives
    pub fn model(&self) -> Model {
        match self {
            Self::Rgb(_) => Model::Rgb,
            Self::Xyz(_) => Model::Xyz,
            Self::Lab(_) => Model::Lab,
        }
    }
}

impl From<Rgb8> for ColorUpdate {
    fn from(rgb: Rgb8) -> Self {
        Self::Rgb(rgb)
    }
}

impl From<Xyz> for ColorUpdate {
    fn from(xyz: Xyz) -> Self {
        Self::Xyz(xyz)
    }
}

impl From<Lab> for ColorUpdate {
    fn from(lab: Lab) -> Self {
        Self::Lab(lab)
    }
}

/// The current color as RGB, XYZ and Lab
///
/// Starts out black. The fields are only changed together, through the
/// `set_from_*` operations (or wholesale from a snapshot), so after every
/// call the three values describe the same color up to rounding and
/// clamping.
///
/// The three fields are not updated atomically. Share a `ColorState`
/// between threads behind a lock.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColorState {
    pub(crate) rgb: Rgb8,
    pub(crate) xyz: Xyz,
    pub(crate) lab: Lab,
}

impl ColorState {
    /// Black in all three representations
    pub fn new() -> Self {
        Self::default()
    }

    /// State driven from an RGB color
    pub fn from_rgb(rgb: Rgb8) -> Self {
        let mut state = Self::new();
        state.set_from_rgb(rgb);
        state
    }

    /// Current RGB
    #[inline]
    pub fn rgb(&self) -> Rgb8 {
        self.rgb
    }

    /// Current XYZ
    #[inline]
    pub fn xyz(&self) -> Xyz {
        self.xyz
    }

    /// Current Lab
    #[inline]
    pub fn lab(&self) -> Lab {
        self.lab
    }

    /// Current RGB as lowercase `#rrggbb`
    pub fn hex(&self) -> String {
        self.rgb.to_hex()
    }

    /// Store `rgb` and derive XYZ and Lab from it
    pub fn set_from_rgb(&mut self, rgb: Rgb8) {
        let xyz = rgb_to_xyz(rgb);
        self.rgb = rgb;
        self.xyz = xyz;
        self.lab = xyz_to_lab(xyz);
    }

    /// Store `xyz` and derive RGB and Lab from it
    pub fn set_from_xyz(&mut self, xyz: Xyz) -> Gamut {
        let mapped = xyz_to_rgb(xyz);
        self.xyz = xyz;
        self.rgb = mapped.rgb;
        self.lab = xyz_to_lab(xyz);
        Gamut::from_flag(mapped.out_of_gamut)
    }

    /// Store `lab` and derive XYZ, then RGB, from it
    pub fn set_from_lab(&mut self, lab: Lab) -> Gamut {
        let xyz = lab_to_xyz(lab);
        let mapped = xyz_to_rgb(xyz);
        self.lab = lab;
        self.xyz = xyz;
        self.rgb = mapped.rgb;
        Gamut::from_flag(mapped.out_of_gamut)
    }

    /// Dispatch an update to the matching `set_from_*` operation
    ///
    /// RGB updates are always [`Gamut::InGamut`].
    pub fn apply(&mut self, update: ColorUpdate) -> Gamut {
        match update {
            ColorUpdate::Rgb(rgb) => {
                self.set_from_rgb(rgb);
                Gamut::InGamut
            }
            ColorUpdate::Xyz(xyz) => self.set_from_xyz(xyz),
            ColorUpdate::Lab(lab) => self.set_from_lab(lab),
        }
    }

    /// Change one channel of one representation and resynchronize
    ///
    /// The other two channels of `model` keep their current values. An RGB
    /// value is truncated toward zero and clamped to [0, 255] before use,
    /// the way a slider or text entry feeding the state would.
    pub fn set_channel(&mut self, model: Model, index: usize, value: f64) -> Result<Gamut> {
        if index > 2 {
            return Err(Error::ChannelIndex(index));
        }
        if !value.is_finite() {
            return Err(Error::NonFinite);
        }

        let update = match model {
            Model::Rgb => {
                let mut channels = self.rgb.to_array();
                channels[index] = value.trunc().clamp(0.0, 255.0) as u8;
                ColorUpdate::Rgb(Rgb8::from_array(channels))
            }
            Model::Xyz => {
                let mut channels = self.xyz.to_array();
                channels[index] = value;
                ColorUpdate::Xyz(Xyz::from_array(channels))
            }
            Model::Lab => {
                let mut channels = self.lab.to_array();
                channels[index] = value;
                ColorUpdate::Lab(Lab::from_array(channels))
            }
        };

        Ok(self.apply(update))
    }

    /// Back to black in all three representations
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Drive the state from a uniformly random RGB color
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        let channels: [u8; 3] = rng.r#gen();
        self.set_from_rgb(Rgb8::from_array(channels));
    }
}
