//! Flat, serializable record of a [`ColorState`]
//!
//! The record carries all three representations plus the hex string:
//!
//! ```json
//! {
//!   "rgb": [255, 0, 0],
//!   "xyz": [41.24564, 21.26729, 1.93339],
//!   "lab": [53.2408, 80.0925, 67.2032],
//!   "hex": "#ff0000"
//! }
//! ```
//!
//! Loading trusts the stored triples and does not re-derive one from
//! another. Only the shape of the record is checked.

use serde::{Deserialize, Serialize};

use crate::color::rgb::is_hex_shape;
use crate::color::{Lab, Rgb8, Xyz};
use crate::error::{Error, Result};
use crate::state::ColorState;

/// Persisted form of a color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSnapshot {
    /// 8-bit sRGB channels
    pub rgb: [u8; 3],
    /// XYZ tristimulus values
    pub xyz: [f64; 3],
    /// L*, a*, b*
    pub lab: [f64; 3],
    /// Lowercase `#rrggbb`
    pub hex: String,
}

impl ColorSnapshot {
    /// Copy the three representations and compute the hex string
    pub fn from_state(state: &ColorState) -> Self {
        Self {
            rgb: state.rgb().to_array(),
            xyz: state.xyz().to_array(),
            lab: state.lab().to_array(),
            hex: state.hex(),
        }
    }

    /// Serialize as pretty-printed JSON
    ///
    /// JSON has no NaN or infinity, so a snapshot with a non-finite XYZ or
    /// Lab component is [`Error::NonFinite`] rather than a file that cannot
    /// be read back.
    pub fn to_json(&self) -> Result<String> {
        if !self.xyz.iter().chain(&self.lab).all(|c| c.is_finite()) {
            return Err(Error::NonFinite);
        }
        serde_json::to_string_pretty(self).map_err(|e| Error::MalformedSnapshot(e.to_string()))
    }

    /// Parse a JSON snapshot
    ///
    /// Missing fields, wrong types, RGB channels outside [0, 255] and
    /// triples of the wrong length all fail here.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::MalformedSnapshot(e.to_string()))
    }
}

impl From<&ColorState> for ColorSnapshot {
    fn from(state: &ColorState) -> Self {
        Self::from_state(state)
    }
}

impl ColorState {
    /// Snapshot of the current color
    pub fn to_snapshot(&self) -> ColorSnapshot {
        ColorSnapshot::from_state(self)
    }

    /// Rebuild a state from a snapshot without re-deriving anything
    ///
    /// The `hex` field must be `#` followed by six hex digits. It is not
    /// compared against `rgb`.
    pub fn from_snapshot(snapshot: &ColorSnapshot) -> Result<Self> {
        if !is_hex_shape(&snapshot.hex) {
            return Err(Error::MalformedSnapshot(format!(
                "hex must be '#' followed by six hex digits, got {:?}",
                snapshot.hex
            )));
        }

        Ok(Self {
            rgb: Rgb8::from_array(snapshot.rgb),
            xyz: Xyz::from_array(snapshot.xyz),
            lab: Lab::from_array(snapshot.lab),
        })
    }
}

impl TryFrom<&ColorSnapshot> for ColorState {
    type Error = Error;

    fn try_from(snapshot: &ColorSnapshot) -> Result<Self> {
        Self::from_snapshot(snapshot)
    }
}
