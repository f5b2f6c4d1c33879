//! Command execution
//!
//! Each command drives a [`ColorState`] the way the interactive converter
//! does and hands back the resulting state with its gamut outcome.

use anyhow::{Context, Result};
use clap::ValueEnum;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tricolor_core::{ColorState, Error, Gamut, Lab, Model, Rgb8, SnapshotStore, Xyz};

/// Representation selector for single-channel edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelArg {
    Rgb,
    Xyz,
    Lab,
}

impl From<ModelArg> for Model {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::Rgb => Model::Rgb,
            ModelArg::Xyz => Model::Xyz,
            ModelArg::Lab => Model::Lab,
        }
    }
}

/// What a command asks for, with its parsed arguments
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Rgb(Rgb8),
    Xyz(Xyz),
    Lab(Lab),
    Hex(Rgb8),
    Set {
        model: Model,
        index: usize,
        value: f64,
    },
    Random {
        seed: Option<u64>,
    },
    Reset,
    Show,
}

/// State after a command, plus whether RGB had to be clipped
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    pub state: ColorState,
    pub gamut: Gamut,
}

impl Outcome {
    fn in_gamut(state: ColorState) -> Self {
        Self {
            state,
            gamut: Gamut::InGamut,
        }
    }
}

/// Run one action against the store
///
/// Only `set` and `show` read the store. Nothing is written here; saving
/// is up to the caller.
pub fn execute(action: Action, store: &SnapshotStore) -> Result<Outcome> {
    let mut state = ColorState::new();

    let outcome = match action {
        Action::Rgb(rgb) | Action::Hex(rgb) => {
            state.set_from_rgb(rgb);
            Outcome::in_gamut(state)
        }
        Action::Xyz(xyz) => {
            ensure_finite(xyz.to_array())?;
            let gamut = state.set_from_xyz(xyz);
            Outcome { state, gamut }
        }
        Action::Lab(lab) => {
            ensure_finite(lab.to_array())?;
            let gamut = state.set_from_lab(lab);
            Outcome { state, gamut }
        }
        Action::Set {
            model,
            index,
            value,
        } => {
            let mut state = load_or_black(store)?;
            let gamut = state
                .set_channel(model, index, value)
                .with_context(|| format!("cannot set {} channel {}", model, index))?;
            Outcome { state, gamut }
        }
        Action::Random { seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            state.randomize(&mut rng);
            Outcome::in_gamut(state)
        }
        Action::Reset => Outcome::in_gamut(state),
        Action::Show => {
            let state = store
                .load()
                .with_context(|| format!("cannot load {}", store.path().display()))?;
            Outcome::in_gamut(state)
        }
    };

    Ok(outcome)
}

/// Reject NaN and infinite channel arguments
fn ensure_finite(channels: [f64; 3]) -> Result<()> {
    if channels.iter().all(|c| c.is_finite()) {
        Ok(())
    } else {
        Err(Error::NonFinite).with_context(|| format!("invalid channels {:?}", channels))
    }
}

/// Stored color, or black when nothing has been saved yet
fn load_or_black(store: &SnapshotStore) -> Result<ColorState> {
    match store.load() {
        Ok(state) => Ok(state),
        Err(Error::NotFound(path)) => {
            tracing::info!(path = %path.display(), "No saved color, starting from black");
            Ok(ColorState::new())
        }
        Err(e) => Err(e).with_context(|| format!("cannot load {}", store.path().display())),
    }
}
