use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tricolor_core::{DEFAULT_STORE_FILE, Lab, Rgb8, SnapshotStore, Xyz};

mod commands;
mod display;

use commands::{Action, ModelArg, execute};
use display::{GAMUT_WARNING, render_panel};

/// Environment variable naming the snapshot file
const STORE_ENV: &str = "TRICOLOR_STORE";

#[derive(Parser)]
#[command(name = "tricolor")]
#[command(about = "Convert a color between sRGB, CIE XYZ (D65) and CIELAB")]
#[command(version)]
struct Cli {
    /// Snapshot file (default: $TRICOLOR_STORE, then ./saved_color.json)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Save the resulting color to the snapshot file
    #[arg(long, global = true)]
    save: bool,

    /// Print the snapshot JSON instead of the text panel
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Drive the color from 8-bit RGB
    Rgb {
        /// Red (0-255)
        r: u8,
        /// Green (0-255)
        g: u8,
        /// Blue (0-255)
        b: u8,
    },
    /// Drive the color from CIE XYZ (white Y = 100)
    Xyz {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
        #[arg(allow_negative_numbers = true)]
        z: f64,
    },
    /// Drive the color from CIELAB
    Lab {
        /// Lightness (0-100)
        #[arg(allow_negative_numbers = true)]
        l: f64,
        /// Green-red axis
        #[arg(allow_negative_numbers = true)]
        a: f64,
        /// Blue-yellow axis
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    /// Pick a color by hex code (e.g. "#ff8000")
    Hex {
        /// Hex code, with or without the leading '#'
        color: Rgb8,
    },
    /// Change one channel of the saved color (black if none is saved)
    Set {
        #[arg(value_enum)]
        model: ModelArg,
        /// Channel index: 0, 1 or 2
        index: usize,
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Pick a random RGB color
    Random {
        /// Seed for a reproducible color
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Black in all three representations
    Reset,
    /// Print the saved color
    Show,
}

impl From<Commands> for Action {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Rgb { r, g, b } => Action::Rgb(Rgb8::new(r, g, b)),
            Commands::Xyz { x, y, z } => Action::Xyz(Xyz::new(x, y, z)),
            Commands::Lab { l, a, b } => Action::Lab(Lab::new(l, a, b)),
            Commands::Hex { color } => Action::Hex(color),
            Commands::Set {
                model,
                index,
                value,
            } => Action::Set {
                model: model.into(),
                index,
                value,
            },
            Commands::Random { seed } => Action::Random { seed },
            Commands::Reset => Action::Reset,
            Commands::Show => Action::Show,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tricolor=warn,tricolor_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    let store_path = cli
        .store
        .or_else(|| std::env::var(STORE_ENV).ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE));
    let store = SnapshotStore::new(store_path);
    tracing::debug!(path = %store.path().display(), "Using snapshot store");

    let outcome = execute(cli.command.into(), &store)?;

    if cli.json {
        println!("{}", outcome.state.to_snapshot().to_json()?);
    } else {
        print!("{}", render_panel(&outcome.state));
    }

    if outcome.gamut.is_clipped() {
        eprintln!("warning: {}", GAMUT_WARNING);
    }

    if cli.save {
        store
            .save(&outcome.state)
            .with_context(|| format!("cannot save {}", store.path().display()))?;
        eprintln!("Saved {} to {}", outcome.state.hex(), store.path().display());
    }

    Ok(())
}
