//! Error types for tricolor

use std::path::PathBuf;

use thiserror::Error;

/// Result type for tricolor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tricolor operations
///
/// Leaving the sRGB gamut is not an error: the update operations report it
/// through [`Gamut`](crate::Gamut) and still store the clamped color.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Snapshot record has missing fields or fields of the wrong shape
    #[error("Malformed snapshot: {0}")]
    MalformedSnapshot(String),

    /// No snapshot has been stored at this location
    #[error("No saved color at {}", .0.display())]
    NotFound(PathBuf),

    /// Channel index outside 0..3
    #[error("Channel index out of range: {0} (expected 0, 1 or 2)")]
    ChannelIndex(usize),

    /// Channel value is NaN or infinite
    #[error("Channel value must be a finite number")]
    NonFinite,

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
