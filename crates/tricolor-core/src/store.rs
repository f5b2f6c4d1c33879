//! File-backed storage for a single color snapshot

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::snapshot::ColorSnapshot;
use crate::state::ColorState;

/// File name used when no other location is configured
pub const DEFAULT_STORE_FILE: &str = "saved_color.json";

/// One JSON snapshot on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Store backed by `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a snapshot has been saved
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Write the current color, replacing any previous snapshot
    pub fn save(&self, state: &ColorState) -> Result<()> {
        let json = state.to_snapshot().to_json()?;
        fs::write(&self.path, json)?;
        tracing::debug!(path = %self.path.display(), hex = %state.hex(), "Saved color");
        Ok(())
    }

    /// Read the stored color
    ///
    /// A missing file is [`Error::NotFound`]; no default color is made up.
    pub fn load(&self) -> Result<ColorState> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::NotFound(self.path.clone()));
            }
            Err(e) => return Err(e.into()),
        };

        let snapshot = ColorSnapshot::from_json(&json)?;
        let state = ColorState::from_snapshot(&snapshot)?;
        tracing::debug!(path = %self.path.display(), hex = %state.hex(), "Loaded color");
        Ok(state)
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_FILE)
    }
}
