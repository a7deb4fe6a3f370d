//! Durable storage for the progress state
//!
//! The whole [`ProgressState`] lives in a single JSON slot on disk. The slot
//! is read once at startup and overwritten wholesale after every mutation;
//! a missing or unparsable slot degrades to the default empty state.

use crate::config::Config;
use crate::core::models::{Confidence, ProgressState};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the progress slot inside the data directory
const SLOT_FILE_NAME: &str = "progress.json";

/// Errors from persisting the progress slot
///
/// Load never produces these; only writes can fail, and callers treat a
/// failed write as non-fatal.
#[derive(Debug)]
pub enum StoreError {
    /// Filesystem error while writing the slot
    Io(std::io::Error),
    /// State could not be encoded as JSON
    Encode(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to write progress slot: {err}"),
            Self::Encode(err) => write!(f, "failed to encode progress state: {err}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Encode(err)
    }
}

/// Owner of the progress slot path
#[derive(Debug, Clone)]
pub struct ProgressStore {
    /// Full path of the JSON slot
    path: PathBuf,
}

impl ProgressStore {
    /// Create a store over an explicit slot path
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a store rooted at the configured data directory
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(PathBuf::from(&config.paths.data_dir).join(SLOT_FILE_NAME))
    }

    /// The slot path this store reads and writes
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the progress state from the slot
    ///
    /// Fails soft: a missing file or unparsable content yields the default
    /// empty state. Never returns an error.
    #[must_use]
    pub fn load(&self) -> ProgressState {
        match fs::read_to_string(&self.path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|err| {
                logger::warn!(
                    "Progress slot {} is unparsable ({err}); starting from an empty state",
                    self.path.display()
                );
                ProgressState::new()
            }),
            Err(_) => ProgressState::new(),
        }
    }

    /// Serialize and write the full state, overwriting the slot wholesale
    ///
    /// # Errors
    /// Returns an error if the slot or its parent directory cannot be written
    pub fn save(&self, state: &ProgressState) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Clear all progress: a fresh empty state, stamped now and persisted
    ///
    /// # Errors
    /// Returns an error if the fresh state cannot be persisted; the returned
    /// error still carries no partial state (the in-memory reset succeeded)
    pub fn reset(&self) -> Result<ProgressState, StoreError> {
        let mut state = ProgressState::new();
        state.touch();
        self.save(&state)?;
        Ok(state)
    }

    /// Set an item's completion flag and persist
    ///
    /// Performs no prerequisite gating; that is the interaction layer's
    /// responsibility, checked before calling this.
    ///
    /// # Errors
    /// Returns an error if the updated state cannot be persisted
    pub fn set_item_checked(
        &self,
        state: &mut ProgressState,
        item_id: &str,
        value: bool,
    ) -> Result<(), StoreError> {
        state.set_checked(item_id, value);
        self.save(state)
    }

    /// Set an item's evidence text and persist
    ///
    /// # Errors
    /// Returns an error if the updated state cannot be persisted
    pub fn set_evidence(
        &self,
        state: &mut ProgressState,
        item_id: &str,
        text: &str,
    ) -> Result<(), StoreError> {
        state.set_evidence(item_id, text);
        self.save(state)
    }

    /// Set a week's reflection text and persist
    ///
    /// # Errors
    /// Returns an error if the updated state cannot be persisted
    pub fn set_reflection(
        &self,
        state: &mut ProgressState,
        week_id: &str,
        text: &str,
    ) -> Result<(), StoreError> {
        state.set_reflection(week_id, text);
        self.save(state)
    }

    /// Set a week's confidence level and persist
    ///
    /// # Errors
    /// Returns an error if the updated state cannot be persisted
    pub fn set_confidence(
        &self,
        state: &mut ProgressState,
        week_id: &str,
        level: Confidence,
    ) -> Result<(), StoreError> {
        state.set_confidence(week_id, level);
        self.save(state)
    }
}
