//! High-score store
//!
//! This module provides the HighScoreStore struct which handles:
//! - Loading the record at startup (never fails, defaults to 0)
//! - Overwriting the record when a run beats it
//! - Refusing to downgrade a higher stored value

use super::types::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// File name of the record inside the save directory
pub const HIGH_SCORE_FILE: &str = "highscore.json";

#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    /// Creates a store backed by `save_directory/highscore.json`
    ///
    /// Nothing is touched on disk until the first save.
    pub fn new(save_directory: impl AsRef<Path>) -> Self {
        HighScoreStore {
            path: save_directory.as_ref().join(HIGH_SCORE_FILE),
        }
    }

    /// Store under `~/.flappy_eid`, or the working directory without a home
    pub fn in_home_dir() -> Self {
        let save_dir = dirs::home_dir()
            .map(|p| p.join(".flappy_eid"))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(save_dir)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and validates the stored record
    pub fn try_load(&self) -> Result<HighScoreRecord, SaveError> {
        let json = fs::read_to_string(&self.path)?;
        let record: HighScoreRecord = serde_json::from_str(&json)?;

        if record.version > CURRENT_SAVE_VERSION {
            return Err(SaveError::InvalidVersion(record.version));
        }

        Ok(record)
    }

    /// Stored high score, or 0 when the record is missing or unreadable
    pub fn load(&self) -> u32 {
        match self.try_load() {
            Ok(record) => {
                info!(
                    "Loaded high score {} (updated {})",
                    record.high_score,
                    record.last_updated.format("%Y-%m-%d %H:%M")
                );
                record.high_score
            }
            Err(SaveError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No high score at {}, starting from 0", self.path.display());
                0
            }
            Err(e) => {
                warn!("Unreadable high score at {}: {}", self.path.display(), e);
                0
            }
        }
    }

    /// Overwrites the record with `score` and the current timestamp
    pub fn save(&self, score: u32) -> Result<PathBuf, SaveError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(&HighScoreRecord::new(score))?;
        fs::write(&self.path, json)?;

        info!("High score {} saved to {}", score, self.path.display());

        Ok(self.path.clone())
    }

    /// Persists `score` only if it beats what is stored. Returns whether it wrote.
    ///
    /// A missing or corrupt file counts as 0 and gets replaced. A record from a
    /// newer format version is never overwritten.
    pub fn record(&self, score: u32) -> Result<bool, SaveError> {
        let stored = match self.try_load() {
            Ok(record) => record.high_score,
            Err(SaveError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => 0,
            Err(SaveError::Serialization(e)) => {
                debug!("Replacing unreadable high score at {}: {}", self.path.display(), e);
                0
            }
            Err(e) => return Err(e),
        };

        if score <= stored {
            return Ok(false);
        }
        self.save(score)?;
        Ok(true)
    }
}
