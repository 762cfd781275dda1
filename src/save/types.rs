//! Persisted data types for the high score
//!
//! The record is stored as JSON via Serde.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Current record format version
pub const CURRENT_SAVE_VERSION: u32 = 1;

/// The single persisted high-score record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub version: u32,
    pub high_score: u32,
    pub last_updated: DateTime<Local>,
}

impl HighScoreRecord {
    /// Creates a record stamped with the current local time
    pub fn new(high_score: u32) -> Self {
        HighScoreRecord {
            version: CURRENT_SAVE_VERSION,
            high_score,
            last_updated: Local::now(),
        }
    }
}

/// Error types for load/save operations
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid save version: {0}")]
    InvalidVersion(u32),
}
