//! High-score persistence
//!
//! One small JSON record holds the best score and when it was set:
//!
//! ```json
//! { "version": 1, "high_score": 42, "last_updated": "2026-10-19T18:02:11+02:00" }
//! ```
//!
//! # Architecture
//!
//! - `types`: record structure and error type
//! - `manager`: HighScoreStore for file operations
//!
//! Reads never fail from the caller's point of view: a missing or corrupt
//! file simply means "no high score yet".

pub mod manager;
pub mod types;

pub use manager::HighScoreStore;
