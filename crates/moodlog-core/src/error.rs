//! Error types for Moodlog core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages and exit codes.

use thiserror::Error;
use uuid::Uuid;

/// Result type alias for Moodlog operations.
pub type Result<T> = std::result::Result<T, MoodError>;

/// Core error type for Moodlog operations.
#[derive(Debug, Error)]
pub enum MoodError {
    /// Data validation error (rejected before any mutation)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entry not found
    #[error("Entry not found: {0}")]
    NotFound(Uuid),

    /// A write would put two entries on the same calendar day
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid configuration value
    #[error("Config error: {0}")]
    Config(String),
}

impl From<std::io::Error> for MoodError {
    fn from(err: std::io::Error) -> Self {
        MoodError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for MoodError {
    fn from(err: serde_json::Error) -> Self {
        MoodError::Storage(format!("Snapshot encoding failed: {}", err))
    }
}

impl From<rusqlite::Error> for MoodError {
    fn from(err: rusqlite::Error) -> Self {
        MoodError::Storage(format!("SQLite error: {}", err))
    }
}
