//! Error types for fitlog-core

use thiserror::Error;

/// Main error type for the fitlog-core library
#[derive(Error, Debug)]
pub enum Error {
    /// Database error
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// A date string that is not `YYYY-MM-DD` (optionally followed by `T...`)
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// Workout template or completed workout not found
    #[error("workout not found: {0}")]
    WorkoutNotFound(String),

    /// Built-in workouts cannot be edited or deleted
    #[error("cannot modify default workout: {0}")]
    DefaultWorkout(String),

    /// Rejected user input
    #[error("validation error: {0}")]
    Validation(String),

    /// Backup document written by an unknown format version
    #[error("unsupported backup version: {0}")]
    UnsupportedBackup(String),
}

/// Result type alias for fitlog-core
pub type Result<T> = std::result::Result<T, Error>;
