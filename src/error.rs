//! Error types for the surfsup application.
//!
//! A single error enum covers startup failures (configuration, dataset) and
//! per-request failures (malformed dates, query errors).

use axum::http::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for surfsup operations.
#[derive(Error, Debug)]
pub enum SurfsUpError {
    /// The dataset file is missing, unreadable or lacks the expected tables
    #[error("Dataset unavailable at {}: {message}", path.display())]
    DatasetUnavailable { path: PathBuf, message: String },

    /// A date path segment is not a valid `YYYY-MM-DD` calendar date
    #[error("Invalid date for {param}: '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { param: String, value: String },

    /// Query execution errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server errors
    #[error("Server error: {message}")]
    Server { message: String },
}

impl SurfsUpError {
    /// HTTP status used when this error ends a request
    pub fn status_code(&self) -> StatusCode {
        match self {
            SurfsUpError::InvalidDate { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Convenience type alias for Results with SurfsUpError
pub type Result<T> = std::result::Result<T, SurfsUpError>;
