//! Error types for drills
//!
//! Uses `thiserror` for library errors. Binaries wrap these in `anyhow`.
//!
//! Invalid operators, division by zero and out-of-range bytes are not errors
//! here: they are ordinary outcomes of a run and live in the domain services.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for drills operations
pub type DrillResult<T> = Result<T, DrillError>;

/// Main error type for drills operations
#[derive(Error, Debug)]
pub enum DrillError {
    /// Console input did not start with the expected kind of value
    #[error("expected {expected}, found '{found}'")]
    MalformedInput {
        expected: &'static str,
        found: String,
    },

    /// Console input ended before a value could be read
    #[error("expected {expected}, but input ended")]
    UnexpectedEof { expected: &'static str },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// Config file named explicitly does not exist
    #[error("config file not found: {path}")]
    ConfigNotFound { path: PathBuf },
}

impl DrillError {
    /// True for errors caused by what the user typed rather than the environment.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DrillError::MalformedInput { .. } | DrillError::UnexpectedEof { .. }
        )
    }
}
