//! Error types for ferro-dx.

use thiserror::Error;

/// Main error type for ferro-dx operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DxError {
    /// The disease catalog contained no diseases after filtering.
    #[error("Empty disease catalog: {msg}")]
    EmptyCatalog { msg: String },

    /// An analysis option failed validation.
    #[error("Invalid option {name}: {msg}")]
    InvalidOption { name: &'static str, msg: String },

    /// A probability value was outside its valid range.
    #[error("Invalid probability {value} for {context}: must be in (0, 1)")]
    InvalidProbability { value: f64, context: String },

    /// IO error (for file operations).
    #[error("IO error: {msg}")]
    Io { msg: String },

    /// JSON serialization or parsing error.
    #[error("JSON error: {msg}")]
    Json { msg: String },
}

impl From<std::io::Error> for DxError {
    fn from(err: std::io::Error) -> Self {
        DxError::Io {
            msg: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for DxError {
    fn from(err: serde_json::Error) -> Self {
        DxError::Json {
            msg: err.to_string(),
        }
    }
}
