//! Error types for the tasks-fix crate.

use thiserror::Error;

/// Error types for the fix workflow
#[derive(Error, Debug, Clone)]
pub enum FixError {
    #[error("No tasks file found at '{path}'")]
    MissingTasksFile { path: String },

    #[error("Failed to read file '{path}': {reason}")]
    FileReadError { path: String, reason: String },

    #[error("Failed to write file '{path}': {reason}")]
    FileWriteError { path: String, reason: String },

    #[error("Failed to parse JSON: {reason}")]
    JsonParseError { reason: String },

    #[error("Unexpected tasks file shape: {reason}")]
    UnexpectedShape { reason: String },

    #[error("Tag '{name}' not found")]
    TagNotFound { name: String },

    #[error("Storage error: {reason}")]
    StorageError { reason: String },
}

impl From<std::io::Error> for FixError {
    fn from(err: std::io::Error) -> Self {
        Self::StorageError {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for FixError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParseError {
            reason: err.to_string(),
        }
    }
}

/// Result type alias for fix operations
pub type FixResult<T> = Result<T, FixError>;
