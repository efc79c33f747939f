//! Error types for path handle operations

use thiserror::Error;

/// The error type for path handle operations
#[derive(Error, Debug)]
pub enum PathError {
    /// Construction input or an operation argument was rejected
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// File contents were required but no file exists at the path
    #[error("File not found: {path}")]
    NotFound { path: String },

    /// The operation is not defined for the given operand
    #[error("{operation} is not supported for operand of type {operand}")]
    TypeUnsupported {
        operation: &'static str,
        operand: String,
    },

    /// I/O error while reading from the file system
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl PathError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        PathError::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: &str, source: std::io::Error) -> Self {
        PathError::Io {
            path: path.to_string(),
            source,
        }
    }
}

/// Result type for path handle operations
pub type Result<T> = std::result::Result<T, PathError>;
