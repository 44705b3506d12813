//! Error types for deskwrite.
//!
//! Every failure carries enough context (identifier or path, underlying cause)
//! for a caller to report it without further lookups.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the deskwrite library.
#[derive(Debug, Error)]
pub enum DeskwriteError {
    // Configuration errors
    #[error("Configuration error at {path:?}: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    // External process errors
    #[error("Command `{program}` failed: {message}")]
    Execution {
        program: String,
        message: String,
        /// Exit code, when the process ran to completion.
        status: Option<i32>,
    },

    // Serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    // Validation errors
    #[error("Validation error for {field}: {message}")]
    Validation { field: String, message: String },
}

/// Result type alias for deskwrite operations.
pub type Result<T> = std::result::Result<T, DeskwriteError>;

impl From<std::io::Error> for DeskwriteError {
    fn from(err: std::io::Error) -> Self {
        DeskwriteError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for DeskwriteError {
    fn from(err: serde_json::Error) -> Self {
        DeskwriteError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl DeskwriteError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        DeskwriteError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Create a configuration error for an unusable directory.
    pub fn config_with_path(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: Option<std::io::Error>,
    ) -> Self {
        DeskwriteError::Config {
            message: message.into(),
            path: Some(path.into()),
            source,
        }
    }

    /// Map to a process exit code.
    ///
    /// Codes follow BSD `sysexits.h`:
    /// - 65: Data error (bad input)
    /// - 69: Service unavailable (registration tool)
    /// - 74: I/O error
    /// - 78: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            DeskwriteError::Validation { .. } | DeskwriteError::Json { .. } => 65,
            DeskwriteError::Execution { .. } => 69,
            DeskwriteError::Io { .. } => 74,
            DeskwriteError::Config { .. } => 78,
        }
    }
}
