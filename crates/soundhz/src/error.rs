//! Error types for soundhz.
//!
//! This module defines all error types used throughout the soundhz crate.
//! Only environmental failures and contract violations cross the store's
//! boundary; data corruption and missing removal targets are handled
//! internally and never surface here.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for soundhz operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Store Errors ===
    /// Failed to read the backing file.
    #[error("failed to read {path}: {source}")]
    FileRead {
        /// Path to the file that couldn't be read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the backing file.
    #[error("failed to write {path}: {source}")]
    FileWrite {
        /// Path to the file that couldn't be written.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Validation Errors ===
    /// A sound board failed validation.
    #[error("invalid sound board: {message}")]
    BoardValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// A sound clip failed validation.
    #[error("invalid sound clip: {message}")]
    ClipValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Cancellation ===
    /// An operation was cancelled before completing.
    #[error("operation cancelled: {operation}")]
    Cancelled {
        /// Name of the cancelled operation.
        operation: &'static str,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for soundhz operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new board validation error.
    #[must_use]
    pub fn board_validation(message: impl Into<String>) -> Self {
        Self::BoardValidation {
            message: message.into(),
        }
    }

    /// Create a new clip validation error.
    #[must_use]
    pub fn clip_validation(message: impl Into<String>) -> Self {
        Self::ClipValidation {
            message: message.into(),
        }
    }

    /// Check if this error was caused by cancellation.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }

    /// Check if this error is a validation failure.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::BoardValidation { .. } | Self::ClipValidation { .. }
        )
    }
}
