//! Error types for Salesman.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Salesman operations.
pub type Result<T> = std::result::Result<T, SalesmanError>;

/// Errors that can occur in Salesman.
#[derive(Debug, Error)]
pub enum SalesmanError {
    /// Data file does not exist.
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or create a file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Data file content does not follow the point file format.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Refused to write an empty point list.
    #[error("Cannot save empty points list")]
    NothingToSave,

    /// A tour needs at least one city.
    #[error("Tour must contain at least one city")]
    EmptyTour,

    /// Solver was given no cities.
    #[error("Cities list cannot be empty")]
    EmptyInput,

    /// Point generation parameters are unusable.
    #[error("Invalid generator settings: {0}")]
    InvalidGenerator(String),

    /// Solve was cancelled before any tour was found.
    #[error("Solve cancelled")]
    Cancelled,

    /// Failed to render a chart.
    #[error("Chart error: {0}")]
    Chart(String),

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SalesmanError {
    /// Create a FileNotFound error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a FileOpen error.
    pub fn file_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileOpen {
            path: path.into(),
            source,
        }
    }

    /// Create an InvalidFormat error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat(message.into())
    }

    /// Create an InvalidGenerator error.
    pub fn invalid_generator(message: impl Into<String>) -> Self {
        Self::InvalidGenerator(message.into())
    }
}
