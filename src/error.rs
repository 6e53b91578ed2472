//! Custom error types for finsight
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. The aggregation layer itself is infallible;
//! errors arise only at the edges (file I/O, CSV decoding, configuration).

use thiserror::Error;

/// The main error type for finsight operations
#[derive(Error, Debug)]
pub enum FinsightError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV decoding errors that prevent reading the file at all
    #[error("CSV error: {0}")]
    Csv(String),

    /// Import errors (a file that could not be loaded into transactions)
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Validation errors for user-supplied arguments
    #[error("Validation error: {0}")]
    Validation(String),
}

impl FinsightError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for FinsightError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for FinsightError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for FinsightError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for finsight operations
pub type FinsightResult<T> = Result<T, FinsightError>;
