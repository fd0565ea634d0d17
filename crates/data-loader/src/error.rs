//! Error types for the data-loader crate.
//!
//! Every failure aborts the whole load: there is no partial-success mode,
//! so a single bad line surfaces here with enough context to find it.

use thiserror::Error;

/// Errors that can occur while loading a movie dataset
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A data line couldn't be turned into a record
    ///
    /// Raised for lines with too few fields and for a non-integer year.
    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
