//! Error types for ranking and report writing.

use thiserror::Error;

/// Errors raised while scoring movies or writing a report
#[derive(Error, Debug)]
pub enum RankError {
    /// A movie that reached scoring credits no actors, so its actor
    /// average is undefined
    #[error("Movie '{title}' has no credited actors")]
    EmptyActorGroup { title: String },

    /// The rating field is not a finite number
    #[error("Invalid rating for '{title}': '{value}'")]
    InvalidRating { title: String, value: String },

    /// An actor credited on a scored movie is missing from the actor index
    ///
    /// Only reachable when the movies being scored did not come from the
    /// dataset the index was built from.
    #[error("Actor '{actor}' is not in the actor rating index")]
    UnindexedActor { actor: String },

    /// The report file could not be created or written
    #[error("Failed to write report to {path}: {source}")]
    WriteFailure {
        path: String,
        source: std::io::Error,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, RankError>;
