//! Core traits for the ranking pipeline.
//!
//! This module defines the Filter trait that selects which movies reach
//! scoring. Filters never influence the actor rating index, which is always
//! built from the whole dataset.

use crate::error::Result;
use data_loader::MovieRecord;

/// Core trait for filtering movies before scoring.
///
/// All filters must implement this trait to be used in the FilterPipeline.
/// Filters take ownership of the borrowed movie list and return the subset
/// that passes, preserving the input order.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of movies.
    ///
    /// # Returns
    /// * `Ok(Vec<&MovieRecord>)` - The movies that pass
    /// * `Err` - If filtering fails
    fn apply<'a>(&self, movies: Vec<&'a MovieRecord>) -> Result<Vec<&'a MovieRecord>>;
}
