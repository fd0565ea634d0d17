//! Core domain types for the movie dataset.
//!
//! A dataset line carries twelve positional fields:
//!
//! ```text
//! rank;title;genres;description;director;actors;year;runtime;rating;votes;revenue;metascore
//! ```
//!
//! Only the year is validated while loading. Everything else is kept as the
//! raw text so downstream stages decide how strict they need to be.

use serde::{Deserialize, Serialize};

/// Number of fields in a complete dataset line
pub const FIELD_COUNT: usize = 12;

/// Separator between genre tokens inside the genre field
pub const GENRE_SEPARATOR: char = ',';

/// Separator between actor names inside the actor field
pub const ACTOR_SEPARATOR: &str = ", ";

// =============================================================================
// MovieRecord
// =============================================================================

/// One row of the dataset.
///
/// Fields are public and owned; a record is never mutated after parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub rank: String,
    pub title: String,
    /// Comma-joined genre list, e.g. `"Action,Adventure,Sci-Fi"`
    pub genres: String,
    pub description: String,
    pub director: String,
    /// Comma-space-joined actor list, e.g. `"Chris Pratt, Vin Diesel"`
    pub actors: String,
    pub year: i32,
    pub runtime: String,
    /// Raw rating text (parsed on demand by [`MovieRecord::rating_value`])
    pub rating: String,
    pub votes: String,
    pub revenue: String,
    pub metascore: String,
}

impl MovieRecord {
    /// Genre tokens of this movie, split on `,` and kept verbatim
    pub fn genres(&self) -> impl Iterator<Item = &str> {
        self.genres.split(GENRE_SEPARATOR)
    }

    /// Credited actors, split on `", "` and kept verbatim
    ///
    /// Empty names are skipped, so an empty actor field yields no actors.
    /// Duplicated credits are kept as-is.
    pub fn actors(&self) -> impl Iterator<Item = &str> {
        self.actors
            .split(ACTOR_SEPARATOR)
            .filter(|a| !a.is_empty())
    }

    /// Parsed rating, or `None` when the field is not a finite number
    pub fn rating_value(&self) -> Option<f64> {
        self.rating
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|r| r.is_finite())
    }
}

// =============================================================================
// Dataset
// =============================================================================

/// Ordered collection of records in file order.
///
/// Built once per load and handed to the caller; there are no mutators.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<MovieRecord>,
}

impl Dataset {
    /// Creates an empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps already-parsed records, keeping their order
    pub fn from_records(records: Vec<MovieRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MovieRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a MovieRecord;
    type IntoIter = std::slice::Iter<'a, MovieRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<MovieRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = MovieRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
