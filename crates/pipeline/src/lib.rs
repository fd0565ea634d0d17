//! Ranking pipeline for the movie dataset.
//!
//! This crate provides:
//! - ActorRatingIndex: each actor's best rating across the dataset
//! - Filter trait, GenreFilter and FilterPipeline for picking movies to rank
//! - `rank` for computing the combined-score report
//! - `write` for saving a report as text
//!
//! ## Architecture
//! Data flows strictly left to right and nothing is kept between calls:
//! 1. `data_loader::load` produces a Dataset
//! 2. `rank` scores the movies that pass the filters
//! 3. `write` serializes the top entries
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{rank, write};
//!
//! let dataset = data_loader::load("films.csv", 2014)?;
//! let report = rank(&dataset, "Action", 5)?;
//! write(&report, "films.txt")?;
//! ```

pub mod error;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod actor_index;
pub mod ranker;
pub mod report;

// Re-export main types
pub use actor_index::ActorRatingIndex;
pub use error::{RankError, Result};
pub use filter_pipeline::FilterPipeline;
pub use filters::GenreFilter;
pub use ranker::{RankedEntry, Report, rank, rank_with, score_movie};
pub use report::{format_score, write, write_to};
pub use traits::Filter;
