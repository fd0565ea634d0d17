//! # Data Loader Crate
//!
//! This crate loads the semicolon-delimited movie dataset into memory.
//!
//! ## Main Components
//!
//! - **types**: `MovieRecord` and `Dataset`
//! - **parser**: turn file contents into records
//! - **loader**: the `load` entry point with the minimum-year filter
//! - **error**: error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::load;
//!
//! // Only keep movies released in 2014 or later
//! let dataset = load("films.csv", 2014)?;
//!
//! for movie in &dataset {
//!     println!("{} ({})", movie.title, movie.year);
//! }
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod loader;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use loader::load;
pub use types::{ACTOR_SEPARATOR, Dataset, FIELD_COUNT, GENRE_SEPARATOR, MovieRecord};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::new();
        assert!(dataset.is_empty());
        assert_eq!(dataset.len(), 0);
        assert_eq!(dataset.iter().count(), 0);
    }

    #[test]
    fn test_dataset_from_parsed_records() {
        let record = parser::parse_record("1;A;Action;d;dir;X, Y;2015;100;8.0;1;1;1", 2).unwrap();
        let dataset = Dataset::from_records(vec![record.clone()]);

        assert_eq!(dataset.records(), &[record]);
        assert_eq!(dataset.len(), 1);
    }
}
