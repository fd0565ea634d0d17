//! Dataset loading entry point.
//!
//! Steps:
//! 1. Read the file as UTF-8
//! 2. Discard the header and parse every data line
//! 3. Keep records released in or after `min_year` (0 keeps everything)

use crate::error::Result;
use crate::parser;
use crate::types::Dataset;
use std::path::Path;

/// Load a dataset from `path`, keeping records with `year >= min_year`.
///
/// Passing `min_year == 0` disables the year filter. Survivors keep their
/// relative file order. Any malformed line aborts the load.
pub fn load(path: impl AsRef<Path>, min_year: i32) -> Result<Dataset> {
    let path = path.as_ref();
    tracing::debug!("Loading movie dataset from {}", path.display());

    let content = parser::read_to_string(path)?;
    let records = parser::parse_dataset(&content, min_year)?;

    tracing::info!(
        "Loaded {} movies from {} (min year: {})",
        records.len(),
        path.display(),
        min_year
    );

    Ok(Dataset::from_records(records))
}
