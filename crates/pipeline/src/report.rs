//! Plain-text report writer.
//!
//! One line per entry, in report order:
//!
//! ```text
//! Dangal, 8.8
//! Guardians of the Galaxy, 8.1
//! ```
//!
//! The target file is truncated and rewritten in place; there is no
//! temp-file swap, so an interrupted write can leave a partial file.

use crate::error::{RankError, Result};
use crate::ranker::Report;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Render a score as the shortest decimal that round-trips.
///
/// Whole numbers keep one fractional digit: `8.0`, never `8`.
/// This matches Python's `repr` only for `1e-4 <= |x| < 1e16`; outside that
/// range `repr` switches to exponent notation and this does not.
pub fn format_score(score: f64) -> String {
    if score.is_finite() && score.fract() == 0.0 {
        format!("{:.1}", score)
    } else {
        score.to_string()
    }
}

/// Write `report` as `"<title>, <score>\n"` lines to any writer
pub fn write_to<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    for entry in report {
        writeln!(out, "{}, {}", entry.title, format_score(entry.score))?;
    }
    Ok(())
}

/// Create or truncate `path` and write the report into it
pub fn write(report: &Report, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let write_failure = |source: io::Error| RankError::WriteFailure {
        path: path.display().to_string(),
        source,
    };

    let file = File::create(path).map_err(write_failure)?;
    let mut writer = BufWriter::new(file);
    write_to(report, &mut writer).map_err(write_failure)?;
    writer.flush().map_err(write_failure)?;

    tracing::info!("Wrote {} entries to {}", report.len(), path.display());
    Ok(())
}
