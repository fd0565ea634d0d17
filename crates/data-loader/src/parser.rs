//! Parser for the semicolon-delimited movie dataset.
//!
//! Format (one header line, then one movie per line):
//!
//! ```text
//! Rank;Title;Genre;Description;Director;Actors;Year;Runtime (Minutes);Rating;Votes;Revenue (Millions);Metascore
//! 1;Guardians of the Galaxy;Action,Adventure,Sci-Fi;...;James Gunn;Chris Pratt, Vin Diesel;2014;121;8.1;757074;333.13;76.0
//! ```
//!
//! There is no quoting, so a field can never contain `;`.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Field separator within a line
pub const FIELD_SEPARATOR: char = ';';

/// Index of the release year among the positional fields
const YEAR_FIELD: usize = 6;

/// Read a UTF-8 file into a string, mapping a missing path to `FileNotFound`
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::Io(e),
    })
}

/// Parse one data line into a [`MovieRecord`]
///
/// The line needs at least the seven fields up to and including the year.
/// Trailing fields a shorter line lacks are left empty and anything past the
/// twelfth field is ignored.
pub fn parse_record(line: &str, line_no: usize) -> Result<MovieRecord> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();

    if fields.len() <= YEAR_FIELD {
        return Err(DataLoadError::MalformedRecord {
            line: line_no,
            reason: format!(
                "expected {} fields but found {}",
                FIELD_COUNT,
                fields.len()
            ),
        });
    }

    let year_str = fields[YEAR_FIELD].trim();
    let year = year_str
        .parse::<i32>()
        .map_err(|e| DataLoadError::MalformedRecord {
            line: line_no,
            reason: format!("invalid year '{}': {}", year_str, e),
        })?;

    let field = |idx: usize| fields.get(idx).copied().unwrap_or_default().to_string();

    Ok(MovieRecord {
        rank: field(0),
        title: field(1),
        genres: field(2),
        description: field(3),
        director: field(4),
        actors: field(5),
        year,
        runtime: field(7),
        rating: field(8),
        votes: field(9),
        revenue: field(10),
        metascore: field(11),
    })
}

/// Parse the full file contents, discarding the header line
///
/// Records are kept in file order when `min_year == 0 || year >= min_year`.
/// Any bad line aborts the parse, including a blank one.
pub fn parse_dataset(content: &str, min_year: i32) -> Result<Vec<MovieRecord>> {
    let mut records = Vec::new();

    for (idx, line) in content.lines().enumerate().skip(1) {
        let line_no = idx + 1;
        let record = parse_record(line.trim(), line_no)?;
        if min_year == 0 || record.year >= min_year {
            records.push(record);
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Rank;Title;Genre;Description;Director;Actors;Year;Runtime (Minutes);Rating;Votes;Revenue (Millions);Metascore";

    #[test]
    fn test_parse_full_record() {
        let line = "1;Guardians of the Galaxy;Action,Adventure,Sci-Fi;A group of intergalactic criminals.;James Gunn;Chris Pratt, Vin Diesel, Bradley Cooper, Zoe Saldana;2014;121;8.1;757074;333.13;76.0";
        let record = parse_record(line, 2).unwrap();

        assert_eq!(record.rank, "1");
        assert_eq!(record.title, "Guardians of the Galaxy");
        assert_eq!(record.genres, "Action,Adventure,Sci-Fi");
        assert_eq!(record.director, "James Gunn");
        assert_eq!(record.year, 2014);
        assert_eq!(record.runtime, "121");
        assert_eq!(record.rating, "8.1");
        assert_eq!(record.votes, "757074");
        assert_eq!(record.revenue, "333.13");
        assert_eq!(record.metascore, "76.0");
        assert_eq!(record.actors().count(), 4);
    }

    #[test]
    fn test_too_few_fields() {
        let err = parse_record("1;Title;Action;d;dir;X", 5).unwrap_err();
        match err {
            DataLoadError::MalformedRecord { line, reason } => {
                assert_eq!(line, 5);
                assert!(reason.contains("found 6"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_seven_fields_is_enough() {
        let record = parse_record("1;Title;Action;d;dir;X;2015", 2).unwrap();
        assert_eq!(record.year, 2015);
        assert_eq!(record.rating, "");
        assert_eq!(record.metascore, "");
    }

    #[test]
    fn test_non_integer_year() {
        let err = parse_record("1;Title;Action;d;dir;X;twenty;100;8.0;1;1;1", 3).unwrap_err();
        assert!(matches!(err, DataLoadError::MalformedRecord { line: 3, .. }));
    }

    #[test]
    fn test_parse_dataset_skips_header_and_filters_year() {
        let content = format!(
            "{}\n1;A;Action;d;dir;X;2014;100;8.0;1;1;1\n2;B;Drama;d;dir;Y;2016;100;7.0;1;1;1\n",
            HEADER
        );

        let all = parse_dataset(&content, 0).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].title, "A");
        assert_eq!(all[1].title, "B");

        let recent = parse_dataset(&content, 2015).unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].title, "B");
    }

    #[test]
    fn test_parse_dataset_handles_crlf() {
        let content = format!("{}\r\n1;A;Action;d;dir;X;2014;100;8.0;1;1;1\r\n", HEADER);
        let records = parse_dataset(&content, 0).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].metascore, "1");
    }

    #[test]
    fn test_blank_line_is_malformed() {
        let content = format!(
            "{}\n1;A;Action;d;dir;X;2014;100;8.0;1;1;1\n\n2;B;Drama;d;dir;Y;2016;100;7.0;1;1;1\n",
            HEADER
        );
        let err = parse_dataset(&content, 0).unwrap_err();
        assert!(matches!(err, DataLoadError::MalformedRecord { line: 3, .. }));

        let content = format!("{}\r\n1;A;Action;d;dir;X;2014;100;8.0;1;1;1\r\n   \r\n", HEADER);
        let err = parse_dataset(&content, 0).unwrap_err();
        assert!(matches!(err, DataLoadError::MalformedRecord { line: 3, .. }));
    }

    #[test]
    fn test_malformed_line_aborts_parse() {
        let content = format!(
            "{}\n1;A;Action;d;dir;X;2014;100;8.0;1;1;1\n2;B;Drama\n",
            HEADER
        );
        let err = parse_dataset(&content, 0).unwrap_err();
        assert!(matches!(err, DataLoadError::MalformedRecord { line: 3, .. }));
    }

    #[test]
    fn test_header_only() {
        assert!(parse_dataset(HEADER, 0).unwrap().is_empty());
        assert!(parse_dataset("", 0).unwrap().is_empty());
    }
}
