//! Combined-score ranking.
//!
//! ## Algorithm
//! 1. Build the [`ActorRatingIndex`] over the whole dataset
//! 2. Run the filter pipeline to pick the movies that get ranked
//! 3. Score each one: `(rating + mean(best rating of each actor)) / 2`
//! 4. Sort by score (highest first), then title (ascending)
//! 5. Keep the first `limit` entries (`0` keeps everything)

use crate::actor_index::{ActorRatingIndex, movie_rating};
use crate::error::Result;
use crate::filter_pipeline::FilterPipeline;
use crate::filters::GenreFilter;
use data_loader::{Dataset, MovieRecord};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One line of the final report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub title: String,
    pub score: f64,
}

impl RankedEntry {
    pub fn new(title: impl Into<String>, score: f64) -> Self {
        Self {
            title: title.into(),
            score,
        }
    }
}

/// Ranked entries, best first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Report {
    entries: Vec<RankedEntry>,
}

impl Report {
    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<RankedEntry>> for Report {
    fn from(entries: Vec<RankedEntry>) -> Self {
        Self { entries }
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Report {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(title, score)| RankedEntry::new(title, score))
            .collect::<Vec<_>>()
            .into()
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a RankedEntry;
    type IntoIter = std::slice::Iter<'a, RankedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Rank movies restricted to a comma-separated genre list.
///
/// An empty `genre_filter` ranks every movie; `limit == 0` returns every
/// passing movie.
///
/// ```ignore
/// let dataset = data_loader::load("films.csv", 2014)?;
/// let top = rank(&dataset, "Action", 5)?;
/// ```
pub fn rank(dataset: &Dataset, genre_filter: &str, limit: usize) -> Result<Report> {
    let pipeline = FilterPipeline::new().add_filter(GenreFilter::parse(genre_filter));
    rank_with(dataset, &pipeline, limit)
}

/// Rank the movies that pass `pipeline`.
///
/// Actor ratings still come from the whole dataset, not just the movies
/// that pass.
pub fn rank_with(dataset: &Dataset, pipeline: &FilterPipeline, limit: usize) -> Result<Report> {
    let index = ActorRatingIndex::build(dataset)?;
    let passing = pipeline.apply(dataset.iter().collect())?;

    let mut entries = passing
        .into_iter()
        .map(|movie| score_movie(movie, &index))
        .collect::<Result<Vec<_>>>()?;

    sort_entries(&mut entries);

    let passing_count = entries.len();
    if limit > 0 {
        entries.truncate(limit);
    }

    tracing::info!(
        "Ranked {} of {} movies (returning {}, limit {})",
        passing_count,
        dataset.len(),
        entries.len(),
        limit
    );

    Ok(Report::from(entries))
}

/// Highest score first, ties by ascending title
///
/// Scores are finite, and `-0.0` ties with `0.0`.
fn sort_entries(entries: &mut [RankedEntry]) {
    entries.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.title.cmp(&b.title))
    });
}

/// Combined score of a single movie against a prebuilt index
pub fn score_movie(movie: &MovieRecord, index: &ActorRatingIndex) -> Result<RankedEntry> {
    let rating = movie_rating(movie)?;
    let actor_avg = index.actor_average(movie)?;
    Ok(RankedEntry::new(movie.title.clone(), (rating + actor_avg) / 2.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RankError;
    use data_loader::parser::parse_record;

    fn dataset(lines: &[&str]) -> Dataset {
        lines
            .iter()
            .enumerate()
            .map(|(i, line)| parse_record(line, i + 2).unwrap())
            .collect()
    }

    #[test]
    fn test_combined_score() {
        let data = dataset(&[
            "1;A;Action;d;dir;X, Y;2015;100;8.0;1;1;1",
            "2;B;Action;d;dir;X;2015;100;6.0;1;1;1",
        ]);

        let report = rank(&data, "Action", 0).unwrap();
        let expected: Report = vec![("A", 8.0), ("B", 7.0)].into_iter().collect();
        assert_eq!(report, expected);
    }

    #[test]
    fn test_ties_broken_by_title() {
        let data = dataset(&[
            "1;Zulu;Drama;d;dir;P;2015;100;7.0;1;1;1",
            "2;Alpha;Drama;d;dir;Q;2015;100;7.0;1;1;1",
            "3;alpha;Drama;d;dir;R;2015;100;7.0;1;1;1",
        ]);

        let report = rank(&data, "", 0).unwrap();
        let titles: Vec<_> = report.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha", "Zulu", "alpha"]);
    }

    #[test]
    fn test_signed_zero_scores_tie() {
        let mut entries = vec![
            RankedEntry::new("Zero", 0.0),
            RankedEntry::new("Negative", -0.0),
            RankedEntry::new("Above", 0.5),
        ];

        sort_entries(&mut entries);
        let titles: Vec<_> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Above", "Negative", "Zero"]);
    }

    #[test]
    fn test_actor_names_are_exact_keys() {
        // "X,  Y" splits into "X" and " Y", a different actor from "Y"
        let data = dataset(&[
            "1;A;Drama;d;dir;X,  Y;2015;100;8.0;1;1;1",
            "2;B;Drama;d;dir;Y;2015;100;4.0;1;1;1",
        ]);

        let report = rank(&data, "", 0).unwrap();
        let expected: Report = vec![("A", 8.0), ("B", 4.0)].into_iter().collect();
        assert_eq!(report, expected);
    }

    #[test]
    fn test_limit_truncates() {
        let data = dataset(&[
            "1;A;Drama;d;dir;P;2015;100;9.0;1;1;1",
            "2;B;Drama;d;dir;Q;2015;100;8.0;1;1;1",
            "3;C;Drama;d;dir;R;2015;100;7.0;1;1;1",
        ]);

        assert_eq!(rank(&data, "", 2).unwrap().len(), 2);
        assert_eq!(rank(&data, "", 10).unwrap().len(), 3);
        assert_eq!(rank(&data, "", 0).unwrap().len(), 3);
        assert_eq!(rank(&data, "", 1).unwrap().entries()[0].title, "A");
    }

    #[test]
    fn test_actor_index_ignores_genre_filter() {
        // X's best rating comes from a Drama, which the filter excludes
        let data = dataset(&[
            "1;Fight;Action;d;dir;X;2015;100;6.0;1;1;1",
            "2;Tears;Drama;d;dir;X;2015;100;9.0;1;1;1",
        ]);

        let report = rank(&data, "Action", 0).unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(report.entries()[0], RankedEntry::new("Fight", 7.5));
    }

    #[test]
    fn test_empty_actor_group_is_an_error() {
        let data = dataset(&[
            "1;A;Action;d;dir;X;2015;100;8.0;1;1;1",
            "2;Silent;Drama;d;dir;;2015;100;7.0;1;1;1",
        ]);

        let err = rank(&data, "", 0).unwrap_err();
        assert!(matches!(err, RankError::EmptyActorGroup { title } if title == "Silent"));

        // Filtered out before scoring, so it does not matter
        let report = rank(&data, "Action", 0).unwrap();
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn test_invalid_rating_is_an_error() {
        let data = dataset(&["1;A;Action;d;dir;X;2015;100;;1;1;1"]);
        let err = rank(&data, "", 0).unwrap_err();
        assert!(matches!(err, RankError::InvalidRating { .. }));
    }

    #[test]
    fn test_empty_dataset() {
        let report = rank(&Dataset::new(), "Action", 5).unwrap();
        assert!(report.is_empty());
    }
}
