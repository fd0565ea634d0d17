//! Filter to keep only movies in one of the requested genres.
//!
//! The filter is an allow-list of genre tokens. A movie passes when any of
//! its own genre tokens equals one of the allowed tokens exactly
//! (case-sensitive). An allow-list with no tokens lets everything through.

use crate::error::Result;
use crate::traits::Filter;
use data_loader::{GENRE_SEPARATOR, MovieRecord};
use std::collections::BTreeSet;

/// Keeps movies whose genre list intersects the allow-list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreFilter {
    genres: BTreeSet<String>,
}

impl GenreFilter {
    /// Build from a comma-separated list such as `"Action,Sci-Fi"`.
    ///
    /// Tokens are trimmed and empty tokens dropped, so `""` and `" , "`
    /// both mean "no restriction".
    pub fn parse(filter: &str) -> Self {
        Self::from_tokens(filter.split(GENRE_SEPARATOR))
    }

    /// Build from an explicit list of genre tokens
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let genres = tokens
            .into_iter()
            .map(|token| token.as_ref().trim().to_string())
            .filter(|token| !token.is_empty())
            .collect();
        Self { genres }
    }

    /// True when no genre restriction applies
    pub fn is_unrestricted(&self) -> bool {
        self.genres.is_empty()
    }

    pub fn matches(&self, movie: &MovieRecord) -> bool {
        self.is_unrestricted() || movie.genres().any(|genre| self.genres.contains(genre))
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn apply<'a>(&self, movies: Vec<&'a MovieRecord>) -> Result<Vec<&'a MovieRecord>> {
        if self.is_unrestricted() {
            return Ok(movies);
        }

        let filtered: Vec<&MovieRecord> = movies
            .into_iter()
            .filter(|movie| self.matches(movie))
            .collect();
        Ok(filtered)
    }
}
