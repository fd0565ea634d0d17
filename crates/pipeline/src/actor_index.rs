//! Actor rating index.
//!
//! Maps every credited actor to the best rating among the movies they
//! appear in. The index is always built from the whole dataset handed to
//! the ranker, before any genre filtering, so an actor's strength reflects
//! their best work anywhere in the corpus.

use crate::error::{RankError, Result};
use data_loader::{Dataset, MovieRecord};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Actor name -> highest movie rating across all their credits
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActorRatingIndex {
    best_ratings: HashMap<String, f64>,
}

impl ActorRatingIndex {
    /// Build the index over every record in `dataset`.
    ///
    /// Fails with `InvalidRating` on the first record whose rating is not a
    /// finite number.
    pub fn build(dataset: &Dataset) -> Result<Self> {
        let mut best_ratings: HashMap<String, f64> = HashMap::new();

        for movie in dataset {
            let rating = movie_rating(movie)?;
            for actor in movie.actors() {
                best_ratings
                    .entry(actor.to_string())
                    .and_modify(|best| *best = best.max(rating))
                    .or_insert(rating);
            }
        }

        tracing::debug!(
            "Built actor rating index: {} actors from {} movies",
            best_ratings.len(),
            dataset.len()
        );

        Ok(Self { best_ratings })
    }

    /// Best rating for an actor, if they appear in the dataset
    pub fn get(&self, actor: &str) -> Option<f64> {
        self.best_ratings.get(actor).copied()
    }

    pub fn len(&self) -> usize {
        self.best_ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best_ratings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.best_ratings.iter().map(|(name, &rating)| (name.as_str(), rating))
    }

    /// Mean best rating over a movie's credited actors
    ///
    /// Duplicate credits count once per appearance in the actor field.
    pub fn actor_average(&self, movie: &MovieRecord) -> Result<f64> {
        let mut total = 0.0;
        let mut count = 0usize;

        for actor in movie.actors() {
            let best = self.get(actor).ok_or_else(|| RankError::UnindexedActor {
                actor: actor.to_string(),
            })?;
            total += best;
            count += 1;
        }

        if count == 0 {
            return Err(RankError::EmptyActorGroup {
                title: movie.title.clone(),
            });
        }

        Ok(total / count as f64)
    }

    /// Actors sorted by best rating (highest first), ties by name
    ///
    /// `limit == 0` returns every actor.
    pub fn top(&self, limit: usize) -> Vec<(&str, f64)> {
        let mut actors: Vec<(&str, f64)> = self.iter().collect();
        actors.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        if limit > 0 {
            actors.truncate(limit);
        }
        actors
    }
}

/// Parse a record's rating, mapping failure to `InvalidRating`
pub(crate) fn movie_rating(movie: &MovieRecord) -> Result<f64> {
    movie.rating_value().ok_or_else(|| RankError::InvalidRating {
        title: movie.title.clone(),
        value: movie.rating.clone(),
    })
}
