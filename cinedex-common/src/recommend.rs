//! Rule-based recommendation lists
//!
//! Thresholds are fixed; every list is ordered by rating, highest first.

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::model::MovieRecord;
use crate::query::by_rating_desc;

/// Default size of the similar-by-year list
pub const DEFAULT_SIMILAR_COUNT: usize = 5;

/// Maximum year distance for similar-by-year
pub const SIMILAR_YEAR_WINDOW: u32 = 5;

/// Rating floor shared by hidden gems and crowd pleasers
pub const HIGH_RATING: f64 = 8.5;

/// Hidden gems have fewer ratings than this
pub const HIDDEN_GEM_MAX_RATINGS: u64 = 1_000_000;

/// Crowd pleasers have at least this many ratings
pub const CROWD_PLEASER_MIN_RATINGS: u64 = 1_500_000;

/// Default runtime budget for time-based picks
pub const DEFAULT_AVAILABLE_MINUTES: u32 = 120;

/// Time-based result cap
pub const TIME_BASED_LIMIT: usize = 10;

impl Catalog {
    /// Records released within five years of the record ranked `rank`.
    ///
    /// The target itself (and anything sharing its rank) is excluded.
    /// Fails with [`Error::NotFound`] when no record has that rank.
    pub fn similar_by_year(&self, rank: i32, count: usize) -> Result<Vec<&MovieRecord>> {
        let target = self
            .by_rank(rank)
            .ok_or_else(|| Error::NotFound(format!("No movie with rank {}", rank)))?;

        let mut movies: Vec<_> = self
            .movies()
            .iter()
            .filter(|m| m.rank != rank && m.year.abs_diff(target.year) <= SIMILAR_YEAR_WINDOW)
            .collect();
        by_rating_desc(&mut movies);
        movies.truncate(count);
        Ok(movies)
    }

    /// Highly rated records that comparatively few people have rated
    pub fn hidden_gems(&self, count: usize) -> Vec<&MovieRecord> {
        self.high_rated_where(count, |m| m.number_of_ratings < HIDDEN_GEM_MAX_RATINGS)
    }

    /// Highly rated records that a great many people have rated
    pub fn crowd_pleasers(&self, count: usize) -> Vec<&MovieRecord> {
        self.high_rated_where(count, |m| m.number_of_ratings >= CROWD_PLEASER_MIN_RATINGS)
    }

    /// Top ten records that fit in `available_minutes`
    pub fn time_based(&self, available_minutes: u32) -> Vec<&MovieRecord> {
        self.best_within(available_minutes, TIME_BASED_LIMIT)
    }

    fn high_rated_where<F>(&self, count: usize, popularity: F) -> Vec<&MovieRecord>
    where
        F: Fn(&MovieRecord) -> bool,
    {
        let mut movies: Vec<_> = self
            .movies()
            .iter()
            .filter(|m| m.rating >= HIGH_RATING && popularity(*m))
            .collect();
        by_rating_desc(&mut movies);
        movies.truncate(count);
        movies
    }
}
