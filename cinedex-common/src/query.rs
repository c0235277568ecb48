//! Filter, search and ordering operations over the catalog
//!
//! All operations are read-only views. Sorts are stable, so ties keep
//! catalog order.

use crate::catalog::Catalog;
use crate::model::MovieRecord;
use crate::{Error, Result};

/// Default result count for top-N style queries
pub const DEFAULT_COUNT: usize = 10;

/// Default metascore threshold for critically acclaimed titles
pub const DEFAULT_MIN_METASCORE: i32 = 80;

/// Default runtime cap for quick-watch
pub const DEFAULT_QUICK_WATCH_MINUTES: u32 = 120;

/// Quick-watch result cap
pub const QUICK_WATCH_LIMIT: usize = 20;

/// Certificates considered suitable for all ages (exact match)
pub const FAMILY_AGE_LIMITS: [&str; 3] = ["U", "PG", "G"];

/// Order records by rating, highest first
pub(crate) fn by_rating_desc(movies: &mut [&MovieRecord]) {
    movies.sort_by(|a, b| b.rating.total_cmp(&a.rating));
}

impl Catalog {
    /// Every record in catalog order
    pub fn all(&self) -> &[MovieRecord] {
        self.movies()
    }

    /// First record with the given rank; duplicate ranks resolve to the earliest
    pub fn by_rank(&self, rank: i32) -> Option<&MovieRecord> {
        self.movies().iter().find(|m| m.rank == rank)
    }

    pub fn by_year(&self, year: i32) -> Vec<&MovieRecord> {
        self.movies().iter().filter(|m| m.year == year).collect()
    }

    /// Highest rated records, at most `count`
    pub fn top_rated(&self, count: usize) -> Vec<&MovieRecord> {
        let mut movies: Vec<_> = self.movies().iter().collect();
        by_rating_desc(&mut movies);
        movies.truncate(count);
        movies
    }

    /// Records with `min <= rating <= max`, highest rated first
    pub fn rating_range(&self, min: f64, max: f64) -> Vec<&MovieRecord> {
        let mut movies: Vec<_> = self
            .movies()
            .iter()
            .filter(|m| m.rating >= min && m.rating <= max)
            .collect();
        by_rating_desc(&mut movies);
        movies
    }

    /// Records released in `start..=end`, oldest first
    pub fn year_range(&self, start: i32, end: i32) -> Vec<&MovieRecord> {
        let mut movies: Vec<_> = self
            .movies()
            .iter()
            .filter(|m| m.year >= start && m.year <= end)
            .collect();
        movies.sort_by_key(|m| m.year);
        movies
    }

    /// Records no longer than `max_minutes`, shortest first.
    ///
    /// Records without a parseable duration count as zero minutes.
    pub fn max_duration(&self, max_minutes: u32) -> Vec<&MovieRecord> {
        let mut movies: Vec<_> = self
            .movies()
            .iter()
            .map(|m| (m.duration_minutes(), m))
            .filter(|(minutes, _)| *minutes <= max_minutes)
            .collect();
        movies.sort_by_key(|(minutes, _)| *minutes);
        movies.into_iter().map(|(_, m)| m).collect()
    }

    /// Records whose certificate equals `age_limit`, ignoring case
    pub fn age_rating(&self, age_limit: &str) -> Vec<&MovieRecord> {
        let wanted = age_limit.to_lowercase();
        self.movies()
            .iter()
            .filter(|m| {
                m.age_limit
                    .as_deref()
                    .is_some_and(|a| a.to_lowercase() == wanted)
            })
            .collect()
    }

    /// Case-insensitive substring search over name and description.
    ///
    /// A blank query is rejected with [`Error::InvalidInput`]; no matches is
    /// an empty result, not an error.
    pub fn search(&self, query: &str) -> Result<Vec<&MovieRecord>> {
        if query.trim().is_empty() {
            return Err(Error::InvalidInput(
                "Search query is required".to_string(),
            ));
        }

        let needle = query.to_lowercase();
        let contains = |field: &Option<String>| {
            field
                .as_deref()
                .is_some_and(|text| text.to_lowercase().contains(&needle))
        };

        let mut movies: Vec<_> = self
            .movies()
            .iter()
            .filter(|m| contains(&m.name) || contains(&m.description))
            .collect();
        by_rating_desc(&mut movies);
        Ok(movies)
    }

    /// Records with the most ratings, at most `count`
    pub fn most_popular(&self, count: usize) -> Vec<&MovieRecord> {
        let mut movies: Vec<_> = self.movies().iter().collect();
        movies.sort_by(|a, b| b.number_of_ratings.cmp(&a.number_of_ratings));
        movies.truncate(count);
        movies
    }

    /// Records with a metascore of at least `min_metascore`, best first.
    ///
    /// Unrated records never qualify.
    pub fn critically_acclaimed(&self, min_metascore: i32) -> Vec<&MovieRecord> {
        let mut movies: Vec<_> = self
            .movies()
            .iter()
            .filter(|m| m.metascore.is_some_and(|score| score >= min_metascore))
            .collect();
        movies.sort_by(|a, b| b.metascore.cmp(&a.metascore));
        movies
    }

    /// Records certified U, PG or G, highest rated first
    pub fn family_friendly(&self) -> Vec<&MovieRecord> {
        let mut movies: Vec<_> = self
            .movies()
            .iter()
            .filter(|m| {
                m.age_limit
                    .as_deref()
                    .is_some_and(|a| FAMILY_AGE_LIMITS.contains(&a))
            })
            .collect();
        by_rating_desc(&mut movies);
        movies
    }

    /// Best rated records no longer than `max_minutes`, capped at 20
    pub fn quick_watch(&self, max_minutes: u32) -> Vec<&MovieRecord> {
        self.best_within(max_minutes, QUICK_WATCH_LIMIT)
    }

    /// Best rated records that fit in `max_minutes`, at most `limit`
    pub(crate) fn best_within(&self, max_minutes: u32, limit: usize) -> Vec<&MovieRecord> {
        let mut movies: Vec<_> = self
            .movies()
            .iter()
            .filter(|m| m.duration_minutes() <= max_minutes)
            .collect();
        by_rating_desc(&mut movies);
        movies.truncate(limit);
        movies
    }
}
