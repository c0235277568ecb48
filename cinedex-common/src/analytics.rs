//! Aggregates computed over the whole catalog on every call
//!
//! Nothing here is cached. An empty catalog produces a zeroed summary and
//! empty groupings rather than an error.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::model::MovieRecord;

/// Ratings at which popularity saturates the 0-10 score
pub const POPULARITY_SCALE: f64 = 300_000.0;

/// Weight of the rating in the balanced score; popularity gets the rest
pub const RATING_WEIGHT: f64 = 0.7;

/// Catalog-wide summary
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStatistics {
    pub total_movies: usize,
    pub average_rating: f64,
    /// `None` for an empty catalog
    pub year_range: Option<YearRange>,
    /// Name of the record with the most ratings
    pub most_popular: Option<String>,
    /// Name of the highest rated record
    pub highest_rated: Option<String>,
    /// Record counts keyed by `floor(rating)`
    pub rating_distribution: BTreeMap<i64, usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

/// One decade bucket
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecadeSummary {
    /// Label such as "1990s"
    pub decade: String,
    pub count: usize,
    pub average_rating: f64,
    /// Name of the highest rated record in the decade
    pub top_movie: Option<String>,
}

/// Rating weighed against popularity for one record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingPopularity {
    pub name: Option<String>,
    pub rating: f64,
    pub popularity: u64,
    pub popularity_score: f64,
    pub balanced_score: f64,
}

/// Popularity normalized to 0-10
pub fn popularity_score(number_of_ratings: u64) -> f64 {
    (number_of_ratings as f64 / POPULARITY_SCALE).min(10.0)
}

/// `rating * 0.7 + popularity_score * 0.3`
pub fn balanced_score(rating: f64, number_of_ratings: u64) -> f64 {
    rating * RATING_WEIGHT + popularity_score(number_of_ratings) * (1.0 - RATING_WEIGHT)
}

/// Start year of the decade containing `year`
pub fn decade_of(year: i32) -> i64 {
    i64::from(year).div_euclid(10) * 10
}

fn mean_rating<'a>(movies: impl IntoIterator<Item = &'a MovieRecord>) -> f64 {
    let (sum, count) = movies
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), m| (sum + m.rating, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// First record holding the maximum key, so ties resolve to catalog order
fn first_max_by<'a, F>(movies: &[&'a MovieRecord], mut greater: F) -> Option<&'a MovieRecord>
where
    F: FnMut(&MovieRecord, &MovieRecord) -> bool,
{
    let mut best: Option<&'a MovieRecord> = None;
    for &m in movies {
        match best {
            Some(b) if !greater(m, b) => {}
            _ => best = Some(m),
        }
    }
    best
}

fn highest_rated<'a>(movies: &[&'a MovieRecord]) -> Option<&'a MovieRecord> {
    first_max_by(movies, |a, b| a.rating > b.rating)
}

impl Catalog {
    /// Count, mean rating, year span, standouts and rating histogram
    pub fn statistics(&self) -> CatalogStatistics {
        let movies: Vec<&MovieRecord> = self.movies().iter().collect();

        let year_range = match (
            movies.iter().map(|m| m.year).min(),
            movies.iter().map(|m| m.year).max(),
        ) {
            (Some(min), Some(max)) => Some(YearRange { min, max }),
            _ => None,
        };

        let mut rating_distribution = BTreeMap::new();
        for m in &movies {
            *rating_distribution
                .entry(m.rating.floor() as i64)
                .or_insert(0) += 1;
        }

        CatalogStatistics {
            total_movies: movies.len(),
            average_rating: mean_rating(movies.iter().copied()),
            year_range,
            most_popular: first_max_by(&movies, |a, b| a.number_of_ratings > b.number_of_ratings)
                .and_then(|m| m.name.clone()),
            highest_rated: highest_rated(&movies).and_then(|m| m.name.clone()),
            rating_distribution,
        }
    }

    /// Records grouped by decade, oldest decade first
    pub fn by_decade(&self) -> Vec<DecadeSummary> {
        let mut groups: BTreeMap<i64, Vec<&MovieRecord>> = BTreeMap::new();
        for m in self.movies() {
            groups.entry(decade_of(m.year)).or_default().push(m);
        }

        groups
            .into_iter()
            .map(|(decade, movies)| DecadeSummary {
                decade: format!("{}s", decade),
                count: movies.len(),
                average_rating: mean_rating(movies.iter().copied()),
                top_movie: highest_rated(&movies).and_then(|m| m.name.clone()),
            })
            .collect()
    }

    /// Every record scored on rating and popularity, best balanced score first
    pub fn rating_vs_popularity(&self) -> Vec<RatingPopularity> {
        let mut rows: Vec<RatingPopularity> = self
            .movies()
            .iter()
            .map(|m| RatingPopularity {
                name: m.name.clone(),
                rating: m.rating,
                popularity: m.number_of_ratings,
                popularity_score: popularity_score(m.number_of_ratings),
                balanced_score: balanced_score(m.rating, m.number_of_ratings),
            })
            .collect();
        rows.sort_by(|a, b| b.balanced_score.total_cmp(&a.balanced_score));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample;

    fn popular(mut m: MovieRecord, n: u64) -> MovieRecord {
        m.number_of_ratings = n;
        m
    }

    #[test]
    fn test_statistics() {
        let catalog = Catalog::new(vec![
            popular(sample(1, "A", 1994, 9.3), 2_900_000),
            popular(sample(2, "B", 1972, 9.2), 2_000_000),
            popular(sample(3, "C", 2008, 9.0), 2_900_000),
            popular(sample(4, "D", 1957, 8.1), 800_000),
        ]);
        let stats = catalog.statistics();

        assert_eq!(stats.total_movies, 4);
        assert!((stats.average_rating - 8.9).abs() < 1e-9);
        assert_eq!(stats.year_range, Some(YearRange { min: 1957, max: 2008 }));
        // Tie on rating count resolves to the earlier record
        assert_eq!(stats.most_popular.as_deref(), Some("A"));
        assert_eq!(stats.highest_rated.as_deref(), Some("A"));
        assert_eq!(stats.rating_distribution.get(&9), Some(&3));
        assert_eq!(stats.rating_distribution.get(&8), Some(&1));
    }

    #[test]
    fn test_statistics_empty_catalog() {
        let stats = Catalog::default().statistics();
        assert_eq!(stats.total_movies, 0);
        assert_eq!(stats.average_rating, 0.0);
        assert_eq!(stats.year_range, None);
        assert_eq!(stats.most_popular, None);
        assert_eq!(stats.highest_rated, None);
        assert!(stats.rating_distribution.is_empty());
    }

    #[test]
    fn test_statistics_distribution_serializes_with_string_keys() {
        let catalog = Catalog::new(vec![sample(1, "A", 2000, 8.5)]);
        let json = serde_json::to_value(catalog.statistics()).unwrap();
        assert_eq!(json["ratingDistribution"]["8"], 1);
        assert_eq!(json["yearRange"]["min"], 2000);
    }

    #[test]
    fn test_by_decade_groups_and_orders() {
        let catalog = Catalog::new(vec![
            sample(1, "Y2K", 2000, 8.0),
            sample(2, "Late90s", 1999, 8.8),
            sample(3, "Mid90s", 1995, 9.0),
            sample(4, "Fifties", 1957, 8.1),
        ]);
        let decades = catalog.by_decade();

        let labels: Vec<_> = decades.iter().map(|d| d.decade.as_str()).collect();
        assert_eq!(labels, vec!["1950s", "1990s", "2000s"]);

        let nineties = &decades[1];
        assert_eq!(nineties.count, 2);
        assert!((nineties.average_rating - 8.9).abs() < 1e-9);
        assert_eq!(nineties.top_movie.as_deref(), Some("Mid90s"));
        assert_eq!(decades[2].count, 1);
    }

    #[test]
    fn test_decade_of() {
        assert_eq!(decade_of(1995), 1990);
        assert_eq!(decade_of(1999), 1990);
        assert_eq!(decade_of(2000), 2000);
        assert_eq!(decade_of(0), 0);
        assert_eq!(decade_of(-1), -10);
        assert_eq!(decade_of(i32::MIN), -2_147_483_650);
    }

    #[test]
    fn test_by_decade_extreme_years() {
        let catalog = Catalog::new(vec![
            sample(1, "Min", i32::MIN, 7.0),
            sample(2, "Max", i32::MAX, 8.0),
        ]);
        let labels: Vec<_> = catalog.by_decade().into_iter().map(|d| d.decade).collect();
        assert_eq!(labels, vec!["-2147483650s", "2147483640s"]);
    }

    #[test]
    fn test_by_decade_empty() {
        assert!(Catalog::default().by_decade().is_empty());
        assert!(Catalog::default().rating_vs_popularity().is_empty());
    }

    #[test]
    fn test_popularity_score_caps_at_ten() {
        assert_eq!(popularity_score(0), 0.0);
        assert_eq!(popularity_score(1_500_000), 5.0);
        assert_eq!(popularity_score(3_000_000), 10.0);
        assert_eq!(popularity_score(9_000_000), 10.0);
    }

    #[test]
    fn test_rating_vs_popularity_orders_by_balanced_score() {
        let catalog = Catalog::new(vec![
            popular(sample(1, "Niche", 2000, 9.0), 30_000),
            popular(sample(2, "Blockbuster", 2000, 8.0), 3_000_000),
        ]);
        let rows = catalog.rating_vs_popularity();

        assert_eq!(rows[0].name.as_deref(), Some("Blockbuster"));
        assert!((rows[0].balanced_score - (8.0 * 0.7 + 10.0 * 0.3)).abs() < 1e-9);
        assert!((rows[1].balanced_score - (9.0 * 0.7 + 0.1 * 0.3)).abs() < 1e-9);
        assert_eq!(rows[1].popularity, 30_000);
    }
}
