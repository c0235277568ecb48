//! Catalog query endpoints
//!
//! Lookups, range filters, search and top-N lists over `/api/movies`.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use cinedex_common::query::{DEFAULT_COUNT, DEFAULT_MIN_METASCORE, DEFAULT_QUICK_WATCH_MINUTES};
use cinedex_common::MovieRecord;
use serde::Deserialize;
use tracing::debug;

use super::{minutes_cap, movie_list, CountQuery};
use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Runtime cap used by the duration filter when none is given
const DEFAULT_FILTER_MAX_MINUTES: i32 = 180;

/// Query parameters for the rating range filter
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingRangeQuery {
    #[serde(default)]
    pub min_rating: f64,
    #[serde(default = "default_max_rating")]
    pub max_rating: f64,
}

fn default_max_rating() -> f64 {
    10.0
}

/// Query parameters for the year range filter
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRangeQuery {
    #[serde(default)]
    pub start_year: i32,
    #[serde(default)]
    pub end_year: i32,
}

/// Query parameters for runtime-capped lists
///
/// Signed so that a negative cap yields an empty list instead of a 400.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationQuery {
    pub max_minutes: Option<i32>,
}

/// Query parameters for search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub query: String,
}

/// Query parameters for critically acclaimed
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetascoreQuery {
    #[serde(default = "default_min_metascore")]
    pub min_metascore: i32,
}

fn default_min_metascore() -> i32 {
    DEFAULT_MIN_METASCORE
}

/// GET /api/movies
pub async fn list_all(State(state): State<AppState>) -> Json<Vec<MovieRecord>> {
    Json(state.catalog.all().to_vec())
}

/// GET /api/movies/:rank
pub async fn get_by_rank(
    State(state): State<AppState>,
    Path(rank): Path<i32>,
) -> ApiResult<Json<MovieRecord>> {
    state
        .catalog
        .by_rank(rank)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("No movie with rank {}", rank)))
}

/// GET /api/movies/year/:year
pub async fn get_by_year(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> Json<Vec<MovieRecord>> {
    movie_list(state.catalog.by_year(year))
}

/// GET /api/movies/top?count=10
pub async fn top_rated(
    State(state): State<AppState>,
    Query(query): Query<CountQuery>,
) -> Json<Vec<MovieRecord>> {
    movie_list(state.catalog.top_rated(query.count.unwrap_or(DEFAULT_COUNT)))
}

/// GET /api/movies/top/:count
pub async fn top_rated_count(
    State(state): State<AppState>,
    Path(count): Path<usize>,
) -> Json<Vec<MovieRecord>> {
    movie_list(state.catalog.top_rated(count))
}

/// GET /api/movies/filter/rating?minRating=0&maxRating=10
pub async fn filter_by_rating(
    State(state): State<AppState>,
    Query(query): Query<RatingRangeQuery>,
) -> Json<Vec<MovieRecord>> {
    movie_list(state.catalog.rating_range(query.min_rating, query.max_rating))
}

/// GET /api/movies/filter/year-range?startYear=..&endYear=..
pub async fn filter_by_year_range(
    State(state): State<AppState>,
    Query(query): Query<YearRangeQuery>,
) -> Json<Vec<MovieRecord>> {
    movie_list(state.catalog.year_range(query.start_year, query.end_year))
}

/// GET /api/movies/filter/duration?maxMinutes=180
pub async fn filter_by_duration(
    State(state): State<AppState>,
    Query(query): Query<DurationQuery>,
) -> Json<Vec<MovieRecord>> {
    let max_minutes = query.max_minutes.unwrap_or(DEFAULT_FILTER_MAX_MINUTES);
    let movies = minutes_cap(max_minutes)
        .map(|cap| state.catalog.max_duration(cap))
        .unwrap_or_default();
    movie_list(movies)
}

/// GET /api/movies/filter/age-rating/:age_limit
pub async fn filter_by_age_rating(
    State(state): State<AppState>,
    Path(age_limit): Path<String>,
) -> Json<Vec<MovieRecord>> {
    movie_list(state.catalog.age_rating(&age_limit))
}

/// GET /api/movies/search?query=..
///
/// Blank queries are rejected with 400.
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<Vec<MovieRecord>>> {
    let movies = state.catalog.search(&query.query)?;
    debug!("Search '{}' matched {} movies", query.query, movies.len());
    Ok(movie_list(movies))
}

/// GET /api/movies/popular?count=10
pub async fn most_popular(
    State(state): State<AppState>,
    Query(query): Query<CountQuery>,
) -> Json<Vec<MovieRecord>> {
    movie_list(state.catalog.most_popular(query.count.unwrap_or(DEFAULT_COUNT)))
}

/// GET /api/movies/critically-acclaimed?minMetascore=80
pub async fn critically_acclaimed(
    State(state): State<AppState>,
    Query(query): Query<MetascoreQuery>,
) -> Json<Vec<MovieRecord>> {
    movie_list(state.catalog.critically_acclaimed(query.min_metascore))
}

/// GET /api/movies/family-friendly
pub async fn family_friendly(State(state): State<AppState>) -> Json<Vec<MovieRecord>> {
    movie_list(state.catalog.family_friendly())
}

/// GET /api/movies/quick-watch?maxMinutes=120
pub async fn quick_watch(
    State(state): State<AppState>,
    Query(query): Query<DurationQuery>,
) -> Json<Vec<MovieRecord>> {
    let movies = match query.max_minutes {
        None => state.catalog.quick_watch(DEFAULT_QUICK_WATCH_MINUTES),
        Some(max_minutes) => minutes_cap(max_minutes)
            .map(|cap| state.catalog.quick_watch(cap))
            .unwrap_or_default(),
    };
    movie_list(movies)
}
