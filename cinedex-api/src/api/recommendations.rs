//! Recommendation list endpoints under `/api/recommendations`

use axum::{
    extract::{Path, Query, State},
    Json,
};
use cinedex_common::query::DEFAULT_COUNT;
use cinedex_common::recommend::{DEFAULT_AVAILABLE_MINUTES, DEFAULT_SIMILAR_COUNT};
use cinedex_common::MovieRecord;
use serde::Deserialize;

use super::{minutes_cap, movie_list, CountQuery};
use crate::error::ApiResult;
use crate::AppState;

/// Query parameters for time-based picks
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableTimeQuery {
    pub available_minutes: Option<i32>,
}

/// GET /api/recommendations/similar-year/:rank?count=5
pub async fn similar_by_year(
    State(state): State<AppState>,
    Path(rank): Path<i32>,
    Query(query): Query<CountQuery>,
) -> ApiResult<Json<Vec<MovieRecord>>> {
    let count = query.count.unwrap_or(DEFAULT_SIMILAR_COUNT);
    Ok(movie_list(state.catalog.similar_by_year(rank, count)?))
}

/// GET /api/recommendations/hidden-gems?count=10
pub async fn hidden_gems(
    State(state): State<AppState>,
    Query(query): Query<CountQuery>,
) -> Json<Vec<MovieRecord>> {
    movie_list(state.catalog.hidden_gems(query.count.unwrap_or(DEFAULT_COUNT)))
}

/// GET /api/recommendations/crowd-pleasers?count=10
pub async fn crowd_pleasers(
    State(state): State<AppState>,
    Query(query): Query<CountQuery>,
) -> Json<Vec<MovieRecord>> {
    movie_list(state.catalog.crowd_pleasers(query.count.unwrap_or(DEFAULT_COUNT)))
}

/// GET /api/recommendations/time-based?availableMinutes=120
pub async fn time_based(
    State(state): State<AppState>,
    Query(query): Query<AvailableTimeQuery>,
) -> Json<Vec<MovieRecord>> {
    let movies = match query.available_minutes {
        None => state.catalog.time_based(DEFAULT_AVAILABLE_MINUTES),
        Some(minutes) => minutes_cap(minutes)
            .map(|cap| state.catalog.time_based(cap))
            .unwrap_or_default(),
    };
    movie_list(movies)
}
