//! Aggregate endpoints under `/api/analytics`

use axum::{extract::State, Json};
use cinedex_common::analytics::{CatalogStatistics, DecadeSummary, RatingPopularity};

use crate::AppState;

/// GET /api/analytics/statistics
pub async fn statistics(State(state): State<AppState>) -> Json<CatalogStatistics> {
    Json(state.catalog.statistics())
}

/// GET /api/analytics/by-decade
pub async fn by_decade(State(state): State<AppState>) -> Json<Vec<DecadeSummary>> {
    Json(state.catalog.by_decade())
}

/// GET /api/analytics/rating-vs-popularity
pub async fn rating_vs_popularity(State(state): State<AppState>) -> Json<Vec<RatingPopularity>> {
    Json(state.catalog.rating_vs_popularity())
}
