//! cinedex-api library - movie catalog HTTP service
//!
//! Serves read-only query, analytics and recommendation endpoints over an
//! immutable catalog loaded once at startup.

use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use axum::Router;
use cinedex_common::Catalog;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

pub mod api;
pub mod error;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Catalog snapshot (never mutated after startup)
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// Create new application state
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    let public = Router::new()
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .route("/api/buildinfo", get(api::get_build_info))
        .merge(api::health_routes());

    Router::new()
        // Catalog queries
        .route("/api/movies", get(api::movies::list_all))
        .route("/api/movies/:rank", get(api::movies::get_by_rank))
        .route("/api/movies/year/:year", get(api::movies::get_by_year))
        .route("/api/movies/top", get(api::movies::top_rated))
        .route("/api/movies/top/:count", get(api::movies::top_rated_count))
        .route("/api/movies/filter/rating", get(api::movies::filter_by_rating))
        .route("/api/movies/filter/year-range", get(api::movies::filter_by_year_range))
        .route("/api/movies/filter/duration", get(api::movies::filter_by_duration))
        .route(
            "/api/movies/filter/age-rating/:age_limit",
            get(api::movies::filter_by_age_rating),
        )
        .route("/api/movies/search", get(api::movies::search))
        .route("/api/movies/popular", get(api::movies::most_popular))
        .route("/api/movies/critically-acclaimed", get(api::movies::critically_acclaimed))
        .route("/api/movies/family-friendly", get(api::movies::family_friendly))
        .route("/api/movies/quick-watch", get(api::movies::quick_watch))
        // Aggregates
        .route("/api/analytics/statistics", get(api::analytics::statistics))
        .route("/api/analytics/by-decade", get(api::analytics::by_decade))
        .route(
            "/api/analytics/rating-vs-popularity",
            get(api::analytics::rating_vs_popularity),
        )
        // Recommendation lists
        .route(
            "/api/recommendations/similar-year/:rank",
            get(api::recommendations::similar_by_year),
        )
        .route("/api/recommendations/hidden-gems", get(api::recommendations::hidden_gems))
        .route("/api/recommendations/crowd-pleasers", get(api::recommendations::crowd_pleasers))
        .route("/api/recommendations/time-based", get(api::recommendations::time_based))
        .merge(public)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS policy for the configured client origins (GET only)
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET])
}
