//! HTTP API handlers for cinedex-api

pub mod analytics;
pub mod buildinfo;
pub mod health;
pub mod movies;
pub mod recommendations;
pub mod ui;

pub use buildinfo::get_build_info;
pub use health::health_routes;
pub use ui::{serve_app_js, serve_index};

use axum::Json;
use cinedex_common::MovieRecord;
use serde::Deserialize;

/// Optional `?count=` on top-N lists; each endpoint applies its own default
#[derive(Debug, Deserialize)]
pub struct CountQuery {
    pub count: Option<usize>,
}

/// Runtime cap from a query string. Negative caps admit nothing.
pub(crate) fn minutes_cap(minutes: i32) -> Option<u32> {
    u32::try_from(minutes).ok()
}

/// Clone borrowed catalog rows into an owned JSON body
pub(crate) fn movie_list(movies: Vec<&MovieRecord>) -> Json<Vec<MovieRecord>> {
    Json(movies.into_iter().cloned().collect())
}
