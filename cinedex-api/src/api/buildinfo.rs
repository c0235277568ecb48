//! Build stamp for the dashboard footer
//!
//! The footer shows which build is serving and how many movies it loaded.

use axum::{extract::State, response::Json};
use serde::Serialize;

use crate::AppState;

/// `GET /api/buildinfo` body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfo {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub build_timestamp: &'static str,
    pub build_profile: &'static str,
    /// Records in the catalog this process loaded at startup
    pub catalog_size: usize,
}

pub async fn get_build_info(State(state): State<AppState>) -> Json<BuildInfo> {
    Json(BuildInfo {
        version: env!("CARGO_PKG_VERSION"),
        git_hash: env!("GIT_HASH"),
        build_timestamp: env!("BUILD_TIMESTAMP"),
        build_profile: env!("BUILD_PROFILE"),
        catalog_size: state.catalog.len(),
    })
}
