//! # Cinedex Common Library
//!
//! Core of the movie catalog service:
//! - Field normalizers and duration parsing
//! - Dataset ingestion into typed movie records
//! - The immutable in-memory catalog
//! - Query, analytics and recommendation operations over the catalog
//! - Configuration loading

pub mod analytics;
pub mod catalog;
pub mod config;
pub mod duration;
pub mod error;
pub mod ingest;
pub mod model;
pub mod normalize;
pub mod query;
pub mod recommend;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use model::MovieRecord;
