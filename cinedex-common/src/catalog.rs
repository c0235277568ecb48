//! Immutable in-memory catalog
//!
//! Built once at startup and shared read-only by every request. There is
//! no mutation API, so queries can run concurrently without locking.

use std::path::Path;

use crate::ingest;
use crate::model::MovieRecord;

/// The full set of movie records in source order
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    movies: Vec<MovieRecord>,
}

impl Catalog {
    /// Wrap an already-parsed record set
    pub fn new(movies: Vec<MovieRecord>) -> Self {
        Self { movies }
    }

    /// Load the dataset at `path`; an unreadable source yields an empty catalog
    pub fn load(path: &Path) -> Self {
        Self::new(ingest::load_from_path(path))
    }

    /// Parse dataset text directly
    pub fn from_text(content: &str) -> Self {
        Self::new(ingest::parse_records(content))
    }

    /// All records in catalog order
    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
