//! Movie record data model

use serde::{Deserialize, Serialize};

/// One row of the catalog, fully typed after ingestion.
///
/// Numeric fields hold `0` / `None` when the source cell was missing or
/// malformed; raw text never survives into a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    /// Catalog rank, the default sort handle (not deduplicated)
    pub rank: i32,
    pub year: i32,
    /// Free-text duration such as "2h 22m"
    #[serde(rename = "duration")]
    pub duration_text: Option<String>,
    /// Certificate such as "PG" or "R"
    pub age_limit: Option<String>,
    /// Expected 0-10, not enforced
    pub rating: f64,
    pub number_of_ratings: u64,
    /// Critic score; `None` means unrated, which differs from a score of zero
    pub metascore: Option<i32>,
    pub description: Option<String>,
    /// Display title
    pub name: Option<String>,
}

impl MovieRecord {
    /// Runtime in minutes parsed from `duration_text`
    pub fn duration_minutes(&self) -> u32 {
        crate::duration::parse_minutes(self.duration_text.as_deref())
    }

    /// Display title, or an empty string when the source had none
    pub fn title(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
pub(crate) fn sample(rank: i32, name: &str, year: i32, rating: f64) -> MovieRecord {
    MovieRecord {
        rank,
        year,
        duration_text: None,
        age_limit: None,
        rating,
        number_of_ratings: 0,
        metascore: None,
        description: None,
        name: Some(name.to_string()),
    }
}
