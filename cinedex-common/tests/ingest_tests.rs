//! Integration tests for dataset ingestion
//!
//! Tests cover:
//! - Loading the bundled sample dataset from disk
//! - Graceful degradation when the data source is missing or unreadable
//! - Messy rows (stray terminators, blank lines, short rows, quoted commas)

use std::io::Write;
use std::path::PathBuf;

use cinedex_common::Catalog;
use tempfile::{NamedTempFile, TempDir};

fn sample_dataset() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("data")
        .join("Movies.csv")
}

#[test]
fn test_load_sample_dataset() {
    let catalog = Catalog::load(&sample_dataset());
    assert_eq!(catalog.len(), 12);

    let first = catalog.by_rank(1).expect("rank 1 present");
    assert_eq!(first.name.as_deref(), Some("The Shawshank Redemption"));
    assert_eq!(first.number_of_ratings, 2_900_000);
    assert_eq!(first.duration_minutes(), 142);
    assert_eq!(first.metascore, Some(82));

    let quoted = catalog.by_rank(11).expect("rank 11 present");
    assert_eq!(quoted.name.as_deref(), Some("The Good, the Bad and the Ugly"));
    assert_eq!(quoted.number_of_ratings, 809_000);

    let unrated = catalog.by_rank(12).expect("rank 12 present");
    assert_eq!(unrated.metascore, None);
}

#[test]
fn test_sample_dataset_keeps_file_order() {
    let catalog = Catalog::load(&sample_dataset());
    let ranks: Vec<i32> = catalog.all().iter().map(|m| m.rank).collect();
    assert_eq!(ranks, (1..=12).collect::<Vec<_>>());
}

#[test]
fn test_missing_file_yields_empty_catalog() {
    let dir = TempDir::new().unwrap();
    let catalog = Catalog::load(&dir.path().join("does-not-exist.csv"));
    assert!(catalog.is_empty());
}

#[test]
fn test_directory_path_yields_empty_catalog() {
    let dir = TempDir::new().unwrap();
    let catalog = Catalog::load(dir.path());
    assert!(catalog.is_empty());
}

#[test]
fn test_invalid_utf8_yields_empty_catalog() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&[0xff, 0xfe, 0xfd, b'\n']).unwrap();
    let catalog = Catalog::load(file.path());
    assert!(catalog.is_empty());
}

#[test]
fn test_messy_rows_are_normalized() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "Rank,Year,Duration,AgeLimit,Rating,NumberOfRatings,Metascore,Description,Name;\r\n\
         \r\n\
         #3,(2010),2h 28m, PG-13 ,8.8,2.5m,74,\"Dreams, within dreams\",Inception;\r\n\
         4,2014,,,,,,,;\r\n\
         5,19x99,45m\r\n"
    )
    .unwrap();

    let catalog = Catalog::load(file.path());
    assert_eq!(catalog.len(), 3);

    let inception = &catalog.all()[0];
    assert_eq!(inception.rank, 3);
    assert_eq!(inception.year, 2010);
    assert_eq!(inception.age_limit.as_deref(), Some("PG-13"));
    assert_eq!(inception.number_of_ratings, 2_500_000);
    assert_eq!(inception.description.as_deref(), Some("Dreams, within dreams"));

    let sparse = &catalog.all()[1];
    assert_eq!(sparse.rank, 4);
    assert_eq!(sparse.rating, 0.0);
    assert_eq!(sparse.name, None);
    assert_eq!(sparse.duration_minutes(), 0);

    let short = &catalog.all()[2];
    assert_eq!(short.year, 1999);
    assert_eq!(short.duration_minutes(), 45);
    assert_eq!(short.metascore, None);
}

#[test]
fn test_reloading_is_identical() {
    let first = Catalog::load(&sample_dataset());
    let second = Catalog::load(&sample_dataset());
    assert_eq!(first.all(), second.all());
}
