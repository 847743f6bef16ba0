//! Offline tests for date-range chunking and path helpers.

use chrono::NaiveDate;
use tempfile::TempDir;

use nse_market_rs::util::{chunk_date_range, ensure_folder, file_name_from_url};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

// ===================================================================
// Date-range chunking
// ===================================================================

#[test]
fn chunks_cover_a_year_contiguously() {
    let from = d(2023, 1, 1);
    let to = d(2023, 12, 31);

    let chunks = chunk_date_range(from, to, 100);

    assert_eq!(chunks.first().unwrap().0, from);
    assert_eq!(chunks.last().unwrap().1, to);

    for (cf, ct) in &chunks {
        assert!(cf <= ct);
        // Each chunk spans at most 100 days inclusive.
        assert!((*ct - *cf).num_days() < 100);
    }

    // Contiguous and non-overlapping: each chunk starts the day after the
    // previous one ends.
    for pair in chunks.windows(2) {
        assert_eq!(pair[1].0, pair[0].1 + chrono::Duration::days(1));
    }

    // Union covers exactly the input range.
    let covered: i64 = chunks.iter().map(|(f, t)| (*t - *f).num_days() + 1).sum();
    assert_eq!(covered, (to - from).num_days() + 1);
}

#[test]
fn single_day_range_is_one_chunk() {
    let day = d(2023, 6, 15);
    assert_eq!(chunk_date_range(day, day, 100), vec![(day, day)]);
}

#[test]
fn range_shorter_than_chunk_is_returned_whole() {
    let from = d(2023, 1, 1);
    let to = d(2023, 1, 20);
    assert_eq!(chunk_date_range(from, to, 100), vec![(from, to)]);
}

#[test]
fn exact_multiple_splits_cleanly() {
    let from = d(2023, 1, 1);
    let to = d(2023, 1, 10);

    let chunks = chunk_date_range(from, to, 5);
    assert_eq!(
        chunks,
        vec![(d(2023, 1, 1), d(2023, 1, 5)), (d(2023, 1, 6), d(2023, 1, 10))]
    );
}

// ===================================================================
// Path helpers
// ===================================================================

#[test]
fn ensure_folder_creates_missing_directories() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b");

    let created = ensure_folder(&nested).unwrap();
    assert!(created.is_dir());
}

#[test]
fn ensure_folder_rejects_files() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("data.csv");
    std::fs::write(&file, b"x").unwrap();

    assert!(ensure_folder(&file).is_err());
}

#[test]
fn file_name_comes_from_last_url_segment() {
    let name = file_name_from_url(
        "https://nsearchives.nseindia.com/content/indices/ind_close_all_01012024.csv",
    )
    .unwrap();
    assert_eq!(name, "ind_close_all_01012024.csv");
}

#[test]
fn url_without_a_file_name_is_rejected() {
    assert!(file_name_from_url("https://nsearchives.nseindia.com/").is_err());
}
