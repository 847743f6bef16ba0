//! Small shared helpers: folder validation and date-range chunking.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Duration, NaiveDate};

use crate::error::{NseError, Result};

/// Validate `path` as a folder, creating it (and parents) if missing.
///
/// Fails with [`NseError::InvalidArgument`] when the path exists but is a
/// file.
pub fn ensure_folder(path: &Path) -> Result<PathBuf> {
    if path.is_file() {
        return Err(NseError::InvalidArgument(format!(
            "{}: must be a folder",
            path.display()
        )));
    }

    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    Ok(path.to_path_buf())
}

/// Validate an inclusive date range: `from` must not be after `to`.
pub fn check_range(from: NaiveDate, to: NaiveDate) -> Result<()> {
    if from > to {
        return Err(NseError::InvalidArgument(format!(
            "from date {from} is after to date {to}"
        )));
    }
    Ok(())
}

/// Split the inclusive range `[from, to]` into contiguous, non-overlapping
/// sub-ranges of at most `max_days` days each, in ascending order.
///
/// The upstream historical endpoints cap the span per call; every chunk here
/// is one call. Chunks abut exactly: each starts the day after the previous
/// one ends, and their union covers the input range.
pub fn chunk_date_range(
    from: NaiveDate,
    to: NaiveDate,
    max_days: i64,
) -> Vec<(NaiveDate, NaiveDate)> {
    debug_assert!(max_days > 0);

    let mut chunks = Vec::new();
    let mut start = from;

    while start <= to {
        let end = (start + Duration::days(max_days - 1)).min(to);
        chunks.push((start, end));
        start = end + Duration::days(1);
    }

    chunks
}

/// Derive a file name from the final path segment of a URL.
pub fn file_name_from_url(url: &str) -> Result<String> {
    let parsed = url::Url::parse(url)
        .map_err(|e| NseError::InvalidArgument(format!("{url}: {e}")))?;

    parsed
        .path_segments()
        .and_then(|mut segs| segs.next_back())
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| NseError::InvalidArgument(format!("{url}: no file name in path")))
}
