//! Error types for the `nse-market-rs` crate.
//!
//! All fallible operations in this crate return [`Result<T>`], which is an
//! alias for `std::result::Result<T, NseError>`.
//!
//! [`NseError`] covers:
//! - **Invalid arguments** — Client-side validation errors (bad paths,
//!   inverted date ranges, spans over the endpoint ceiling)
//! - **Timeouts** — Network round trip exceeded the configured budget
//! - **HTTP status errors** — Non-2xx responses from the exchange
//! - **HTTP transport errors** — Network and TLS failures
//! - **JSON errors** — Deserialization failures
//! - **Report conditions** — Unavailable, failed, or unreadable report files

use std::path::PathBuf;

/// All possible errors produced by the `nse-market-rs` client.
#[derive(Debug, thiserror::Error)]
pub enum NseError {
    /// The caller provided an invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The network round trip exceeded the configured timeout.
    #[error("Request timed out: {url}")]
    Timeout {
        /// The URL that timed out.
        url: String,
    },

    /// The server returned a non-2xx HTTP status code.
    #[error("{url} returned HTTP {status}")]
    Status {
        /// The requested URL.
        url: String,
        /// The HTTP status code.
        status: reqwest::StatusCode,
    },

    /// A network or transport-level error from `reqwest`.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to deserialize a JSON response body.
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// A filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The exchange served an HTML error page where report data was
    /// expected. Reports are published on a delay; retry later.
    #[error("Report not yet available: {0}")]
    ReportUnavailable(String),

    /// The downloaded file is missing or implausibly small. The partial
    /// file has already been removed.
    #[error("Failed to download file: {}", .0.display())]
    DownloadFailed(PathBuf),

    /// The archive suffix is not one the unpacker understands.
    #[error("Unsupported archive format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// A corrupt or unreadable ZIP archive.
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// A well-formed response carried no rows for a report type that
    /// guarantees non-empty results.
    #[error("No data available: {0}")]
    NoData(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NseError>;
