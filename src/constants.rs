//! Constants for the NSE public web API.
//!
//! Contains base URLs, the cookie bootstrap page, request headers, and
//! rate-limit / date-range ceilings. These are used internally by
//! [`NseClient`](crate::client::NseClient) but are also exported for
//! advanced usage.

use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// Base URLs
// ---------------------------------------------------------------------------

/// Base URL for the NSE JSON API.
pub const API_BASE_URL: &str = "https://www.nseindia.com/api";

/// Base URL for the NSE static report archives.
pub const ARCHIVE_BASE_URL: &str = "https://nsearchives.nseindia.com";

/// Landing page fetched to acquire the anti-bot session cookies.
///
/// Any NSE page works; the option-chain page is light and reliably sets the
/// `nsit` / `nseappid` cookies needed by the API host.
pub const COOKIE_BOOTSTRAP_URL: &str = "https://www.nseindia.com/option-chain";

// ---------------------------------------------------------------------------
// Request headers
// ---------------------------------------------------------------------------

/// Browser user agent sent on every request. NSE serves HTTP 403 to anything
/// that looks like a script.
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; rv:91.0) Gecko/20100101 Firefox/91.0";

/// Referer header expected by the API host.
pub const REFERER: &str = "https://www.nseindia.com/get-quotes/equity?symbol=HDFCBANK";

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum requests per second before [`Throttle`](crate::throttle::Throttle)
/// starts delaying callers.
pub const REQUESTS_PER_SECOND: u32 = 3;

/// Default network timeout in seconds for JSON API calls.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Network timeout in seconds for report downloads.
pub const DOWNLOAD_TIMEOUT_SECS: u64 = 15;

/// Maximum span in days accepted by the deal-report endpoints
/// (block/bulk/short deals).
pub const MAX_DEAL_RANGE_DAYS: i64 = 365;

/// Chunk size in days for the equity historical endpoint, which caps the
/// span per call.
pub const EQUITY_HISTORY_CHUNK_DAYS: i64 = 100;

/// Default chunk size in days for the other historical endpoints
/// (VIX, FnO, index).
pub const DEFAULT_HISTORY_CHUNK_DAYS: i64 = 365;

// ---------------------------------------------------------------------------
// Bhavcopy format migration
// ---------------------------------------------------------------------------

/// First date on which NSE publishes bhavcopies in the UDiFF common format
/// (`BhavCopy_NSE_CM_0_0_0_YYYYMMDD_F_0000.csv.zip`). Reports before this
/// date use the legacy `cmDDMMMYYYYbhav.csv.zip` URL layout.
///
/// Overridable per client via
/// [`NseClientBuilder::bhavcopy_cutover`](crate::client::NseClientBuilder::bhavcopy_cutover)
/// should the exchange migrate formats again.
pub fn default_bhavcopy_cutover() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, 8).expect("valid hardcoded date")
}

/// Index futures symbols served by the indices option-chain endpoint; all
/// other symbols resolve against the equities endpoint.
pub const OPTION_INDICES: [&str; 4] = ["banknifty", "nifty", "finnifty", "niftyit"];
