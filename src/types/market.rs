#![allow(missing_docs)]
//! Market status and holiday calendar types.

use std::collections::HashMap;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Market Status
// ---------------------------------------------------------------------------

/// Envelope returned by `GET /api/marketStatus`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketStatusResponse {
    pub market_state: Vec<MarketState>,
}

/// Status of one market segment (Capital Market, Currency, Commodity, ...).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketState {
    /// Segment name, e.g. `"Capital Market"`.
    pub market: String,
    /// `"Open"` or `"Close"` (as spelled by the exchange).
    pub market_status: String,
    #[serde(default)]
    pub trade_date: Option<String>,
    /// Headline index for the segment, e.g. `"NIFTY 50"`.
    #[serde(default)]
    pub index: Option<String>,
    #[serde(default)]
    pub last: Option<serde_json::Value>,
    #[serde(default)]
    pub variation: Option<f64>,
    #[serde(default)]
    pub percent_change: Option<f64>,
    #[serde(default)]
    pub market_status_message: Option<String>,
}

// ---------------------------------------------------------------------------
// Holidays
// ---------------------------------------------------------------------------

/// Which holiday calendar to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayKind {
    Trading,
    Clearing,
}

impl HolidayKind {
    /// Query-parameter value expected by the API.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trading => "trading",
            Self::Clearing => "clearing",
        }
    }
}

/// Holiday lists keyed by segment code (`"CM"`, `"FO"`, `"CD"`, ...).
pub type HolidayCalendar = HashMap<String, Vec<Holiday>>;

/// A single exchange holiday.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    /// Date in `DD-MMM-YYYY` format.
    pub trading_date: String,
    #[serde(default)]
    pub week_day: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Circulars
// ---------------------------------------------------------------------------

/// Envelope returned by `GET /api/circulars`.
#[derive(Debug, Clone, Deserialize)]
pub struct CircularsResponse {
    pub data: Vec<Circular>,
}

/// One exchange circular.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Circular {
    #[serde(default)]
    pub circ_number: Option<String>,
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub circ_department: Option<String>,
    #[serde(default)]
    pub circ_date: Option<String>,
    #[serde(default)]
    pub circ_file_path: Option<String>,
}

// ---------------------------------------------------------------------------
// Advance / Decline
// ---------------------------------------------------------------------------

/// Advance/decline counts for one index.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvanceDecline {
    #[serde(default)]
    pub indice: Option<String>,
    #[serde(default)]
    pub advances: Option<String>,
    #[serde(default)]
    pub declines: Option<String>,
    #[serde(default)]
    pub unchanged: Option<String>,
}
