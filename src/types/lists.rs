#![allow(missing_docs)]
//! Stock list, index, and IPO listing types.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Equity stock lists
// ---------------------------------------------------------------------------

/// Envelope returned by the live equity list endpoints
/// (`equity-stockIndices`, `live-analysis-emerge`, `etf`,
/// `sovereign-gold-bonds`).
#[derive(Debug, Clone, Deserialize)]
pub struct ListData {
    pub data: Vec<EquityListRow>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub advance: Option<serde_json::Value>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

/// One row of a live equity list. Also the unit returned by the
/// gainers/losers post-processing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquityListRow {
    #[serde(default)]
    pub symbol: Option<String>,
    /// Percent change on the day. Load-bearing for gainers/losers.
    #[serde(default)]
    pub p_change: f64,
    #[serde(default)]
    pub last_price: Option<f64>,
    #[serde(default)]
    pub open: Option<f64>,
    #[serde(default)]
    pub day_high: Option<f64>,
    #[serde(default)]
    pub day_low: Option<f64>,
    #[serde(default)]
    pub previous_close: Option<f64>,
    #[serde(default)]
    pub change: Option<f64>,
    #[serde(default)]
    pub total_traded_volume: Option<f64>,
    #[serde(default)]
    pub series: Option<String>,
}

// ---------------------------------------------------------------------------
// Index lists
// ---------------------------------------------------------------------------

/// Envelope returned by `GET /api/allIndices`.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexListData {
    pub data: Vec<IndexRow>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// One index snapshot row.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexRow {
    #[serde(default)]
    pub index: Option<String>,
    #[serde(default)]
    pub index_symbol: Option<String>,
    #[serde(default)]
    pub last: Option<f64>,
    #[serde(default)]
    pub percent_change: Option<f64>,
    #[serde(default)]
    pub open: Option<f64>,
    #[serde(default)]
    pub high: Option<f64>,
    #[serde(default)]
    pub low: Option<f64>,
    #[serde(default)]
    pub previous_close: Option<f64>,
}

// ---------------------------------------------------------------------------
// IPO listings
// ---------------------------------------------------------------------------

/// One IPO listing row, shared by the current/upcoming/past IPO endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpoListing {
    pub symbol: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub series: Option<String>,
    #[serde(default)]
    pub issue_start_date: Option<String>,
    #[serde(default)]
    pub issue_end_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub issue_price: Option<String>,
    #[serde(default)]
    pub issue_size: Option<String>,
}
