#![allow(missing_docs)]
//! Quote and equity meta-info types.

use serde::Deserialize;

/// Which quote endpoint to hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteKind {
    #[default]
    Equity,
    Fno,
}

/// Optional quote section; only `trade_info` is accepted upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteSection {
    TradeInfo,
}

impl QuoteSection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TradeInfo => "trade_info",
        }
    }
}

/// Listing metadata for an equity symbol.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquityMetaInfo {
    pub symbol: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub isin: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub listing_date: Option<String>,
    #[serde(default, rename = "isFNOSec")]
    pub is_fno_sec: bool,
    #[serde(default, rename = "isETFSec")]
    pub is_etf_sec: bool,
    #[serde(default)]
    pub is_suspended: bool,
    #[serde(default)]
    pub is_delisted: bool,
    #[serde(default)]
    pub active_series: Vec<String>,
}

// ---------------------------------------------------------------------------
// Equity quote (the fields stock_quote depends on; the full payload is
// available via NseClient::quote as raw JSON)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquityQuote {
    pub metadata: QuoteMetadata,
    pub price_info: PriceInfo,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteMetadata {
    #[serde(default)]
    pub symbol: Option<String>,
    pub last_update_time: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceInfo {
    #[serde(default)]
    pub open: Option<f64>,
    /// Zero while the market is open; falls back to `last_price`.
    #[serde(default)]
    pub close: Option<f64>,
    #[serde(default)]
    pub last_price: Option<f64>,
    pub intra_day_high_low: HighLow,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HighLow {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

/// Trade-info section of the quote (volume data).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteTradeInfo {
    #[serde(rename = "securityWiseDP")]
    pub security_wise_dp: SecurityWiseDp,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityWiseDp {
    #[serde(default)]
    pub quantity_traded: Option<f64>,
    #[serde(default)]
    pub delivery_quantity: Option<f64>,
    #[serde(default)]
    pub delivery_to_traded_quantity: Option<f64>,
}

/// Formatted single-day OHLCV snapshot assembled from two quote calls.
#[derive(Debug, Clone, PartialEq)]
pub struct StockQuote {
    /// Last update time as reported by the exchange.
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    /// Official close, or last traded price while the session is open.
    pub close: f64,
    pub volume: f64,
}
