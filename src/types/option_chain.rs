#![allow(missing_docs)]
//! Option chain types — raw chain payload, contract info, compiled summary.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Raw option chain (GET /api/option-chain-v3)
// ---------------------------------------------------------------------------

/// Response from the option-chain endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionChainResponse {
    /// Every listed contract across all expiries.
    pub records: OptionChainRecords,
    /// The exchange's pre-filtered near-expiry view; used to derive the
    /// strike spacing.
    pub filtered: OptionChainRecords,
}

/// One block of chain rows plus snapshot metadata.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionChainRecords {
    pub data: Vec<OptionContractRow>,
    #[serde(default)]
    pub expiry_dates: Vec<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub underlying_value: Option<f64>,
}

/// One (strike, expiry) row. Deep out-of-the-money contracts are listed
/// with only one side; the absent side deserializes as `None`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionContractRow {
    pub strike_price: f64,
    /// Expiry in `DD-MMM-YYYY` format, e.g. `26-Jun-2025`.
    pub expiry_date: String,
    #[serde(default, rename = "CE")]
    pub ce: Option<OptionSideQuote>,
    #[serde(default, rename = "PE")]
    pub pe: Option<OptionSideQuote>,
}

/// Quote data for one side (call or put) of a strike.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionSideQuote {
    #[serde(default)]
    pub open_interest: f64,
    #[serde(default)]
    pub last_price: f64,
    #[serde(default)]
    pub change: f64,
    #[serde(default)]
    pub implied_volatility: f64,
    #[serde(default)]
    pub total_traded_volume: f64,
    #[serde(default)]
    pub change_in_open_interest: f64,
    #[serde(default)]
    pub underlying_value: Option<f64>,
}

// ---------------------------------------------------------------------------
// Contract info (GET /api/option-chain-contract-info)
// ---------------------------------------------------------------------------

/// Response from the contract-info endpoint, used to resolve the nearest
/// expiry for a symbol.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractInfo {
    /// Listed expiries in `DD-MMM-YYYY` format, nearest first. Checked
    /// explicitly by the resolver: a missing key or empty list is an error.
    #[serde(default)]
    pub expiry_dates: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Compiled chain summary
// ---------------------------------------------------------------------------

/// Aggregated per-expiry option chain statistics produced by
/// [`compile_chain`](crate::analytics::compile_chain).
#[derive(Debug, Clone, Serialize)]
pub struct ChainSummary {
    /// Expiry in `DD-MMM-YYYY` format.
    pub expiry: String,
    /// Snapshot timestamp as reported by the exchange.
    pub timestamp: String,
    /// Last value of the underlying.
    pub underlying: f64,
    /// At-the-money strike (nearest multiple of the strike spacing).
    pub atm: f64,
    /// Max-pain strike.
    pub maxpain: f64,
    /// Strike with the highest call open interest.
    pub max_coi_strike: f64,
    /// Strike with the highest put open interest.
    pub max_poi_strike: f64,
    /// Total call open interest across all strikes.
    pub coi_total: f64,
    /// Total put open interest across all strikes.
    pub poi_total: f64,
    /// Aggregate put-call ratio, rounded to 2 decimals. `None` when total
    /// call OI is zero.
    pub pcr: Option<f64>,
    /// Per-strike entries in ascending strike order.
    pub chain: Vec<StrikeEntry>,
}

impl ChainSummary {
    /// Look up the entry for an exact strike price.
    pub fn strike(&self, strike: f64) -> Option<&StrikeEntry> {
        self.chain.iter().find(|e| e.strike == strike)
    }
}

/// Compiled call/put statistics for a single strike.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StrikeEntry {
    pub strike: f64,
    pub ce: SideStats,
    pub pe: SideStats,
    /// Put OI / call OI rounded to 2 decimals; `None` whenever either side
    /// has zero open interest.
    pub pcr: Option<f64>,
}

/// One side of a [`StrikeEntry`]. All-zero when the contract side is not
/// listed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SideStats {
    pub last: f64,
    pub oi: f64,
    pub chg: f64,
    pub iv: f64,
}

impl From<&OptionSideQuote> for SideStats {
    fn from(q: &OptionSideQuote) -> Self {
        Self {
            last: q.last_price,
            oi: q.open_interest,
            chg: q.change,
            iv: q.implied_volatility,
        }
    }
}
