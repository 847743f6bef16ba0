#![allow(missing_docs)]
//! Historical time-series types — equity, VIX, FnO, and index series.

use chrono::NaiveDate;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Date range
// ---------------------------------------------------------------------------

/// An inclusive date range for a historical query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }
}

// ---------------------------------------------------------------------------
// Instruments
// ---------------------------------------------------------------------------

/// Derivative instrument selector for the FnO historical endpoint.
///
/// Variant names match the upstream query-parameter values.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FnoInstrument {
    FUTIDX,
    FUTSTK,
    OPTIDX,
    OPTSTK,
}

impl FnoInstrument {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FUTIDX => "FUTIDX",
            Self::FUTSTK => "FUTSTK",
            Self::OPTIDX => "OPTIDX",
            Self::OPTSTK => "OPTSTK",
        }
    }

    /// True for the option instruments, which additionally require an
    /// option type and strike price.
    pub fn is_option(self) -> bool {
        matches!(self, Self::OPTIDX | Self::OPTSTK)
    }
}

/// Option type for [`FnoInstrument::OPTIDX`] / [`FnoInstrument::OPTSTK`]
/// historical queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Call => "CE",
            Self::Put => "PE",
        }
    }
}

// ---------------------------------------------------------------------------
// Row envelopes
// ---------------------------------------------------------------------------

/// Generic `{"data": [...]}` envelope used by the historical endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct SeriesEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// One daily equity candle (`historical/cm/equity`). Upstream column names
/// use the `CH_` prefix.
#[derive(Debug, Clone, Deserialize)]
pub struct EquityHistoricalRow {
    #[serde(default, rename = "CH_SYMBOL")]
    pub symbol: Option<String>,
    #[serde(default, rename = "CH_SERIES")]
    pub series: Option<String>,
    #[serde(default, rename = "CH_TIMESTAMP")]
    pub date: Option<String>,
    #[serde(default, rename = "CH_OPENING_PRICE")]
    pub open: Option<f64>,
    #[serde(default, rename = "CH_TRADE_HIGH_PRICE")]
    pub high: Option<f64>,
    #[serde(default, rename = "CH_TRADE_LOW_PRICE")]
    pub low: Option<f64>,
    #[serde(default, rename = "CH_CLOSING_PRICE")]
    pub close: Option<f64>,
    #[serde(default, rename = "CH_LAST_TRADED_PRICE")]
    pub last: Option<f64>,
    #[serde(default, rename = "CH_PREVIOUS_CLS_PRICE")]
    pub prev_close: Option<f64>,
    #[serde(default, rename = "CH_TOT_TRADED_QTY")]
    pub volume: Option<f64>,
    #[serde(default, rename = "CH_TOT_TRADED_VAL")]
    pub turnover: Option<f64>,
    #[serde(default, rename = "TIMESTAMP")]
    pub timestamp: Option<String>,
}

/// One India VIX history row (`historicalOR/vixhistory`).
#[derive(Debug, Clone, Deserialize)]
pub struct VixHistoricalRow {
    #[serde(default, rename = "EOD_TIMESTAMP")]
    pub date: Option<String>,
    #[serde(default, rename = "EOD_OPEN_INDEX_VAL")]
    pub open: Option<f64>,
    #[serde(default, rename = "EOD_HIGH_INDEX_VAL")]
    pub high: Option<f64>,
    #[serde(default, rename = "EOD_LOW_INDEX_VAL")]
    pub low: Option<f64>,
    #[serde(default, rename = "EOD_CLOSE_INDEX_VAL")]
    pub close: Option<f64>,
    #[serde(default, rename = "VIX_PTS_CHG")]
    pub points_change: Option<f64>,
    #[serde(default, rename = "VIX_PERC_CHG")]
    pub percent_change: Option<f64>,
    #[serde(default, rename = "TIMESTAMP")]
    pub timestamp: Option<String>,
}

/// One FnO history row (`historicalOR/foCPV`). Upstream column names use
/// the `FH_` prefix.
#[derive(Debug, Clone, Deserialize)]
pub struct FnoHistoricalRow {
    #[serde(default, rename = "FH_SYMBOL")]
    pub symbol: Option<String>,
    #[serde(default, rename = "FH_INSTRUMENT")]
    pub instrument: Option<String>,
    #[serde(default, rename = "FH_EXPIRY_DT")]
    pub expiry: Option<String>,
    #[serde(default, rename = "FH_STRIKE_PRICE")]
    pub strike_price: Option<serde_json::Value>,
    #[serde(default, rename = "FH_OPTION_TYPE")]
    pub option_type: Option<String>,
    #[serde(default, rename = "FH_TIMESTAMP")]
    pub date: Option<String>,
    #[serde(default, rename = "FH_OPENING_PRICE")]
    pub open: Option<f64>,
    #[serde(default, rename = "FH_TRADE_HIGH_PRICE")]
    pub high: Option<f64>,
    #[serde(default, rename = "FH_TRADE_LOW_PRICE")]
    pub low: Option<f64>,
    #[serde(default, rename = "FH_CLOSING_PRICE")]
    pub close: Option<f64>,
    #[serde(default, rename = "FH_SETTLE_PRICE")]
    pub settle_price: Option<serde_json::Value>,
    #[serde(default, rename = "FH_TOT_TRADED_QTY")]
    pub volume: Option<f64>,
    #[serde(default, rename = "FH_OPEN_INT")]
    pub open_interest: Option<f64>,
    #[serde(default, rename = "FH_CHANGE_IN_OI")]
    pub change_in_oi: Option<f64>,
    #[serde(default, rename = "TIMESTAMP")]
    pub timestamp: Option<String>,
}

// ---------------------------------------------------------------------------
// Index history
// ---------------------------------------------------------------------------

/// Raw envelope from `historicalOR/indicesHistory`.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexHistoryEnvelope {
    pub data: IndexHistoryData,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexHistoryData {
    #[serde(default = "Vec::new")]
    pub index_close_online_records: Vec<IndexPriceRow>,
    #[serde(default = "Vec::new")]
    pub index_turnover_records: Vec<IndexTurnoverRow>,
}

/// Combined price + turnover history for one index, as returned by
/// [`historical_index`](crate::client::NseClient::historical_index).
#[derive(Debug, Clone, Default)]
pub struct IndexHistory {
    pub price: Vec<IndexPriceRow>,
    pub turnover: Vec<IndexTurnoverRow>,
}

/// One index EOD price row.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexPriceRow {
    #[serde(default, rename = "EOD_INDEX_NAME")]
    pub index: Option<String>,
    #[serde(default, rename = "EOD_TIMESTAMP")]
    pub date: Option<String>,
    #[serde(default, rename = "EOD_OPEN_INDEX_VAL")]
    pub open: Option<f64>,
    #[serde(default, rename = "EOD_HIGH_INDEX_VAL")]
    pub high: Option<f64>,
    #[serde(default, rename = "EOD_LOW_INDEX_VAL")]
    pub low: Option<f64>,
    #[serde(default, rename = "EOD_CLOSE_INDEX_VAL")]
    pub close: Option<f64>,
    #[serde(default, rename = "TIMESTAMP")]
    pub timestamp: Option<String>,
}

/// One index EOD turnover row.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexTurnoverRow {
    #[serde(default, rename = "HIT_INDEX_NAME_UPPER")]
    pub index: Option<String>,
    #[serde(default, rename = "HIT_TIMESTAMP")]
    pub date: Option<String>,
    #[serde(default, rename = "HIT_TRADED_QTY")]
    pub traded_quantity: Option<f64>,
    #[serde(default, rename = "HIT_TURN_OVER")]
    pub turnover: Option<f64>,
    #[serde(default, rename = "TIMESTAMP")]
    pub timestamp: Option<String>,
}
