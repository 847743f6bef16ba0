#![allow(missing_docs)]
//! Block/bulk deal report types.

use serde::Deserialize;

/// Envelope returned by `GET /api/block-deal`.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockDealsResponse {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub data: Vec<serde_json::Value>,
}

/// Envelope returned by the historical deals endpoint
/// (`historicalOR/bulk-block-short-deals`).
#[derive(Debug, Clone, Deserialize)]
pub struct DealsArchiveResponse {
    #[serde(default)]
    pub data: Vec<BulkDealRow>,
}

/// One bulk-deal row. Field names follow the upstream `BD_` column scheme.
#[derive(Debug, Clone, Deserialize)]
pub struct BulkDealRow {
    #[serde(default, rename = "BD_DT_DATE")]
    pub date: Option<String>,
    #[serde(default, rename = "BD_SYMBOL")]
    pub symbol: Option<String>,
    #[serde(default, rename = "BD_SCRIP_NAME")]
    pub scrip_name: Option<String>,
    #[serde(default, rename = "BD_CLIENT_NAME")]
    pub client_name: Option<String>,
    /// `"BUY"` or `"SELL"`.
    #[serde(default, rename = "BD_BUY_SELL")]
    pub buy_sell: Option<String>,
    #[serde(default, rename = "BD_QTY_TRD")]
    pub quantity: Option<f64>,
    /// Weighted average trade price.
    #[serde(default, rename = "BD_TP_WATP")]
    pub price: Option<f64>,
    #[serde(default, rename = "BD_REMARKS")]
    pub remarks: Option<String>,
    #[serde(default, rename = "TIMESTAMP")]
    pub timestamp: Option<String>,
}
