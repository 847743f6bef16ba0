//! Option chain retrieval, nearest-expiry resolution, and derived stats.
//!
//! The chain endpoint requires a concrete expiry date. Resolving one costs
//! an extra round trip to the contract-info endpoint, so resolved expiries
//! are cached in `opt-expiry.json` (lower-cased symbol → ISO date) inside
//! the download folder. A cache entry stays valid until the expiry date
//! itself passes; after that the symbol is re-resolved live.

use std::collections::HashMap;

use chrono::{Local, NaiveDate};

use crate::analytics;
use crate::client::NseClient;
use crate::constants::OPTION_INDICES;
use crate::error::{NseError, Result};
use crate::types::option_chain::*;

/// File holding the symbol → nearest-expiry cache.
const EXPIRY_CACHE_FILE: &str = "opt-expiry.json";

fn market_type(symbol: &str) -> &'static str {
    if OPTION_INDICES.contains(&symbol) {
        "Indices"
    } else {
        "Equity"
    }
}

impl NseClient {
    /// Raw option chain for an index future or FnO stock.
    ///
    /// Index symbols (`nifty`, `banknifty`, `finnifty`, `niftyit`) resolve
    /// against the indices market type; everything else is treated as an
    /// equity. When `expiry` is `None` the nearest expiry is resolved via
    /// the cache or the contract-info endpoint.
    ///
    /// **Endpoint:** `GET /api/option-chain-v3`
    pub async fn option_chain(
        &self,
        symbol: &str,
        expiry: Option<NaiveDate>,
    ) -> Result<OptionChainResponse> {
        let symbol = symbol.to_lowercase();
        let market = market_type(&symbol);

        let expiry = match expiry {
            Some(date) => date,
            None => self.resolve_expiry(&symbol).await?,
        };

        self.get_json(
            &format!("{}/option-chain-v3", self.api_base()),
            &[
                ("type", market.to_owned()),
                ("symbol", symbol.to_uppercase()),
                ("expiry", analytics::format_expiry(expiry)),
            ],
        )
        .await
    }

    /// Option chain compiled into per-strike and aggregate statistics
    /// (max pain, ATM, PCR, OI totals) for one expiry.
    pub async fn compile_option_chain(
        &self,
        symbol: &str,
        expiry: NaiveDate,
    ) -> Result<ChainSummary> {
        let chain = self.option_chain(symbol, Some(expiry)).await?;
        analytics::compile_chain(&chain, expiry)
    }

    /// Listed futures expiries for an index, sorted nearest first.
    ///
    /// **Endpoint:** `GET /api/liveEquity-derivatives`
    pub async fn futures_expiry(&self, index: &str) -> Result<Vec<String>> {
        let index_param = match index.to_lowercase().as_str() {
            "nifty" => "nse50_fut",
            "banknifty" => "nifty_bank_fut",
            "finnifty" => "finnifty_fut",
            other => {
                return Err(NseError::InvalidArgument(format!(
                    "no futures index named {other}"
                )));
            }
        };

        #[derive(serde::Deserialize)]
        struct Envelope {
            #[serde(default)]
            data: Vec<Row>,
        }

        #[derive(serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Row {
            #[serde(default)]
            expiry_date: Option<String>,
        }

        let resp: Envelope = self
            .get_json(
                &format!("{}/liveEquity-derivatives", self.api_base()),
                &[("index", index_param.to_owned())],
            )
            .await?;

        let mut expiries: Vec<(NaiveDate, String)> = resp
            .data
            .into_iter()
            .filter_map(|r| r.expiry_date)
            .filter_map(|s| {
                NaiveDate::parse_from_str(&s, "%d-%b-%Y")
                    .ok()
                    .map(|d| (d, s))
            })
            .collect();

        expiries.sort_by_key(|(d, _)| *d);
        expiries.dedup();

        Ok(expiries.into_iter().map(|(_, s)| s).collect())
    }

    // -----------------------------------------------------------------------
    // Expiry resolution
    // -----------------------------------------------------------------------

    /// Nearest expiry for `symbol` (already lower-cased): cached value if
    /// still current, otherwise resolved from the contract-info endpoint
    /// and cached.
    async fn resolve_expiry(&self, symbol: &str) -> Result<NaiveDate> {
        let today = Local::now().date_naive();
        let mut cache = self.load_expiry_cache();

        if let Some(&expiry) = cache.get(symbol) {
            if today <= expiry {
                tracing::debug!(symbol, %expiry, "using cached option expiry");
                return Ok(expiry);
            }
        }

        let info: ContractInfo = self
            .get_json(
                &format!("{}/option-chain-contract-info", self.api_base()),
                &[("symbol", symbol.to_uppercase())],
            )
            .await?;

        let dates = info.expiry_dates.ok_or_else(|| {
            NseError::NoData(format!("expiryDates missing from contract info for {symbol}"))
        })?;

        let expiry = dates
            .iter()
            .filter_map(|s| NaiveDate::parse_from_str(s, "%d-%b-%Y").ok())
            .min()
            .ok_or_else(|| NseError::NoData(format!("No expiry dates listed for {symbol}")))?;

        cache.insert(symbol.to_owned(), expiry);
        self.save_expiry_cache(&cache);

        Ok(expiry)
    }

    /// Read the expiry cache; a missing or corrupt file is an empty cache.
    fn load_expiry_cache(&self) -> HashMap<String, NaiveDate> {
        let path = self.dir().join(EXPIRY_CACHE_FILE);

        let Ok(bytes) = std::fs::read(&path) else {
            return HashMap::new();
        };

        match serde_json::from_slice(&bytes) {
            Ok(cache) => cache,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "discarding corrupt expiry cache");
                HashMap::new()
            }
        }
    }

    fn save_expiry_cache(&self, cache: &HashMap<String, NaiveDate>) {
        let path = self.dir().join(EXPIRY_CACHE_FILE);
        let json = serde_json::to_vec(cache).expect("cache serialization is infallible");

        if let Err(e) = std::fs::write(&path, json) {
            tracing::warn!(path = %path.display(), error = %e, "failed to write expiry cache");
        }
    }
}
