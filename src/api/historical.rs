//! Historical time series — equity candles, India VIX, FnO, and indices.
//!
//! The upstream endpoints cap the span per call, so each method splits the
//! requested range into chunks ([`util::chunk_date_range`]), issues one
//! call per chunk, and concatenates the results in date order.

use chrono::{Duration, Local};

use crate::client::NseClient;
use crate::constants::{DEFAULT_HISTORY_CHUNK_DAYS, EQUITY_HISTORY_CHUNK_DAYS};
use crate::error::{NseError, Result};
use crate::types::historical::*;
use crate::util;

const WIRE_DATE_FMT: &str = "%d-%m-%Y";

/// Default the range to the last `days` days when the caller passes none,
/// and validate it.
fn range_or_default(range: Option<DateRange>, days: i64) -> Result<DateRange> {
    let range = range.unwrap_or_else(|| {
        let to = Local::now().date_naive();
        DateRange::new(to - Duration::days(days), to)
    });

    util::check_range(range.from, range.to)?;
    Ok(range)
}

impl NseClient {
    /// Daily price/volume history for an equity symbol (EQ series).
    ///
    /// Defaults to the last 30 days. The endpoint caps each call at 100
    /// days, so longer ranges are fetched in 100-day chunks.
    ///
    /// **Endpoint:** `GET /api/historical/cm/equity`
    pub async fn historical_equity(
        &self,
        symbol: &str,
        range: Option<DateRange>,
    ) -> Result<Vec<EquityHistoricalRow>> {
        let range = range_or_default(range, 30)?;
        let url = format!("{}/historical/cm/equity", self.api_base());

        let mut rows = Vec::new();

        for (from, to) in util::chunk_date_range(range.from, range.to, EQUITY_HISTORY_CHUNK_DAYS) {
            let chunk: SeriesEnvelope<EquityHistoricalRow> = self
                .get_json(
                    &url,
                    &[
                        ("symbol", symbol.to_uppercase()),
                        ("series", "[\"EQ\"]".to_owned()),
                        ("from", from.format(WIRE_DATE_FMT).to_string()),
                        ("to", to.format(WIRE_DATE_FMT).to_string()),
                    ],
                )
                .await?;

            rows.extend(chunk.data);
        }

        Ok(rows)
    }

    /// India VIX daily history. Defaults to the last 365 days.
    ///
    /// **Endpoint:** `GET /api/historicalOR/vixhistory`
    pub async fn historical_vix(&self, range: Option<DateRange>) -> Result<Vec<VixHistoricalRow>> {
        let range = range_or_default(range, DEFAULT_HISTORY_CHUNK_DAYS)?;
        let url = format!("{}/historicalOR/vixhistory", self.api_base());

        let mut rows = Vec::new();

        for (from, to) in
            util::chunk_date_range(range.from, range.to, DEFAULT_HISTORY_CHUNK_DAYS)
        {
            let chunk: SeriesEnvelope<VixHistoricalRow> = self
                .get_json(
                    &url,
                    &[
                        ("from", from.format(WIRE_DATE_FMT).to_string()),
                        ("to", to.format(WIRE_DATE_FMT).to_string()),
                    ],
                )
                .await?;

            rows.extend(chunk.data);
        }

        Ok(rows)
    }

    /// Futures & options price/volume/OI history.
    ///
    /// Option instruments additionally require `option_type` and
    /// `strike_price`; futures ignore both. `expiry_year` narrows the
    /// contract set. Defaults to the last 365 days.
    ///
    /// **Endpoint:** `GET /api/historicalOR/foCPV`
    #[allow(clippy::too_many_arguments)]
    pub async fn historical_fno(
        &self,
        instrument: FnoInstrument,
        symbol: &str,
        range: Option<DateRange>,
        expiry_year: Option<i32>,
        option_type: Option<OptionType>,
        strike_price: Option<f64>,
    ) -> Result<Vec<FnoHistoricalRow>> {
        if instrument.is_option() && option_type.is_none() {
            return Err(NseError::InvalidArgument(format!(
                "{} requires an option type",
                instrument.as_str()
            )));
        }

        let range = range_or_default(range, DEFAULT_HISTORY_CHUNK_DAYS)?;
        let url = format!("{}/historicalOR/foCPV", self.api_base());

        let mut rows = Vec::new();

        for (from, to) in
            util::chunk_date_range(range.from, range.to, DEFAULT_HISTORY_CHUNK_DAYS)
        {
            let mut params = vec![
                ("instrumentType", instrument.as_str().to_owned()),
                ("symbol", symbol.to_uppercase()),
                ("from", from.format(WIRE_DATE_FMT).to_string()),
                ("to", to.format(WIRE_DATE_FMT).to_string()),
            ];

            if let Some(year) = expiry_year {
                params.push(("year", year.to_string()));
            }
            if let Some(option_type) = option_type {
                params.push(("optionType", option_type.as_str().to_owned()));
            }
            if let Some(strike) = strike_price {
                params.push(("strikePrice", strike.to_string()));
            }

            let chunk: SeriesEnvelope<FnoHistoricalRow> = self.get_json(&url, &params).await?;
            rows.extend(chunk.data);
        }

        Ok(rows)
    }

    /// Daily close and turnover history for a market index. Defaults to
    /// the last 365 days.
    ///
    /// **Endpoint:** `GET /api/historicalOR/indicesHistory`
    pub async fn historical_index(
        &self,
        index: &str,
        range: Option<DateRange>,
    ) -> Result<IndexHistory> {
        let range = range_or_default(range, DEFAULT_HISTORY_CHUNK_DAYS)?;
        let url = format!("{}/historicalOR/indicesHistory", self.api_base());

        let mut history = IndexHistory::default();

        for (from, to) in
            util::chunk_date_range(range.from, range.to, DEFAULT_HISTORY_CHUNK_DAYS)
        {
            let chunk: IndexHistoryEnvelope = self
                .get_json(
                    &url,
                    &[
                        ("indexType", index.to_uppercase()),
                        ("from", from.format(WIRE_DATE_FMT).to_string()),
                        ("to", to.format(WIRE_DATE_FMT).to_string()),
                    ],
                )
                .await?;

            history.price.extend(chunk.data.index_close_online_records);
            history
                .turnover
                .extend(chunk.data.index_turnover_records);
        }

        Ok(history)
    }
}
