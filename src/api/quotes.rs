//! Price quotes and equity meta info.

use crate::client::NseClient;
use crate::error::Result;
use crate::types::quotes::*;

impl NseClient {
    /// Meta info (listing status, ISIN, indices membership) for an equity
    /// symbol.
    ///
    /// **Endpoint:** `GET /api/equity-meta-info`
    pub async fn equity_meta_info(&self, symbol: &str) -> Result<EquityMetaInfo> {
        self.get_json(
            &format!("{}/equity-meta-info", self.api_base()),
            &[("symbol", symbol.to_uppercase())],
        )
        .await
    }

    /// Raw price quote for an equity or derivative symbol.
    ///
    /// The full payload shape varies per symbol; this returns it untyped.
    /// Use [`stock_quote`](Self::stock_quote) for a typed OHLCV snapshot.
    ///
    /// **Endpoint:** `GET /api/quote-equity` or `GET /api/quote-derivative`
    pub async fn quote(
        &self,
        symbol: &str,
        kind: QuoteKind,
        section: Option<QuoteSection>,
    ) -> Result<serde_json::Value> {
        let url = match kind {
            QuoteKind::Equity => format!("{}/quote-equity", self.api_base()),
            QuoteKind::Fno => format!("{}/quote-derivative", self.api_base()),
        };

        let mut params = vec![("symbol", symbol.to_uppercase())];
        if let Some(section) = section {
            params.push(("section", section.as_str().to_owned()));
        }

        self.get_json(&url, &params).await
    }

    /// Formatted single-day OHLCV snapshot for an equity symbol, assembled
    /// from the quote and trade-info sections. While the session is open
    /// the official close is zero, so `close` falls back to the last traded
    /// price.
    pub async fn stock_quote(&self, symbol: &str) -> Result<StockQuote> {
        let url = format!("{}/quote-equity", self.api_base());
        let symbol = symbol.to_uppercase();

        let quote: EquityQuote = self
            .get_json(&url, &[("symbol", symbol.clone())])
            .await?;

        let trade_info: QuoteTradeInfo = self
            .get_json(
                &url,
                &[
                    ("symbol", symbol),
                    ("section", QuoteSection::TradeInfo.as_str().to_owned()),
                ],
            )
            .await?;

        let price = &quote.price_info;
        let close = match price.close {
            Some(c) if c != 0.0 => c,
            _ => price.last_price.unwrap_or_default(),
        };

        Ok(StockQuote {
            date: quote.metadata.last_update_time,
            open: price.open.unwrap_or_default(),
            high: price.intra_day_high_low.max.unwrap_or_default(),
            low: price.intra_day_high_low.min.unwrap_or_default(),
            close,
            volume: trade_info
                .security_wise_dp
                .quantity_traded
                .unwrap_or_default(),
        })
    }
}
