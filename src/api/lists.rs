//! Stock list endpoints and the gainers/losers post-processing.

use crate::analytics;
use crate::client::NseClient;
use crate::error::Result;
use crate::types::lists::*;

impl NseClient {
    /// Snapshot of all NSE indices.
    ///
    /// **Endpoint:** `GET /api/allIndices`
    pub async fn list_indices(&self) -> Result<IndexListData> {
        self.get_json(&format!("{}/allIndices", self.api_base()), &[])
            .await
    }

    /// Live quotes for every constituent of a market index.
    ///
    /// **Endpoint:** `GET /api/equity-stockIndices`
    pub async fn list_equity_stocks_by_index(&self, index: &str) -> Result<ListData> {
        self.get_json(
            &format!("{}/equity-stockIndices", self.api_base()),
            &[("index", index.to_uppercase())],
        )
        .await
    }

    /// All stocks traded in the Futures & Options segment.
    pub async fn list_fno_stocks(&self) -> Result<ListData> {
        self.list_equity_stocks_by_index("SECURITIES IN F&O").await
    }

    /// All listed ETFs.
    ///
    /// **Endpoint:** `GET /api/etf`
    pub async fn list_etf(&self) -> Result<ListData> {
        self.get_json(&format!("{}/etf", self.api_base()), &[])
            .await
    }

    /// All SME-board stocks.
    ///
    /// **Endpoint:** `GET /api/live-analysis-emerge`
    pub async fn list_sme(&self) -> Result<ListData> {
        self.get_json(&format!("{}/live-analysis-emerge", self.api_base()), &[])
            .await
    }

    /// All sovereign gold bonds.
    ///
    /// **Endpoint:** `GET /api/sovereign-gold-bonds`
    pub async fn list_sgb(&self) -> Result<ListData> {
        self.get_json(&format!("{}/sovereign-gold-bonds", self.api_base()), &[])
            .await
    }

    /// IPOs currently open for subscription.
    ///
    /// **Endpoint:** `GET /api/ipo-current-issue`
    pub async fn list_current_ipo(&self) -> Result<Vec<IpoListing>> {
        self.get_json(&format!("{}/ipo-current-issue", self.api_base()), &[])
            .await
    }

    /// Announced IPOs not yet open.
    ///
    /// **Endpoint:** `GET /api/all-upcoming-issues?category=ipo`
    pub async fn list_upcoming_ipo(&self) -> Result<Vec<IpoListing>> {
        self.get_json(
            &format!("{}/all-upcoming-issues", self.api_base()),
            &[("category", "ipo".to_owned())],
        )
        .await
    }

    /// Recently closed/listed IPOs within a date range, defaulting to the
    /// last 90 days.
    ///
    /// **Endpoint:** `GET /api/public-past-issues`
    pub async fn list_past_ipo(
        &self,
        from_date: Option<chrono::NaiveDate>,
        to_date: Option<chrono::NaiveDate>,
    ) -> Result<Vec<IpoListing>> {
        #[derive(serde::Deserialize)]
        struct Envelope {
            data: Vec<IpoListing>,
        }

        let to_date = to_date.unwrap_or_else(|| chrono::Local::now().date_naive());
        let from_date = from_date.unwrap_or(to_date - chrono::Duration::days(90));
        crate::util::check_range(from_date, to_date)?;

        let resp: Envelope = self
            .get_json(
                &format!("{}/public-past-issues", self.api_base()),
                &[
                    ("from_date", from_date.format("%d-%m-%Y").to_string()),
                    ("to_date", to_date.format("%d-%m-%Y").to_string()),
                ],
            )
            .await?;

        Ok(resp.data)
    }

    /// Top gainers of a stock list (percent change above zero, best first).
    /// Pure post-processing of a [`ListData`] from one of the list methods;
    /// no network call.
    pub fn gainers<'a>(&self, data: &'a ListData, count: Option<usize>) -> Vec<&'a EquityListRow> {
        analytics::gainers(&data.data, |r| r.p_change, count)
    }

    /// Top losers of a stock list (percent change below zero, worst first).
    pub fn losers<'a>(&self, data: &'a ListData, count: Option<usize>) -> Vec<&'a EquityListRow> {
        analytics::losers(&data.data, |r| r.p_change, count)
    }
}
