//! Market status, holiday calendar, circulars, and advance/decline.

use chrono::NaiveDate;

use crate::client::NseClient;
use crate::error::Result;
use crate::types::market::*;

impl NseClient {
    /// Current status of each market segment.
    ///
    /// **Endpoint:** `GET /api/marketStatus`
    pub async fn market_status(&self) -> Result<Vec<MarketState>> {
        let resp: MarketStatusResponse = self
            .get_json(&format!("{}/marketStatus", self.api_base()), &[])
            .await?;

        Ok(resp.market_state)
    }

    /// Exchange holiday lists keyed by segment (`"CM"`, `"FO"`, ...).
    ///
    /// **Endpoint:** `GET /api/holiday-master`
    pub async fn holidays(&self, kind: HolidayKind) -> Result<HolidayCalendar> {
        self.get_json(
            &format!("{}/holiday-master", self.api_base()),
            &[("type", kind.as_str().to_owned())],
        )
        .await
    }

    /// Exchange circulars, optionally filtered by subject keyword and date
    /// range (`DD-MM-YYYY` on the wire).
    ///
    /// **Endpoint:** `GET /api/circulars`
    pub async fn circulars(
        &self,
        subject: Option<&str>,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<CircularsResponse> {
        let mut params: Vec<(&str, String)> = Vec::new();

        if let Some(sub) = subject {
            params.push(("sub", sub.to_owned()));
        }
        if let (Some(from), Some(to)) = (from, to) {
            crate::util::check_range(from, to)?;
            params.push(("from_date", from.format("%d-%m-%Y").to_string()));
            params.push(("to_date", to.format("%d-%m-%Y").to_string()));
        }

        self.get_json(&format!("{}/circulars", self.api_base()), &params)
            .await
    }

    /// Advance/decline counts for all NSE indices.
    pub async fn advance_decline(&self) -> Result<Vec<AdvanceDecline>> {
        #[derive(serde::Deserialize)]
        struct Envelope {
            data: Vec<AdvanceDecline>,
        }

        let resp: Envelope = self
            .get_json(
                "https://www1.nseindia.com/common/json/indicesAdvanceDeclines.json",
                &[],
            )
            .await?;

        Ok(resp.data)
    }
}
