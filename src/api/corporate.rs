//! Corporate filings — actions, announcements, board meetings.
//!
//! All three endpoints share the same parameter scheme: an index segment,
//! an optional symbol, and an optional `DD-MM-YYYY` date range.

use chrono::NaiveDate;

use crate::client::NseClient;
use crate::error::Result;
use crate::types::corporate::*;
use crate::util;

/// Build the shared query-parameter set for the corporate endpoints.
fn corporate_params(
    segment: Segment,
    symbol: Option<&str>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<Vec<(&'static str, String)>> {
    let mut params = vec![("index", segment.as_str().to_owned())];

    if let Some(symbol) = symbol {
        params.push(("symbol", symbol.to_owned()));
    }

    if let (Some(from), Some(to)) = (from, to) {
        util::check_range(from, to)?;
        params.push(("from_date", from.format("%d-%m-%Y").to_string()));
        params.push(("to_date", to.format("%d-%m-%Y").to_string()));
    }

    Ok(params)
}

impl NseClient {
    /// Corporate actions for the given date range, or all forthcoming when
    /// no range is supplied.
    ///
    /// **Endpoint:** `GET /api/corporates-corporateActions`
    pub async fn actions(
        &self,
        segment: Segment,
        symbol: Option<&str>,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<CorporateAction>> {
        let params = corporate_params(segment, symbol, from, to)?;

        self.get_json(
            &format!("{}/corporates-corporateActions", self.api_base()),
            &params,
        )
        .await
    }

    /// Corporate announcement filings.
    ///
    /// **Endpoint:** `GET /api/corporate-announcements`
    pub async fn announcements(
        &self,
        segment: Segment,
        symbol: Option<&str>,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<Announcement>> {
        let params = corporate_params(segment, symbol, from, to)?;

        self.get_json(
            &format!("{}/corporate-announcements", self.api_base()),
            &params,
        )
        .await
    }

    /// Scheduled board meetings.
    ///
    /// **Endpoint:** `GET /api/corporate-board-meetings`
    pub async fn board_meetings(
        &self,
        segment: Segment,
        symbol: Option<&str>,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<BoardMeeting>> {
        let params = corporate_params(segment, symbol, from, to)?;

        self.get_json(
            &format!("{}/corporate-board-meetings", self.api_base()),
            &params,
        )
        .await
    }
}
