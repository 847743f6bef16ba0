//! Block and bulk deal reports.

use chrono::NaiveDate;

use crate::client::NseClient;
use crate::constants::MAX_DEAL_RANGE_DAYS;
use crate::error::{NseError, Result};
use crate::types::deals::*;
use crate::util;

impl NseClient {
    /// Today's block deals.
    ///
    /// **Endpoint:** `GET /api/block-deal`
    pub async fn block_deals(&self) -> Result<BlockDealsResponse> {
        self.get_json(&format!("{}/block-deal", self.api_base()), &[])
            .await
    }

    /// Bulk deals for an inclusive date range of at most 365 days.
    ///
    /// Bulk deals happen every trading day, so an empty result is surfaced
    /// as [`NseError::NoData`] rather than an empty list.
    ///
    /// **Endpoint:** `GET /api/historicalOR/bulk-block-short-deals`
    pub async fn bulk_deals(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<BulkDealRow>> {
        util::check_range(from, to)?;

        let span = (to - from).num_days();
        if span > MAX_DEAL_RANGE_DAYS {
            return Err(NseError::InvalidArgument(format!(
                "date range exceeds {MAX_DEAL_RANGE_DAYS} days: {span}"
            )));
        }

        let resp: DealsArchiveResponse = self
            .get_json(
                &format!("{}/historicalOR/bulk-block-short-deals", self.api_base()),
                &[
                    ("optionType", "bulk_deals".to_owned()),
                    ("from", from.format("%d-%m-%Y").to_string()),
                    ("to", to.format("%d-%m-%Y").to_string()),
                ],
            )
            .await?;

        if resp.data.is_empty() {
            return Err(NseError::NoData(format!(
                "no bulk deals between {from} and {to}"
            )));
        }

        Ok(resp.data)
    }
}
