//! Downloadable end-of-day reports — bhavcopies, price bands, market lots.
//!
//! Every method here maps one report to one archive URL keyed by a date
//! embedded in the path, downloads it through the streaming layer (which
//! detects the exchange's HTML "not published yet" page), checks a
//! per-report minimum plausible size, and unpacks compressed results.
//!
//! The equity and FnO bhavcopy URLs changed when NSE migrated to the UDiFF
//! common format; the migration date is configurable via
//! [`NseClientBuilder::bhavcopy_cutover`](crate::client::NseClientBuilder::bhavcopy_cutover).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::archive;
use crate::client::NseClient;
use crate::constants::ARCHIVE_BASE_URL;
use crate::error::Result;
use crate::util;

/// Minimum plausible sizes in bytes; anything smaller is a truncated or
/// placeholder file and the download is reported as failed.
const MIN_ZIP_SIZE: u64 = 5_000;
const MIN_DELIVERY_SIZE: u64 = 50_000;
const MIN_CSV_SIZE: u64 = 5_000;
const MIN_DOCUMENT_SIZE: u64 = 10;

impl NseClient {
    /// Resolve the destination folder: an explicit override (created if
    /// missing) or the client's download folder.
    fn dest_folder(&self, folder: Option<&Path>) -> Result<PathBuf> {
        match folder {
            Some(f) => util::ensure_folder(f),
            None => Ok(self.dir().to_path_buf()),
        }
    }

    /// Daily equity bhavcopy. Downloads the ZIP for `date`, extracts the
    /// CSV, and returns its path.
    pub async fn equity_bhavcopy(
        &self,
        date: NaiveDate,
        folder: Option<&Path>,
    ) -> Result<PathBuf> {
        let folder = self.dest_folder(folder)?;

        let url = if date >= self.bhavcopy_cutover {
            format!(
                "{ARCHIVE_BASE_URL}/content/cm/BhavCopy_NSE_CM_0_0_0_{}_F_0000.csv.zip",
                date.format("%Y%m%d")
            )
        } else {
            let date_str = date.format("%d%b%Y").to_string().to_uppercase();
            format!(
                "{ARCHIVE_BASE_URL}/content/historical/EQUITIES/{}/{}/cm{}bhav.csv.zip",
                date.format("%Y"),
                &date_str[2..5],
                date_str
            )
        };

        let file = self.download(&url, &folder, MIN_ZIP_SIZE).await?;
        archive::extract(&file, &folder, None)
    }

    /// Daily FnO bhavcopy. Same cutover handling as the equity report.
    pub async fn fno_bhavcopy(&self, date: NaiveDate, folder: Option<&Path>) -> Result<PathBuf> {
        let folder = self.dest_folder(folder)?;

        let url = if date >= self.bhavcopy_cutover {
            format!(
                "{ARCHIVE_BASE_URL}/content/fo/BhavCopy_NSE_FO_0_0_0_{}_F_0000.csv.zip",
                date.format("%Y%m%d")
            )
        } else {
            let date_str = date.format("%d%b%Y").to_string().to_uppercase();
            format!(
                "{ARCHIVE_BASE_URL}/content/historical/DERIVATIVES/{}/{}/fo{}bhav.csv.zip",
                date.format("%Y"),
                &date_str[2..5],
                date_str
            )
        };

        let file = self.download(&url, &folder, MIN_ZIP_SIZE).await?;
        archive::extract(&file, &folder, None)
    }

    /// Daily equity delivery (security-wise) report.
    pub async fn delivery_bhavcopy(
        &self,
        date: NaiveDate,
        folder: Option<&Path>,
    ) -> Result<PathBuf> {
        let folder = self.dest_folder(folder)?;
        let url = format!(
            "{ARCHIVE_BASE_URL}/products/content/sec_bhavdata_full_{}.csv",
            date.format("%d%m%Y")
        );

        self.download(&url, &folder, MIN_DELIVERY_SIZE).await
    }

    /// Daily close report for all indices.
    pub async fn indices_bhavcopy(
        &self,
        date: NaiveDate,
        folder: Option<&Path>,
    ) -> Result<PathBuf> {
        let folder = self.dest_folder(folder)?;
        let url = format!(
            "{ARCHIVE_BASE_URL}/content/indices/ind_close_all_{}.csv",
            date.format("%d%m%Y")
        );

        self.download(&url, &folder, MIN_CSV_SIZE).await
    }

    /// Daily PR bhavcopy bundle. Returned as the ZIP itself — it contains
    /// many member files, so unpacking is left to the caller (see
    /// [`archive::extract`] with an explicit member list).
    pub async fn pr_bhavcopy(&self, date: NaiveDate, folder: Option<&Path>) -> Result<PathBuf> {
        let folder = self.dest_folder(folder)?;
        let url = format!(
            "{ARCHIVE_BASE_URL}/archives/equities/bhavcopy/pr/PR{}.zip",
            date.format("%d%m%y")
        );

        self.download(&url, &folder, MIN_ZIP_SIZE).await
    }

    /// Daily security-wise price band report.
    pub async fn priceband_report(
        &self,
        date: NaiveDate,
        folder: Option<&Path>,
    ) -> Result<PathBuf> {
        let folder = self.dest_folder(folder)?;
        let url = format!(
            "{ARCHIVE_BASE_URL}/content/equities/sec_list_{}.csv",
            date.format("%d%m%Y")
        );

        self.download(&url, &folder, MIN_CSV_SIZE).await
    }

    /// Daily CM MII security file, published gzip-compressed; returns the
    /// decompressed CSV path.
    pub async fn cm_mii_security_report(
        &self,
        date: NaiveDate,
        folder: Option<&Path>,
    ) -> Result<PathBuf> {
        let folder = self.dest_folder(folder)?;
        let url = format!(
            "{ARCHIVE_BASE_URL}/content/cm/NSE_CM_security_{}.csv.gz",
            date.format("%d%m%Y")
        );

        let file = self.download(&url, &folder, MIN_DOCUMENT_SIZE).await?;
        archive::extract(&file, &folder, None)
    }

    /// Download an arbitrary exchange document (annual report, attachment)
    /// by its full archive URL. ZIP documents are extracted.
    pub async fn download_document(&self, url: &str, folder: Option<&Path>) -> Result<PathBuf> {
        let folder = self.dest_folder(folder)?;
        let file = self.download(url, &folder, MIN_DOCUMENT_SIZE).await?;

        if file.extension().is_some_and(|e| e.eq_ignore_ascii_case("zip")) {
            archive::extract(&file, &folder, None)
        } else {
            Ok(file)
        }
    }

    /// Lot sizes for all FnO stocks, parsed from the market-lots CSV.
    /// Keys are symbols, values lot sizes.
    pub async fn fno_lots(&self) -> Result<HashMap<String, u32>> {
        let url = format!("{ARCHIVE_BASE_URL}/content/fo/fo_mktlots.csv");
        let body = self.get_text(&url).await?;

        let mut lots = HashMap::new();

        for line in body.lines() {
            let mut fields = line.split(',');
            let (Some(_), Some(symbol), Some(_), Some(lot)) = (
                fields.next(),
                fields.next(),
                fields.next(),
                fields.next(),
            ) else {
                continue;
            };

            // Header and section rows carry no numeric lot size.
            if let Ok(lot) = lot.trim().parse::<u32>() {
                lots.insert(symbol.trim().to_owned(), lot);
            }
        }

        Ok(lots)
    }
}
