//! Core HTTP client for the NSE public web API.
//!
//! The [`NseClient`] struct is the main entry point. It wraps
//! [`reqwest::Client`] with the browser-like headers NSE expects, manages
//! the anti-bot cookie lifecycle (acquire, persist, renew), throttles every
//! outbound call, and provides `get_json` / `get_text` / `download`
//! primitives.
//!
//! API endpoint methods are added to `NseClient` via `impl` blocks in the
//! [`crate::api`] module.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use chrono::NaiveDate;
use futures_util::StreamExt;
use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tokio::io::AsyncWriteExt;

use crate::constants::{
    self, API_BASE_URL, COOKIE_BOOTSTRAP_URL, DEFAULT_TIMEOUT_SECS, DOWNLOAD_TIMEOUT_SECS,
};
use crate::cookies::{self, StoredCookie};
use crate::error::{NseError, Result};
use crate::throttle::Throttle;
use crate::util;

// ---------------------------------------------------------------------------
// Transport flavor
// ---------------------------------------------------------------------------

/// HTTP transport flavor.
///
/// [`Http1`](Transport::Http1) uses short-lived HTTP/1.1 connections;
/// [`Http2`](Transport::Http2) negotiates a persistent multiplexed HTTP/2
/// session via ALPN. The two flavors end up with different server-side
/// sessions, so the persisted cookie file is namespaced per flavor —
/// switching flavors between runs re-bootstraps instead of replaying the
/// other flavor's jar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transport {
    #[default]
    Http1,
    Http2,
}

impl Transport {
    /// The cookie file name for this flavor.
    pub fn cookie_file_name(self) -> &'static str {
        match self {
            Self::Http1 => "nse_cookies_http1.json",
            Self::Http2 => "nse_cookies_http2.json",
        }
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Builder for [`NseClient`].
///
/// ```no_run
/// use nse_market_rs::client::{NseClient, Transport};
///
/// # #[tokio::main]
/// # async fn main() -> nse_market_rs::Result<()> {
/// let client = NseClient::builder("./downloads")
///     .transport(Transport::Http2)
///     .timeout(std::time::Duration::from_secs(10))
///     .build()
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct NseClientBuilder {
    download_folder: PathBuf,
    transport: Transport,
    timeout: Duration,
    throttle: Option<Arc<Throttle>>,
    bhavcopy_cutover: NaiveDate,
    api_base: String,
}

impl NseClientBuilder {
    fn new(download_folder: impl Into<PathBuf>) -> Self {
        Self {
            download_folder: download_folder.into(),
            transport: Transport::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            throttle: None,
            bhavcopy_cutover: constants::default_bhavcopy_cutover(),
            api_base: API_BASE_URL.to_owned(),
        }
    }

    /// Select the HTTP transport flavor.
    pub fn transport(mut self, transport: Transport) -> Self {
        self.transport = transport;
        self
    }

    /// Network timeout for JSON API calls.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Share a [`Throttle`] across clients so they count against one rate
    /// ceiling. Each client otherwise gets its own default throttle.
    pub fn throttle(mut self, throttle: Arc<Throttle>) -> Self {
        self.throttle = Some(throttle);
        self
    }

    /// Override the bhavcopy URL-format migration date (see
    /// [`constants::default_bhavcopy_cutover`]).
    pub fn bhavcopy_cutover(mut self, date: NaiveDate) -> Self {
        self.bhavcopy_cutover = date;
        self
    }

    /// Override the JSON API base URL (defaults to
    /// [`constants::API_BASE_URL`]). Useful for routing through a proxy or a
    /// local test server.
    pub fn api_base_url(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into().trim_end_matches('/').to_owned();
        self
    }

    /// Validate the download folder, build the HTTP client, and acquire a
    /// cookie session (reusing the persisted jar if still valid).
    pub async fn build(self) -> Result<NseClient> {
        let dir = util::ensure_folder(&self.download_folder)?;
        let cookie_path = dir.join(self.transport.cookie_file_name());

        let jar = Arc::new(reqwest::cookie::Jar::default());

        let mut builder = reqwest::Client::builder()
            .default_headers(default_headers())
            .cookie_provider(jar.clone());

        builder = match self.transport {
            Transport::Http1 => builder.http1_only(),
            // Cleartext connections still fall back to HTTP/1.1; h2 is
            // negotiated via ALPN on TLS connections.
            Transport::Http2 => builder.http2_adaptive_window(true),
        };

        let http = builder.build().map_err(NseError::Http)?;

        let client = NseClient {
            http,
            jar,
            dir,
            cookie_path,
            timeout: self.timeout,
            throttle: self.throttle.unwrap_or_default(),
            bhavcopy_cutover: self.bhavcopy_cutover,
            api_base: self.api_base,
            session: tokio::sync::Mutex::new(Vec::new()),
        };

        client.restore_or_bootstrap().await?;

        Ok(client)
    }
}

/// Default headers applied to every request. NSE rejects requests that do
/// not look like they come from a browser.
fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::USER_AGENT,
        HeaderValue::from_static(constants::USER_AGENT),
    );
    headers.insert(header::ACCEPT, HeaderValue::from_static("*/*"));
    headers.insert(
        header::ACCEPT_LANGUAGE,
        HeaderValue::from_static("en-US,en;q=0.5"),
    );
    headers.insert(
        header::REFERER,
        HeaderValue::from_static(constants::REFERER),
    );
    headers
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Core HTTP client for the NSE public web API.
///
/// One `NseClient` owns one cookie session and one download folder. Calls
/// are sequential request/response round trips; the shared [`Throttle`]
/// delays callers that exceed the rate ceiling.
///
/// # Example
///
/// ```no_run
/// use nse_market_rs::client::NseClient;
///
/// # #[tokio::main]
/// # async fn main() -> nse_market_rs::Result<()> {
/// let client = NseClient::new("./downloads").await?;
/// let status = client.market_status().await?;
/// client.close();
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct NseClient {
    http: reqwest::Client,
    /// The live cookie jar registered as the HTTP client's provider.
    jar: Arc<reqwest::cookie::Jar>,
    /// Download folder; also holds the cookie and expiry-cache files.
    dir: PathBuf,
    cookie_path: PathBuf,
    timeout: Duration,
    throttle: Arc<Throttle>,
    pub(crate) bhavcopy_cutover: NaiveDate,
    /// Base URL for JSON API requests (defaults to [`API_BASE_URL`]).
    api_base: String,
    /// The active cookie jar as persisted, used for expiry detection.
    /// Empty only transiently during bootstrap.
    session: tokio::sync::Mutex<Vec<StoredCookie>>,
}

impl NseClient {
    /// Create a client with default transport (HTTP/1.1), timeout, and
    /// throttle. The folder is created if missing.
    pub async fn new(download_folder: impl Into<PathBuf>) -> Result<Self> {
        Self::builder(download_folder).build().await
    }

    /// Start configuring a client.
    pub fn builder(download_folder: impl Into<PathBuf>) -> NseClientBuilder {
        NseClientBuilder::new(download_folder)
    }

    /// The download folder.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Base URL for JSON API requests.
    pub(crate) fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Tear down the session: the persisted cookie file is deleted and the
    /// connection pool dropped. Consumes the client, so no further requests
    /// are possible.
    pub fn close(self) {
        cookies::delete(&self.cookie_path);
    }

    // -----------------------------------------------------------------------
    // Cookie lifecycle
    // -----------------------------------------------------------------------

    /// Load the persisted jar if present and unexpired, otherwise acquire
    /// fresh cookies from the exchange.
    async fn restore_or_bootstrap(&self) -> Result<()> {
        if let Some(stored) = cookies::load(&self.cookie_path) {
            if !cookies::is_expired(&stored) {
                tracing::debug!(path = %self.cookie_path.display(), "reusing persisted cookies");

                let url: reqwest::Url =
                    COOKIE_BOOTSTRAP_URL.parse().expect("valid constant url");
                for c in &stored {
                    self.jar.add_cookie_str(&c.to_cookie_str(), &url);
                }

                *self.session.lock().await = stored;
                return Ok(());
            }
            tracing::debug!("persisted cookies expired");
        }

        self.bootstrap().await
    }

    /// Fetch the landing page, harvest its cookies, persist them, and make
    /// them the active session.
    async fn bootstrap(&self) -> Result<()> {
        tracing::info!(url = COOKIE_BOOTSTRAP_URL, "acquiring session cookies");

        let resp = self.raw_get(COOKIE_BOOTSTRAP_URL, &[], self.timeout).await?;

        let harvested: Vec<StoredCookie> = resp
            .cookies()
            .map(|c| StoredCookie {
                name: c.name().to_owned(),
                value: c.value().to_owned(),
                domain: c.domain().unwrap_or(".nseindia.com").to_owned(),
                path: c.path().unwrap_or("/").to_owned(),
                expires: c.expires().and_then(|t| {
                    t.duration_since(std::time::UNIX_EPOCH)
                        .ok()
                        .map(|d| d.as_secs() as i64)
                }),
            })
            .collect();

        if let Err(e) = cookies::save(&self.cookie_path, &harvested) {
            tracing::warn!(error = %e, "failed to persist cookie file");
        }

        *self.session.lock().await = harvested;
        Ok(())
    }

    /// Re-bootstrap if the active jar has an expired cookie. The response
    /// jar on the HTTP client replaces stale cookies automatically.
    async fn renew_if_expired(&self) -> Result<()> {
        let expired = cookies::is_expired(&*self.session.lock().await);
        if expired {
            tracing::debug!("session cookies expired, renewing");
            self.bootstrap().await?;
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // HTTP primitives
    // -----------------------------------------------------------------------

    /// Throttled GET returning the raw response; non-2xx becomes
    /// [`NseError::Status`], a timeout becomes [`NseError::Timeout`].
    async fn raw_get(
        &self,
        url: &str,
        params: &[(&str, String)],
        timeout: Duration,
    ) -> Result<reqwest::Response> {
        self.throttle.wait().await;
        tracing::debug!(%url, "GET");

        let resp = self
            .http
            .get(url)
            .query(params)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    NseError::Timeout { url: url.to_owned() }
                } else {
                    NseError::Http(e)
                }
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(NseError::Status {
                url: url.to_owned(),
                status,
            });
        }

        Ok(resp)
    }

    /// Perform a GET request and deserialize the JSON response.
    ///
    /// Uses `bytes()` + `serde_json::from_slice()` to skip the UTF-8
    /// validation that `text()` + `from_str()` would incur.
    pub(crate) async fn get_json<R: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<R> {
        self.renew_if_expired().await?;

        let resp = self.raw_get(url, params, self.timeout).await?;
        let bytes = resp.bytes().await.map_err(NseError::Http)?;

        serde_json::from_slice(&bytes).map_err(NseError::Json)
    }

    /// Perform a GET request and return the body as text (CSV endpoints).
    pub(crate) async fn get_text(&self, url: &str) -> Result<String> {
        self.renew_if_expired().await?;

        let resp = self.raw_get(url, &[], self.timeout).await?;
        resp.text().await.map_err(NseError::Http)
    }

    /// Download `url` into `folder`, streaming the body to disk in chunks.
    ///
    /// The file name is the URL's last path segment. Fails with
    /// [`NseError::ReportUnavailable`] when the exchange serves its HTML
    /// "not found" page (which it does with a 200 status for unpublished
    /// reports), and with [`NseError::DownloadFailed`] when the resulting
    /// file is missing or smaller than `min_size` bytes. No partial file is
    /// left behind on either failure.
    pub(crate) async fn download(
        &self,
        url: &str,
        folder: &Path,
        min_size: u64,
    ) -> Result<PathBuf> {
        self.renew_if_expired().await?;

        let fname = util::file_name_from_url(url)?;
        let dest = folder.join(&fname);

        let resp = self
            .raw_get(url, &[], Duration::from_secs(DOWNLOAD_TIMEOUT_SECS))
            .await?;

        let content_type = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();

        if content_type.contains("text/html") {
            return Err(NseError::ReportUnavailable(fname));
        }

        // Stream to disk; any mid-stream failure removes the partial file
        // before surfacing, so callers never see a truncated report.
        let write_result: Result<()> = async {
            let mut file = tokio::fs::File::create(&dest).await?;
            let mut stream = resp.bytes_stream();

            while let Some(chunk) = stream.next().await {
                let chunk: Bytes = chunk.map_err(NseError::Http)?;
                file.write_all(&chunk).await?;
            }
            file.flush().await?;
            Ok(())
        }
        .await;

        if let Err(e) = write_result {
            let _ = tokio::fs::remove_file(&dest).await;
            return Err(e);
        }

        let plausible = tokio::fs::metadata(&dest)
            .await
            .map(|m| m.len() >= min_size)
            .unwrap_or(false);

        if !plausible {
            let _ = tokio::fs::remove_file(&dest).await;
            return Err(NseError::DownloadFailed(dest));
        }

        tracing::debug!(dest = %dest.display(), "downloaded");
        Ok(dest)
    }
}
