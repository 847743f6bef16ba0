//! Persisted cookie jar handling.
//!
//! NSE gates its API behind anti-bot session cookies handed out on the
//! regular website. The client harvests them once, persists them to a JSON
//! file in the download folder, and reuses them across runs until they
//! expire.
//!
//! Cookie files are namespaced by [`Transport`](crate::client::Transport)
//! flavor (`nse_cookies_http1.json` vs `nse_cookies_http2.json`). The two
//! flavors negotiate different sessions with the exchange, and keeping the
//! files separate means switching flavors between runs re-bootstraps instead
//! of replaying the wrong jar.

use std::fs;
use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// One cookie as persisted to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCookie {
    pub name: String,
    pub value: String,
    pub domain: String,
    #[serde(default = "root_path")]
    pub path: String,
    /// Unix expiry timestamp in seconds. Session cookies carry no expiry
    /// and never count as expired.
    #[serde(default)]
    pub expires: Option<i64>,
}

fn root_path() -> String {
    "/".to_owned()
}

impl StoredCookie {
    /// True if the cookie's expiry timestamp is in the past.
    pub fn is_expired(&self, now_unix: i64) -> bool {
        matches!(self.expires, Some(t) if t < now_unix)
    }

    /// Render as a `Set-Cookie` style string suitable for replaying into a
    /// [`reqwest::cookie::Jar`].
    pub fn to_cookie_str(&self) -> String {
        format!(
            "{}={}; Domain={}; Path={}",
            self.name, self.value, self.domain, self.path
        )
    }
}

/// Load a persisted jar from `path`.
///
/// A missing, unreadable, or corrupt file is treated as absent — the caller
/// re-bootstraps rather than failing.
pub fn load(path: &Path) -> Option<Vec<StoredCookie>> {
    let bytes = fs::read(path).ok()?;

    match serde_json::from_slice(&bytes) {
        Ok(cookies) => Some(cookies),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "discarding corrupt cookie file");
            None
        }
    }
}

/// Serialize `cookies` to `path`, overwriting any existing file.
pub fn save(path: &Path, cookies: &[StoredCookie]) -> std::io::Result<()> {
    let json = serde_json::to_vec(cookies).expect("cookie serialization is infallible");
    fs::write(path, json)
}

/// True iff any cookie in the jar is past its expiry relative to now.
///
/// An empty jar is not expired; it is simply absent, which the session
/// manager handles separately.
pub fn is_expired(cookies: &[StoredCookie]) -> bool {
    let now = Utc::now().timestamp();
    cookies.iter().any(|c| c.is_expired(now))
}

/// Remove the cookie file if present. A missing file is not an error.
pub fn delete(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        if e.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!(path = %path.display(), error = %e, "failed to remove cookie file");
        }
    }
}
