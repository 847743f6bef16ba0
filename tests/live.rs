//! Integration tests against the live NSE endpoints.
//!
//! # Running
//!
//! These tests hit the real exchange and are skipped unless explicitly
//! enabled:
//!
//! ```sh
//! NSE_LIVE=1 cargo test --test live -- --test-threads=1 --nocapture
//! ```
//!
//! Run single-threaded: all tests share the exchange's per-IP rate budget.
//!
//! # What is tested
//!
//! - **Session** — cookie bootstrap and persisted reuse
//! - **Market** — status, holidays
//! - **Lists** — indices, stocks by index
//! - **Option chain** — raw chain with resolved expiry, contract info cache
//! - **Reports** — FnO market lots CSV

use tempfile::TempDir;

use nse_market_rs::NseClient;
use nse_market_rs::client::Transport;
use nse_market_rs::types::market::HolidayKind;

/// Helper: create a live client in a fresh folder, or skip the test.
async fn live_client() -> Option<(NseClient, TempDir)> {
    if std::env::var("NSE_LIVE").is_err() {
        eprintln!("⏭  Skipped (NSE_LIVE not set)");
        return None;
    }

    let dir = TempDir::new().expect("tempdir");
    let client = NseClient::new(dir.path()).await.expect("client build");
    Some((client, dir))
}

macro_rules! require_client {
    () => {
        match live_client().await {
            Some(pair) => pair,
            None => return,
        }
    };
}

#[tokio::test]
async fn test_market_status() {
    let (client, _dir) = require_client!();

    let status = client.market_status().await.expect("market_status failed");
    assert!(!status.is_empty());
    println!("✔ Market status: {} segments", status.len());
}

#[tokio::test]
async fn test_holidays() {
    let (client, _dir) = require_client!();

    let holidays = client
        .holidays(HolidayKind::Trading)
        .await
        .expect("holidays failed");
    assert!(holidays.contains_key("CM"), "capital market calendar missing");
}

#[tokio::test]
async fn test_list_indices() {
    let (client, _dir) = require_client!();

    let indices = client.list_indices().await.expect("list_indices failed");
    assert!(!indices.data.is_empty());
}

#[tokio::test]
async fn test_list_equity_stocks_by_index() {
    let (client, _dir) = require_client!();

    let list = client
        .list_equity_stocks_by_index("NIFTY 50")
        .await
        .expect("list failed");
    assert!(!list.data.is_empty());

    let top = client.gainers(&list, Some(3));
    println!("✔ Top gainers: {:?}", top.iter().map(|r| &r.symbol).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_cookies_persist_and_reload() {
    let (client, dir) = require_client!();

    let cookie_path = dir.path().join(Transport::Http1.cookie_file_name());
    assert!(cookie_path.exists(), "bootstrap should persist cookies");

    // A second client in the same folder reuses the persisted jar.
    let second = NseClient::new(dir.path()).await.expect("second client");
    second.market_status().await.expect("request on reused jar");

    client.close();
    assert!(!cookie_path.exists(), "close should delete the cookie file");
}

#[tokio::test]
async fn test_option_chain_with_resolved_expiry() {
    let (client, dir) = require_client!();

    let chain = client
        .option_chain("nifty", None)
        .await
        .expect("option_chain failed");
    assert!(!chain.records.data.is_empty());

    // Resolution should have written the expiry cache.
    assert!(dir.path().join("opt-expiry.json").exists());
}

#[tokio::test]
async fn test_fno_lots() {
    let (client, _dir) = require_client!();

    let lots = client.fno_lots().await.expect("fno_lots failed");
    assert!(lots.contains_key("NIFTY"), "index lots missing");
}
