//! # nse-market-rs
//!
//! A Rust client library for the NSE India public market-data endpoints:
//! market status, corporate filings, live stock lists, option chains with
//! derived statistics (max pain, PCR, ATM), downloadable bhavcopy reports,
//! and historical time series.
//!
//! The exchange gates its API behind anti-bot session cookies; the client
//! acquires them transparently, persists them next to your downloads, and
//! renews them when they expire. All outbound calls share a rate limiter
//! so the exchange's request ceiling is respected.
//!
//! ## Quick Start
//!
//! ```no_run
//! use nse_market_rs::NseClient;
//!
//! #[tokio::main]
//! async fn main() -> nse_market_rs::Result<()> {
//!     let client = NseClient::new("./downloads").await?;
//!
//!     let status = client.market_status().await?;
//!     println!("{} segments reported", status.len());
//!
//!     // Tear down explicitly to remove the persisted cookie file.
//!     client.close();
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod api;
pub mod archive;
pub mod client;
pub mod constants;
pub mod cookies;
pub mod error;
pub mod throttle;
pub mod types;
pub mod util;

/// Re-export the main client types at crate root for convenience.
pub use client::{NseClient, NseClientBuilder, Transport};
/// Re-export the error type and Result alias.
pub use error::{NseError, Result};
/// Re-export the rate limiter for cross-client sharing.
pub use throttle::Throttle;
