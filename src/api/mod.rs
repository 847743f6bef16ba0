//! Endpoint implementations for the NSE public web API.
//!
//! Each sub-module adds high-level `async` methods to
//! [`NseClient`](crate::client::NseClient) via `impl` blocks. All methods
//! handle URL/parameter formatting, cookie renewal, throttling, and error
//! mapping automatically.
//!
//! ## Usage
//!
//! ```no_run
//! use nse_market_rs::NseClient;
//!
//! # #[tokio::main]
//! # async fn main() -> nse_market_rs::Result<()> {
//! let client = NseClient::new("./downloads").await?;
//! let status = client.market_status().await?;
//! let indices = client.list_indices().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |---|---|
//! | [`market`] | Market status, holidays, circulars, advance/decline |
//! | [`corporate`] | Corporate actions, announcements, board meetings |
//! | [`quotes`] | Equity/derivative quotes, meta info |
//! | [`lists`] | Index/ETF/SME/SGB/IPO listings, gainers & losers |
//! | [`deals`] | Block and bulk deal reports |
//! | [`reports`] | Bhavcopy and other downloadable EOD reports |
//! | [`option_chain`] | Option chain, expiry resolution, derived stats |
//! | [`historical`] | Equity, VIX, FnO, and index time series |

pub mod corporate;
pub mod deals;
pub mod historical;
pub mod lists;
pub mod market;
pub mod option_chain;
pub mod quotes;
pub mod reports;
