//! Typed request/response records for the NSE API.
//!
//! One module per endpoint family. Upstream payloads are loosely shaped
//! JSON; every field the exchange omits conditionally is modeled as an
//! `Option` with `#[serde(default)]` so a missing key deserializes as
//! absent rather than failing. Fields a named operation depends on (for
//! example `expiryDates` for the option-chain expiry resolver) are checked
//! explicitly and fail loudly.

pub mod corporate;
pub mod deals;
pub mod historical;
pub mod lists;
pub mod market;
pub mod option_chain;
pub mod quotes;
