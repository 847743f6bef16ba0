//! Derived option-chain statistics: max pain and the compiled chain
//! summary.
//!
//! These are pure functions over the raw chain payload; fetching lives in
//! [`crate::api::option_chain`].

use chrono::NaiveDate;

use crate::error::{NseError, Result};
use crate::types::option_chain::{
    ChainSummary, OptionChainResponse, OptionContractRow, SideStats, StrikeEntry,
};

/// Expiry date formatting used throughout the chain payload.
pub(crate) fn format_expiry(expiry: NaiveDate) -> String {
    expiry.format("%d-%b-%Y").to_string()
}

/// Returns the strike price with maximum pain for the given expiry.
///
/// Max pain is the settlement price at which the aggregate loss across
/// option writers is smallest. Computed with prefix sums over the
/// ascending-strike sequence, O(n log n) for the sort and O(n) after:
///
/// - call writer loss at settlement `s` = `s·ΣC(k≤s) − ΣC·k(k≤s)`
/// - put  writer loss at settlement `s` = `ΣP·k(k>s) − s·ΣP(k>s)`
///
/// Ties are broken by the first occurrence in the order rows appear in the
/// feed.
pub fn max_pain(rows: &[OptionContractRow], expiry: NaiveDate) -> Result<f64> {
    let expiry_str = format_expiry(expiry);

    // (strike, call OI, put OI) in feed order; an absent side counts as zero.
    let filtered: Vec<(f64, f64, f64)> = rows
        .iter()
        .filter(|r| r.expiry_date == expiry_str)
        .map(|r| {
            (
                r.strike_price,
                r.ce.as_ref().map_or(0.0, |c| c.open_interest),
                r.pe.as_ref().map_or(0.0, |p| p.open_interest),
            )
        })
        .collect();

    if filtered.is_empty() {
        return Err(NseError::NoData(format!(
            "no option contracts for expiry {expiry_str}"
        )));
    }

    let mut sorted = filtered.clone();
    sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

    let n = sorted.len();
    let mut call_oi = vec![0.0; n];
    let mut call_weighted = vec![0.0; n];
    let mut put_oi = vec![0.0; n];
    let mut put_weighted = vec![0.0; n];

    let mut c = 0.0;
    let mut cw = 0.0;
    let mut p = 0.0;
    let mut pw = 0.0;

    for (i, &(strike, coi, poi)) in sorted.iter().enumerate() {
        c += coi;
        cw += coi * strike;
        p += poi;
        pw += poi * strike;
        call_oi[i] = c;
        call_weighted[i] = cw;
        put_oi[i] = p;
        put_weighted[i] = pw;
    }

    let (put_total, put_weighted_total) = (p, pw);

    let pain_at = |i: usize| -> f64 {
        let s = sorted[i].0;
        let call_loss = s * call_oi[i] - call_weighted[i];
        let put_loss = (put_weighted_total - put_weighted[i]) - s * (put_total - put_oi[i]);
        call_loss + put_loss
    };

    let mut best_strike = f64::NAN;
    let mut best_pain = f64::INFINITY;

    for &(strike, ..) in &filtered {
        // Index of the last sorted row at this strike, so the prefix sums
        // cover every contract with k <= strike.
        let i = sorted.partition_point(|&(k, ..)| k <= strike) - 1;
        let pain = pain_at(i);

        if pain < best_pain {
            best_pain = pain;
            best_strike = strike;
        }
    }

    Ok(best_strike)
}

/// Compile the raw option chain into per-strike statistics and aggregates
/// for one expiry.
///
/// Rows missing one side get all-zero stats for that side. The per-strike
/// put-call ratio is `None` whenever either side's OI is zero; the
/// aggregate ratio is `None` when total call OI is zero.
pub fn compile_chain(data: &OptionChainResponse, expiry: NaiveDate) -> Result<ChainSummary> {
    let expiry_str = format_expiry(expiry);

    let timestamp = data
        .records
        .timestamp
        .clone()
        .ok_or_else(|| NseError::NoData("option chain payload has no timestamp".into()))?;

    let underlying = data
        .records
        .underlying_value
        .ok_or_else(|| NseError::NoData("option chain payload has no underlying value".into()))?;

    // Strike spacing comes from the exchange's pre-filtered near-expiry
    // view: the gap between its first two strikes.
    let atm = match data.filtered.data.as_slice() {
        [first, second, ..] => {
            let spacing = (first.strike_price - second.strike_price).abs();
            spacing * (underlying / spacing).round()
        }
        _ => {
            return Err(NseError::NoData(
                "filtered chain has fewer than two strikes".into(),
            ));
        }
    };

    let mut chain: Vec<StrikeEntry> = Vec::new();
    let mut coi_total = 0.0;
    let mut poi_total = 0.0;
    let mut max_coi = 0.0;
    let mut max_poi = 0.0;
    let mut max_coi_strike = 0.0;
    let mut max_poi_strike = 0.0;

    for row in &data.records.data {
        if row.expiry_date != expiry_str {
            continue;
        }

        let ce: SideStats = row.ce.as_ref().map(Into::into).unwrap_or_default();
        let pe: SideStats = row.pe.as_ref().map(Into::into).unwrap_or_default();

        coi_total += ce.oi;
        poi_total += pe.oi;

        // Strict comparison: the first strike seen wins ties.
        if ce.oi > max_coi {
            max_coi = ce.oi;
            max_coi_strike = row.strike_price;
        }
        if pe.oi > max_poi {
            max_poi = pe.oi;
            max_poi_strike = row.strike_price;
        }

        let pcr = if pe.oi == 0.0 || ce.oi == 0.0 {
            None
        } else {
            Some(round2(pe.oi / ce.oi))
        };

        chain.push(StrikeEntry {
            strike: row.strike_price,
            ce,
            pe,
            pcr,
        });
    }

    if chain.is_empty() {
        return Err(NseError::NoData(format!(
            "no option contracts for expiry {expiry_str}"
        )));
    }

    let maxpain = max_pain(&data.records.data, expiry)?;

    chain.sort_by(|a, b| a.strike.total_cmp(&b.strike));

    let pcr = (coi_total != 0.0).then(|| round2(poi_total / coi_total));

    Ok(ChainSummary {
        expiry: expiry_str,
        timestamp,
        underlying,
        atm,
        maxpain,
        max_coi_strike,
        max_poi_strike,
        coi_total,
        poi_total,
        pcr,
        chain,
    })
}

/// Filter rows whose percent change is above zero, sorted descending.
/// `count` truncates the result.
pub fn gainers<T, F>(rows: &[T], p_change: F, count: Option<usize>) -> Vec<&T>
where
    F: Fn(&T) -> f64,
{
    ranked(rows, &p_change, count, |pc| pc > 0.0, true)
}

/// Filter rows whose percent change is below zero, sorted ascending (worst
/// first). `count` truncates the result.
pub fn losers<T, F>(rows: &[T], p_change: F, count: Option<usize>) -> Vec<&T>
where
    F: Fn(&T) -> f64,
{
    ranked(rows, &p_change, count, |pc| pc < 0.0, false)
}

fn ranked<'a, T>(
    rows: &'a [T],
    p_change: &dyn Fn(&T) -> f64,
    count: Option<usize>,
    keep: fn(f64) -> bool,
    descending: bool,
) -> Vec<&'a T> {
    let mut out: Vec<&T> = rows.iter().filter(|r| keep(p_change(r))).collect();

    out.sort_by(|a, b| {
        let ord = p_change(a).total_cmp(&p_change(b));
        if descending { ord.reverse() } else { ord }
    });

    if let Some(n) = count {
        out.truncate(n);
    }

    out
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
