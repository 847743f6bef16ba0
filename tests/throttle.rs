//! Tests for the sliding-window rate limiter, using tokio's paused clock.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use nse_market_rs::Throttle;

#[tokio::test(start_paused = true)]
async fn burst_within_ceiling_does_not_wait() {
    let throttle = Throttle::new(3);
    let start = Instant::now();

    for _ in 0..3 {
        throttle.wait().await;
    }

    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn fourth_call_waits_for_the_window() {
    let throttle = Throttle::new(3);
    let start = Instant::now();

    for _ in 0..4 {
        throttle.wait().await;
    }

    // The fourth call must wait until the first slot ages out of the
    // one-second window.
    assert!(start.elapsed() >= Duration::from_secs(1));
    assert!(start.elapsed() < Duration::from_secs(2));
}

#[tokio::test(start_paused = true)]
async fn slots_free_up_after_the_window_passes() {
    let throttle = Throttle::new(2);

    throttle.wait().await;
    throttle.wait().await;

    tokio::time::advance(Duration::from_millis(1100)).await;

    let start = Instant::now();
    throttle.wait().await;
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn shared_throttle_counts_all_callers() {
    let throttle = Arc::new(Throttle::new(2));
    let start = Instant::now();

    // Two "clients" issuing alternately against one throttle: four calls
    // at a ceiling of 2/s need at least one full window of waiting.
    let a = throttle.clone();
    let b = throttle.clone();
    a.wait().await;
    b.wait().await;
    a.wait().await;
    b.wait().await;

    assert!(start.elapsed() >= Duration::from_secs(1));
}
