//! Request throttling.
//!
//! NSE rejects clients that exceed roughly 3 requests per second, so every
//! outbound call passes through a [`Throttle`] first. The throttle is an
//! explicit component rather than process-global state: construct one, wrap
//! it in an [`Arc`], and share it across however many clients should count
//! against the same ceiling.

use std::collections::VecDeque;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::constants::REQUESTS_PER_SECOND;

/// A sliding-window rate limiter.
///
/// [`Throttle::wait`] suspends the caller until issuing one more request
/// would keep the count within the configured per-second ceiling. It never
/// fails — it only delays.
#[derive(Debug)]
pub struct Throttle {
    max_per_second: u32,
    /// Timestamps of requests issued within the last second, oldest first.
    window: Mutex<VecDeque<Instant>>,
}

impl Throttle {
    /// Create a throttle with the given requests-per-second ceiling.
    ///
    /// # Panics
    ///
    /// Panics if `max_per_second` is zero.
    pub fn new(max_per_second: u32) -> Self {
        assert!(max_per_second > 0, "rate ceiling must be positive");
        Self {
            max_per_second,
            window: Mutex::new(VecDeque::with_capacity(max_per_second as usize)),
        }
    }

    /// The configured requests-per-second ceiling.
    pub fn max_per_second(&self) -> u32 {
        self.max_per_second
    }

    /// Wait until a request slot is available, then claim it.
    ///
    /// The mutex is held across the sleep so that concurrent callers queue
    /// up rather than racing for the same slot.
    pub async fn wait(&self) {
        let mut window = self.window.lock().await;
        let now = Instant::now();

        while let Some(&oldest) = window.front() {
            if now.duration_since(oldest) >= Duration::from_secs(1) {
                window.pop_front();
            } else {
                break;
            }
        }

        if window.len() >= self.max_per_second as usize {
            let oldest = *window.front().expect("window is non-empty");
            let wake = oldest + Duration::from_secs(1);
            tracing::trace!(?wake, "throttle limit reached, sleeping");
            tokio::time::sleep_until(wake).await;
            window.pop_front();
        }

        window.push_back(Instant::now());
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(REQUESTS_PER_SECOND)
    }
}
