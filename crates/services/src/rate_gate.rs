use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, Utc};

/// Minimum spacing between successive question fetches, in milliseconds.
pub const FETCH_MIN_INTERVAL_MS: i64 = 1000;

/// Throttle on the question fetch: remembers when the last request was
/// (or will be) sent and tells callers how long to wait first.
///
/// A simple throttle, not a queue. Concurrent callers share only the single
/// remembered timestamp; overlapping requests are not merged. Callers pass
/// the current time in, so tests control time without a real clock.
#[derive(Debug)]
pub struct FetchRateGate {
    min_interval: chrono::Duration,
    last_send: Mutex<Option<DateTime<Utc>>>,
}

impl Default for FetchRateGate {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchRateGate {
    #[must_use]
    pub fn new() -> Self {
        Self::with_interval(chrono::Duration::milliseconds(FETCH_MIN_INTERVAL_MS))
    }

    #[must_use]
    pub fn with_interval(min_interval: chrono::Duration) -> Self {
        Self {
            min_interval,
            last_send: Mutex::new(None),
        }
    }

    /// Reserve the next send slot and return how long the caller must wait
    /// before actually sending.
    ///
    /// Zero on first use or once the interval has passed; otherwise the
    /// remaining delay. The reserved send time is recorded either way.
    pub fn reserve(&self, now: DateTime<Utc>) -> Duration {
        let mut last_send = self
            .last_send
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let wait = match *last_send {
            Some(prev) if now - prev < self.min_interval => self.min_interval - (now - prev),
            _ => chrono::Duration::zero(),
        };

        *last_send = Some(now + wait);
        wait.to_std().unwrap_or(Duration::ZERO)
    }
}
