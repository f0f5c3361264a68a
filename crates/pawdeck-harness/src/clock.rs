#![forbid(unsafe_code)]

//! Manual clock: time that only moves when a test says so.

use std::time::Duration;

use web_time::Instant;

/// A clock anchored at construction whose "now" advances only on request.
///
/// The session under test receives `now()` as its explicit time input, so
/// settle deadlines fire exactly when a script advances past them and never
/// because of wall-clock jitter.
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    elapsed_ms: u64,
}

impl ManualClock {
    /// Create a clock at zero elapsed time.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed_ms: 0,
        }
    }

    /// The current instant under this clock.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.origin + Duration::from_millis(self.elapsed_ms)
    }

    /// Milliseconds advanced since construction.
    #[inline]
    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Move time forward by `ms` milliseconds.
    pub fn advance_ms(&mut self, ms: u64) {
        self.elapsed_ms = self.elapsed_ms.saturating_add(ms);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}
