//! Cancellable logical debounce timer.
//!
//! The timer never sleeps. It stores one deadline and reports expiry when the
//! host polls it with the current time, which keeps firing inside the
//! single-threaded event flow.

use std::time::Duration;

/// Single-slot debounce timer.
///
/// # Invariants
/// - At most one deadline is armed at a time.
/// - `arm` replaces any earlier deadline (reset semantics).
/// - `fire_if_due` disarms on expiry, so each armed period fires at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebounceTimer {
    delay_ms: i64,
    deadline_ms: Option<i64>,
}

impl DebounceTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay_ms: i64::try_from(delay.as_millis()).unwrap_or(i64::MAX),
            deadline_ms: None,
        }
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(u64::try_from(self.delay_ms).unwrap_or(0))
    }

    /// Arms (or re-arms) the timer relative to `now_ms`.
    pub fn arm(&mut self, now_ms: i64) {
        self.deadline_ms = Some(now_ms.saturating_add(self.delay_ms));
    }

    /// Disarms the timer. Returns whether a deadline was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline_ms.take().is_some()
    }

    pub fn is_armed(&self) -> bool {
        self.deadline_ms.is_some()
    }

    pub fn deadline_ms(&self) -> Option<i64> {
        self.deadline_ms
    }

    /// Returns `true` exactly once when the armed deadline has passed.
    pub fn fire_if_due(&mut self, now_ms: i64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}
