//! Trailing-edge debounce driven by injected timestamps.
//!
//! Bursts of events collapse to a single firing once no event has arrived
//! for the quiet window. The host owns the timers and only asks
//! [`Debouncer::poll`] whether the window has elapsed.

use crate::constants::RESIZE_DEBOUNCE_MS;

#[derive(Clone, Debug)]
pub struct Debouncer {
    quiet_ms: f64,
    last_event: Option<f64>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(RESIZE_DEBOUNCE_MS)
    }
}

impl Debouncer {
    pub fn new(quiet_ms: u32) -> Self {
        Self {
            quiet_ms: quiet_ms as f64,
            last_event: None,
        }
    }

    #[inline]
    pub fn quiet_ms(&self) -> f64 {
        self.quiet_ms
    }

    /// Record an event; the quiet window restarts from `now_ms`.
    pub fn event(&mut self, now_ms: f64) {
        self.last_event = Some(now_ms);
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.last_event.is_some()
    }

    /// Time left before a pending burst may fire; `None` when idle.
    pub fn remaining_ms(&self, now_ms: f64) -> Option<f64> {
        self.last_event
            .map(|last| (last + self.quiet_ms - now_ms).max(0.0))
    }

    /// True exactly once per burst, on the first poll after the window.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.last_event {
            Some(last) if now_ms - last >= self.quiet_ms => {
                self.last_event = None;
                true
            }
            _ => false,
        }
    }
}
