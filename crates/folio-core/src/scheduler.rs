//! Frame gating for repaint-driven loops.
//!
//! The host calls [`FrameScheduler::tick`] from every repaint callback with a
//! monotonically increasing timestamp in milliseconds and renders only when
//! the scheduler answers [`TickOutcome::Render`]. The host keeps
//! rescheduling for every other outcome except [`TickOutcome::Stopped`].

use crate::error::FolioError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameCap {
    Uncapped,
    Fps(f64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Render,
    /// Too soon since the last rendered frame under the rate cap.
    Throttled,
    /// The page is hidden; nothing is drawn and no backlog is kept.
    Hidden,
    /// `stop()` was called or `start()` never was; the host should stop
    /// requesting frames.
    Stopped,
}

#[derive(Clone, Debug)]
pub struct FrameScheduler {
    interval_ms: Option<f64>,
    last_time: f64,
    running: bool,
    visible: bool,
}

impl FrameScheduler {
    pub fn new(cap: FrameCap) -> Result<Self, FolioError> {
        let interval_ms = match cap {
            FrameCap::Uncapped => None,
            FrameCap::Fps(fps) if fps.is_finite() && fps > 0.0 => Some(1000.0 / fps),
            FrameCap::Fps(fps) => return Err(FolioError::FpsCap(fps)),
        };
        Ok(Self {
            interval_ms,
            last_time: 0.0,
            running: false,
            visible: true,
        })
    }

    pub fn uncapped() -> Self {
        Self {
            interval_ms: None,
            last_time: 0.0,
            running: false,
            visible: true,
        }
    }

    #[inline]
    pub fn interval_ms(&self) -> Option<f64> {
        self.interval_ms
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn tick(&mut self, now_ms: f64) -> TickOutcome {
        if !self.running {
            return TickOutcome::Stopped;
        }
        if !self.visible {
            return TickOutcome::Hidden;
        }
        let Some(interval) = self.interval_ms else {
            return TickOutcome::Render;
        };

        let delta = now_ms - self.last_time;
        if delta <= interval {
            return TickOutcome::Throttled;
        }
        // `last_time` stays on the ideal interval grid, not at `now`.
        self.last_time = now_ms - delta.rem_euclid(interval);
        TickOutcome::Render
    }
}
