//! Ambient background field: drifting points at a capped frame rate.

use crate::constants::FIELD_FPS_CAP;
use crate::error::FolioError;
use crate::particles::{field_count_for_width, DriftField};
use crate::render::{draw_drift, Surface};
use crate::scheduler::{FrameCap, FrameScheduler, TickOutcome};
use crate::theme::ThemeMode;
use glam::Vec2;
use rand::rngs::StdRng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldConfig {
    pub fps_cap: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            fps_cap: FIELD_FPS_CAP,
        }
    }
}

impl FieldConfig {
    pub fn validate(&self) -> Result<(), FolioError> {
        FrameScheduler::new(FrameCap::Fps(self.fps_cap)).map(|_| ())
    }
}

pub struct FieldEffect {
    scheduler: FrameScheduler,
    field: DriftField,
    rng: StdRng,
    active: bool,
}

impl FieldEffect {
    /// Under `reduced_motion` the field is inactive for the session and its
    /// canvas should be hidden (see [`FieldEffect::canvas_hidden`]).
    pub fn new(
        config: FieldConfig,
        viewport: Vec2,
        reduced_motion: bool,
        rng: StdRng,
    ) -> Result<Self, FolioError> {
        let scheduler = FrameScheduler::new(FrameCap::Fps(config.fps_cap))?;
        let mut effect = Self {
            scheduler,
            field: DriftField::default(),
            rng,
            active: !reduced_motion,
        };
        effect.resize(viewport);
        if effect.active {
            effect.scheduler.start();
        } else {
            log::info!("[field] reduced motion requested; hiding canvas");
        }
        Ok(effect)
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn canvas_hidden(&self) -> bool {
        !self.active
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn stop(&mut self) {
        self.scheduler.stop();
    }

    pub fn field(&self) -> &DriftField {
        &self.field
    }

    /// Canvas size follows the viewport; the population is rebuilt, not rescaled.
    pub fn resize(&mut self, viewport: Vec2) {
        let count = field_count_for_width(viewport.x as f64);
        self.field = DriftField::spawn(&mut self.rng, viewport, count);
        log::debug!(
            "[field] resize {}x{} particles={}",
            viewport.x,
            viewport.y,
            count
        );
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.scheduler.set_visible(visible);
    }

    pub fn frame<S: Surface + ?Sized>(
        &mut self,
        now_ms: f64,
        theme: ThemeMode,
        surface: &mut S,
    ) -> TickOutcome {
        if !self.active {
            return TickOutcome::Stopped;
        }
        let outcome = self.scheduler.tick(now_ms);
        if outcome == TickOutcome::Render {
            self.field.integrate();
            draw_drift(surface, &self.field, theme);
        }
        outcome
    }
}
