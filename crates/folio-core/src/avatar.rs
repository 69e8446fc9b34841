//! Pointer-reactive avatar: tilt, magnetic glow and a small particle orbit.
//!
//! Pointer events only move targets; every rendered frame smooths the
//! current pose toward them, writes the CSS transform and glow, then draws
//! the orbit.

use crate::constants::*;
use crate::particles::{orbit_count_for_width, spawn_orbit, OrbitParticle};
use crate::render::{draw_orbit, Rgba, Surface};
use crate::scheduler::{FrameScheduler, TickOutcome};
use crate::smoothing::{GlowState, LerpFactor, Smoothed, TiltPose};
use crate::theme::ThemeMode;
use glam::Vec2;
use rand::rngs::StdRng;

const GLOW_TINT: Rgba = Rgba {
    r: 59,
    g: 130,
    b: 246,
    a: 0.5,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AvatarConfig {
    pub lerp: LerpFactor,
    pub tilt_max_deg: f32,
    pub lift_scale: f32,
    /// Side of the square canvas in CSS px.
    pub canvas_px: f64,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            lerp: LerpFactor::default(),
            tilt_max_deg: TILT_MAX_DEG,
            lift_scale: LIFT_SCALE,
            canvas_px: AVATAR_CANVAS_PX,
        }
    }
}

/// Client-space bounds of the tracked container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ContainerRect {
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    #[inline]
    fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    pub active: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Engagement {
    Idle,
    Engaged,
}

/// Sink for the per-frame CSS the avatar produces.
pub trait AvatarStyle {
    fn set_transform(&mut self, transform: &str);
    fn set_glow(&mut self, background: &str, opacity: f32);
}

pub struct AvatarEffect {
    config: AvatarConfig,
    pointer: PointerState,
    pose: Smoothed<TiltPose>,
    glow: Smoothed<GlowState>,
    particles: Vec<OrbitParticle>,
    time: f32,
    scheduler: FrameScheduler,
    rng: StdRng,
    inert: bool,
}

impl AvatarEffect {
    /// With `reduced_motion` set the effect is inert for its whole life: no
    /// particles, no loop, no style writes.
    pub fn new(
        config: AvatarConfig,
        viewport_width: f64,
        reduced_motion: bool,
        rng: StdRng,
    ) -> Self {
        let mut effect = Self {
            config,
            pointer: PointerState::default(),
            pose: Smoothed::new(TiltPose::rest(REST_SCALE)),
            glow: Smoothed::new(GlowState {
                position: Vec2::splat(GLOW_REST_PERCENT),
                opacity: 0.0,
            }),
            particles: Vec::new(),
            time: 0.0,
            scheduler: FrameScheduler::uncapped(),
            rng,
            inert: reduced_motion,
        };
        if reduced_motion {
            log::info!("[avatar] reduced motion requested; staying inert");
            return effect;
        }
        effect.resize(viewport_width);
        effect.scheduler.start();
        effect
    }

    #[inline]
    pub fn is_inert(&self) -> bool {
        self.inert
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn stop(&mut self) {
        self.scheduler.stop();
    }

    pub fn engagement(&self) -> Engagement {
        if self.pointer.active {
            Engagement::Engaged
        } else {
            Engagement::Idle
        }
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn pose(&self) -> &Smoothed<TiltPose> {
        &self.pose
    }

    pub fn glow(&self) -> &Smoothed<GlowState> {
        &self.glow
    }

    pub fn particles(&self) -> &[OrbitParticle] {
        &self.particles
    }

    pub fn canvas_extent(&self) -> Vec2 {
        Vec2::splat(self.config.canvas_px as f32)
    }

    pub fn pointer_enter(&mut self) {
        self.pointer.active = true;
        let lift = self.config.lift_scale;
        self.pose.update_target(|t| t.scale = lift);
        self.glow.update_target(|t| t.opacity = 1.0);
    }

    /// Back to the neutral pose; the glow keeps its last position and fades.
    pub fn pointer_leave(&mut self) {
        self.pointer.active = false;
        self.pose.set_target(TiltPose::rest(REST_SCALE));
        self.glow.update_target(|t| t.opacity = 0.0);
    }

    /// `client` is the pointer in window coordinates, `rect` the container
    /// bounds sampled for this event.
    pub fn pointer_move(&mut self, client: Vec2, rect: ContainerRect) {
        self.pointer.position = client;
        if !self.pointer.active || rect.is_degenerate() {
            return;
        }
        let half = Vec2::new(rect.width, rect.height) * 0.5;
        let n = ((client - rect.center()) / half).clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
        let max = self.config.tilt_max_deg;
        // Vertical offset rotates around X, horizontal around Y.
        self.pose.update_target(|t| t.tilt = Vec2::new(-n.y * max, n.x * max));

        let local = client - Vec2::new(rect.left, rect.top);
        let percent = local / Vec2::new(rect.width, rect.height) * 100.0;
        self.glow.update_target(|t| t.position = percent);
    }

    /// Regenerates the orbit sized for the new viewport width.
    pub fn resize(&mut self, viewport_width: f64) {
        if self.inert {
            return;
        }
        let count = orbit_count_for_width(viewport_width);
        self.particles = spawn_orbit(&mut self.rng, count);
        log::debug!("[avatar] resize width={} orbit={}", viewport_width, count);
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.scheduler.set_visible(visible);
    }

    pub fn frame<S, St>(
        &mut self,
        now_ms: f64,
        theme: ThemeMode,
        surface: &mut S,
        style: &mut St,
    ) -> TickOutcome
    where
        S: Surface + ?Sized,
        St: AvatarStyle + ?Sized,
    {
        if self.inert {
            return TickOutcome::Stopped;
        }
        let outcome = self.scheduler.tick(now_ms);
        if outcome != TickOutcome::Render {
            return outcome;
        }

        self.time += BREATH_STEP;
        let pose = self.pose.step(self.config.lerp);
        let glow = self.glow.step(self.config.lerp);

        style.set_glow(&glow_background(glow.position), glow.opacity);
        let scale = pose.scale + self.time.sin() * BREATH_AMPLITUDE;
        style.set_transform(&wrapper_transform(pose.tilt, scale));

        let extent = self.canvas_extent();
        draw_orbit(surface, extent, extent * 0.5, &mut self.particles, theme);
        TickOutcome::Render
    }
}

pub fn glow_background(position: Vec2) -> String {
    format!(
        "radial-gradient(circle at {}% {}%, {} 0%, transparent 70%)",
        position.x, position.y, GLOW_TINT
    )
}

pub fn wrapper_transform(tilt: Vec2, scale: f32) -> String {
    format!(
        "perspective({}px) rotateX({}deg) rotateY({}deg) scale({})",
        PERSPECTIVE_PX, tilt.x, tilt.y, scale
    )
}
