//! Particle populations for the avatar orbit and the ambient field.
//!
//! Populations are only ever replaced wholesale; there is no incremental
//! add/remove.

use crate::constants::*;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitParticle {
    pub radius: f32,
    pub angular_speed: f32,
    pub angle: f32,
    pub size: f32,
    pub base_opacity: f32,
}

impl OrbitParticle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            radius: ORBIT_RADIUS_MIN + rng.gen::<f32>() * ORBIT_RADIUS_SPAN,
            angular_speed: ORBIT_SPEED_MIN + rng.gen::<f32>() * ORBIT_SPEED_SPAN,
            angle: rng.gen::<f32>() * TAU,
            size: PARTICLE_SIZE_MIN + rng.gen::<f32>() * PARTICLE_SIZE_SPAN,
            base_opacity: ORBIT_OPACITY_MIN + rng.gen::<f32>() * ORBIT_OPACITY_SPAN,
        }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.angle = (self.angle + self.angular_speed).rem_euclid(TAU);
    }

    #[inline]
    pub fn position(&self, center: Vec2) -> Vec2 {
        center + Vec2::new(self.angle.cos(), self.angle.sin()) * self.radius
    }

    /// Pseudo-depth fade: dimmest at the top of the orbit, full strength at
    /// the bottom. Always within `[ORBIT_FADE_FLOOR * base, base]`.
    #[inline]
    pub fn opacity(&self) -> f32 {
        let fade = (self.angle.sin() + 1.0) * 0.5;
        self.base_opacity * (ORBIT_FADE_FLOOR + (1.0 - ORBIT_FADE_FLOOR) * fade)
    }
}

pub fn orbit_count_for_width(viewport_width: f64) -> usize {
    if viewport_width < ORBIT_BREAKPOINT_PX {
        ORBIT_COUNT_COMPACT
    } else {
        ORBIT_COUNT_FULL
    }
}

pub fn spawn_orbit<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<OrbitParticle> {
    (0..count).map(|_| OrbitParticle::random(rng)).collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriftParticle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
}

impl DriftParticle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, extent: Vec2) -> Self {
        Self {
            position: Vec2::new(rng.gen::<f32>() * extent.x, rng.gen::<f32>() * extent.y),
            velocity: Vec2::new(
                (rng.gen::<f32>() - 0.5) * 2.0 * DRIFT_SPEED_MAX,
                (rng.gen::<f32>() - 0.5) * 2.0 * DRIFT_SPEED_MAX,
            ),
            size: PARTICLE_SIZE_MIN + rng.gen::<f32>() * PARTICLE_SIZE_SPAN,
        }
    }

    /// Integrate one frame, then bounce off `[0, extent]` per axis.
    pub fn integrate(&mut self, extent: Vec2) {
        self.position += self.velocity;
        bounce_axis(&mut self.position.x, &mut self.velocity.x, extent.x);
        bounce_axis(&mut self.position.y, &mut self.velocity.y, extent.y);
    }
}

// Axis-aligned inversion: the component flips whenever the particle is past
// an edge. The position is pinned back to the edge so it never leaves the
// canvas.
#[inline]
fn bounce_axis(pos: &mut f32, vel: &mut f32, extent: f32) {
    if *pos < 0.0 || *pos > extent {
        *vel = -*vel;
        *pos = pos.clamp(0.0, extent.max(0.0));
    }
}

pub fn field_count_for_width(viewport_width: f64) -> usize {
    if viewport_width < FIELD_BREAKPOINT_PX {
        FIELD_COUNT_COMPACT
    } else {
        FIELD_COUNT_FULL
    }
}

/// Free-drifting points inside a rectangle anchored at the origin.
#[derive(Clone, Debug, Default)]
pub struct DriftField {
    extent: Vec2,
    particles: Vec<DriftParticle>,
}

impl DriftField {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, extent: Vec2, count: usize) -> Self {
        let particles = (0..count)
            .map(|_| DriftParticle::random(rng, extent))
            .collect();
        Self { extent, particles }
    }

    #[inline]
    pub fn extent(&self) -> Vec2 {
        self.extent
    }

    #[inline]
    pub fn particles(&self) -> &[DriftParticle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn integrate(&mut self) {
        let extent = self.extent;
        for p in &mut self.particles {
            p.integrate(extent);
        }
    }
}
