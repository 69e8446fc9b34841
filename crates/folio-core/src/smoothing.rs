//! Target/current exponential smoothing.
//!
//! Each tick moves `current` a fixed fraction of the remaining distance to
//! `target`, which gives inertia-like motion without any velocity state.
//! After `n` ticks the remaining gap is `(1 - f)^n` of the initial one.

use crate::constants::LERP_FACTOR;
use crate::error::FolioError;
use glam::Vec2;

/// Component-wise interpolation toward another value of the same shape.
pub trait Lerp: Copy {
    fn lerp_toward(self, target: Self, factor: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp_toward(self, target: Self, factor: f32) -> Self {
        self + (target - self) * factor
    }
}

impl Lerp for Vec2 {
    #[inline]
    fn lerp_toward(self, target: Self, factor: f32) -> Self {
        self + (target - self) * factor
    }
}

/// Interpolation factor, guaranteed to lie strictly inside (0, 1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LerpFactor(f32);

impl LerpFactor {
    pub fn new(value: f32) -> Result<Self, FolioError> {
        if value > 0.0 && value < 1.0 {
            Ok(Self(value))
        } else {
            Err(FolioError::LerpFactor(value))
        }
    }

    #[inline]
    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for LerpFactor {
    fn default() -> Self {
        Self(LERP_FACTOR)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Smoothed<T: Lerp> {
    current: T,
    target: T,
}

impl<T: Lerp> Smoothed<T> {
    /// Start at rest: `current == target == value`.
    pub fn new(value: T) -> Self {
        Self {
            current: value,
            target: value,
        }
    }

    #[inline]
    pub fn current(&self) -> T {
        self.current
    }

    #[inline]
    pub fn target(&self) -> T {
        self.target
    }

    #[inline]
    pub fn set_target(&mut self, target: T) {
        self.target = target;
    }

    pub fn update_target(&mut self, f: impl FnOnce(&mut T)) {
        f(&mut self.target);
    }

    /// Advance one tick and return the new `current`.
    #[inline]
    pub fn step(&mut self, factor: LerpFactor) -> T {
        self.current = self.current.lerp_toward(self.target, factor.get());
        self.current
    }
}

/// Avatar orientation: tilt in degrees around the X and Y axes, plus scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltPose {
    pub tilt: Vec2,
    pub scale: f32,
}

impl TiltPose {
    pub const fn rest(scale: f32) -> Self {
        Self {
            tilt: Vec2::ZERO,
            scale,
        }
    }
}

impl Lerp for TiltPose {
    fn lerp_toward(self, target: Self, factor: f32) -> Self {
        Self {
            tilt: self.tilt.lerp_toward(target.tilt, factor),
            scale: self.scale.lerp_toward(target.scale, factor),
        }
    }
}

/// Highlight position (percent of the container) and its opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowState {
    pub position: Vec2,
    pub opacity: f32,
}

impl Lerp for GlowState {
    fn lerp_toward(self, target: Self, factor: f32) -> Self {
        Self {
            position: self.position.lerp_toward(target.position, factor),
            opacity: self.opacity.lerp_toward(target.opacity, factor),
        }
    }
}
