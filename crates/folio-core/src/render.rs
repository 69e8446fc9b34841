//! Canvas particle rendering against an abstract 2D surface.
//!
//! The web frontend implements [`Surface`] over `CanvasRenderingContext2d`;
//! tests implement it with a recorder. The theme is passed in as a snapshot
//! on every call and never cached here.

use crate::constants::{ORBIT_SHADOW_ALPHA, ORBIT_SHADOW_BLUR};
use crate::particles::{DriftField, OrbitParticle};
use crate::theme::ThemeMode;
use glam::Vec2;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    #[inline]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// CSS `rgba(r, g, b, a)` form, accepted by canvas `fillStyle` and inline styles.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Colours used by both renderers for one theme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Orbit base colour; alpha is replaced per particle.
    pub orbit: Rgba,
    pub drift: Rgba,
}

impl Palette {
    pub const fn for_theme(theme: ThemeMode) -> Self {
        match theme {
            ThemeMode::Dark => Self {
                orbit: Rgba::rgb(59, 130, 246),
                drift: Rgba {
                    r: 255,
                    g: 255,
                    b: 255,
                    a: 0.1,
                },
            },
            ThemeMode::Light => Self {
                orbit: Rgba::rgb(37, 99, 235),
                drift: Rgba {
                    r: 0,
                    g: 0,
                    b: 0,
                    a: 0.05,
                },
            },
        }
    }
}

pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn set_shadow(&mut self, blur: f64, color: Rgba);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
}

/// Draw the orbit around `center` and advance every particle by one step.
pub fn draw_orbit<S: Surface + ?Sized>(
    surface: &mut S,
    extent: Vec2,
    center: Vec2,
    particles: &mut [OrbitParticle],
    theme: ThemeMode,
) {
    let base = Palette::for_theme(theme).orbit;
    surface.clear(extent.x as f64, extent.y as f64);
    for p in particles.iter_mut() {
        p.advance();
        let opacity = p.opacity();
        surface.set_shadow(ORBIT_SHADOW_BLUR, base.with_alpha(opacity * ORBIT_SHADOW_ALPHA));
        surface.fill_circle(p.position(center), p.size, base.with_alpha(opacity));
    }
    // Leave no glow behind for whatever draws next.
    surface.set_shadow(0.0, base.with_alpha(0.0));
}

/// Draw the field as it stands; integration is a separate pass.
pub fn draw_drift<S: Surface + ?Sized>(surface: &mut S, field: &DriftField, theme: ThemeMode) {
    let color = Palette::for_theme(theme).drift;
    let extent = field.extent();
    surface.clear(extent.x as f64, extent.y as f64);
    for p in field.particles() {
        surface.fill_circle(p.position, p.size, color);
    }
}
