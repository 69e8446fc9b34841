// Recording fakes for the host-side tests: a canvas that remembers every draw
// call and a style sink that remembers every CSS write.

#![allow(dead_code)]
use folio_core::{AvatarStyle, Rgba, Surface};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear { width: f64, height: f64 },
    Shadow { blur: f64, color: Rgba },
    Circle { center: Vec2, radius: f32, color: Rgba },
}

#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn clears(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Clear { .. }))
            .count()
    }

    pub fn circles(&self) -> Vec<(Vec2, f32, Rgba)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Circle {
                    center,
                    radius,
                    color,
                } => Some((*center, *radius, *color)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ops.push(DrawOp::Clear { width, height });
    }

    fn set_shadow(&mut self, blur: f64, color: Rgba) {
        self.ops.push(DrawOp::Shadow { blur, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }
}

#[derive(Default)]
pub struct RecordingStyle {
    pub transforms: Vec<String>,
    pub glows: Vec<(String, f32)>,
}

impl RecordingStyle {
    pub fn writes(&self) -> usize {
        self.transforms.len() + self.glows.len()
    }
}

impl AvatarStyle for RecordingStyle {
    fn set_transform(&mut self, transform: &str) {
        self.transforms.push(transform.to_string());
    }

    fn set_glow(&mut self, background: &str, opacity: f32) {
        self.glows.push((background.to_string(), opacity));
    }
}

/// Repaint timestamps in ms for `seconds` of a host calling back at `hz`.
pub fn repaint_times(hz: f64, seconds: f64) -> impl Iterator<Item = f64> {
    let frames = (hz * seconds) as usize;
    (0..=frames).map(move |k| k as f64 * 1000.0 / hz)
}
