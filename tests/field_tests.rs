// Host-side tests for the ambient particle field.

mod common;

use common::{repaint_times, RecordingSurface};
use folio_core::{FieldConfig, FieldEffect, FolioError, Rgba, ThemeMode, TickOutcome};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_field(viewport: Vec2, reduced_motion: bool) -> FieldEffect {
    FieldEffect::new(
        FieldConfig::default(),
        viewport,
        reduced_motion,
        StdRng::seed_from_u64(11),
    )
    .unwrap()
}

#[test]
fn population_follows_viewport_breakpoint() {
    let mut field = make_field(Vec2::new(500.0, 800.0), false);
    assert_eq!(field.field().len(), 40);
    field.resize(Vec2::new(1200.0, 800.0));
    assert_eq!(field.field().len(), 80);
    assert_eq!(field.field().extent(), Vec2::new(1200.0, 800.0));
    field.resize(Vec2::new(500.0, 800.0));
    assert_eq!(field.field().len(), 40);
}

#[test]
fn resize_regenerates_inside_new_bounds() {
    let mut field = make_field(Vec2::new(1920.0, 1080.0), false);
    field.resize(Vec2::new(320.0, 240.0));
    for p in field.field().particles() {
        assert!(p.position.x <= 320.0 && p.position.y <= 240.0);
    }
}

#[test]
fn reduced_motion_hides_and_never_draws() {
    let mut field = make_field(Vec2::new(1200.0, 800.0), true);
    assert!(!field.is_active());
    assert!(field.canvas_hidden());
    assert!(!field.is_running());

    let mut surface = RecordingSurface::default();
    for t in repaint_times(120.0, 5.0) {
        assert_eq!(field.frame(t, ThemeMode::Dark, &mut surface), TickOutcome::Stopped);
    }
    // Visibility changes don't reactivate it.
    field.set_visible(false);
    field.set_visible(true);
    assert_eq!(field.frame(6000.0, ThemeMode::Dark, &mut surface), TickOutcome::Stopped);
    assert!(surface.ops.is_empty());
}

#[test]
fn draws_are_capped_at_30_fps() {
    let mut field = make_field(Vec2::new(1200.0, 800.0), false);
    let mut surface = RecordingSurface::default();
    for t in repaint_times(120.0, 10.0) {
        field.frame(t, ThemeMode::Dark, &mut surface);
    }
    let draws = surface.clears();
    assert!((299..=301).contains(&draws), "draws={}", draws);
    assert_eq!(surface.circles().len(), draws * 80);
}

#[test]
fn each_draw_clears_full_canvas_and_uses_theme_colour() {
    let mut field = make_field(Vec2::new(1200.0, 800.0), false);
    let mut surface = RecordingSurface::default();
    assert_eq!(field.frame(40.0, ThemeMode::Dark, &mut surface), TickOutcome::Render);
    assert_eq!(
        surface.ops.first(),
        Some(&common::DrawOp::Clear {
            width: 1200.0,
            height: 800.0
        })
    );
    let dark = Rgba {
        r: 255,
        g: 255,
        b: 255,
        a: 0.1,
    };
    assert!(surface.circles().iter().all(|(_, _, c)| *c == dark));

    let mut surface = RecordingSurface::default();
    assert_eq!(field.frame(80.0, ThemeMode::Light, &mut surface), TickOutcome::Render);
    let light = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 0.05,
    };
    assert!(surface.circles().iter().all(|(_, _, c)| *c == light));
}

#[test]
fn drawn_positions_are_post_integration() {
    let mut field = make_field(Vec2::new(1200.0, 800.0), false);
    let before: Vec<Vec2> = field.field().particles().iter().map(|p| p.position).collect();
    let mut surface = RecordingSurface::default();
    field.frame(40.0, ThemeMode::Dark, &mut surface);
    let drawn: Vec<Vec2> = surface.circles().iter().map(|(c, _, _)| *c).collect();
    let after: Vec<Vec2> = field.field().particles().iter().map(|p| p.position).collect();
    assert_eq!(drawn, after);
    assert_ne!(before, after);
}

#[test]
fn throttled_ticks_do_not_integrate() {
    let mut field = make_field(Vec2::new(1200.0, 800.0), false);
    let mut surface = RecordingSurface::default();
    field.frame(40.0, ThemeMode::Dark, &mut surface);
    let snapshot: Vec<Vec2> = field.field().particles().iter().map(|p| p.position).collect();
    assert_eq!(field.frame(45.0, ThemeMode::Dark, &mut surface), TickOutcome::Throttled);
    let now: Vec<Vec2> = field.field().particles().iter().map(|p| p.position).collect();
    assert_eq!(snapshot, now);
}

#[test]
fn hidden_page_keeps_scheduling_without_drawing() {
    let mut field = make_field(Vec2::new(1200.0, 800.0), false);
    field.set_visible(false);
    let mut surface = RecordingSurface::default();
    for t in repaint_times(60.0, 2.0) {
        assert_eq!(field.frame(t, ThemeMode::Dark, &mut surface), TickOutcome::Hidden);
    }
    assert!(surface.ops.is_empty());
}

#[test]
fn invalid_fps_cap_is_a_config_error() {
    let config = FieldConfig { fps_cap: 0.0 };
    assert_eq!(config.validate(), Err(FolioError::FpsCap(0.0)));
    let err = FieldEffect::new(
        config,
        Vec2::new(800.0, 600.0),
        false,
        StdRng::seed_from_u64(1),
    )
    .err();
    assert_eq!(err, Some(FolioError::FpsCap(0.0)));
    assert!(FieldConfig::default().validate().is_ok());
}
