use crate::canvas::{self, CanvasSurface};
use crate::{dom, events, frame};
use folio_core::{AvatarConfig, AvatarEffect, AvatarStyle};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Inline styles on the tilted wrapper and the glow overlay.
struct ElementStyle {
    wrapper: web::HtmlElement,
    glow: web::HtmlElement,
}

impl AvatarStyle for ElementStyle {
    fn set_transform(&mut self, transform: &str) {
        dom::set_style(&self.wrapper, "transform", transform);
    }

    fn set_glow(&mut self, background: &str, opacity: f32) {
        dom::set_style(&self.glow, "background", background);
        dom::set_style(&self.glow, "opacity", &opacity.to_string());
    }
}

pub fn init(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let config = AvatarConfig::default();
    let effect = AvatarEffect::new(
        config,
        dom::viewport_size(window).x as f64,
        dom::prefers_reduced_motion(window),
        StdRng::from_entropy(),
    );
    if effect.is_inert() {
        return Ok(());
    }

    let container: web::Element = dom::query(document, ".avatar-container")?;
    let wrapper: web::HtmlElement = dom::query(document, ".avatar-wrapper")?;
    let glow: web::HtmlElement = dom::query(document, ".avatar-glow")?;
    let canvas: web::HtmlCanvasElement = dom::element_by_id(document, "avatar-canvas")?;
    let ctx = canvas::context_2d(&canvas)?;

    let css_size = Vec2::splat(config.canvas_px as f32);
    canvas::sync_backing_size(&canvas, &ctx, css_size, window.device_pixel_ratio());

    let effect = Rc::new(RefCell::new(effect));
    events::wire_avatar_pointer(window, &container, &effect);
    {
        let effect = effect.clone();
        let ctx = ctx.clone();
        events::wire_debounced_resize(window, move || {
            let Some(w) = web::window() else { return };
            canvas::sync_backing_size(&canvas, &ctx, css_size, w.device_pixel_ratio());
            effect.borrow_mut().resize(dom::viewport_size(&w).x as f64);
        });
    }
    {
        let effect = effect.clone();
        events::wire_visibility(document, move |visible| {
            effect.borrow_mut().set_visible(visible);
        });
    }

    let mut surface = CanvasSurface::new(ctx);
    let mut style = ElementStyle { wrapper, glow };
    let doc = document.clone();
    log::info!(
        "[avatar] started with {} orbit particles",
        effect.borrow().particles().len()
    );
    frame::start_loop(move |now_ms| {
        let theme = dom::theme_snapshot(&doc);
        effect
            .borrow_mut()
            .frame(now_ms, theme, &mut surface, &mut style)
    });
    Ok(())
}
