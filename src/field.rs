use crate::canvas::{self, CanvasSurface};
use crate::{dom, events, frame};
use folio_core::{FieldConfig, FieldEffect};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn init(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let canvas: web::HtmlCanvasElement = dom::element_by_id(document, "particle-canvas")?;
    let viewport = dom::viewport_size(window);
    let effect = FieldEffect::new(
        FieldConfig::default(),
        viewport,
        dom::prefers_reduced_motion(window),
        StdRng::from_entropy(),
    )?;
    if effect.canvas_hidden() {
        dom::set_style(&canvas, "display", "none");
        return Ok(());
    }

    let ctx = canvas::context_2d(&canvas)?;
    // The field covers the viewport one-to-one in CSS pixels.
    canvas::sync_backing_size(&canvas, &ctx, viewport, 1.0);

    let effect = Rc::new(RefCell::new(effect));
    {
        let effect = effect.clone();
        let ctx = ctx.clone();
        events::wire_debounced_resize(window, move || {
            let Some(w) = web::window() else { return };
            let viewport = dom::viewport_size(&w);
            canvas::sync_backing_size(&canvas, &ctx, viewport, 1.0);
            effect.borrow_mut().resize(viewport);
        });
    }
    {
        let effect = effect.clone();
        events::wire_visibility(document, move |visible| {
            effect.borrow_mut().set_visible(visible);
        });
    }

    let mut surface = CanvasSurface::new(ctx);
    let doc = document.clone();
    log::info!(
        "[field] started with {} particles at {}x{}",
        effect.borrow().field().len(),
        viewport.x,
        viewport.y
    );
    frame::start_loop(move |now_ms| {
        let theme = dom::theme_snapshot(&doc);
        effect.borrow_mut().frame(now_ms, theme, &mut surface)
    });
    Ok(())
}
