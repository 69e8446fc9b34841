#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod avatar;
mod canvas;
mod dom;
mod events;
mod field;
mod frame;
mod nav;
mod theme;
mod typewriter;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = init_page() {
        log::error!("init error: {:?}", e);
    }
    dom::on_load(|| {
        if let Err(e) = init_effects() {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Theme, navigation and typewriter only need the markup.
fn init_page() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    theme::init(&window, &document);
    nav::init(&window, &document);
    if let Err(e) = typewriter::init(&document) {
        log::error!("[typewriter] init error: {:?}", e);
    }
    Ok(())
}

/// Canvas effects start after load. Each one fails on its own: a missing
/// canvas or context disables that effect and nothing else.
fn init_effects() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    if let Err(e) = field::init(&window, &document) {
        log::error!("[field] init error: {:?}", e);
    }
    if let Err(e) = avatar::init(&window, &document) {
        log::error!("[avatar] init error: {:?}", e);
    }
    Ok(())
}
