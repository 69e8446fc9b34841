use folio_core::constants::THEME_ATTRIBUTE;
use folio_core::{ContainerRect, ThemeMode};
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!(format!("#{} has unexpected type: {:?}", id, e)))
}

pub fn query<T: JsCast>(document: &web::Document, selector: &str) -> anyhow::Result<T> {
    document
        .query_selector(selector)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("missing {}", selector))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!(format!("{} has unexpected type: {:?}", selector, e)))
}

/// All elements matching `selector`; an invalid selector yields nothing.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn add_listener<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Run `f` once the page has fully loaded, immediately if it already has.
pub fn on_load(f: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let loaded = window
        .document()
        .map(|d| d.ready_state() == "complete")
        .unwrap_or(false);
    if loaded {
        f();
        return;
    }
    let mut f = Some(f);
    add_listener(&window, "load", move |_: web::Event| {
        if let Some(f) = f.take() {
            f();
        }
    });
}

pub fn media_matches(window: &web::Window, query: &str) -> bool {
    matches!(window.match_media(query), Ok(Some(mql)) if mql.matches())
}

#[inline]
pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    media_matches(window, "(prefers-reduced-motion: reduce)")
}

#[inline]
pub fn prefers_dark(window: &web::Window) -> bool {
    media_matches(window, "(prefers-color-scheme: dark)")
}

pub fn viewport_size(window: &web::Window) -> Vec2 {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Vec2::new(w as f32, h as f32)
}

pub fn container_rect(el: &web::Element) -> ContainerRect {
    let rect = el.get_bounding_client_rect();
    ContainerRect {
        left: rect.left() as f32,
        top: rect.top() as f32,
        width: rect.width() as f32,
        height: rect.height() as f32,
    }
}

/// Read the root `data-theme` attribute; renderers take this once per tick.
pub fn theme_snapshot(document: &web::Document) -> ThemeMode {
    let attr = document
        .document_element()
        .and_then(|root| root.get_attribute(THEME_ATTRIBUTE));
    ThemeMode::from_attribute(attr.as_deref())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}
