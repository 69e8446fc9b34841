use crate::dom;
use folio_core::constants::THEME_ATTRIBUTE;
use folio_core::{MemoryStore, PreferenceStore, ThemeController, ThemeMode};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// localStorage-backed preferences. Falls back to memory when storage is
/// unavailable (private mode, sandboxed iframes).
pub enum BrowserStore {
    Local(web::Storage),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub fn open(window: &web::Window) -> Self {
        match window.local_storage() {
            Ok(Some(storage)) => BrowserStore::Local(storage),
            _ => {
                log::warn!("[theme] localStorage unavailable; preference won't persist");
                BrowserStore::Memory(MemoryStore::default())
            }
        }
    }
}

impl PreferenceStore for BrowserStore {
    fn load(&self, key: &str) -> Option<String> {
        match self {
            BrowserStore::Local(s) => s.get_item(key).ok().flatten(),
            BrowserStore::Memory(m) => m.load(key),
        }
    }

    fn save(&mut self, key: &str, value: &str) {
        match self {
            BrowserStore::Local(s) => {
                if let Err(e) = s.set_item(key, value) {
                    log::warn!("[theme] could not persist preference: {:?}", e);
                }
            }
            BrowserStore::Memory(m) => m.save(key, value),
        }
    }
}

fn apply(document: &web::Document, toggle: Option<&web::Element>, mode: ThemeMode) {
    if let Some(root) = document.document_element() {
        _ = root.set_attribute(THEME_ATTRIBUTE, mode.as_str());
    }
    update_icon(toggle, mode);
}

fn update_icon(toggle: Option<&web::Element>, mode: ThemeMode) {
    let icon = toggle.and_then(|t| t.query_selector("i").ok().flatten());
    if let Some(icon) = icon {
        let from = mode.toggled().icon_class();
        _ = icon.class_list().replace(from, mode.icon_class());
    }
}

pub fn init(window: &web::Window, document: &web::Document) {
    let controller = ThemeController::new(BrowserStore::open(window), dom::prefers_dark(window));
    let toggle = document.get_element_by_id("theme-toggle");
    apply(document, toggle.as_ref(), controller.mode());
    log::info!("[theme] initial mode={}", controller.mode());

    let Some(toggle) = toggle else {
        return;
    };
    let controller = Rc::new(RefCell::new(controller));
    let doc = document.clone();
    let button = toggle.clone();
    dom::add_listener(&toggle, "click", move |_: web::Event| {
        let displayed = dom::theme_snapshot(&doc);
        let next = controller.borrow_mut().toggle_from(displayed);
        apply(&doc, Some(&button), next);
    });
}
