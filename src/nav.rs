use crate::dom;
use folio_core::nav::{anchor_target, header_scrolled, MenuState};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn sync_menu(menu: MenuState, links: &web::Element, button: &web::Element) {
    let open = menu.is_open();
    _ = links.class_list().toggle_with_force("active", open);
    _ = button.class_list().toggle_with_force("open", open);
}

fn wire_mobile_menu(document: &web::Document) {
    let (Some(button), Ok(Some(links))) = (
        document.get_element_by_id("mobile-menu-btn"),
        document.query_selector(".nav-links"),
    ) else {
        return;
    };
    let menu = Rc::new(RefCell::new(MenuState::default()));
    {
        let menu = menu.clone();
        let links = links.clone();
        let btn = button.clone();
        dom::add_listener(&button, "click", move |_: web::Event| {
            let mut m = menu.borrow_mut();
            m.toggle();
            sync_menu(*m, &links, &btn);
        });
    }
    for link in dom::query_all(document, ".nav-links a") {
        let menu = menu.clone();
        let links = links.clone();
        let btn = button.clone();
        dom::add_listener(&link, "click", move |_: web::Event| {
            let mut m = menu.borrow_mut();
            m.close();
            sync_menu(*m, &links, &btn);
        });
    }
}

fn wire_header_scroll(window: &web::Window, document: &web::Document) {
    let Some(header) = document.get_element_by_id("main-header") else {
        return;
    };
    let win = window.clone();
    dom::add_listener(window, "scroll", move |_: web::Event| {
        let y = win.scroll_y().unwrap_or(0.0);
        _ = header
            .class_list()
            .toggle_with_force("scrolled", header_scrolled(y));
    });
}

fn wire_smooth_scroll(document: &web::Document) {
    for anchor in dom::query_all(document, "a[href^=\"#\"]") {
        let doc = document.clone();
        let link = anchor.clone();
        dom::add_listener(&anchor, "click", move |ev: web::Event| {
            ev.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(id) = anchor_target(&href) else {
                return;
            };
            if let Some(target) = doc.get_element_by_id(id) {
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        });
    }
}

pub fn init(window: &web::Window, document: &web::Document) {
    wire_mobile_menu(document);
    wire_header_scroll(window, document);
    wire_smooth_scroll(document);
    log::debug!("[nav] wired");
}
