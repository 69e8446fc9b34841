use crate::dom;
use folio_core::Debouncer;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct PendingResize {
    debouncer: Debouncer,
    timer: Option<Timeout>,
}

type ResizeCallback = Rc<RefCell<dyn FnMut()>>;

fn now_ms() -> f64 {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

fn fire_when_quiet(state: Rc<RefCell<PendingResize>>, on_resize: ResizeCallback) {
    let now = now_ms();
    if state.borrow_mut().debouncer.poll(now) {
        let mut f = on_resize.borrow_mut();
        (*f)();
        return;
    }
    // Timer landed before the window closed; wait out the rest.
    let remaining = state.borrow().debouncer.remaining_ms(now);
    if let Some(ms) = remaining {
        Timeout::new(ms.ceil() as u32, move || fire_when_quiet(state, on_resize)).forget();
    }
}

/// Call `on_resize` once the window has stopped resizing for the
/// debouncer's quiet window. Each resize event restarts the window and
/// replaces (and so cancels) the pending timeout.
pub fn wire_debounced_resize(window: &web::Window, on_resize: impl FnMut() + 'static) {
    let state = Rc::new(RefCell::new(PendingResize {
        debouncer: Debouncer::default(),
        timer: None,
    }));
    let on_resize: ResizeCallback = Rc::new(RefCell::new(on_resize));
    dom::add_listener(window, "resize", move |_: web::Event| {
        let quiet = {
            let mut s = state.borrow_mut();
            s.debouncer.event(now_ms());
            s.debouncer.quiet_ms()
        };
        let (st, cb) = (state.clone(), on_resize.clone());
        let timer = Timeout::new(quiet as u32, move || fire_when_quiet(st, cb));
        state.borrow_mut().timer = Some(timer);
    });
}

/// Report page visibility changes as `visible: bool`.
pub fn wire_visibility(document: &web::Document, mut on_change: impl FnMut(bool) + 'static) {
    let doc = document.clone();
    dom::add_listener(document, "visibilitychange", move |_: web::Event| {
        on_change(!doc.hidden());
    });
}
