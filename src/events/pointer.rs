use crate::dom;
use folio_core::AvatarEffect;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Pointer moves are tracked on the window so the pose keeps following the
/// pointer near the container edges; enter/leave come from the container.
pub fn wire_avatar_pointer(
    window: &web::Window,
    container: &web::Element,
    effect: &Rc<RefCell<AvatarEffect>>,
) {
    {
        let effect = effect.clone();
        let container = container.clone();
        dom::add_listener(window, "mousemove", move |ev: web::MouseEvent| {
            let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            let rect = dom::container_rect(&container);
            effect.borrow_mut().pointer_move(client, rect);
        });
    }
    {
        let effect = effect.clone();
        dom::add_listener(container, "mouseenter", move |_: web::MouseEvent| {
            effect.borrow_mut().pointer_enter();
        });
    }
    {
        let effect = effect.clone();
        dom::add_listener(container, "mouseleave", move |_: web::MouseEvent| {
            effect.borrow_mut().pointer_leave();
        });
    }
}
