use super::Listener;
use crate::core::PointerState;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track pointer and first-touch moves over `container`, stored relative to
/// its top-left corner.
pub fn wire_pointer(
    container: &web::HtmlElement,
    pointer: Rc<RefCell<PointerState>>,
) -> anyhow::Result<Vec<Listener>> {
    let target: &web::EventTarget = container.as_ref();

    let el = container.clone();
    let ptr = pointer.clone();
    let on_pointer = Listener::attach(target, "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        record(&el, &ptr, ev.client_x() as f64, ev.client_y() as f64);
    })?;

    let el = container.clone();
    let on_touch = Listener::attach(target, "touchmove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::TouchEvent>() else {
            return;
        };
        if let Some(touch) = ev.touches().get(0) {
            record(&el, &pointer, touch.client_x() as f64, touch.client_y() as f64);
        }
    })?;

    Ok(vec![on_pointer, on_touch])
}

fn record(container: &web::HtmlElement, pointer: &RefCell<PointerState>, client_x: f64, client_y: f64) {
    let (left, top) = dom::element_origin(container);
    pointer
        .borrow_mut()
        .move_client(client_x as f32, client_y as f32, left as f32, top as f32);
}
