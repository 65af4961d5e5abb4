use std::cell::Cell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Live `ResizeObserver` on one element; disconnects when dropped.
pub struct ResizeWatch {
    observer: web::ResizeObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
    connected: Cell<bool>,
}

/// Report content-box changes of `el` as `(width, height)` in CSS px.
pub fn watch_resize(
    el: &web::Element,
    mut on_resize: impl FnMut(f64, f64) + 'static,
) -> anyhow::Result<ResizeWatch> {
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            if let Ok(entry) = entry.dyn_into::<web::ResizeObserverEntry>() {
                let rect = entry.content_rect();
                on_resize(rect.width(), rect.height());
            }
        }
    }) as Box<dyn FnMut(js_sys::Array)>);
    let observer = web::ResizeObserver::new(callback.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("ResizeObserver: {:?}", e))?;
    observer.observe(el);
    Ok(ResizeWatch {
        observer,
        _callback: callback,
        connected: Cell::new(true),
    })
}

impl ResizeWatch {
    pub fn disconnect(&self) {
        if self.connected.replace(false) {
            self.observer.disconnect();
        }
    }
}

impl Drop for ResizeWatch {
    fn drop(&mut self) {
        self.disconnect();
    }
}

/// Live `IntersectionObserver` on one element; disconnects when dropped.
///
/// `disconnect` may be called from inside the callback. The watch itself
/// must not be dropped there, since that frees the running closure.
pub struct VisibilityWatch {
    observer: web::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
    connected: Cell<bool>,
}

/// Call `on_visible(width, height)` with the element's bounding box each time
/// it crosses into view at `threshold`.
pub fn watch_visibility(
    el: &web::Element,
    threshold: f64,
    mut on_visible: impl FnMut(f64, f64) + 'static,
) -> anyhow::Result<VisibilityWatch> {
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                let rect = entry.bounding_client_rect();
                on_visible(rect.width(), rect.height());
            }
        }
    }) as Box<dyn FnMut(js_sys::Array)>);
    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer = web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    observer.observe(el);
    Ok(VisibilityWatch {
        observer,
        _callback: callback,
        connected: Cell::new(true),
    })
}

impl VisibilityWatch {
    pub fn disconnect(&self) {
        if self.connected.replace(false) {
            self.observer.disconnect();
            log::debug!("[init] visibility observer disconnected");
        }
    }
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        self.disconnect();
    }
}
