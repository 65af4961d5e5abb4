use crate::core::{positive_box, PointerState, Release};
use crate::displaced::DisplacedSurface;
use crate::filter::GlyphFilter;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything one animation frame touches.
pub struct FrameContext {
    pub surface: DisplacedSurface,
    pub filter: GlyphFilter,
    pub pointer: Rc<RefCell<PointerState>>,
    released: bool,
}

impl FrameContext {
    pub fn new(surface: DisplacedSurface, filter: GlyphFilter, pointer: Rc<RefCell<PointerState>>) -> Self {
        Self {
            surface,
            filter,
            pointer,
            released: false,
        }
    }

    /// One frame: time + rotation, render into the backing surface,
    /// down-sample, glyph map, hue.
    pub fn frame(&mut self) -> anyhow::Result<()> {
        if self.released {
            return Ok(());
        }
        let pointer = *self.pointer.borrow();
        self.surface.update(self.filter.renderer(), &pointer)?;
        self.filter.render(
            self.surface.scene(),
            self.surface.camera(),
            pointer.offset_from_center(),
        )
    }

    /// Propagate a container box. Zero or non-finite boxes are ignored.
    pub fn set_size(&mut self, width: f64, height: f64) {
        let Some((w, h)) = positive_box(width, height) else {
            log::debug!("[resize] ignoring {}x{}", width, height);
            return;
        };
        self.surface.set_viewport(w as f32, h as f32);
        self.filter.set_size(w, h);
        self.pointer.borrow_mut().set_box(w as f32, h as f32);
    }

    pub fn set_text(&mut self, text: &str) -> anyhow::Result<()> {
        self.surface.set_text(text)
    }
}

impl Release for FrameContext {
    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        self.surface.release();
        self.filter.release();
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Cancellable requestAnimationFrame loop. After `cancel` returns no further
/// frame runs, including when `cancel` is called from inside a tick. A tick
/// that returns an error stops the loop.
pub struct FrameLoop {
    slot: TickSlot,
    handle: Rc<Cell<Option<i32>>>,
    cancelled: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn start(mut tick: impl FnMut() -> anyhow::Result<()> + 'static) -> Self {
        let slot: TickSlot = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(None));
        let cancelled = Rc::new(Cell::new(false));

        let weak_slot: Weak<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::downgrade(&slot);
        let handle_tick = handle.clone();
        let cancelled_tick = cancelled.clone();
        *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            handle_tick.set(None);
            if cancelled_tick.get() {
                return;
            }
            if let Err(e) = tick() {
                log::error!("[frame] stopping loop: {:?}", e);
                cancelled_tick.set(true);
                return;
            }
            if cancelled_tick.get() {
                return;
            }
            if let Some(slot) = weak_slot.upgrade() {
                if let Some(cb) = slot.borrow().as_ref() {
                    handle_tick.set(request_frame(cb));
                }
            }
        }) as Box<dyn FnMut()>));

        if let Some(cb) = slot.borrow().as_ref() {
            handle.set(request_frame(cb));
        }
        log::info!("[frame] loop started");
        Self {
            slot,
            handle,
            cancelled,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        !self.cancelled.get()
    }

    /// Cancel the pending frame and drop the callback. Idempotent.
    pub fn cancel(&mut self) {
        self.cancelled.set(true);
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        if self.slot.borrow_mut().take().is_some() {
            log::debug!("[dispose] frame loop cancelled");
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
    web::window().and_then(|w| w.request_animation_frame(cb.as_ref().unchecked_ref()).ok())
}
