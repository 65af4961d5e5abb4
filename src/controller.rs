use crate::constants::VISIBILITY_THRESHOLD;
use crate::core::{EffectParams, GlyphRamp, GridSize, Lifecycle, PointerState, Release};
use crate::displaced::DisplacedSurface;
use crate::dom;
use crate::events::{self, Listener, ResizeWatch, VisibilityWatch};
use crate::filter::GlyphFilter;
use crate::frame::{FrameContext, FrameLoop};
use crate::render::Renderer;
use crate::text_texture::TextTexture;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Public entry point for one effect instance bound to a container.
///
/// Construction with a zero box defers all allocation until the container is
/// seen with a positive box, either through the visibility observer or a
/// later `set_size`. Disposal is idempotent and also runs on drop.
pub struct EffectController {
    shared: Rc<Shared>,
}

struct Shared {
    document: web::Document,
    container: web::HtmlElement,
    params: RefCell<EffectParams>,
    pointer: Rc<RefCell<PointerState>>,
    lifecycle: RefCell<Lifecycle<Running>>,
    visibility: RefCell<Option<VisibilityWatch>>,
}

/// Resources that exist only while the effect is animating.
struct Running {
    ctx: Rc<RefCell<FrameContext>>,
    frame_loop: FrameLoop,
    resize: Option<ResizeWatch>,
    listeners: Vec<Listener>,
}

impl Release for Running {
    fn release(&mut self) {
        self.frame_loop.cancel();
        if let Some(resize) = self.resize.take() {
            resize.disconnect();
        }
        for l in &mut self.listeners {
            l.detach();
        }
        self.listeners.clear();
        match self.ctx.try_borrow_mut() {
            Ok(mut ctx) => ctx.release(),
            Err(_) => log::warn!("[dispose] frame context busy; resources freed on drop"),
        }
    }
}

impl EffectController {
    /// Build an effect in `container` whose current box is `width x height`.
    ///
    /// With a positive box the GPU is initialized before this resolves and
    /// any failure is returned. A zero box returns a pending controller.
    pub async fn create(
        params: EffectParams,
        container: web::HtmlElement,
        width: f64,
        height: f64,
    ) -> anyhow::Result<Self> {
        let params = params.sanitized();
        let document = dom::document()?;
        let pointer = PointerState::new(width.max(0.0) as f32, height.max(0.0) as f32);
        let shared = Rc::new(Shared {
            document,
            container,
            params: RefCell::new(params),
            pointer: Rc::new(RefCell::new(pointer)),
            lifecycle: RefCell::new(Lifecycle::new()),
            visibility: RefCell::new(None),
        });

        let started = shared.lifecycle.borrow_mut().begin_init(width, height);
        match started {
            Some((w, h)) => {
                log::info!("[init] container {}x{}", w, h);
                Shared::initialize(&shared, w, h).await?;
            }
            None => {
                log::info!("[init] container has no box ({}x{}); deferring", width, height);
                Shared::defer(&shared)?;
            }
        }
        Ok(Self { shared })
    }

    /// Propagate a new container box. A pending instance starts initializing
    /// when the box becomes positive.
    pub fn set_size(&self, width: f64, height: f64) {
        let lifecycle = self.shared.lifecycle.borrow();
        if let Some(running) = lifecycle.running() {
            match running.ctx.try_borrow_mut() {
                Ok(mut ctx) => ctx.set_size(width, height),
                Err(_) => log::warn!("[resize] frame context busy; dropping {}x{}", width, height),
            }
            return;
        }
        let pending = lifecycle.is_pending();
        drop(lifecycle);
        if pending {
            Shared::start_deferred(&self.shared, width, height);
        }
    }

    /// Replace the displayed text. Pending instances pick it up at init.
    pub fn set_text(&self, text: &str) -> anyhow::Result<()> {
        self.shared.params.borrow_mut().text = text.to_string();
        let lifecycle = self.shared.lifecycle.borrow();
        if let Some(running) = lifecycle.running() {
            running.ctx.borrow_mut().set_text(text)?;
        }
        Ok(())
    }

    /// Tear everything down. Safe to call any number of times, in any phase.
    pub fn dispose(&self) {
        self.shared.dispose();
    }

    pub fn grid(&self) -> GridSize {
        self.shared
            .lifecycle
            .borrow()
            .running()
            .map(|r| r.ctx.borrow().filter.grid())
            .unwrap_or_default()
    }

    pub fn is_pending(&self) -> bool {
        self.shared.lifecycle.borrow().is_pending()
    }

    pub fn is_running(&self) -> bool {
        self.shared.lifecycle.borrow().is_running()
    }

    pub fn is_animating(&self) -> bool {
        self.shared
            .lifecycle
            .borrow()
            .running()
            .is_some_and(|r| r.frame_loop.is_active())
    }

    pub fn is_disposed(&self) -> bool {
        self.shared.lifecycle.borrow().is_disposed()
    }
}

impl Drop for EffectController {
    fn drop(&mut self) {
        self.shared.dispose();
    }
}

impl Shared {
    /// Watch for the container to become visible with a usable box.
    fn defer(this: &Rc<Self>) -> anyhow::Result<()> {
        let weak: Weak<Self> = Rc::downgrade(this);
        let watch = events::watch_visibility(&this.container, VISIBILITY_THRESHOLD, move |w, h| {
            if let Some(shared) = weak.upgrade() {
                Shared::start_deferred(&shared, w, h);
            }
        })?;
        *this.visibility.borrow_mut() = Some(watch);
        Ok(())
    }

    /// Begin the deferred initialization at most once.
    fn start_deferred(this: &Rc<Self>, width: f64, height: f64) {
        let started = this.lifecycle.borrow_mut().begin_init(width, height);
        let Some((w, h)) = started else {
            return;
        };
        // may run inside the observer callback: disconnect now, drop later
        if let Some(watch) = this.visibility.borrow().as_ref() {
            watch.disconnect();
        }
        log::info!("[init] deferred start at {}x{}", w, h);
        let shared = this.clone();
        spawn_local(async move {
            drop(shared.visibility.borrow_mut().take());
            if shared.lifecycle.borrow().is_disposed() {
                log::debug!("[init] disposed before deferred start; skipping");
                return;
            }
            if let Err(e) = Shared::initialize(&shared, w, h).await {
                log::error!("[init] deferred initialization failed: {:?}", e);
            }
        });
    }

    async fn initialize(this: &Rc<Self>, width: f64, height: f64) -> anyhow::Result<()> {
        let running = match Shared::build_running(this, width, height).await {
            Ok(r) => r,
            Err(e) => {
                this.lifecycle.borrow_mut().fail_init();
                return Err(e);
            }
        };
        let installed = this.lifecycle.borrow_mut().finish_init(running);
        if let Err(mut late) = installed {
            log::info!("[init] disposed while initializing; releasing");
            late.release();
            return Ok(());
        }

        // text may have changed while the GPU was being requested
        let text = this.params.borrow().text.clone();
        if let Some(running) = this.lifecycle.borrow().running() {
            running.ctx.borrow_mut().set_text(&text)?;
        }
        Ok(())
    }

    async fn build_running(this: &Rc<Self>, width: f64, height: f64) -> anyhow::Result<Running> {
        let params = this.params.borrow().clone();
        let backing = dom::create_canvas(&this.document)?;
        let renderer = Renderer::new(backing, width as u32, height as u32).await?;
        let text = TextTexture::new(
            &this.document,
            &params.text,
            params.text_font_size,
            &params.text_font_family,
            &params.text_color,
            renderer.max_texture_side(),
        )?;
        let surface = DisplacedSurface::new(&renderer, text, params.plane_base_height, params.enable_waves)?;
        let filter = GlyphFilter::new(
            renderer,
            &this.document,
            &this.container,
            GlyphRamp::new(&params.charset, params.invert),
            params.ascii_font_size,
            &params.ascii_font_family,
        )?;

        let mut ctx = FrameContext::new(surface, filter, this.pointer.clone());
        ctx.set_size(width, height);
        let ctx = Rc::new(RefCell::new(ctx));

        let weak_ctx = Rc::downgrade(&ctx);
        let resize = events::watch_resize(&this.container, move |w, h| {
            if let Some(ctx) = weak_ctx.upgrade() {
                if let Ok(mut ctx) = ctx.try_borrow_mut() {
                    ctx.set_size(w, h);
                }
            }
        })?;
        let listeners = events::wire_pointer(&this.container, this.pointer.clone())?;
        let tick_ctx = ctx.clone();
        let frame_loop = FrameLoop::start(move || match tick_ctx.try_borrow_mut() {
            Ok(mut ctx) => ctx.frame(),
            Err(_) => Ok(()),
        });

        Ok(Running {
            ctx,
            frame_loop,
            resize: Some(resize),
            listeners,
        })
    }

    fn dispose(&self) {
        if let Some(watch) = self.visibility.borrow_mut().take() {
            watch.disconnect();
        }
        let running = self.lifecycle.borrow_mut().dispose();
        if let Some(mut running) = running {
            running.release();
            log::info!("[dispose] effect released");
        }
    }
}
