#![cfg(target_arch = "wasm32")]
use crate::controller::EffectController;
use crate::core::EffectParams;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod controller;
mod core;
mod displaced;
mod dom;
mod events;
mod filter;
mod frame;
mod overlay;
mod render;
mod text_texture;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ascii-text-web loaded");
    Ok(())
}

fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", e))
}

/// Construction options. Unset fields keep their defaults.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct AsciiTextOptions {
    params: EffectParams,
}

#[wasm_bindgen]
impl AsciiTextOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.params.text.clone()
    }

    #[wasm_bindgen(setter)]
    pub fn set_text(&mut self, v: String) {
        self.params.text = v;
    }

    #[wasm_bindgen(getter = asciiFontSize)]
    pub fn ascii_font_size(&self) -> f64 {
        self.params.ascii_font_size
    }

    #[wasm_bindgen(setter = asciiFontSize)]
    pub fn set_ascii_font_size(&mut self, v: f64) {
        self.params.ascii_font_size = v;
    }

    #[wasm_bindgen(getter = textFontSize)]
    pub fn text_font_size(&self) -> f64 {
        self.params.text_font_size
    }

    #[wasm_bindgen(setter = textFontSize)]
    pub fn set_text_font_size(&mut self, v: f64) {
        self.params.text_font_size = v;
    }

    #[wasm_bindgen(getter = textColor)]
    pub fn text_color(&self) -> String {
        self.params.text_color.clone()
    }

    #[wasm_bindgen(setter = textColor)]
    pub fn set_text_color(&mut self, v: String) {
        self.params.text_color = v;
    }

    #[wasm_bindgen(getter = planeBaseHeight)]
    pub fn plane_base_height(&self) -> f32 {
        self.params.plane_base_height
    }

    #[wasm_bindgen(setter = planeBaseHeight)]
    pub fn set_plane_base_height(&mut self, v: f32) {
        self.params.plane_base_height = v;
    }

    #[wasm_bindgen(getter = enableWaves)]
    pub fn enable_waves(&self) -> bool {
        self.params.enable_waves
    }

    #[wasm_bindgen(setter = enableWaves)]
    pub fn set_enable_waves(&mut self, v: bool) {
        self.params.enable_waves = v;
    }

    #[wasm_bindgen(getter = textFontFamily)]
    pub fn text_font_family(&self) -> String {
        self.params.text_font_family.clone()
    }

    #[wasm_bindgen(setter = textFontFamily)]
    pub fn set_text_font_family(&mut self, v: String) {
        self.params.text_font_family = v;
    }

    #[wasm_bindgen(getter = asciiFontFamily)]
    pub fn ascii_font_family(&self) -> String {
        self.params.ascii_font_family.clone()
    }

    #[wasm_bindgen(setter = asciiFontFamily)]
    pub fn set_ascii_font_family(&mut self, v: String) {
        self.params.ascii_font_family = v;
    }

    #[wasm_bindgen(getter)]
    pub fn charset(&self) -> String {
        self.params.charset.clone()
    }

    #[wasm_bindgen(setter)]
    pub fn set_charset(&mut self, v: String) {
        self.params.charset = v;
    }

    #[wasm_bindgen(getter)]
    pub fn invert(&self) -> bool {
        self.params.invert
    }

    #[wasm_bindgen(setter)]
    pub fn set_invert(&mut self, v: bool) {
        self.params.invert = v;
    }
}

/// Animated ASCII text overlay bound to one container element.
#[wasm_bindgen]
pub struct AsciiText {
    inner: EffectController,
}

#[wasm_bindgen]
impl AsciiText {
    /// Resolves once the effect is running, or immediately with a pending
    /// effect when the box is empty. Rejects if no 2D or GPU context can be
    /// obtained.
    pub async fn create(
        options: AsciiTextOptions,
        container: web::HtmlElement,
        width: f64,
        height: f64,
    ) -> Result<AsciiText, JsValue> {
        let inner = EffectController::create(options.params, container, width, height)
            .await
            .map_err(to_js)?;
        Ok(AsciiText { inner })
    }

    /// `create` using the container's current bounding box.
    pub async fn mount(options: AsciiTextOptions, container: web::HtmlElement) -> Result<AsciiText, JsValue> {
        let (width, height) = dom::element_box(&container);
        Self::create(options, container, width, height).await
    }

    #[wasm_bindgen(js_name = setSize)]
    pub fn set_size(&self, width: f64, height: f64) {
        self.inner.set_size(width, height);
    }

    #[wasm_bindgen(js_name = setText)]
    pub fn set_text(&self, text: &str) -> Result<(), JsValue> {
        self.inner.set_text(text).map_err(to_js)
    }

    pub fn dispose(&self) {
        self.inner.dispose();
    }

    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u32 {
        self.inner.grid().cols
    }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 {
        self.inner.grid().rows
    }

    #[wasm_bindgen(getter = isPending)]
    pub fn is_pending(&self) -> bool {
        self.inner.is_pending()
    }

    #[wasm_bindgen(getter = isRunning)]
    pub fn is_running(&self) -> bool {
        self.inner.is_running()
    }

    #[wasm_bindgen(getter = isAnimating)]
    pub fn is_animating(&self) -> bool {
        self.inner.is_animating()
    }

    #[wasm_bindgen(getter = isDisposed)]
    pub fn is_disposed(&self) -> bool {
        self.inner.is_disposed()
    }
}
