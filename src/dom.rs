use crate::core::EffectError;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn document() -> anyhow::Result<web::Document> {
    window_document().ok_or_else(|| EffectError::NoDocument.into())
}

pub fn create_html(document: &web::Document, tag: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

pub fn create_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create <canvas>: {:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

/// 2D context of `canvas`. Absence is a fatal initialization error.
pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("getContext('2d'): {:?}", e))?
        .ok_or(EffectError::NoRasterContext("2D"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|_| EffectError::NoRasterContext("2D"))?;
    Ok(ctx)
}

/// Set inline styles; failures are ignored like any other cosmetic write.
pub fn set_styles(el: &web::HtmlElement, styles: &[(&str, &str)]) {
    let style = el.style();
    for (k, v) in styles {
        _ = style.set_property(k, v);
    }
}

/// Current border box of `el` in CSS px.
#[inline]
pub fn element_box(el: &web::Element) -> (f64, f64) {
    let rect = el.get_bounding_client_rect();
    (rect.width(), rect.height())
}

/// Container origin in viewport coordinates, for pointer translation.
#[inline]
pub fn element_origin(el: &web::Element) -> (f64, f64) {
    let rect = el.get_bounding_client_rect();
    (rect.left(), rect.top())
}
