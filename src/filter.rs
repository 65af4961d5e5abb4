use crate::constants::CHAR_WIDTH_REFERENCE;
use crate::core::{
    asciify, cell_font, hue_target_deg, Camera, Damped, GlyphRamp, GridSize, Release, HUE_DAMPING,
};
use crate::dom;
use crate::overlay::Overlay;
use crate::render::{Renderer, Scene};
use glam::Vec2;
use web_sys as web;

/// Turns each rendered frame into a character mosaic.
///
/// Owns the GPU backing surface, the `cols x rows` down-sampling canvas and
/// the overlay node the text is written into.
pub struct GlyphFilter {
    renderer: Renderer,
    overlay: Overlay,
    ctx: web::CanvasRenderingContext2d,
    ramp: GlyphRamp,
    font_size: f64,
    char_width: f64,
    grid: GridSize,
    hue: Damped<f32>,
    mosaic: String,
}

impl GlyphFilter {
    pub fn new(
        renderer: Renderer,
        document: &web::Document,
        container: &web::HtmlElement,
        ramp: GlyphRamp,
        font_size: f64,
        font_family: &str,
    ) -> anyhow::Result<Self> {
        let overlay = Overlay::mount(document, container)?;
        let ctx = dom::context_2d(overlay.canvas())?;
        ctx.set_image_smoothing_enabled(false);

        ctx.set_font(&cell_font(font_size, font_family));
        let char_width = ctx
            .measure_text(CHAR_WIDTH_REFERENCE)
            .map_err(|e| anyhow::anyhow!("measureText: {:?}", e))?
            .width();
        overlay.apply_font(font_family, font_size);
        log::debug!("[init] glyph cell {:.2}x{} px", char_width, font_size);

        Ok(Self {
            renderer,
            overlay,
            ctx,
            ramp,
            font_size,
            char_width,
            grid: GridSize::default(),
            hue: Damped::new(0.0, HUE_DAMPING),
            mosaic: String::new(),
        })
    }

    /// Resize the backing surface and recompute the character grid.
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.renderer
            .set_size(width.max(0.0).floor() as u32, height.max(0.0).floor() as u32);
        self.grid = GridSize::compute(width, height, self.font_size, self.char_width);
        let canvas = self.overlay.canvas();
        canvas.set_width(self.grid.cols);
        canvas.set_height(self.grid.rows);
        // resizing a canvas resets its context state
        self.ctx.set_image_smoothing_enabled(false);
        log::debug!(
            "[resize] {}x{} -> grid {}x{}",
            width,
            height,
            self.grid.cols,
            self.grid.rows
        );
    }

    /// Render, down-sample, map to glyphs, then ease the hue.
    pub fn render(&mut self, scene: &Scene, camera: &Camera, pointer_offset: Vec2) -> anyhow::Result<()> {
        self.renderer.render(scene, camera)?;

        if self.grid.is_empty() {
            self.mosaic.clear();
        } else {
            let (w, h) = (self.grid.cols as f64, self.grid.rows as f64);
            self.ctx.clear_rect(0.0, 0.0, w, h);
            self.ctx
                .draw_image_with_html_canvas_element_and_dw_and_dh(self.renderer.canvas(), 0.0, 0.0, w, h)
                .map_err(|e| anyhow::anyhow!("drawImage: {:?}", e))?;
            let pixels = self
                .ctx
                .get_image_data(0.0, 0.0, w, h)
                .map_err(|e| anyhow::anyhow!("getImageData: {:?}", e))?
                .data()
                .0;
            asciify(&pixels, self.grid, &self.ramp, &mut self.mosaic);
        }
        self.overlay.set_text(&self.mosaic);

        let hue = self.hue.step(hue_target_deg(pointer_offset));
        self.overlay.set_hue(hue);
        Ok(())
    }

    #[inline]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    #[inline]
    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }
}

impl Release for GlyphFilter {
    fn release(&mut self) {
        self.overlay.detach();
        self.renderer.release();
    }
}
