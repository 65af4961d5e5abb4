use crate::core::{text_font, GlyphBox, TextLayout};
use crate::dom;
use web_sys as web;

/// Rasterizes a string into an RGBA image sized to its own measured box.
///
/// The raster is cached: it is redrawn only when the text changes, and the
/// `dirty` flag tells the GPU side to re-upload. Strings too large for a GPU
/// texture are drawn scaled down to `max_side` on their longer edge.
pub struct TextTexture {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    text: String,
    font: String,
    color: String,
    layout: TextLayout,
    max_side: u32,
    dirty: bool,
}

impl TextTexture {
    pub fn new(
        document: &web::Document,
        text: &str,
        font_size: f64,
        font_family: &str,
        color: &str,
        max_side: u32,
    ) -> anyhow::Result<Self> {
        let canvas = dom::create_canvas(document)?;
        let ctx = dom::context_2d(&canvas)?;
        let mut tex = Self {
            canvas,
            ctx,
            text: text.to_string(),
            font: text_font(font_size, font_family),
            color: color.to_string(),
            layout: TextLayout::from_metrics(GlyphBox::default()),
            max_side: max_side.max(1),
            dirty: true,
        };
        tex.resize()?;
        tex.render()?;
        Ok(tex)
    }

    /// Re-measure and size the raster; must precede `render`.
    fn resize(&mut self) -> anyhow::Result<()> {
        let metrics = self.measure()?;
        let natural = TextLayout::from_metrics(metrics);
        self.layout = natural.fit_within(self.max_side);
        if self.layout.is_scaled() {
            log::warn!(
                "[text] raster {}x{} exceeds {} px; drawing at {:.3}x",
                natural.width,
                natural.height,
                self.max_side,
                self.layout.scale
            );
        }
        self.canvas.set_width(self.layout.width);
        self.canvas.set_height(self.layout.height);
        Ok(())
    }

    fn render(&mut self) -> anyhow::Result<()> {
        let (w, h) = (self.layout.width as f64, self.layout.height as f64);
        let s = self.layout.scale;
        self.ctx
            .set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
            .map_err(|e| anyhow::anyhow!("setTransform: {:?}", e))?;
        self.ctx.clear_rect(0.0, 0.0, w, h);
        self.ctx
            .set_transform(s, 0.0, 0.0, s, 0.0, 0.0)
            .map_err(|e| anyhow::anyhow!("setTransform: {:?}", e))?;
        self.ctx.set_fill_style_str(&self.color);
        self.ctx.set_font(&self.font);
        self.ctx
            .fill_text(&self.text, self.layout.origin_x, self.layout.baseline_y)
            .map_err(|e| anyhow::anyhow!("fillText: {:?}", e))?;
        self.dirty = true;
        Ok(())
    }

    fn measure(&self) -> anyhow::Result<GlyphBox> {
        // font must be set before measuring; resizing the canvas resets it
        self.ctx.set_font(&self.font);
        let m = self
            .ctx
            .measure_text(&self.text)
            .map_err(|e| anyhow::anyhow!("measureText: {:?}", e))?;
        Ok(GlyphBox {
            advance: m.width(),
            ascent: m.actual_bounding_box_ascent(),
            descent: m.actual_bounding_box_descent(),
        })
    }

    /// Replace the string; returns whether the raster changed.
    pub fn set_text(&mut self, text: &str) -> anyhow::Result<bool> {
        if text == self.text {
            return Ok(false);
        }
        self.text = text.to_string();
        self.resize()?;
        self.render()?;
        Ok(true)
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.layout.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.layout.height
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.layout.aspect()
    }

    /// Take the dirty flag, clearing it.
    #[inline]
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// Unpremultiplied RGBA pixels, row-major, `width * height * 4` bytes.
    pub fn pixels(&self) -> anyhow::Result<Vec<u8>> {
        let data = self
            .ctx
            .get_image_data(0.0, 0.0, self.layout.width as f64, self.layout.height as f64)
            .map_err(|e| anyhow::anyhow!("getImageData: {:?}", e))?;
        Ok(data.data().0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn raster_fits_text_and_tracks_changes() {
        let document = dom::document().unwrap();
        let mut tex = TextTexture::new(&document, "Hi", 40.0, "monospace", "#fdf9f3", 8192).unwrap();
        let (w, h) = (tex.width(), tex.height());
        assert!(w > 20 && h > 20);
        assert_eq!(tex.pixels().unwrap().len(), (w * h * 4) as usize);
        assert!(tex.take_dirty());
        assert!(!tex.take_dirty());

        assert!(!tex.set_text("Hi").unwrap());
        assert!(!tex.take_dirty());
        assert!(tex.set_text("Hello there").unwrap());
        assert!(tex.take_dirty());
        assert!(tex.width() > w);
        assert_eq!(tex.text(), "Hello there");
    }

    #[wasm_bindgen_test]
    fn long_text_is_scaled_to_the_texture_limit() {
        let document = dom::document().unwrap();
        let mut tex = TextTexture::new(&document, "x", 200.0, "monospace", "#fdf9f3", 512).unwrap();
        let short_aspect = tex.aspect();
        assert!(tex.width() <= 512 && tex.height() <= 512);

        assert!(tex.set_text(&"x".repeat(80)).unwrap());
        assert_eq!(tex.width(), 512);
        assert!(tex.height() >= 1 && tex.height() < 512);
        assert!(tex.aspect() > short_aspect * 10.0);
        assert_eq!(tex.pixels().unwrap().len(), (tex.width() * tex.height() * 4) as usize);
    }
}
