use super::constants::{TEXT_FONT_WEIGHT, TEXT_PADDING_PX};

/// Measured extents of a rendered string (CSS px), as reported by a 2D
/// canvas `TextMetrics`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlyphBox {
    pub advance: f64,
    pub ascent: f64,
    pub descent: f64,
}

/// Pixel size of the text raster and where the string is drawn inside it.
///
/// `origin_x` and `baseline_y` are in CSS px; `scale` maps them onto the
/// raster and is 1 unless the layout was shrunk to fit a size limit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextLayout {
    pub width: u32,
    pub height: u32,
    pub origin_x: f64,
    pub baseline_y: f64,
    pub scale: f64,
}

impl TextLayout {
    /// Bounding box rounded up plus a fixed padding on each side. Negative or
    /// non-finite metrics count as zero, so the raster is never smaller than
    /// the padding alone.
    pub fn from_metrics(m: GlyphBox) -> Self {
        let advance = non_negative(m.advance);
        let ascent = non_negative(m.ascent);
        let descent = non_negative(m.descent);
        let pad = TEXT_PADDING_PX;
        Self {
            width: (advance.ceil() + 2.0 * pad) as u32,
            height: ((ascent + descent).ceil() + 2.0 * pad) as u32,
            origin_x: pad,
            baseline_y: pad + ascent,
            scale: 1.0,
        }
    }

    /// Shrink uniformly so neither side exceeds `max_side` pixels.
    pub fn fit_within(self, max_side: u32) -> Self {
        let max_side = max_side.max(1);
        let longest = self.width.max(self.height);
        if longest <= max_side {
            return self;
        }
        let scale = max_side as f64 / longest as f64;
        Self {
            width: shrink(self.width, scale, max_side),
            height: shrink(self.height, scale, max_side),
            scale: self.scale * scale,
            ..self
        }
    }

    #[inline]
    pub fn is_scaled(&self) -> bool {
        self.scale < 1.0
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

/// CSS font shorthand used for the source text raster.
pub fn text_font(size_px: f64, family: &str) -> String {
    format!("{} {}px {}", TEXT_FONT_WEIGHT, size_px, family)
}

/// CSS font shorthand used to measure mosaic cells.
pub fn cell_font(size_px: f64, family: &str) -> String {
    format!("{}px {}", size_px, family)
}

#[inline]
fn shrink(side: u32, scale: f64, max_side: u32) -> u32 {
    ((side as f64 * scale).round() as u32).clamp(1, max_side)
}

#[inline]
fn non_negative(v: f64) -> f64 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}
