use super::ramp::GlyphRamp;

/// Character grid dimensions of the down-sampled raster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridSize {
    pub cols: u32,
    pub rows: u32,
}

impl GridSize {
    /// Grid for a `width x height` box (CSS px) with glyph cells of
    /// `font_size` height and `char_width` advance.
    ///
    /// The column divisor is the font size scaled by the measured glyph width
    /// ratio. Any non-positive or non-finite input yields a zero dimension.
    pub fn compute(width: f64, height: f64, font_size: f64, char_width: f64) -> Self {
        if !(font_size.is_finite() && font_size > 0.0) {
            return Self::default();
        }
        let cell_width = font_size * (char_width / font_size);
        Self {
            cols: cells(width, cell_width),
            rows: cells(height, font_size),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cols == 0 || self.rows == 0
    }
}

#[inline]
fn cells(extent: f64, cell: f64) -> u32 {
    if !(cell.is_finite() && cell > 0.0 && extent.is_finite() && extent > 0.0) {
        return 0;
    }
    (extent / cell).floor().min(u32::MAX as f64) as u32
}

/// Convert a row-major RGBA buffer of `grid` size into mosaic text.
///
/// Every row ends with `'\n'`. Pixels missing from a short buffer render
/// blank. `out` is cleared first so callers can reuse the allocation.
pub fn asciify(pixels: &[u8], grid: GridSize, ramp: &GlyphRamp, out: &mut String) {
    out.clear();
    if grid.is_empty() {
        return;
    }
    let cols = grid.cols as usize;
    out.reserve((cols + 1) * grid.rows as usize);
    for y in 0..grid.rows as usize {
        for x in 0..cols {
            let i = (y * cols + x) * 4;
            let ch = match pixels.get(i..i + 4) {
                Some(px) => ramp.glyph_for_rgba([px[0], px[1], px[2], px[3]]),
                None => ' ',
            };
            out.push(ch);
        }
        out.push('\n');
    }
}
