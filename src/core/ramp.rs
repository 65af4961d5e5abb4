use super::constants::{DEFAULT_CHARSET, LUMA_WEIGHTS};

/// Perceptual brightness of an 8-bit RGB triple, normalized to `[0, 1]`.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> f32 {
    let l = (LUMA_WEIGHTS[0] * r as f32 + LUMA_WEIGHTS[1] * g as f32 + LUMA_WEIGHTS[2] * b as f32)
        / 255.0;
    l.clamp(0.0, 1.0)
}

/// Ordered glyph sequence mapping luminance to a character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphRamp {
    glyphs: Vec<char>,
    invert: bool,
}

impl GlyphRamp {
    /// An empty charset falls back to the default ramp.
    pub fn new(charset: &str, invert: bool) -> Self {
        let mut glyphs: Vec<char> = charset.chars().collect();
        if glyphs.is_empty() {
            glyphs = DEFAULT_CHARSET.chars().collect();
        }
        Self { glyphs, invert }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// `floor((1 - L) * (len - 1))`, clamped, mirrored when inverted.
    /// NaN is treated as black.
    pub fn index_for_luminance(&self, l: f32) -> usize {
        let last = self.glyphs.len() - 1;
        let l = if l.is_nan() { 0.0 } else { l.clamp(0.0, 1.0) };
        let idx = (((1.0 - l) * last as f32).floor() as usize).min(last);
        if self.invert {
            last - idx
        } else {
            idx
        }
    }

    #[inline]
    pub fn glyph_for_luminance(&self, l: f32) -> char {
        self.glyphs[self.index_for_luminance(l)]
    }

    /// Fully transparent pixels are always blank, independent of RGB.
    #[inline]
    pub fn glyph_for_rgba(&self, px: [u8; 4]) -> char {
        if px[3] == 0 {
            return ' ';
        }
        self.glyph_for_luminance(luminance(px[0], px[1], px[2]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_and_black_hit_the_ramp_ends() {
        let ramp = GlyphRamp::new("abc", false);
        assert_eq!(ramp.glyph_for_rgba([255, 255, 255, 255]), 'a');
        assert_eq!(ramp.glyph_for_rgba([0, 0, 0, 255]), 'c');
    }

    #[test]
    fn empty_charset_uses_default() {
        let ramp = GlyphRamp::new("", true);
        assert_eq!(ramp.len(), DEFAULT_CHARSET.chars().count());
    }
}
