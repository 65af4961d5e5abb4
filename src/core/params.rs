use super::constants::*;

/// Construction parameters for one effect instance.
///
/// Fields:
/// - `text`: the string rendered onto the plane
/// - `ascii_font_size`: glyph cell size of the output mosaic (CSS px)
/// - `text_font_size`: size the source text is rasterized at (CSS px)
/// - `text_color`: any CSS color accepted by a 2D canvas `fillStyle`
/// - `plane_base_height`: plane height in world units; width follows the text aspect
/// - `enable_waves`: exact on/off gate for vertex displacement
/// - `text_font_family`, `ascii_font_family`: font stacks for source text and mosaic
/// - `charset`: glyph ramp, darkest to brightest
/// - `invert`: mirror the ramp lookup
#[derive(Clone, Debug, PartialEq)]
pub struct EffectParams {
    pub text: String,
    pub ascii_font_size: f64,
    pub text_font_size: f64,
    pub text_color: String,
    pub plane_base_height: f32,
    pub enable_waves: bool,
    pub text_font_family: String,
    pub ascii_font_family: String,
    pub charset: String,
    pub invert: bool,
}

impl Default for EffectParams {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT.to_string(),
            ascii_font_size: DEFAULT_ASCII_FONT_SIZE,
            text_font_size: DEFAULT_TEXT_FONT_SIZE,
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            plane_base_height: DEFAULT_PLANE_BASE_HEIGHT,
            enable_waves: DEFAULT_ENABLE_WAVES,
            text_font_family: DEFAULT_TEXT_FONT_FAMILY.to_string(),
            ascii_font_family: DEFAULT_ASCII_FONT_FAMILY.to_string(),
            charset: DEFAULT_CHARSET.to_string(),
            invert: DEFAULT_INVERT,
        }
    }
}

impl EffectParams {
    /// Replace values that would break sizing math with their defaults.
    ///
    /// Sizes must be finite and strictly positive; font stacks, color and
    /// charset must be non-blank. `text` may legitimately be empty.
    pub fn sanitized(mut self) -> Self {
        if !positive(self.ascii_font_size) {
            self.ascii_font_size = DEFAULT_ASCII_FONT_SIZE;
        }
        if !positive(self.text_font_size) {
            self.text_font_size = DEFAULT_TEXT_FONT_SIZE;
        }
        if !(self.plane_base_height.is_finite() && self.plane_base_height > 0.0) {
            self.plane_base_height = DEFAULT_PLANE_BASE_HEIGHT;
        }
        fill_blank(&mut self.text_color, DEFAULT_TEXT_COLOR);
        fill_blank(&mut self.text_font_family, DEFAULT_TEXT_FONT_FAMILY);
        fill_blank(&mut self.ascii_font_family, DEFAULT_ASCII_FONT_FAMILY);
        if self.charset.is_empty() {
            self.charset = DEFAULT_CHARSET.to_string();
        }
        self
    }
}

#[inline]
fn positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

fn fill_blank(value: &mut String, fallback: &str) {
    if value.trim().is_empty() {
        *value = fallback.to_string();
    }
}
