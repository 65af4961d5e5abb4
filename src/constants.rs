/// DOM, observer and GPU tuning constants for the web frontend.
///
/// Kept apart from `core::constants` because these only make sense with a
/// browser host.
// Intersection ratio at which a deferred container counts as visible
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

// Glyph measured once to derive the mosaic cell advance
pub const CHAR_WIDTH_REFERENCE: &str = "A";

// Class placed on the overlay root; scopes the injected stylesheet
pub const OVERLAY_CLASS: &str = "ascii-text-overlay";

// Mosaic layer sits above the pixelated canvas
pub const OVERLAY_PRE_Z_INDEX: &str = "9";

// Transparent clear so empty regions read back with alpha 0
pub const CLEAR_RGBA: [f64; 4] = [0.0, 0.0, 0.0, 0.0];

// Stylesheet injected with the overlay
pub const OVERLAY_CSS: &str = "
.ascii-text-overlay canvas {
  position: absolute;
  left: 0;
  top: 0;
  width: 100%;
  height: 100%;
  image-rendering: optimizeSpeed;
  image-rendering: -moz-crisp-edges;
  image-rendering: crisp-edges;
  image-rendering: pixelated;
}
.ascii-text-overlay pre {
  margin: 0;
  user-select: none;
  padding: 0;
  line-height: 1em;
  text-align: left;
  position: absolute;
  left: 0;
  top: 0;
  background-image: radial-gradient(circle, #ff6188 0%, #fc9867 50%, #ffd866 100%);
  background-attachment: fixed;
  -webkit-text-fill-color: transparent;
  -webkit-background-clip: text;
  z-index: 9;
  mix-blend-mode: difference;
}
";
