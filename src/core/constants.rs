// Defaults and tuning constants for the ASCII text effect.

// Construction defaults
pub const DEFAULT_TEXT: &str = "David!";
pub const DEFAULT_ASCII_FONT_SIZE: f64 = 8.0; // glyph cell size in CSS px
pub const DEFAULT_TEXT_FONT_SIZE: f64 = 200.0; // source glyph raster size in CSS px
pub const DEFAULT_TEXT_COLOR: &str = "#fdf9f3";
pub const DEFAULT_PLANE_BASE_HEIGHT: f32 = 8.0; // world units
pub const DEFAULT_ENABLE_WAVES: bool = true;
pub const DEFAULT_TEXT_FONT_FAMILY: &str = "IBM Plex Mono";
pub const DEFAULT_ASCII_FONT_FAMILY: &str = "IBM Plex Mono";
pub const DEFAULT_INVERT: bool = true;

/// Darkest/sparsest to brightest/densest.
pub const DEFAULT_CHARSET: &str =
    " .'`^\",:;Il!i~+_-?][}{1)(|/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

// Text raster
pub const TEXT_FONT_WEIGHT: u32 = 600;
pub const TEXT_PADDING_PX: f64 = 10.0; // applied on every side

// Plane mesh
pub const PLANE_SEGMENTS: u32 = 36;

// Camera
pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const CAMERA_Z: f32 = 30.0;
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 1000.0;

// Wave displacement
pub const WAVE_TIME_SCALE: f32 = 5.0;
pub const WAVE_AMPLITUDE_X: f32 = 0.5;
pub const WAVE_AMPLITUDE_Y: f32 = 0.15;
pub const WAVE_AMPLITUDE_Z: f32 = 1.0;

// Pointer-driven motion
pub const ROTATION_RANGE: f32 = 0.5; // radians either side of rest
pub const ROTATION_DAMPING: f32 = 0.05; // fraction of remaining distance per frame
pub const HUE_DAMPING: f32 = 0.075;

// Luminance weights (R, G, B)
pub const LUMA_WEIGHTS: [f32; 3] = [0.3, 0.6, 0.1];
