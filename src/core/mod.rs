pub mod camera;
pub mod constants;
pub mod damping;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod lifecycle;
pub mod params;
pub mod pointer;
pub mod ramp;
pub mod text;

pub use camera::*;
pub use constants::*;
pub use damping::Damped;
pub use error::EffectError;
pub use geometry::*;
pub use grid::*;
pub use lifecycle::*;
pub use params::EffectParams;
pub use pointer::PointerState;
pub use ramp::*;
pub use text::*;

// Shader bundled as a string constant
pub static PLANE_WGSL: &str = include_str!("../../shaders/ascii_plane.wgsl");
