use thiserror::Error;

/// Fatal initialization failures. Everything else the effect encounters is
/// either absorbed as a no-op or logged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EffectError {
    #[error("could not get {0} context from canvas")]
    NoRasterContext(&'static str),
    #[error("no window or document available")]
    NoDocument,
    #[error("no WebGPU adapter")]
    NoAdapter,
    #[error("request_device error: {0}")]
    Device(String),
    #[error("surface reports no supported texture format")]
    NoSurfaceFormat,
    #[error("DOM error: {0}")]
    Dom(String),
}
