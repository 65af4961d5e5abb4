// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn damping_rates_are_fractions() {
    assert!(ROTATION_DAMPING > 0.0 && ROTATION_DAMPING < 1.0);
    assert!(HUE_DAMPING > 0.0 && HUE_DAMPING < 1.0);
    assert!(HUE_DAMPING > ROTATION_DAMPING);
}

#[test]
fn luma_weights_sum_to_one() {
    let sum: f32 = LUMA_WEIGHTS.iter().sum();
    assert!((sum - 1.0).abs() < 1e-6);
}

#[test]
fn default_ramp_runs_sparse_to_dense() {
    let glyphs: Vec<char> = DEFAULT_CHARSET.chars().collect();
    assert_eq!(glyphs.len(), 67);
    assert_eq!(glyphs.first(), Some(&' '));
    assert_eq!(glyphs.last(), Some(&'$'));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_frustum_contains_the_plane() {
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_Z && CAMERA_Z < CAMERA_FAR);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    // the plane must fit vertically at rest
    let half_view = CAMERA_Z * (CAMERA_FOV_DEG.to_radians() * 0.5).tan();
    assert!(DEFAULT_PLANE_BASE_HEIGHT * 0.5 < half_view);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn overlay_constants_are_consistent() {
    assert!(VISIBILITY_THRESHOLD > 0.0 && VISIBILITY_THRESHOLD <= 1.0);
    assert!(OVERLAY_CSS.contains(OVERLAY_CLASS));
    assert!(OVERLAY_CSS.contains(&format!("z-index: {}", OVERLAY_PRE_Z_INDEX)));
    assert_eq!(CLEAR_RGBA[3], 0.0);
    assert_eq!(CHAR_WIDTH_REFERENCE.chars().count(), 1);
}
