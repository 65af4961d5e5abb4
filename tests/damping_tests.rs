// Host-side tests for damped tracking of rotation and hue.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod damping {
    include!("../src/core/damping.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use core_constants::{HUE_DAMPING, ROTATION_DAMPING};
use damping::Damped;
use glam::Vec2;

#[test]
fn residual_shrinks_monotonically_without_overshoot() {
    for rate in [ROTATION_DAMPING, HUE_DAMPING] {
        let mut d = Damped::new(0.0_f32, rate);
        let target = 10.0;
        let mut residual = target - d.value();
        for _ in 0..500 {
            d.step(target);
            let next = target - d.value();
            assert!(next >= 0.0, "overshot at rate {}", rate);
            assert!(next <= residual);
            residual = next;
        }
        assert!(residual < 1e-3);
    }
}

#[test]
fn step_moves_the_configured_fraction() {
    let mut hue = Damped::new(0.0_f32, HUE_DAMPING);
    assert!((hue.step(100.0) - 7.5).abs() < 1e-4);

    let mut rot = Damped::new(Vec2::ZERO, ROTATION_DAMPING);
    let v = rot.step(Vec2::new(0.5, -0.5));
    assert!((v - Vec2::new(0.025, -0.025)).length() < 1e-6);
}

#[test]
fn residual_decays_geometrically() {
    let mut d = Damped::new(Vec2::new(1.0, -1.0), ROTATION_DAMPING);
    for _ in 0..10 {
        d.step(Vec2::ZERO);
    }
    let expected = (1.0 - ROTATION_DAMPING).powi(10);
    assert!((d.value().x - expected).abs() < 1e-5);
    assert!((d.value().y + expected).abs() < 1e-5);
}

#[test]
fn rate_is_clamped() {
    let mut snap = Damped::new(0.0_f32, 2.0);
    assert_eq!(snap.step(3.0), 3.0);

    let mut frozen = Damped::new(1.0_f32, -1.0);
    assert_eq!(frozen.step(5.0), 1.0);
}
