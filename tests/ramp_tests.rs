// Host-side tests for the luminance ramp and the asciify pass.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod effect_core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod ramp {
        include!("../src/core/ramp.rs");
    }
    pub mod grid {
        include!("../src/core/grid.rs");
    }
}

use effect_core::constants::DEFAULT_CHARSET;
use effect_core::grid::{asciify, GridSize};
use effect_core::ramp::*;

const SAMPLES: [f32; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

#[test]
fn transparent_pixels_are_blank_for_any_rgb() {
    let ramp = GlyphRamp::new(DEFAULT_CHARSET, false);
    let inverted = GlyphRamp::new(DEFAULT_CHARSET, true);
    for rgb in [[0, 0, 0], [255, 255, 255], [12, 200, 99], [255, 0, 0]] {
        let px = [rgb[0], rgb[1], rgb[2], 0];
        assert_eq!(ramp.glyph_for_rgba(px), ' ');
        assert_eq!(inverted.glyph_for_rgba(px), ' ');
    }
}

#[test]
fn index_stays_in_range() {
    let ramp = GlyphRamp::new(DEFAULT_CHARSET, false);
    let last = ramp.len() - 1;
    for l in SAMPLES.iter().copied().chain([-1.0, 2.0, f32::NAN, f32::INFINITY]) {
        assert!(ramp.index_for_luminance(l) <= last, "L={}", l);
    }
}

#[test]
fn extremes_hit_opposite_ends() {
    let ramp = GlyphRamp::new(DEFAULT_CHARSET, false);
    let last = ramp.len() - 1;
    assert_eq!(ramp.index_for_luminance(0.0), last);
    assert_eq!(ramp.index_for_luminance(1.0), 0);
}

#[test]
fn inversion_mirrors_index() {
    let plain = GlyphRamp::new(DEFAULT_CHARSET, false);
    let inverted = GlyphRamp::new(DEFAULT_CHARSET, true);
    let last = plain.len() - 1;
    for l in SAMPLES {
        assert_eq!(
            inverted.index_for_luminance(l),
            last - plain.index_for_luminance(l),
            "L={}",
            l
        );
    }
}

#[test]
fn index_follows_floor_formula() {
    let ramp = GlyphRamp::new("0123456789", false);
    // floor((1 - 0.25) * 9) = 6, floor(0.5 * 9) = 4
    assert_eq!(ramp.index_for_luminance(0.25), 6);
    assert_eq!(ramp.index_for_luminance(0.5), 4);
    assert_eq!(ramp.glyph_for_luminance(0.75), '2');
}

#[test]
fn luminance_weights_channels() {
    assert!((luminance(255, 255, 255) - 1.0).abs() < 1e-6);
    assert_eq!(luminance(0, 0, 0), 0.0);
    assert!((luminance(255, 0, 0) - 0.3).abs() < 1e-6);
    assert!((luminance(0, 255, 0) - 0.6).abs() < 1e-6);
    assert!((luminance(0, 0, 255) - 0.1).abs() < 1e-6);
}

#[test]
fn single_glyph_ramp_never_panics() {
    let ramp = GlyphRamp::new("#", true);
    for l in SAMPLES {
        assert_eq!(ramp.glyph_for_luminance(l), '#');
    }
}

#[test]
fn asciify_ends_every_row_with_newline() {
    let ramp = GlyphRamp::new("ab", false);
    let grid = GridSize { cols: 2, rows: 2 };
    #[rustfmt::skip]
    let pixels = [
        255, 255, 255, 255,   9, 9, 9, 0,
        0, 0, 0, 255,         255, 255, 255, 0,
    ];
    let mut out = String::from("stale");
    asciify(&pixels, grid, &ramp, &mut out);
    assert_eq!(out, "a \nb \n");
}

#[test]
fn asciify_pads_short_buffers_and_handles_empty_grid() {
    let ramp = GlyphRamp::new("ab", false);
    let mut out = String::new();
    asciify(&[255, 255, 255, 255], GridSize { cols: 3, rows: 1 }, &ramp, &mut out);
    assert_eq!(out, "a  \n");

    asciify(&[255, 255, 255, 255], GridSize::default(), &ramp, &mut out);
    assert!(out.is_empty());
}
