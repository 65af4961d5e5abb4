// Host-side tests for plane geometry, wave displacement and the camera rig.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod effect_core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
    pub mod camera {
        include!("../src/core/camera.rs");
    }
}

use effect_core::camera::*;
use effect_core::constants::*;
use effect_core::geometry::*;
use glam::{Mat4, Vec2, Vec3, Vec4};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn plane_layout_and_uvs() {
    let g = PlaneGeometry::new(2.0, 1.0, 2, 2);
    assert_eq!(g.vertices.len(), 9);
    assert_eq!(g.indices.len(), 24);
    assert_eq!(g.vertices[0].position, [-1.0, 0.5, 0.0]);
    assert_eq!(g.vertices[0].uv, [0.0, 0.0]);
    assert_eq!(g.vertices[8].position, [1.0, -0.5, 0.0]);
    assert_eq!(g.vertices[8].uv, [1.0, 1.0]);
    assert!(g.indices.iter().all(|&i| (i as usize) < g.vertices.len()));
}

#[test]
fn text_plane_matches_text_aspect() {
    let g = PlaneGeometry::for_text(2.5, DEFAULT_PLANE_BASE_HEIGHT);
    assert!(approx(g.width / g.height, 2.5));
    assert!(approx(g.height, DEFAULT_PLANE_BASE_HEIGHT));
    let n = (PLANE_SEGMENTS + 1) as usize;
    assert_eq!(g.vertices.len(), n * n);
}

#[test]
fn bad_aspect_falls_back_to_square() {
    assert_eq!(plane_size(f32::NAN, 8.0), (8.0, 8.0));
    assert_eq!(plane_size(0.0, 8.0), (8.0, 8.0));
}

#[test]
fn waves_off_is_exactly_the_base_geometry() {
    let g = PlaneGeometry::for_text(3.0, 8.0);
    let mut out = Vec::new();
    for t in [0.0, 0.3, -0.77, 1.0, 123.456] {
        displace_into(&g.vertices, t, false, &mut out);
        assert_eq!(out, g.vertices, "t={}", t);
    }
}

#[test]
fn waves_on_moves_vertices() {
    assert_eq!(wave_offset(Vec3::ZERO, 0.0), Vec3::new(0.0, WAVE_AMPLITUDE_Y, 0.0));
    let p = Vec3::new(1.0, 2.0, 0.0);
    let d = displace(p, 0.4, true);
    let time = 0.4 * WAVE_TIME_SCALE;
    assert!(approx(d.x, 1.0 + (time + 2.0).sin() * WAVE_AMPLITUDE_X));
    assert!(approx(d.y, 2.0 + time.cos() * WAVE_AMPLITUDE_Y));
    assert!(approx(d.z, (time + 1.0).sin() * WAVE_AMPLITUDE_Z));
}

#[test]
fn displacement_keeps_uvs() {
    let g = PlaneGeometry::new(4.0, 2.0, 3, 3);
    let mut out = Vec::new();
    displace_into(&g.vertices, 0.9, true, &mut out);
    assert_eq!(out.len(), g.vertices.len());
    for (a, b) in out.iter().zip(&g.vertices) {
        assert_eq!(a.uv, b.uv);
    }
}

#[test]
fn shader_time_oscillates() {
    assert_eq!(shader_time(0.0), 0.0);
    for s in [0.5, 10.0, 1e4] {
        let t = shader_time(s);
        assert!((-1.0..=1.0).contains(&t));
    }
}

#[test]
fn rotation_target_spans_half_radian() {
    let (w, h) = (400.0, 200.0);
    assert_eq!(rotation_target(Vec2::new(200.0, 100.0), w, h), Vec2::ZERO);
    assert_eq!(rotation_target(Vec2::new(0.0, 0.0), w, h), Vec2::new(0.5, -0.5));
    assert_eq!(rotation_target(Vec2::new(400.0, 200.0), w, h), Vec2::new(-0.5, 0.5));
}

#[test]
fn map_range_guards_degenerate_source() {
    assert_eq!(map_range(3.0, 0.0, 0.0, -1.0, 1.0), 0.0);
    assert_eq!(map_range(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
    assert_eq!(rotation_target(Vec2::new(10.0, 10.0), 0.0, 0.0), Vec2::ZERO);
}

#[test]
fn hue_and_phase_are_the_pointer_angle() {
    assert!(approx(hue_target_deg(Vec2::new(0.0, 1.0)), 90.0));
    assert!(approx(hue_target_deg(Vec2::new(-1.0, 0.0)), 180.0));
    assert!(approx(mouse_phase(Vec2::new(0.0, 1.0)), std::f32::consts::FRAC_PI_2));
    assert_eq!(hue_target_deg(Vec2::ZERO), 0.0);
}

#[test]
fn camera_viewport_ignores_empty_boxes() {
    let mut cam = Camera::default();
    assert_eq!(cam.eye, Vec3::new(0.0, 0.0, CAMERA_Z));
    cam.set_viewport(0.0, 0.0);
    assert_eq!(cam.aspect, 1.0);
    cam.set_viewport(200.0, 100.0);
    assert_eq!(cam.aspect, 2.0);
    cam.set_viewport(100.0, 0.0);
    assert_eq!(cam.aspect, 2.0);
}

#[test]
fn origin_projects_to_clip_centre() {
    let cam = Camera::default();
    let clip = cam.view_projection() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!(approx(clip.x, 0.0) && approx(clip.y, 0.0));
    assert!(approx(clip.w, CAMERA_Z));
}

#[test]
fn rest_pose_model_matrix_is_identity() {
    assert_eq!(model_matrix(Vec2::ZERO), Mat4::IDENTITY);
    let m = model_matrix(Vec2::new(0.0, std::f32::consts::FRAC_PI_2));
    let x = m.transform_vector3(Vec3::X);
    assert!(approx(x.z, -1.0));
}
