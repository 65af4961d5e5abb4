use super::constants::*;
use glam::{Vec2, Vec3};

/// Interleaved vertex as uploaded to the GPU: position then texture coords.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PlaneVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// Subdivided plane in the XY plane, centred on the origin and facing +Z.
///
/// Texture coordinates put `v = 0` on the top edge, matching row-major
/// image uploads. Triangles are wound counter-clockwise seen from +Z.
#[derive(Clone, Debug)]
pub struct PlaneGeometry {
    pub width: f32,
    pub height: f32,
    pub segments_x: u32,
    pub segments_y: u32,
    pub vertices: Vec<PlaneVertex>,
    pub indices: Vec<u32>,
}

impl PlaneGeometry {
    pub fn new(width: f32, height: f32, segments_x: u32, segments_y: u32) -> Self {
        let gx = segments_x.max(1);
        let gy = segments_y.max(1);
        let seg_w = width / gx as f32;
        let seg_h = height / gy as f32;
        let half_w = width * 0.5;
        let half_h = height * 0.5;

        let mut vertices = Vec::with_capacity(((gx + 1) * (gy + 1)) as usize);
        for iy in 0..=gy {
            let y = iy as f32 * seg_h - half_h;
            for ix in 0..=gx {
                let x = ix as f32 * seg_w - half_w;
                vertices.push(PlaneVertex {
                    position: [x, -y, 0.0],
                    uv: [ix as f32 / gx as f32, iy as f32 / gy as f32],
                });
            }
        }

        let row = gx + 1;
        let mut indices = Vec::with_capacity((gx * gy * 6) as usize);
        for iy in 0..gy {
            for ix in 0..gx {
                let a = ix + row * iy;
                let b = ix + row * (iy + 1);
                let c = (ix + 1) + row * (iy + 1);
                let d = (ix + 1) + row * iy;
                indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }

        Self {
            width,
            height,
            segments_x: gx,
            segments_y: gy,
            vertices,
            indices,
        }
    }

    /// Plane whose aspect matches the text raster, `base_height` tall.
    pub fn for_text(text_aspect: f32, base_height: f32) -> Self {
        let (w, h) = plane_size(text_aspect, base_height);
        Self::new(w, h, PLANE_SEGMENTS, PLANE_SEGMENTS)
    }
}

#[inline]
pub fn plane_size(text_aspect: f32, base_height: f32) -> (f32, f32) {
    let aspect = if text_aspect.is_finite() && text_aspect > 0.0 {
        text_aspect
    } else {
        1.0
    };
    (base_height * aspect, base_height)
}

/// Periodic offset for a base vertex at shader time `t`.
#[inline]
pub fn wave_offset(p: Vec3, t: f32) -> Vec3 {
    let time = t * WAVE_TIME_SCALE;
    Vec3::new(
        (time + p.y).sin() * WAVE_AMPLITUDE_X,
        (time + p.z).cos() * WAVE_AMPLITUDE_Y,
        (time + p.x).sin() * WAVE_AMPLITUDE_Z,
    )
}

/// Displaced position. With waves disabled the base position is returned
/// untouched, bit for bit.
#[inline]
pub fn displace(p: Vec3, t: f32, waves: bool) -> Vec3 {
    if !waves {
        return p;
    }
    p + wave_offset(p, t)
}

/// Write displaced copies of `base` into `out`, reusing its allocation.
pub fn displace_into(base: &[PlaneVertex], t: f32, waves: bool, out: &mut Vec<PlaneVertex>) {
    out.clear();
    out.extend(base.iter().map(|v| PlaneVertex {
        position: displace(Vec3::from_array(v.position), t, waves).to_array(),
        uv: v.uv,
    }));
}

/// Shader clock: the sine of elapsed seconds, so motion oscillates.
#[inline]
pub fn shader_time(elapsed_sec: f64) -> f32 {
    elapsed_sec.sin() as f32
}

/// Linear remap of `n` from `[start, stop]` to `[start2, stop2]`. A
/// degenerate source range maps to the midpoint of the target range.
#[inline]
pub fn map_range(n: f32, start: f32, stop: f32, start2: f32, stop2: f32) -> f32 {
    let span = stop - start;
    if span == 0.0 || !span.is_finite() {
        return (start2 + stop2) * 0.5;
    }
    ((n - start) / span) * (stop2 - start2) + start2
}

/// Target plane rotation (x, y) in radians for a pointer in container space.
///
/// Vertical pointer position maps inversely onto x-rotation, horizontal
/// position directly onto y-rotation, each spanning `[-0.5, 0.5]`.
pub fn rotation_target(pointer: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        map_range(pointer.y, 0.0, height, ROTATION_RANGE, -ROTATION_RANGE),
        map_range(pointer.x, 0.0, width, -ROTATION_RANGE, ROTATION_RANGE),
    )
}

/// Pointer angle around the container centre, in degrees.
#[inline]
pub fn hue_target_deg(offset: Vec2) -> f32 {
    offset.y.atan2(offset.x).to_degrees()
}

/// Scalar phase fed to the fragment ripple; the same angle in radians.
#[inline]
pub fn mouse_phase(offset: Vec2) -> f32 {
    offset.y.atan2(offset.x)
}
