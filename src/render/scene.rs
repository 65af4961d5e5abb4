use super::helpers;
use super::plane::{PlaneResources, PlaneUniforms};
use crate::core::{displace_into, PlaneGeometry, PlaneVertex, Release};
use glam::{Mat4, Vec2};
use wgpu::util::DeviceExt;

/// Vertex/index buffers for one plane plus the CPU-side base positions the
/// wave displacement is computed from.
pub struct Geometry {
    base: PlaneGeometry,
    scratch: Vec<PlaneVertex>,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    released: bool,
}

impl Geometry {
    pub fn new(device: &wgpu::Device, base: PlaneGeometry) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("plane_vertices"),
            contents: bytemuck::cast_slice(&base.vertices),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("plane_indices"),
            contents: bytemuck::cast_slice(&base.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            index_count: base.indices.len() as u32,
            scratch: Vec::with_capacity(base.vertices.len()),
            base,
            vertex_buffer,
            index_buffer,
            released: false,
        }
    }

    /// Rewrite the vertex buffer with positions displaced for shader time `t`.
    pub fn write_displaced(&mut self, queue: &wgpu::Queue, t: f32, waves: bool) {
        displace_into(&self.base.vertices, t, waves, &mut self.scratch);
        queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&self.scratch));
    }

    pub fn base(&self) -> &PlaneGeometry {
        &self.base
    }
}

impl Release for Geometry {
    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        self.vertex_buffer.destroy();
        self.index_buffer.destroy();
    }
}

/// Text texture, its bind group and the per-mesh uniforms.
pub struct Material {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    uniform_buffer: wgpu::Buffer,
    texture: wgpu::Texture,
    pub time: f32,
    pub mouse: f32,
    released: bool,
}

impl Material {
    pub(crate) fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        res: &PlaneResources,
        tex_width: u32,
        tex_height: u32,
        pixels: &[u8],
    ) -> Self {
        let (texture, view) = helpers::create_color_texture(
            device,
            "text_tex",
            tex_width,
            tex_height,
            wgpu::TextureFormat::Rgba8Unorm,
            wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        );
        helpers::upload_rgba8(queue, &texture, tex_width, tex_height, pixels);
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("plane_uniforms"),
            size: std::mem::size_of::<PlaneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("plane_bg"),
            layout: &res.bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&res.sampler),
                },
            ],
        });
        Self {
            pipeline: res.pipeline.clone(),
            bind_group,
            uniform_buffer,
            texture,
            time: 0.0,
            mouse: 1.0,
            released: false,
        }
    }

    fn write_uniforms(&self, queue: &wgpu::Queue, mvp: Mat4) {
        let u = PlaneUniforms {
            mvp: mvp.to_cols_array_2d(),
            time: self.time,
            mouse: self.mouse,
            _pad: [0.0; 2],
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }
}

impl Release for Material {
    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        self.uniform_buffer.destroy();
        self.texture.destroy();
    }
}

pub struct Mesh {
    pub geometry: Geometry,
    pub material: Material,
    /// Euler rotation (x, y) in radians.
    pub rotation: Vec2,
}

impl Mesh {
    pub fn new(geometry: Geometry, material: Material) -> Self {
        Self {
            geometry,
            material,
            rotation: Vec2::ZERO,
        }
    }

    pub(crate) fn prepare(&self, queue: &wgpu::Queue, view_proj: Mat4) {
        let model = crate::core::model_matrix(self.rotation);
        self.material.write_uniforms(queue, view_proj * model);
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.material.pipeline);
        rpass.set_bind_group(0, &self.material.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.geometry.vertex_buffer.slice(..));
        rpass.set_index_buffer(self.geometry.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.geometry.index_count, 0, 0..1);
    }
}

impl Release for Mesh {
    fn release(&mut self) {
        self.geometry.release();
        self.material.release();
    }
}

/// Root of the render tree: scene -> mesh -> {geometry, material}.
#[derive(Default)]
pub struct Scene {
    meshes: Vec<Mesh>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, mesh: Mesh) -> usize {
        self.meshes.push(mesh);
        self.meshes.len() - 1
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    pub fn mesh_mut(&mut self, index: usize) -> Option<&mut Mesh> {
        self.meshes.get_mut(index)
    }

    /// Release and drop the mesh at `index`. Out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) {
        if index < self.meshes.len() {
            self.meshes.remove(index).release();
        }
    }
}

impl Release for Scene {
    /// Walk every mesh once, release its handles, then empty the scene.
    fn release(&mut self) {
        for mesh in &mut self.meshes {
            mesh.release();
        }
        self.meshes.clear();
    }
}
