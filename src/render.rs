use crate::constants::CLEAR_RGBA;
use crate::core::{Camera, EffectError, Release};
use web_sys as web;

mod helpers;
mod plane;
mod scene;

pub(crate) use plane::{create_plane_resources, PlaneResources};
pub use scene::{Geometry, Material, Mesh, Scene};

/// WebGPU device bound to an offscreen canvas: the backing surface the text
/// plane is rendered into before the glyph filter samples it.
pub struct Renderer {
    canvas: web::HtmlCanvasElement,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    max_side: u32,
    released: bool,
}

impl Renderer {
    pub async fn new(canvas: web::HtmlCanvasElement, width: u32, height: u32) -> anyhow::Result<Self> {
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(EffectError::NoAdapter)?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: Some("ascii_text_device"),
                },
                None,
            )
            .await
            .map_err(|e| EffectError::Device(format!("{:?}", e)))?;

        let max_side = device.limits().max_texture_dimension_2d;
        let (width, height) = fit_surface(width, height, max_side);
        canvas.set_width(width);
        canvas.set_height(height);

        let caps = surface.get_capabilities(&adapter);
        let format = helpers::pick_surface_format(&caps.formats).ok_or(EffectError::NoSurfaceFormat)?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: helpers::pick_alpha_mode(&caps.alpha_modes),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "[gpu] surface {}x{} format={:?} alpha={:?}",
            width,
            height,
            format,
            config.alpha_mode
        );

        Ok(Self {
            canvas,
            surface,
            device,
            queue,
            config,
            max_side,
            released: false,
        })
    }

    /// Largest texture or surface side the device accepts.
    #[inline]
    pub fn max_texture_side(&self) -> u32 {
        self.max_side
    }

    #[inline]
    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    #[inline]
    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    #[inline]
    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// The canvas holding the most recent frame.
    #[inline]
    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    /// Resize the backing surface. Zero sides are ignored; larger than the
    /// device limit is clamped.
    pub fn set_size(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 || self.released {
            return;
        }
        let (width, height) = fit_surface(width, height, self.max_side);
        if width != self.config.width || height != self.config.height {
            self.canvas.set_width(width);
            self.canvas.set_height(height);
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Draw every mesh of `scene` as seen by `camera` into the surface.
    ///
    /// A lost or outdated surface is reconfigured and the frame skipped;
    /// other surface errors are returned as fatal.
    pub fn render(&mut self, scene: &Scene, camera: &Camera) -> anyhow::Result<()> {
        if self.released {
            return Ok(());
        }
        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[gpu] surface lost/outdated; reconfiguring");
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::debug!("[gpu] surface timeout; skipping frame");
                return Ok(());
            }
            Err(e) => return Err(anyhow::anyhow!("surface error: {:?}", e)),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let view_proj = camera.view_projection();
        for mesh in scene.meshes() {
            mesh.prepare(&self.queue, view_proj);
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("ascii_encoder"),
            });
        {
            let [r, g, b, a] = CLEAR_RGBA;
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("plane_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            for mesh in scene.meshes() {
                mesh.draw(&mut rpass);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl Release for Renderer {
    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        self.device.destroy();
        log::debug!("[dispose] GPU device destroyed");
    }
}

fn fit_surface(width: u32, height: u32, max_side: u32) -> (u32, u32) {
    let max_side = max_side.max(1);
    if width > max_side || height > max_side {
        log::warn!("[gpu] surface {}x{} clamped to {} px", width, height, max_side);
    }
    (width.clamp(1, max_side), height.clamp(1, max_side))
}
