use crate::core::{
    mouse_phase, rotation_target, shader_time, Camera, Damped, PlaneGeometry, PointerState,
    Release, ROTATION_DAMPING,
};
use crate::render::{create_plane_resources, Geometry, Material, Mesh, PlaneResources, Renderer, Scene};
use crate::text_texture::TextTexture;
use glam::Vec2;
use instant::Instant;

/// The text plane: owns the scene graph, the camera and the text raster the
/// plane is textured with.
pub struct DisplacedSurface {
    scene: Scene,
    camera: Camera,
    text: TextTexture,
    res: PlaneResources,
    mesh: usize,
    rotation: Damped<Vec2>,
    waves: bool,
    base_height: f32,
    clock: Instant,
}

impl DisplacedSurface {
    pub fn new(
        renderer: &Renderer,
        mut text: TextTexture,
        base_height: f32,
        waves: bool,
    ) -> anyhow::Result<Self> {
        let res = create_plane_resources(renderer.device(), renderer.format());
        let mesh = build_mesh(renderer, &res, &text, base_height)?;
        text.take_dirty();
        let mut scene = Scene::new();
        let index = scene.add(mesh);
        log::info!(
            "[init] text plane {}x{} px raster, base height {}",
            text.width(),
            text.height(),
            base_height
        );
        Ok(Self {
            scene,
            camera: Camera::default(),
            text,
            res,
            mesh: index,
            rotation: Damped::new(Vec2::ZERO, ROTATION_DAMPING),
            waves,
            base_height,
            clock: Instant::now(),
        })
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.camera.set_viewport(width, height);
    }

    /// Swap the displayed string. The plane is rebuilt on the next update.
    pub fn set_text(&mut self, text: &str) -> anyhow::Result<()> {
        if self.text.set_text(text)? {
            log::debug!("[text] raster now {}x{}", self.text.width(), self.text.height());
        }
        Ok(())
    }

    /// Per-frame step: advance time, ease the rotation toward the pointer and
    /// displace the vertices.
    pub fn update(&mut self, renderer: &Renderer, pointer: &PointerState) -> anyhow::Result<()> {
        if self.text.take_dirty() {
            self.rebuild(renderer)?;
        }
        let t = shader_time(self.clock.elapsed().as_secs_f64());
        let size = pointer.size();
        let rotation = self
            .rotation
            .step(rotation_target(pointer.position(), size.x, size.y));
        let phase = mouse_phase(pointer.offset_from_center());

        if let Some(mesh) = self.scene.mesh_mut(self.mesh) {
            mesh.rotation = rotation;
            if self.waves {
                mesh.geometry.write_displaced(renderer.queue(), t, true);
            }
            mesh.material.time = t;
            mesh.material.mouse = phase;
        }
        Ok(())
    }

    fn rebuild(&mut self, renderer: &Renderer) -> anyhow::Result<()> {
        let mesh = build_mesh(renderer, &self.res, &self.text, self.base_height)?;
        self.scene.remove(self.mesh);
        self.mesh = self.scene.add(mesh);
        if let Some(mesh) = self.scene.mesh_mut(self.mesh) {
            mesh.rotation = self.rotation.value();
            let plane = mesh.geometry.base();
            log::debug!("[text] plane rebuilt {:.2}x{:.2}", plane.width, plane.height);
        }
        Ok(())
    }

    #[inline]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }
}

impl Release for DisplacedSurface {
    fn release(&mut self) {
        self.scene.release();
    }
}

fn build_mesh(
    renderer: &Renderer,
    res: &PlaneResources,
    text: &TextTexture,
    base_height: f32,
) -> anyhow::Result<Mesh> {
    let pixels = text.pixels()?;
    let geometry = Geometry::new(renderer.device(), PlaneGeometry::for_text(text.aspect(), base_height));
    let material = Material::new(
        renderer.device(),
        renderer.queue(),
        res,
        text.width(),
        text.height(),
        &pixels,
    );
    Ok(Mesh::new(geometry, material))
}
