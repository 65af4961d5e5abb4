use glam::Vec2;

/// Last pointer/touch position relative to one container.
///
/// Until the first move the pointer sits at the container centre, so the
/// plane rests facing the camera and the hue target is defined.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    position: Vec2,
    size: Vec2,
    moved: bool,
}

impl PointerState {
    pub fn new(width: f32, height: f32) -> Self {
        let mut s = Self::default();
        s.set_box(width, height);
        s
    }

    /// Track a new container box. An untouched pointer follows the centre.
    pub fn set_box(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width.max(0.0), height.max(0.0));
        if !self.moved {
            self.position = self.center();
        }
    }

    /// Record a move given viewport client coordinates and the container's
    /// top-left corner in the same space.
    pub fn move_client(&mut self, client_x: f32, client_y: f32, origin_left: f32, origin_top: f32) {
        self.position = Vec2::new(client_x - origin_left, client_y - origin_top);
        self.moved = true;
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.size * 0.5
    }

    #[inline]
    pub fn offset_from_center(&self) -> Vec2 {
        self.position - self.center()
    }

    #[inline]
    pub fn has_moved(&self) -> bool {
        self.moved
    }
}
