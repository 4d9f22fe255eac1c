use glam::Vec3;

use crate::renderer::instance::CameraInstance;

/// Perspective camera looking from `position` at `target`, Y-up.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    pub target: Vec3,
    /// Vertical field of view in degrees.
    pub fov: f32,
    /// Width / height of the viewport.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl PerspectiveCamera {
    pub fn new(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            target: Vec3::NEG_Z,
            fov,
            aspect,
            near,
            far,
        }
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Re-derive the aspect ratio from viewport dimensions.
    /// A zero-sized viewport (minimized tab) keeps the previous ratio.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Wire representation for the host.
    pub fn instance(&self) -> CameraInstance {
        CameraInstance {
            position: self.position.to_array(),
            fov: self.fov,
            target: self.target.to_array(),
            aspect: self.aspect,
            near: self.near,
            far: self.far,
            _reserved: [0.0; 6],
        }
    }
}
