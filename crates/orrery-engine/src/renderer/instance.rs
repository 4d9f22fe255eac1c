use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// Per-node render data written into the frame buffer for the host renderer.
/// Must match the host protocol: 20 floats = 80 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct NodeInstance {
    /// World matrix, column-major.
    pub world: [f32; 16],
    /// Current material opacity (1.0 for groups).
    pub opacity: f32,
    /// 1.0 when the node and all its ancestors are visible, else 0.0.
    pub visible: f32,
    pub _reserved: [f32; 2],
}

impl NodeInstance {
    pub const FLOATS: usize = 20;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn new(world: Mat4, opacity: f32, visible: bool) -> Self {
        Self {
            world: world.to_cols_array(),
            opacity,
            visible: if visible { 1.0 } else { 0.0 },
            _reserved: [0.0; 2],
        }
    }
}

impl Default for NodeInstance {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, 1.0, true)
    }
}

/// Camera block of the frame buffer: 16 floats.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct CameraInstance {
    pub position: [f32; 3],
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub target: [f32; 3],
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub _reserved: [f32; 6],
}

impl CameraInstance {
    pub const FLOATS: usize = 16;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_instance_is_20_floats() {
        assert_eq!(std::mem::size_of::<NodeInstance>(), NodeInstance::STRIDE_BYTES);
        assert_eq!(NodeInstance::FLOATS, 20);
    }

    #[test]
    fn camera_instance_is_16_floats() {
        assert_eq!(std::mem::size_of::<CameraInstance>(), CameraInstance::FLOATS * 4);
    }

    #[test]
    fn world_matrix_is_column_major() {
        let inst = NodeInstance::new(Mat4::from_translation(glam::Vec3::new(1.0, 2.0, 3.0)), 0.5, false);
        assert_eq!(&inst.world[12..15], &[1.0, 2.0, 3.0]);
        assert_eq!(inst.opacity, 0.5);
        assert_eq!(inst.visible, 0.0);
    }
}
