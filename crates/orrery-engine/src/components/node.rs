use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::Serialize;

use crate::api::types::NodeId;
use crate::components::geometry::Geometry;
use crate::components::material::Material;

/// Local transform of a scene node relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transform {
    pub position: Vec3,
    /// Euler angles in radians, applied X then Y then Z (intrinsic).
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Local-to-parent matrix.
    pub fn matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.position)
    }
}

/// What the host draws for a node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Visual {
    pub geometry: Geometry,
    pub material: Material,
}

/// A node in the scene tree. Nodes without a visual are groups or pivots.
#[derive(Debug, Clone)]
pub struct Node {
    /// Name for lookups and host-side debugging.
    pub tag: String,
    pub transform: Transform,
    pub visual: Option<Visual>,
    /// Hidden nodes (and their subtrees) are skipped by the host.
    pub visible: bool,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    /// An empty transform node (orbit group, satellite pivot).
    pub fn group(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            transform: Transform::default(),
            visual: None,
            visible: true,
            parent: None,
            children: Vec::new(),
        }
    }

    /// A drawable node.
    pub fn mesh(tag: impl Into<String>, geometry: Geometry, material: Material) -> Self {
        Self {
            visual: Some(Visual { geometry, material }),
            ..Self::group(tag)
        }
    }

    // -- Builder pattern --

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.transform.rotation = rotation;
        self
    }

    /// Current material opacity, 1.0 for groups.
    pub fn opacity(&self) -> f32 {
        self.visual.as_ref().map_or(1.0, |v| v.material.opacity)
    }

    /// Mutable access to the material, if the node has one.
    pub fn material_mut(&mut self) -> Option<&mut Material> {
        self.visual.as_mut().map(|v| &mut v.material)
    }
}
