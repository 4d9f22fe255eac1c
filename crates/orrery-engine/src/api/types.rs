use serde::{Deserialize, Serialize};

/// Index of a node in the [`SceneGraph`](crate::core::scene::SceneGraph) arena.
/// Only the graph hands these out, so a `NodeId` is always valid for the graph
/// that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Position of the node in arena (and wire) order.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Handle for a texture requested through a [`TextureLoader`](crate::assets::textures::TextureLoader).
/// Indexes the texture list of the scene manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TextureId(pub u32);

/// Packed `0xRRGGBB` colour, the notation the host library expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Self = Self(0xffffff);

    /// Linear channels in [0, 1].
    pub fn to_rgb(self) -> [f32; 3] {
        [
            ((self.0 >> 16) & 0xff) as f32 / 255.0,
            ((self.0 >> 8) & 0xff) as f32 / 255.0,
            (self.0 & 0xff) as f32 / 255.0,
        ]
    }
}
