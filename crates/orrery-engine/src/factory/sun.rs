use crate::api::types::{Color, NodeId};
use crate::assets::textures::TextureLoader;
use crate::bodies::SUN_TEXTURE;
use crate::components::geometry::Geometry;
use crate::components::material::{Material, Side};
use crate::components::node::Node;
use crate::core::scene::SceneGraph;

pub const SUN_RADIUS: f32 = 15.0;
pub const GLOW_RADIUS: f32 = 16.5;
pub const OUTER_GLOW_RADIUS: f32 = 25.0;

/// Nodes making up the sun. Both glow shells are children of `sun`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunNodes {
    pub sun: NodeId,
    pub glow: NodeId,
    pub outer_glow: NodeId,
}

/// Textured unlit sphere wrapped in two additive back-face shells.
pub fn create_sun(graph: &mut SceneGraph, parent: NodeId, loader: &mut dyn TextureLoader) -> SunNodes {
    let map = loader.load(SUN_TEXTURE);
    let sun = graph.add(
        parent,
        Node::mesh(
            "sun",
            Geometry::sphere(SUN_RADIUS, 64, 64),
            Material::unlit(Color(0xffeebb)).with_map(map),
        ),
    );

    let glow = graph.add(sun, glow_shell("sun-glow", GLOW_RADIUS, Color(0xffaa00), 0.15));
    let outer_glow = graph.add(sun, glow_shell("sun-outer-glow", OUTER_GLOW_RADIUS, Color(0xff4400), 0.08));

    SunNodes { sun, glow, outer_glow }
}

fn glow_shell(tag: &str, radius: f32, color: Color, opacity: f32) -> Node {
    Node::mesh(
        tag,
        Geometry::sphere(radius, 32, 32),
        Material::unlit(color)
            .with_opacity(opacity)
            .with_side(Side::Back)
            .additive(),
    )
}
