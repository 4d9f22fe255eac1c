use serde::Serialize;

use crate::api::error::OrreryError;
use crate::api::stage::{Fog, RendererSettings};
use crate::api::types::NodeId;
use crate::assets::textures::TextureQueue;
use crate::bridge::protocol::PROTOCOL_VERSION;
use crate::components::node::Visual;
use crate::core::scene::SceneGraph;
use crate::renderer::camera::PerspectiveCamera;
use crate::systems::lighting::Light;

/// One-time scene description for the host.
/// The host builds its objects from this, then only reads per-frame
/// transforms from the frame buffer.
#[derive(Debug, Serialize)]
pub struct SceneManifest<'a> {
    pub protocol_version: f32,
    pub renderer: &'a RendererSettings,
    pub camera: CameraManifest,
    pub fog: Fog,
    pub lights: &'a [Light],
    /// Texture URLs; `TextureId(n)` refers to entry n.
    pub textures: &'a [String],
    /// Every node, in arena (and frame buffer) order.
    pub nodes: Vec<NodeManifest<'a>>,
    /// Node whose point positions are streamed each frame.
    pub dust_node: usize,
    /// Overlay panel ids in segment order.
    pub overlay_ids: &'a [String],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CameraManifest {
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

#[derive(Debug, Serialize)]
pub struct NodeManifest<'a> {
    pub index: usize,
    pub parent: Option<usize>,
    pub tag: &'a str,
    pub visible: bool,
    pub visual: Option<&'a Visual>,
}

/// Inputs gathered from the show.
pub struct ManifestSources<'a> {
    pub graph: &'a SceneGraph,
    pub camera: &'a PerspectiveCamera,
    pub fog: Fog,
    pub lights: &'a [Light],
    pub renderer: &'a RendererSettings,
    pub textures: &'a TextureQueue,
    pub dust_node: NodeId,
    pub overlay_ids: &'a [String],
}

impl<'a> SceneManifest<'a> {
    pub fn new(sources: ManifestSources<'a>) -> Self {
        let nodes = sources
            .graph
            .iter()
            .map(|(id, node)| NodeManifest {
                index: id.index(),
                parent: sources.graph.parent(id).map(NodeId::index),
                tag: &node.tag,
                visible: node.visible,
                visual: node.visual.as_ref(),
            })
            .collect();

        Self {
            protocol_version: PROTOCOL_VERSION,
            renderer: sources.renderer,
            camera: CameraManifest {
                fov: sources.camera.fov,
                aspect: sources.camera.aspect,
                near: sources.camera.near,
                far: sources.camera.far,
            },
            fog: sources.fog,
            lights: sources.lights,
            textures: sources.textures.urls(),
            nodes,
            dust_node: sources.dust_node.index(),
            overlay_ids: sources.overlay_ids,
        }
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, OrreryError> {
        serde_json::to_string(self).map_err(OrreryError::ManifestSerialize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Color;
    use crate::assets::textures::TextureLoader;
    use crate::components::geometry::Geometry;
    use crate::components::material::Material;
    use crate::components::node::Node;
    use crate::systems::lighting::LightRig;

    #[test]
    fn manifest_lists_nodes_in_arena_order() {
        let mut graph = SceneGraph::new();
        let mut textures = TextureQueue::new();
        let map = textures.load("sun.jpg");
        let sun = graph.add(
            graph.root(),
            Node::mesh("sun", Geometry::sphere(15.0, 64, 64), Material::unlit(Color(0xffeebb)).with_map(map)),
        );
        let glow = graph.add(sun, Node::group("glow"));

        let camera = PerspectiveCamera::new(60.0, 2.0, 0.1, 5000.0);
        let lights = LightRig::solar();
        let renderer = RendererSettings::new(2.0);
        let ids = vec!["info-intro".to_owned()];
        let manifest = SceneManifest::new(ManifestSources {
            graph: &graph,
            camera: &camera,
            fog: Fog::default(),
            lights: lights.as_slice(),
            renderer: &renderer,
            textures: &textures,
            dust_node: glow,
            overlay_ids: &ids,
        });

        let json: serde_json::Value = serde_json::from_str(&manifest.to_json().unwrap()).unwrap();
        assert_eq!(json["protocol_version"], 1.0);
        assert_eq!(json["nodes"].as_array().unwrap().len(), 3);
        assert_eq!(json["nodes"][0]["parent"], serde_json::Value::Null);
        assert_eq!(json["nodes"][1]["tag"], "sun");
        assert_eq!(json["nodes"][1]["visual"]["geometry"]["kind"], "sphere");
        assert_eq!(json["nodes"][1]["visual"]["material"]["map"], 0);
        assert_eq!(json["nodes"][2]["parent"], 1);
        assert_eq!(json["textures"][0], "sun.jpg");
        assert_eq!(json["dust_node"], 2);
        assert_eq!(json["fog"]["color"], 0x05050a);
        assert_eq!(json["lights"].as_array().unwrap().len(), 3);
        assert_eq!(json["renderer"]["power_preference"], "high-performance");
        assert_eq!(json["camera"]["far"], 5000.0);
    }
}
