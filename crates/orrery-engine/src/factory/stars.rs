use glam::Vec3;

use crate::api::config::DustConfig;
use crate::api::types::{Color, NodeId};
use crate::components::geometry::{Geometry, PointCloud};
use crate::components::material::Material;
use crate::components::node::Node;
use crate::core::rng::Rng;
use crate::core::scene::SceneGraph;

/// Parameters of one star layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarLayerSpec {
    pub count: usize,
    pub size: f32,
    pub color: Color,
    /// Edge length of the cube the points are scattered in.
    pub spread: f32,
}

/// Dense faint stars far out, sparse bright ones closer in.
pub const STAR_LAYERS: [StarLayerSpec; 3] = [
    StarLayerSpec { count: 5000, size: 0.4, color: Color(0xffffff), spread: 2000.0 },
    StarLayerSpec { count: 2000, size: 0.8, color: Color(0xaaccff), spread: 1500.0 },
    StarLayerSpec { count: 1000, size: 1.2, color: Color(0xffccaa), spread: 1000.0 },
];

pub const STAR_OPACITY: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarLayer {
    pub node: NodeId,
    /// Point size the layer was created with.
    pub original_size: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StarField {
    pub layers: Vec<StarLayer>,
}

impl StarField {
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.layers.iter().map(|l| l.node)
    }
}

pub fn create_stars(graph: &mut SceneGraph, parent: NodeId, rng: &mut Rng) -> StarField {
    let layers = STAR_LAYERS
        .iter()
        .enumerate()
        .map(|(i, def)| {
            let positions = (0..def.count)
                .map(|_| Vec3::new(rng.centered(def.spread), rng.centered(def.spread), rng.centered(def.spread)))
                .collect();
            let size_phases = (0..def.count).map(|_| rng.next_f32()).collect();
            let cloud = PointCloud { positions, size_phases, base_size: def.size };
            let material = Material::points(def.color, def.size)
                .with_opacity(STAR_OPACITY)
                .additive();
            let node = graph.add(parent, Node::mesh(format!("stars-{i}"), Geometry::Points(cloud), material));
            StarLayer { node, original_size: def.size }
        })
        .collect();

    StarField { layers }
}

pub const DUST_COLOR: Color = Color(0x88ccff);
pub const DUST_SIZE: f32 = 0.6;
pub const DUST_OPACITY: f32 = 0.4;

/// Drifting dust: x and y centred on the axis, depth in [0, spread.z).
pub fn create_stardust(graph: &mut SceneGraph, parent: NodeId, rng: &mut Rng, config: &DustConfig) -> NodeId {
    let positions = (0..config.count)
        .map(|_| {
            Vec3::new(
                rng.centered(config.spread.x),
                rng.centered(config.spread.y),
                rng.next_f32() * config.spread.z,
            )
        })
        .collect();
    let cloud = PointCloud { positions, size_phases: Vec::new(), base_size: DUST_SIZE };
    let material = Material::points(DUST_COLOR, DUST_SIZE)
        .with_opacity(DUST_OPACITY)
        .additive();
    graph.add(parent, Node::mesh("stardust", Geometry::Points(cloud), material))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cloud(graph: &SceneGraph, id: NodeId) -> &PointCloud {
        graph
            .get(id)
            .and_then(|n| n.visual.as_ref())
            .and_then(|v| v.geometry.points())
            .unwrap()
    }

    #[test]
    fn three_layers_with_their_counts() {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        let stars = create_stars(&mut graph, root, &mut Rng::new(7));
        assert_eq!(stars.layers.len(), 3);
        let counts: Vec<_> = stars.nodes().map(|id| cloud(&graph, id).len()).collect();
        assert_eq!(counts, [5000, 2000, 1000]);
        assert_eq!(stars.layers[2].original_size, 1.2);
    }

    #[test]
    fn stars_stay_inside_their_cube() {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        let stars = create_stars(&mut graph, root, &mut Rng::new(11));
        for (layer, def) in stars.layers.iter().zip(STAR_LAYERS.iter()) {
            let half = def.spread / 2.0;
            let points = cloud(&graph, layer.node);
            assert!(points.positions.iter().all(|p| p.abs().max_element() <= half));
            assert!(points.size_phases.iter().all(|s| (0.0..1.0).contains(s)));
            assert_eq!(points.size_phases.len(), points.len());
        }
    }

    #[test]
    fn dust_bounds() {
        let mut graph = SceneGraph::new();
        let config = DustConfig::default();
        let root = graph.root();
        let dust = create_stardust(&mut graph, root, &mut Rng::new(3), &config);
        let points = cloud(&graph, dust);
        assert_eq!(points.len(), 800);
        for p in &points.positions {
            assert!((-200.0..200.0).contains(&p.x));
            assert!((-100.0..100.0).contains(&p.y));
            assert!((0.0..2500.0).contains(&p.z));
        }
        let node = graph.get(dust).unwrap();
        assert_eq!(node.opacity(), 0.4);
    }

    #[test]
    fn same_seed_same_sky() {
        let mut a = SceneGraph::new();
        let mut b = SceneGraph::new();
        let root_a = a.root();
        let sa = create_stars(&mut a, root_a, &mut Rng::new(99));
        let root_b = b.root();
        let sb = create_stars(&mut b, root_b, &mut Rng::new(99));
        assert_eq!(cloud(&a, sa.layers[0].node), cloud(&b, sb.layers[0].node));
    }
}
