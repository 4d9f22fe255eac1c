use glam::Mat4;

use crate::core::scene::SceneGraph;
use crate::renderer::instance::NodeInstance;

/// Build one instance per scene node, in arena order.
/// World matrices land in `world`; both vectors are reused across frames.
pub fn build_node_instances(graph: &SceneGraph, world: &mut Vec<Mat4>, out: &mut Vec<NodeInstance>) {
    graph.world_matrices(world);
    out.clear();

    for ((_, node), matrix) in graph.iter().zip(world.iter()) {
        // Parents precede children, so the parent's flag is already final.
        let parent_visible = node
            .parent
            .and_then(|p| out.get(p.index()))
            .is_none_or(|p| p.visible > 0.0);
        out.push(NodeInstance::new(*matrix, node.opacity(), parent_visible && node.visible));
    }
}
