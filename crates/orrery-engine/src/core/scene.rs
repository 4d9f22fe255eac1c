use glam::{Mat4, Vec3};

use crate::api::types::NodeId;
use crate::components::node::Node;

/// Arena-backed scene tree.
///
/// Node 0 is the root. Every other node has exactly one parent, assigned when
/// it is added, and nodes are never removed, so the arena order always lists
/// a parent before its children. World transforms are resolved in a single
/// forward pass over that order.
pub struct SceneGraph {
    nodes: Vec<Node>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    /// Create a graph with room for `capacity` nodes (root included).
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(Node::group("scene"));
        Self { nodes }
    }

    /// The root node every subtree hangs off.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Attach `node` as the last child of `parent`. Returns the new node's id.
    pub fn add(&mut self, parent: NodeId, mut node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        debug_assert!(parent.index() < self.nodes.len(), "parent {parent:?} is not in this graph");
        node.parent = Some(parent);
        node.children.clear();
        if let Some(parent_node) = self.nodes.get_mut(parent.index()) {
            parent_node.children.push(id);
        }
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Iterate nodes in arena order (parents before children).
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId(i as u32), n))
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Resolve every node's world matrix into `out`, indexed like the arena.
    /// `out` is reused across frames.
    pub fn world_matrices(&self, out: &mut Vec<Mat4>) {
        out.clear();
        for node in &self.nodes {
            let local = node.transform.matrix();
            let world = match node.parent {
                Some(parent) => out[parent.index()] * local,
                None => local,
            };
            out.push(world);
        }
    }

    /// World-space position of one node, walking up its ancestor chain.
    pub fn world_position(&self, id: NodeId) -> Vec3 {
        let mut matrix = Mat4::IDENTITY;
        let mut current = Some(id);
        while let Some(node) = current.and_then(|c| self.get(c)) {
            matrix = node.transform.matrix() * matrix;
            current = node.parent;
        }
        matrix.transform_point3(Vec3::ZERO)
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}
