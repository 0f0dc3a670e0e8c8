// core/scene.rs
//
// Scene hierarchy: an index-based tree of nodes with local transforms.
// World matrices are composed from the container chain on demand; nothing is cached.
//
// Usage:
//   let mut graph = SceneGraph::new();
//   let container = graph.add(graph.root(), NodeKind::OrbitContainer(body), LocalTransform::new());
//   let matrices = graph.propagate();

use glam::{Mat4, Quat, Vec3};

use crate::api::types::{BodyId, NodeId};

/// Local transform of a node relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalTransform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl LocalTransform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_translation(mut self, translation: Vec3) -> Self {
        self.translation = translation;
        self
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_uniform_scale(self, scale: f32) -> Self {
        self.with_scale(Vec3::splat(scale))
    }

    #[inline]
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

/// What a node represents. Every node but the root belongs to a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    /// The body's own sphere. Carries spin and axial tilt.
    Body(BodyId),
    /// Tilts a planet's orbital plane by its inclination.
    OrbitContainer(BodyId),
    /// Rotates a satellite around its parent.
    SatelliteContainer(BodyId),
    /// Sampled orbit path, drawn as a line loop.
    OrbitTrace(BodyId),
    /// Cloud shell, slightly larger than the body.
    Clouds(BodyId),
    /// Glow sprite behind the body.
    Atmosphere(BodyId),
    /// Ring annulus in the body's equatorial plane.
    Rings(BodyId),
    /// Screen-space name tag anchor.
    Label(BodyId),
}

impl NodeKind {
    /// Owning body, `None` for the root.
    pub fn owner(self) -> Option<BodyId> {
        match self {
            NodeKind::Root => None,
            NodeKind::Body(b)
            | NodeKind::OrbitContainer(b)
            | NodeKind::SatelliteContainer(b)
            | NodeKind::OrbitTrace(b)
            | NodeKind::Clouds(b)
            | NodeKind::Atmosphere(b)
            | NodeKind::Rings(b)
            | NodeKind::Label(b) => Some(b),
        }
    }

    /// Only surfaces and ring adornments respond to pointer rays.
    pub fn is_pickable(self) -> bool {
        matches!(self, NodeKind::Body(_) | NodeKind::Rings(_))
    }

    /// Numeric tag for the render buffer.
    pub fn code(self) -> u32 {
        match self {
            NodeKind::Root => 0,
            NodeKind::Body(_) => 1,
            NodeKind::OrbitContainer(_) => 2,
            NodeKind::SatelliteContainer(_) => 3,
            NodeKind::OrbitTrace(_) => 4,
            NodeKind::Clouds(_) => 5,
            NodeKind::Atmosphere(_) => 6,
            NodeKind::Rings(_) => 7,
            NodeKind::Label(_) => 8,
        }
    }
}

#[derive(Debug, Clone)]
struct SceneNode {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    local: LocalTransform,
}

/// Parent/child tree of scene nodes.
///
/// Nodes are never removed; the catalog is static for the session.
#[derive(Debug, Clone)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneGraph {
    /// A graph holding only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![SceneNode {
                kind: NodeKind::Root,
                parent: None,
                children: Vec::new(),
                local: LocalTransform::default(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Create a node under `parent`.
    pub fn add(&mut self, parent: NodeId, kind: NodeKind, local: LocalTransform) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(SceneNode {
            kind,
            parent: Some(parent),
            children: Vec::new(),
            local,
        });
        if let Some(p) = self.nodes.get_mut(parent.index()) {
            p.children.push(id);
        }
        id
    }

    /// Move `child` under `parent`. Returns false if either id is unknown,
    /// the child is the root, or the move would create a cycle.
    pub fn set_parent(&mut self, child: NodeId, parent: NodeId) -> bool {
        if child == self.root()
            || child.index() >= self.nodes.len()
            || parent.index() >= self.nodes.len()
            || self.is_ancestor(child, parent)
        {
            return false;
        }

        if let Some(old) = self.nodes[child.index()].parent {
            self.nodes[old.index()].children.retain(|&c| c != child);
        }
        self.nodes[child.index()].parent = Some(parent);
        self.nodes[parent.index()].children.push(child);
        true
    }

    /// Whether `ancestor` is `node` or lies on its parent chain.
    fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.get_parent(id);
        }
        false
    }

    pub fn kind(&self, id: NodeId) -> Option<NodeKind> {
        self.nodes.get(id.index()).map(|n| n.kind)
    }

    pub fn get_parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.index()).and_then(|n| n.parent)
    }

    pub fn get_children(&self, id: NodeId) -> Option<&[NodeId]> {
        self.nodes.get(id.index()).map(|n| n.children.as_slice())
    }

    pub fn get_local_mut(&mut self, id: NodeId) -> Option<&mut LocalTransform> {
        self.nodes.get_mut(id.index()).map(|n| &mut n.local)
    }

    pub fn set_local(&mut self, id: NodeId, local: LocalTransform) {
        if let Some(node) = self.nodes.get_mut(id.index()) {
            node.local = local;
        }
    }

    /// World matrix of one node, composed up the parent chain.
    pub fn world_matrix(&self, id: NodeId) -> Mat4 {
        let mut matrix = Mat4::IDENTITY;
        let mut current = Some(id);
        while let Some(node_id) = current {
            let Some(node) = self.nodes.get(node_id.index()) else { break };
            matrix = node.local.to_mat4() * matrix;
            current = node.parent;
        }
        matrix
    }

    /// World-space origin of a node.
    pub fn world_position(&self, id: NodeId) -> Vec3 {
        self.world_matrix(id).transform_point3(Vec3::ZERO)
    }

    /// World matrices for every node, indexed by `NodeId`.
    /// Walks top-down so each local transform is multiplied once.
    pub fn propagate(&self) -> Vec<Mat4> {
        let mut out = vec![Mat4::IDENTITY; self.nodes.len()];
        self.propagate_recursive(self.root(), Mat4::IDENTITY, &mut out);
        out
    }

    fn propagate_recursive(&self, id: NodeId, parent_world: Mat4, out: &mut [Mat4]) {
        let Some(node) = self.nodes.get(id.index()) else { return };
        let world = parent_world * node.local.to_mat4();
        out[id.index()] = world;
        for &child in &node.children {
            self.propagate_recursive(child, world, out);
        }
    }

    /// All node ids with their kinds, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, NodeKind)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId(i as u32), n.kind))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn parent_child_relationship() {
        let mut graph = SceneGraph::new();
        let parent = graph.add(graph.root(), NodeKind::Body(BodyId(0)), LocalTransform::new());
        let child = graph.add(parent, NodeKind::Label(BodyId(0)), LocalTransform::new());

        assert_eq!(graph.get_parent(child), Some(parent));
        assert_eq!(graph.get_children(parent), Some([child].as_slice()));
        assert_eq!(graph.get_parent(graph.root()), None);
    }

    #[test]
    fn world_position_composes_translation() {
        let mut graph = SceneGraph::new();
        let parent = graph.add(
            graph.root(),
            NodeKind::Body(BodyId(0)),
            LocalTransform::new().with_translation(Vec3::new(100.0, 0.0, 100.0)),
        );
        let child = graph.add(
            parent,
            NodeKind::Label(BodyId(0)),
            LocalTransform::new().with_translation(Vec3::new(50.0, 0.0, 0.0)),
        );
        assert!(close(graph.world_position(child), Vec3::new(150.0, 0.0, 100.0)));
    }

    #[test]
    fn rotated_container_carries_child() {
        // Quarter turn about Y sends +X to -Z
        let mut graph = SceneGraph::new();
        let container = graph.add(
            graph.root(),
            NodeKind::SatelliteContainer(BodyId(1)),
            LocalTransform::new().with_rotation(Quat::from_rotation_y(FRAC_PI_2)),
        );
        let moon = graph.add(
            container,
            NodeKind::Body(BodyId(1)),
            LocalTransform::new().with_translation(Vec3::new(3.0, 0.0, 0.0)),
        );
        assert!(close(graph.world_position(moon), Vec3::new(0.0, 0.0, -3.0)));
    }

    #[test]
    fn reparent_moves_children_list() {
        let mut graph = SceneGraph::new();
        let a = graph.add(graph.root(), NodeKind::Body(BodyId(0)), LocalTransform::new());
        let b = graph.add(graph.root(), NodeKind::Body(BodyId(1)), LocalTransform::new());

        assert!(graph.set_parent(b, a));
        assert_eq!(graph.get_parent(b), Some(a));
        assert!(!graph.get_children(graph.root()).unwrap().contains(&b));
        assert_eq!(graph.get_children(a), Some([b].as_slice()));
    }

    #[test]
    fn reparent_rejects_cycles() {
        let mut graph = SceneGraph::new();
        let a = graph.add(graph.root(), NodeKind::Body(BodyId(0)), LocalTransform::new());
        let b = graph.add(a, NodeKind::SatelliteContainer(BodyId(1)), LocalTransform::new());

        assert!(!graph.set_parent(a, b));
        assert!(!graph.set_parent(a, a));
        assert!(!graph.set_parent(graph.root(), a));
        assert_eq!(graph.get_parent(a), Some(graph.root()));
    }

    #[test]
    fn propagate_matches_chain_walk() {
        let mut graph = SceneGraph::new();
        let orbit = graph.add(
            graph.root(),
            NodeKind::OrbitContainer(BodyId(0)),
            LocalTransform::new().with_rotation(Quat::from_rotation_x(0.3)),
        );
        let body = graph.add(
            orbit,
            NodeKind::Body(BodyId(0)),
            LocalTransform::new()
                .with_translation(Vec3::new(10.0, 0.0, 5.0))
                .with_rotation(Quat::from_rotation_y(1.2)),
        );
        let label = graph.add(
            body,
            NodeKind::Label(BodyId(0)),
            LocalTransform::new().with_translation(Vec3::new(1.5, 1.5, 0.0)),
        );

        let matrices = graph.propagate();
        assert_eq!(matrices.len(), graph.len());
        for id in [orbit, body, label] {
            let a = matrices[id.index()].transform_point3(Vec3::ZERO);
            let b = graph.world_position(id);
            assert!(close(a, b), "{id:?}: {a} vs {b}");
        }
    }

    #[test]
    fn only_surfaces_and_rings_are_pickable() {
        let body = BodyId(3);
        assert!(NodeKind::Body(body).is_pickable());
        assert!(NodeKind::Rings(body).is_pickable());
        assert!(!NodeKind::Clouds(body).is_pickable());
        assert!(!NodeKind::Atmosphere(body).is_pickable());
        assert!(!NodeKind::OrbitTrace(body).is_pickable());
        assert!(!NodeKind::Label(body).is_pickable());
        assert_eq!(NodeKind::Rings(body).owner(), Some(body));
        assert_eq!(NodeKind::Root.owner(), None);
    }
}
