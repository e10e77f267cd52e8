//! Mesh building for scene nodes.
//!
//! Every node becomes a face mesh plus, when its style asks for it, an
//! edge wireframe. Built meshes carry the node's opacity so the renderer
//! can sort transparent faces after opaque geometry.

mod cache;
mod node_builder;

pub use cache::MeshCache;
pub use node_builder::build_node_meshes;

use std::collections::HashMap;

use crate::state::scene::{NodeId, SceneState};
use crate::viewport::mesh::{LineMeshData, MeshData};

/// GPU-ready geometry for one scene node
#[derive(Clone, Debug)]
pub struct NodeMeshes {
    pub faces: MeshData,
    pub edges: Option<LineMeshData>,
    /// Face opacity (0.0 - 1.0)
    pub opacity: f32,
}

/// Build meshes for every node in the scene
pub fn build_scene_meshes(scene: &SceneState) -> HashMap<NodeId, NodeMeshes> {
    scene
        .nodes()
        .iter()
        .map(|node| (node.id.clone(), build_node_meshes(node)))
        .collect()
}

#[cfg(test)]
mod tests {
    use shared::{BoxDimensions, BoxRole};

    use super::*;
    use crate::state::scene::SceneNode;

    #[test]
    fn test_build_empty_scene() {
        let scene = SceneState::default();
        assert!(build_scene_meshes(&scene).is_empty());
    }

    #[test]
    fn test_build_one_entry_per_node() {
        let mut scene = SceneState::default();
        let a = scene.add_node(SceneNode::new(
            BoxRole::Outer,
            BoxDimensions::new(1.0, 1.0, 1.0),
            [0.0; 3],
        ));
        let b = scene.add_node(SceneNode::new(
            BoxRole::Inner,
            BoxDimensions::new(0.5, 0.5, 0.5),
            [0.0; 3],
        ));

        let meshes = build_scene_meshes(&scene);
        assert_eq!(meshes.len(), 2);
        assert!(meshes.contains_key(&a));
        assert!(meshes.contains_key(&b));
    }
}
