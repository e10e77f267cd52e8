//! Scene node add/remove/replace operations

use super::{NodeId, SceneNode, SceneState};

impl SceneState {
    /// Add a node and return its ID
    pub fn add_node(&mut self, node: SceneNode) -> NodeId {
        let id = node.id.clone();
        tracing::debug!("Adding {:?} node {}", node.role, super::short_id(&id));
        self.nodes.push(node);
        self.version += 1;
        id
    }

    /// Remove a node by ID, returning it if present
    pub fn remove_node(&mut self, id: &str) -> Option<SceneNode> {
        let idx = self.nodes.iter().position(|n| n.id == id)?;
        let node = self.nodes.remove(idx);
        self.version += 1;
        Some(node)
    }

    /// Discard the node `old_id` and add `new_node` in one step.
    ///
    /// The scene version advances once, so a renderer never observes the
    /// state in between.
    pub fn replace_node(&mut self, old_id: &str, new_node: SceneNode) -> NodeId {
        if let Some(idx) = self.nodes.iter().position(|n| n.id == old_id) {
            self.nodes.remove(idx);
        } else {
            tracing::warn!("Replacing missing node {}", super::short_id(old_id));
        }

        let id = new_node.id.clone();
        self.nodes.push(new_node);
        self.version += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use shared::{BoxDimensions, BoxRole};

    use super::*;

    fn node(role: BoxRole) -> SceneNode {
        SceneNode::new(role, BoxDimensions::new(1.0, 1.0, 1.0), [0.0; 3])
    }

    #[test]
    fn test_add_and_remove() {
        let mut scene = SceneState::default();
        let id = scene.add_node(node(BoxRole::Outer));
        assert_eq!(scene.node_count(), 1);
        assert_eq!(scene.version(), 1);

        let removed = scene.remove_node(&id).unwrap();
        assert_eq!(removed.role, BoxRole::Outer);
        assert_eq!(scene.node_count(), 0);
        assert_eq!(scene.version(), 2);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut scene = SceneState::default();
        scene.add_node(node(BoxRole::Outer));
        assert!(scene.remove_node("nope").is_none());
        assert_eq!(scene.version(), 1);
    }

    #[test]
    fn test_replace_swaps_node_with_single_version_bump() {
        let mut scene = SceneState::default();
        let old = scene.add_node(node(BoxRole::Inner));
        scene.add_node(node(BoxRole::Outer));
        let before = scene.version();

        let replacement = SceneNode::new(
            BoxRole::Inner,
            BoxDimensions::new(2.0, 2.0, 2.0),
            [1.0, 0.0, 0.0],
        );
        let new_id = scene.replace_node(&old, replacement);

        assert_ne!(new_id, old);
        assert_eq!(scene.version(), before + 1);
        assert_eq!(scene.node_count(), 2);
        assert!(scene.get_node(&old).is_none());
        assert_eq!(scene.count_role(BoxRole::Inner), 1);
        let inner = scene.node_for_role(BoxRole::Inner).unwrap();
        assert_eq!(inner.id, new_id);
        assert_eq!(inner.dimensions, BoxDimensions::new(2.0, 2.0, 2.0));
    }
}
