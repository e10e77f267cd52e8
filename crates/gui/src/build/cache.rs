//! Scene mesh cache management

use std::collections::HashMap;

use super::{build_scene_meshes, NodeMeshes};
use crate::state::scene::{NodeId, SceneState};
use crate::viewport::bounds::Aabb;

/// Cached node meshes, rebuilt when the scene version changes
pub struct MeshCache {
    meshes: HashMap<NodeId, NodeMeshes>,
    aabbs: HashMap<NodeId, Aabb>,
    version: u64,
    rebuild_count: u64,
}

impl Default for MeshCache {
    fn default() -> Self {
        Self::new()
    }
}

impl MeshCache {
    pub fn new() -> Self {
        Self {
            meshes: HashMap::new(),
            aabbs: HashMap::new(),
            version: u64::MAX, // force first rebuild
            rebuild_count: 0,
        }
    }

    /// Check if cache is still valid
    pub fn is_valid(&self, scene_version: u64) -> bool {
        self.version == scene_version
    }

    /// Rebuild from the scene if its version moved. Returns `true` on rebuild.
    pub fn rebuild_if_needed(&mut self, scene: &SceneState) -> bool {
        if self.is_valid(scene.version()) {
            return false;
        }
        self.rebuild(scene);
        true
    }

    /// Rebuild cached meshes from the scene
    pub fn rebuild(&mut self, scene: &SceneState) {
        self.meshes = build_scene_meshes(scene);
        self.aabbs = self
            .meshes
            .iter()
            .map(|(id, mesh)| (id.clone(), Aabb::from_mesh(&mesh.faces)))
            .collect();
        self.version = scene.version();
        self.rebuild_count += 1;
        tracing::debug!(
            "Rebuilt {} node meshes (scene v{})",
            self.meshes.len(),
            self.version
        );
    }

    pub fn meshes(&self) -> &HashMap<NodeId, NodeMeshes> {
        &self.meshes
    }

    /// Clone the cached mesh map (for passing into PaintCallback)
    pub fn meshes_clone(&self) -> HashMap<NodeId, NodeMeshes> {
        self.meshes.clone()
    }

    /// Rebuild counter
    pub fn rebuild_count(&self) -> u64 {
        self.rebuild_count
    }

    /// Get the cached AABBs
    pub fn aabbs(&self) -> &HashMap<NodeId, Aabb> {
        &self.aabbs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::FitSession;

    #[test]
    fn test_cache_forces_first_rebuild() {
        let cache = MeshCache::new();
        assert!(!cache.is_valid(0));
    }

    #[test]
    fn test_rebuild_only_on_version_change() {
        let mut session = FitSession::new();
        let mut cache = MeshCache::new();

        assert!(cache.rebuild_if_needed(session.scene()));
        assert!(!cache.rebuild_if_needed(session.scene()));
        assert_eq!(cache.rebuild_count(), 1);

        session.apply_dimensions("x", "1", "1");
        assert!(!cache.rebuild_if_needed(session.scene()));

        session.apply_dimensions("1", "1", "1");
        assert!(cache.rebuild_if_needed(session.scene()));
        assert_eq!(cache.rebuild_count(), 2);
        assert!(cache.meshes().contains_key(session.inner_node_id()));
        assert_eq!(cache.aabbs().len(), 3);
    }
}
