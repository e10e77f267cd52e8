//! Headless test harness for programmatic session manipulation.
//!
//! Wraps a [`FitSession`] together with a mesh cache so tests can drive
//! edits and inspect the geometry the renderer would upload.

use shared::{BoxDimensions, BoxRole, FitReport};

use crate::build::{MeshCache, NodeMeshes};
use crate::command::{execute_json, CommandResponse};
use crate::session::{EditOutcome, FitSession};
use crate::state::dimensions::DimensionStore;
use crate::state::scene::SceneNode;
use crate::validation::MeshValidator;

/// Headless test harness: a session plus its build cache
pub struct TestHarness {
    pub session: FitSession,
    cache: MeshCache,
}

impl TestHarness {
    /// Harness around a session with the default cuboids.
    pub fn new() -> Self {
        Self::with_store(DimensionStore::default())
    }

    pub fn with_store(store: DimensionStore) -> Self {
        Self {
            session: FitSession::with_store(store),
            cache: MeshCache::new(),
        }
    }

    // ── Edits ─────────────────────────────────────────────────

    /// Apply raw text dimensions to the inner cuboid
    pub fn apply(&mut self, width: &str, height: &str, depth: &str) -> EditOutcome {
        self.session.apply_dimensions(width, height, depth)
    }

    /// Run a JSON command against the session
    pub fn command(&mut self, json: &str) -> Result<CommandResponse, String> {
        execute_json(&mut self.session, json)
    }

    // ── Inspection ────────────────────────────────────────────

    pub fn inner(&self) -> BoxDimensions {
        *self.session.dimensions().inner()
    }

    pub fn report(&self) -> &FitReport {
        self.session.report()
    }

    pub fn node(&self, role: BoxRole) -> Option<&SceneNode> {
        self.session.scene().node_for_role(role)
    }

    pub fn node_count(&self) -> usize {
        self.session.scene().node_count()
    }

    pub fn scene_version(&self) -> u64 {
        self.session.scene().version()
    }

    // ── Build ─────────────────────────────────────────────────

    /// Rebuild meshes if the scene changed. Returns `true` on rebuild.
    pub fn build(&mut self) -> bool {
        self.cache.rebuild_if_needed(self.session.scene())
    }

    /// Number of node meshes after build
    pub fn mesh_count(&self) -> usize {
        self.cache.meshes().len()
    }

    pub fn rebuild_count(&self) -> u64 {
        self.cache.rebuild_count()
    }

    /// Built meshes for the node currently holding `role`
    pub fn meshes_of(&self, role: BoxRole) -> Option<&NodeMeshes> {
        let node = self.node(role)?;
        self.cache.meshes().get(&node.id)
    }

    /// Create a validator for a role's face mesh
    pub fn validate_mesh(&self, role: BoxRole) -> Option<MeshValidator<'_>> {
        self.meshes_of(role).map(|m| MeshValidator::new(&m.faces))
    }

    /// Mismatches between a role's built mesh and its scene node
    pub fn check_node(&self, role: BoxRole) -> Option<Vec<String>> {
        let node = self.node(role)?;
        self.validate_mesh(role).map(|v| v.check_node(node))
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
