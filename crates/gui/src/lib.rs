// Library crate: exposes testable modules for integration tests and the command interface.
// GUI-specific modules (app, ui, viewport rendering) remain in the binary crate.

pub mod build;
pub mod command;
pub mod fixtures;
pub mod harness;
pub mod session;
pub mod state;
pub mod validation;

/// Subset of viewport types needed by build/validation (MeshData, Aabb).
/// The full viewport (camera, renderer, GL) stays in the binary crate.
pub mod viewport {
    pub mod bounds;
    pub mod mesh;
}
