//! Factory functions for creating test data.
//!
//! Provides helpers to construct dimension stores and sessions in known
//! states for unit and integration tests.

use shared::{BoxDimensions, DEFAULT_OUTER, DEFAULT_SECONDARY};

use crate::harness::TestHarness;
use crate::session::FitSession;
use crate::state::dimensions::DimensionStore;

// ── Dimension factories ─────────────────────────────────────────

/// Unit cube dimensions (1x1x1).
pub fn unit_box() -> BoxDimensions {
    BoxDimensions::new(1.0, 1.0, 1.0)
}

/// Dimensions identical to the default outer cuboid.
pub fn outer_sized_box() -> BoxDimensions {
    DEFAULT_OUTER
}

/// Store with a custom outer cuboid (inner and secondary stay default).
pub fn store_with_outer(outer: BoxDimensions) -> DimensionStore {
    let defaults = DimensionStore::default();
    DimensionStore::new(outer, *defaults.inner(), DEFAULT_SECONDARY)
}

// ── Session factories ───────────────────────────────────────────

/// Session whose inner cuboid starts at the given size.
pub fn session_with_inner(inner: BoxDimensions) -> FitSession {
    FitSession::with_store(DimensionStore::with_inner(inner))
}

/// Harness whose inner cuboid starts at the given size.
pub fn harness_with_inner(inner: BoxDimensions) -> TestHarness {
    TestHarness::with_store(DimensionStore::with_inner(inner))
}

/// Format dimensions the way a user would type them into the fields.
pub fn as_inputs(dims: &BoxDimensions) -> [String; 3] {
    [
        dims.width.to_string(),
        dims.height.to_string(),
        dims.depth.to_string(),
    ]
}
