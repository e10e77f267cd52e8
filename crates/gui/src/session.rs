//! Fit session: the single controller that owns the dimension store, the
//! scene graph and the latest fit report.
//!
//! All edits go through [`FitSession::apply_dimensions`]. The viewer, the
//! JSON command protocol and the headless harness drive the same session.

use shared::{
    anchor_inner, evaluate_fit, secondary_position, BoxDimensions, BoxRole, DimensionParseError,
    FitReport, OUTER_POSITION,
};

use crate::state::dimensions::DimensionStore;
use crate::state::scene::{short_id, NodeId, SceneNode, SceneState};

/// Result of an apply-dimensions request
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    /// Inner cuboid replaced; carries the fresh fit report
    Applied(FitReport),
    /// Input did not parse; nothing changed and nothing was reported
    Rejected(DimensionParseError),
}

impl EditOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, EditOutcome::Applied(_))
    }

    pub fn report(&self) -> Option<&FitReport> {
        match self {
            EditOutcome::Applied(report) => Some(report),
            EditOutcome::Rejected(_) => None,
        }
    }
}

pub struct FitSession {
    dimensions: DimensionStore,
    scene: SceneState,
    /// Scene node currently representing the inner cuboid
    inner_node: NodeId,
    report: FitReport,
    applied_edits: u64,
}

impl FitSession {
    /// Session with the default cuboids
    pub fn new() -> Self {
        Self::with_store(DimensionStore::default())
    }

    /// Build the scene from `dimensions` and report the initial fit
    pub fn with_store(dimensions: DimensionStore) -> Self {
        let outer = *dimensions.outer();
        let inner = *dimensions.inner();
        let secondary = *dimensions.secondary();

        let mut scene = SceneState::default();
        let inner_node = scene.add_node(SceneNode::new(
            BoxRole::Inner,
            inner,
            anchor_inner(&inner, &outer),
        ));
        scene.add_node(SceneNode::new(
            BoxRole::Secondary,
            secondary,
            secondary_position(&secondary, &outer, &inner),
        ));
        scene.add_node(SceneNode::new(BoxRole::Outer, outer, OUTER_POSITION));

        let report = evaluate_fit(&inner, &outer);
        tracing::info!("{}", report.message);

        Self {
            dimensions,
            scene,
            inner_node,
            report,
            applied_edits: 0,
        }
    }

    /// Apply new inner dimensions from three raw text fields.
    ///
    /// If any field fails to parse the call is a silent no-op: the store,
    /// the scene and the report stay as they were.
    pub fn apply_dimensions(&mut self, width: &str, height: &str, depth: &str) -> EditOutcome {
        let dims = match BoxDimensions::parse(width, height, depth) {
            Ok(dims) => dims,
            Err(e) => {
                tracing::debug!("Ignoring dimension edit: {e}");
                return EditOutcome::Rejected(e);
            }
        };

        self.dimensions.set_inner(dims.width, dims.height, dims.depth);
        self.rebuild_inner();

        let report = self.check_fit();
        tracing::info!("{}", report.message);
        self.report = report.clone();
        self.applied_edits += 1;
        EditOutcome::Applied(report)
    }

    /// Evaluate the current inner cuboid against the outer one without
    /// logging or storing the result
    pub fn check_fit(&self) -> FitReport {
        evaluate_fit(self.dimensions.inner(), self.dimensions.outer())
    }

    fn rebuild_inner(&mut self) {
        let inner = *self.dimensions.inner();
        let outer = *self.dimensions.outer();
        let node = SceneNode::new(BoxRole::Inner, inner, anchor_inner(&inner, &outer));
        let old = std::mem::take(&mut self.inner_node);
        self.inner_node = self.scene.replace_node(&old, node);
        tracing::debug!(
            "Rebuilt inner cuboid {} -> {}",
            short_id(&old),
            short_id(&self.inner_node)
        );
    }

    pub fn dimensions(&self) -> &DimensionStore {
        &self.dimensions
    }

    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    /// Last reported fit (startup or most recent applied edit)
    pub fn report(&self) -> &FitReport {
        &self.report
    }

    pub fn inner_node_id(&self) -> &str {
        &self.inner_node
    }

    /// Number of edits that were applied (rejected ones are not counted)
    pub fn applied_edits(&self) -> u64 {
        self.applied_edits
    }
}

impl Default for FitSession {
    fn default() -> Self {
        Self::new()
    }
}
