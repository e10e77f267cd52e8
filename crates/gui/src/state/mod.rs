pub mod dimensions;
pub mod scene;
pub mod settings;

pub use dimensions::DimensionStore;
pub use scene::{node_display_name, role_display_name, short_id, SceneState};
pub use settings::{AppSettings, DimensionSettings, OrbitSettings};

use shared::BoxDimensions;

use crate::session::{EditOutcome, FitSession};

/// Text currently typed into the width/height/depth fields
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionInputs {
    pub width: String,
    pub height: String,
    pub depth: String,
}

impl DimensionInputs {
    /// Prefill the fields from existing dimensions
    pub fn from_dimensions(dims: &BoxDimensions) -> Self {
        Self {
            width: dims.width.to_string(),
            height: dims.height.to_string(),
            depth: dims.depth.to_string(),
        }
    }
}

/// Panel visibility flags
pub struct PanelVisibility {
    pub dimensions: bool,
    pub ortho_views: bool,
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self {
            dimensions: true,
            ortho_views: true,
        }
    }
}

/// Combined application state
pub struct AppState {
    pub session: FitSession,
    pub settings: AppSettings,
    pub inputs: DimensionInputs,
    pub panels: PanelVisibility,
}

impl AppState {
    pub fn new(settings: AppSettings) -> Self {
        let session = FitSession::new();
        let inputs = DimensionInputs::from_dimensions(session.dimensions().inner());
        let panels = PanelVisibility {
            ortho_views: settings.viewport.show_ortho_views,
            ..PanelVisibility::default()
        };
        Self {
            session,
            settings,
            inputs,
            panels,
        }
    }

    /// Apply whatever is in the dimension fields to the inner cuboid
    pub fn apply_inputs(&mut self) -> EditOutcome {
        self.session
            .apply_dimensions(&self.inputs.width, &self.inputs.height, &self.inputs.depth)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppSettings::default())
    }
}
