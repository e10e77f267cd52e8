//! Application settings

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Orbit camera settings for the main 3D view
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitSettings {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Fraction of pending rotation applied each frame (0 disables damping)
    pub damping_factor: f32,
    /// Closest allowed distance to the target
    pub min_distance: f32,
    /// Farthest allowed distance to the target
    pub max_distance: f32,
    /// Degrees of rotation per dragged pixel
    pub rotate_speed: f32,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            damping_factor: 0.05,
            min_distance: 5.0,
            max_distance: 50.0,
            rotate_speed: 0.5,
        }
    }
}

/// Viewport settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    /// Background color RGB
    pub background_color: [u8; 3],
    /// Show the top/side/front orthographic column
    pub show_ortho_views: bool,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            background_color: [0, 0, 0],
            show_ortho_views: true,
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Font size in points
    pub font_size: f32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { font_size: 14.0 }
    }
}

/// Dimension display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DimensionSettings {
    /// Number of decimal places for dimension values
    pub precision: usize,
}

impl Default for DimensionSettings {
    fn default() -> Self {
        Self { precision: 2 }
    }
}

/// All application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub orbit: OrbitSettings,
    pub viewport: ViewportSettings,
    pub ui: UiSettings,
    pub dimensions: DimensionSettings,
}

impl AppSettings {
    /// Parse settings from JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Settings parse error: {e}"))
    }

    /// Load settings from an explicit file path. Nothing is ever written back.
    pub fn load_from_path(path: &Path) -> Result<Self, String> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read settings {}: {e}", path.display()))?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_orbit_rig() {
        let s = AppSettings::default();
        assert_eq!(s.orbit.fov_degrees, 75.0);
        assert_eq!(s.orbit.damping_factor, 0.05);
        assert_eq!(s.orbit.min_distance, 5.0);
        assert_eq!(s.orbit.max_distance, 50.0);
        assert!(s.viewport.show_ortho_views);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let s = AppSettings::from_json(r#"{"orbit": {"max_distance": 80.0}}"#).unwrap();
        assert_eq!(s.orbit.max_distance, 80.0);
        assert_eq!(s.orbit.min_distance, 5.0);
        assert_eq!(s.ui.font_size, 14.0);
    }

    #[test]
    fn test_invalid_json_is_error() {
        let err = AppSettings::from_json("{ nope").unwrap_err();
        assert!(err.starts_with("Settings parse error"));
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = AppSettings::load_from_path(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.contains("Failed to read settings"));
    }
}
