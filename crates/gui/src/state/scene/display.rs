//! Display helper functions for scene nodes

use shared::BoxRole;

use super::SceneNode;

/// Human-readable name for a cuboid role
pub fn role_display_name(role: BoxRole) -> &'static str {
    match role {
        BoxRole::Outer => "Bigger cuboid",
        BoxRole::Inner => "Inside cuboid",
        BoxRole::Secondary => "Top cuboid",
    }
}

/// Get display name for a node
pub fn node_display_name(node: &SceneNode) -> String {
    format!("{} ({})", role_display_name(node.role), short_id(&node.id))
}

/// Get shortened ID (first 8 characters)
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(8) {
        Some((idx, _)) => &id[..idx],
        None => id,
    }
}
