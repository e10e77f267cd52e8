//! Keyboard shortcut handling

use eframe::egui;

use crate::state::AppState;
use crate::viewport::SceneViews;

/// Handle keyboard shortcuts for the application
pub fn handle_keyboard(ctx: &egui::Context, state: &mut AppState, views: &mut SceneViews) {
    // Don't handle shortcuts when a text field is focused
    if ctx.memory(|m| m.focused().is_some()) {
        return;
    }

    let (reset, toggle_ortho) = ctx.input(|i| {
        (
            i.key_pressed(egui::Key::Home),
            i.key_pressed(egui::Key::O) && !i.modifiers.command,
        )
    });

    if reset {
        views.reset_camera(state);
    }
    if toggle_ortho {
        state.panels.ortho_views = !state.panels.ortho_views;
    }
}
