//! Menu bar

use eframe::egui;

use crate::i18n::{lang, set_lang, t, Lang};
use crate::state::AppState;
use crate::viewport::SceneViews;

/// Show the file menu
pub fn file_menu(ui: &mut egui::Ui) {
    ui.menu_button(t("menu.file"), |ui| {
        if ui.button(t("menu.quit")).clicked() {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

/// Show the view menu
pub fn view_menu(ui: &mut egui::Ui, state: &mut AppState, views: &mut SceneViews) {
    ui.menu_button(t("menu.view"), |ui| {
        ui.checkbox(&mut state.panels.dimensions, t("menu.dimensions_panel"));
        ui.checkbox(&mut state.panels.ortho_views, t("menu.ortho_views"));
        ui.separator();
        if ui.button(t("menu.reset_camera")).clicked() {
            views.reset_camera(state);
            ui.close_menu();
        }
        ui.separator();
        ui.menu_button(t("menu.language"), |ui| {
            if ui.selectable_label(lang() == Lang::Ru, "Русский").clicked() {
                set_lang(Lang::Ru);
                ui.close_menu();
            }
            if ui.selectable_label(lang() == Lang::En, "English").clicked() {
                set_lang(Lang::En);
                ui.close_menu();
            }
        });
    });
}
