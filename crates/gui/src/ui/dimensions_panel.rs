//! Text fields for the inside cuboid plus the Apply trigger

use egui::Ui;

use crate::i18n::t;
use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.heading(t("dims.title"));
    ui.separator();

    let mut submitted = false;

    egui::Grid::new("inner_dims")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            let fields = [
                (t("dims.width"), &mut state.inputs.width),
                (t("dims.height"), &mut state.inputs.height),
                (t("dims.depth"), &mut state.inputs.depth),
            ];
            for (label, text) in fields {
                ui.label(label);
                let response = ui.add(egui::TextEdit::singleline(text).desired_width(80.0));
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submitted = true;
                }
                ui.end_row();
            }
        });

    ui.add_space(4.0);
    if ui.button(t("dims.apply")).clicked() {
        submitted = true;
    }
    ui.weak(t("dims.hint"));

    if submitted {
        // Invalid text leaves everything as is
        state.apply_inputs();
    }

    ui.add_space(10.0);
    ui.separator();
    show_outer(ui, state);
}

fn show_outer(ui: &mut Ui, state: &AppState) {
    let outer = state.session.dimensions().outer();
    let precision = state.settings.dimensions.precision;

    ui.strong(t("dims.outer"));
    egui::Grid::new("outer_dims")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            for (key, value) in [
                ("dims.width", outer.width),
                ("dims.height", outer.height),
                ("dims.depth", outer.depth),
            ] {
                ui.label(t(key));
                ui.monospace(format!("{value:.precision$}"));
                ui.end_row();
            }
        });
}
