use egui::{Color32, Ui};
use shared::{clearance, overflowing_axes};

use crate::i18n::t;
use crate::state::AppState;

const FIT_COLOR: Color32 = Color32::from_rgb(120, 220, 120);
const NO_FIT_COLOR: Color32 = Color32::from_rgb(240, 100, 100);

pub fn show(ui: &mut Ui, state: &AppState) {
    let session = &state.session;
    let report = session.report();
    let inner = session.dimensions().inner();
    let outer = session.dimensions().outer();
    let precision = state.settings.dimensions.precision;

    ui.horizontal(|ui| {
        if report.fits {
            ui.colored_label(FIT_COLOR, t("status.fits"));
        } else {
            ui.colored_label(NO_FIT_COLOR, t("status.no_fit"));
            let axes: Vec<&str> = overflowing_axes(inner, outer)
                .iter()
                .map(|axis| axis.name())
                .collect();
            ui.separator();
            ui.label(format!("{}: {}", t("status.overflow"), axes.join(", ")));
        }

        ui.separator();
        let [w, h, d] = clearance(inner, outer);
        ui.weak(format!(
            "{}: {w:.precision$} × {h:.precision$} × {d:.precision$}",
            t("status.clearance")
        ));

        ui.separator();
        ui.weak(format!("{}: {}", t("status.edits"), session.applied_edits()));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(&report.message);
        });
    });
}
