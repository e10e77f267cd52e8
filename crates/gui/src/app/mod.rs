//! Main application module

mod keyboard;
mod menus;
mod styles;

use eframe::egui;

use crate::state::{AppSettings, AppState};
use crate::ui::{dimensions_panel, status_bar};
use crate::viewport::SceneViews;

/// Main application
pub struct FitApp {
    state: AppState,
    views: SceneViews,
}

impl FitApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: AppSettings) -> Self {
        let state = AppState::new(settings);

        styles::configure_styles(&cc.egui_ctx, state.settings.ui.font_size);

        let mut views = SceneViews::new(&state);

        // Initialize GL renderer if glow context is available
        if let Some(gl) = cc.gl.as_ref() {
            views.init_gl(gl);
        }

        Self { state, views }
    }
}

impl eframe::App for FitApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        keyboard::handle_keyboard(ctx, &mut self.state, &mut self.views);

        // ── Menu bar ──────────────────────────────────────────
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                menus::file_menu(ui);
                menus::view_menu(ui, &mut self.state, &mut self.views);
            });
        });

        // ── Status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(22.0)
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 2)),
            )
            .show(ctx, |ui| {
                status_bar::show(ui, &self.state);
            });

        // ── Left panel: dimension inputs ─────────────────────
        if self.state.panels.dimensions {
            egui::SidePanel::left("dimensions")
                .default_width(200.0)
                .width_range(160.0..=320.0)
                .resizable(true)
                .frame(
                    egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(6)),
                )
                .show(ctx, |ui| {
                    dimensions_panel::show(ui, &mut self.state);
                });
        }

        // ── Central panel: views ─────────────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.views.show(ui, &mut self.state);
            });
    }

    fn on_exit(&mut self, gl: Option<&glow::Context>) {
        if let Some(gl) = gl {
            self.views.destroy_gl(gl);
        }
    }
}
