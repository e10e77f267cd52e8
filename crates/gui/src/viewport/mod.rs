//! Four-view viewport: perspective orbit view plus top/side/front ortho views

mod camera;
mod gl_renderer;
mod renderer;
pub use cuboid_fit_lib::viewport::mesh;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use egui::{Color32, Rect, Ui};
use glam::Mat4;

use crate::build::{MeshCache, NodeMeshes};
use crate::i18n::t;
use crate::state::scene::NodeId;
use crate::state::AppState;
use camera::{OrbitCamera, OrthoCamera, ViewCamera};
use gl_renderer::GlRenderer;

/// Share of the width given to the main view when ortho views are shown
const MAIN_VIEW_FRACTION: f32 = 0.75;
const LABEL_COLOR: Color32 = Color32::from_rgb(255, 0, 0);

/// All scene views sharing one renderer and mesh cache
pub struct SceneViews {
    orbit: OrbitCamera,
    ortho: [(OrthoCamera, &'static str); 3],
    gl_renderer: Option<Arc<Mutex<GlRenderer>>>,
    mesh_cache: MeshCache,
}

impl SceneViews {
    pub fn new(state: &AppState) -> Self {
        Self {
            orbit: OrbitCamera::new(&state.settings.orbit),
            ortho: [
                (OrthoCamera::top(), "view.top"),
                (OrthoCamera::side(), "view.side"),
                (OrthoCamera::front(), "view.front"),
            ],
            gl_renderer: None,
            mesh_cache: MeshCache::new(),
        }
    }

    /// Initialize GL renderer (must be called with a GL context)
    pub fn init_gl(&mut self, gl: &glow::Context) {
        match GlRenderer::new(gl) {
            Ok(renderer) => self.gl_renderer = Some(Arc::new(Mutex::new(renderer))),
            Err(e) => tracing::error!("Failed to create GL renderer, using wireframe fallback: {e}"),
        }
    }

    pub fn destroy_gl(&mut self, gl: &glow::Context) {
        if let Some(renderer) = self.gl_renderer.take() {
            if let Ok(mut r) = renderer.lock() {
                r.destroy(gl);
            }
        }
    }

    pub fn reset_camera(&mut self, state: &AppState) {
        self.orbit = OrbitCamera::new(&state.settings.orbit);
    }

    pub fn show(&mut self, ui: &mut Ui, state: &mut AppState) {
        self.mesh_cache.rebuild_if_needed(state.session.scene());

        let full = ui.available_rect_before_wrap();
        let (main_rect, side_rect) = if state.panels.ortho_views {
            let split = full.left() + full.width() * MAIN_VIEW_FRACTION;
            (
                Rect::from_min_max(full.min, egui::pos2(split, full.bottom())),
                Some(Rect::from_min_max(egui::pos2(split, full.top()), full.max)),
            )
        } else {
            (full, None)
        };

        self.show_main_view(ui, main_rect, state);

        if let Some(side_rect) = side_rect {
            let cell_height = side_rect.height() / self.ortho.len() as f32;
            for (i, (cam, label)) in self.ortho.iter().enumerate() {
                let top = side_rect.top() + cell_height * i as f32;
                let rect = Rect::from_min_size(
                    egui::pos2(side_rect.left(), top),
                    egui::vec2(side_rect.width(), cell_height),
                );
                let vp = cam.view_projection(aspect(rect));
                self.render_view(ui, rect, vp, state);
                draw_label(ui, rect, t(label));
            }
        }

        ui.allocate_rect(full, egui::Sense::hover());
    }

    fn show_main_view(&mut self, ui: &mut Ui, rect: Rect, state: &AppState) {
        let response = ui.interact(rect, ui.id().with("main_view"), egui::Sense::drag());

        if response.dragged_by(egui::PointerButton::Primary) {
            let delta = response.drag_delta();
            self.orbit.rotate(delta.x, delta.y);
        }
        if response.dragged_by(egui::PointerButton::Secondary) {
            let delta = response.drag_delta();
            self.orbit.pan(delta.x, delta.y);
        }
        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll.abs() > 0.1 {
                self.orbit.zoom(scroll * 0.01);
            }
        }

        if self.orbit.update() {
            ui.ctx().request_repaint();
        }

        let vp = self.orbit.view_projection(aspect(rect));
        self.render_view(ui, rect, vp, state);
        draw_label(ui, rect, t("view.main"));
    }

    fn render_view(&self, ui: &mut Ui, rect: Rect, vp: Mat4, state: &AppState) {
        if !ui.is_rect_visible(rect) {
            return;
        }
        let bg_color = state.settings.viewport.background_color;

        if let Some(gl_renderer) = &self.gl_renderer {
            let renderer_clone = gl_renderer.clone();
            let meshes: HashMap<NodeId, NodeMeshes> = self.mesh_cache.meshes_clone();
            let version = self.mesh_cache.rebuild_count();

            let callback = egui::PaintCallback {
                rect,
                callback: Arc::new(eframe::egui_glow::CallbackFn::new(move |info, painter| {
                    let gl = painter.gl();

                    let clip = info.clip_rect_in_pixels();
                    let viewport = [
                        clip.left_px as f32,
                        clip.from_bottom_px as f32,
                        clip.width_px as f32,
                        clip.height_px as f32,
                    ];

                    if let Ok(mut r) = renderer_clone.lock() {
                        r.sync_from_meshes(gl, &meshes, version);
                        let params = gl_renderer::RenderParams { viewport, bg_color };
                        r.paint(gl, &vp, &params);
                    }
                })),
            };

            ui.painter().add(callback);
        } else {
            renderer::paint_viewport(ui, rect, &vp, self.mesh_cache.meshes(), bg_color);
        }
    }
}

fn aspect(rect: Rect) -> f32 {
    if rect.height() > 0.0 {
        rect.width() / rect.height()
    } else {
        1.0
    }
}

fn draw_label(ui: &Ui, rect: Rect, text: &str) {
    ui.painter_at(rect).text(
        rect.min + egui::vec2(6.0, 4.0),
        egui::Align2::LEFT_TOP,
        text,
        egui::FontId::proportional(13.0),
        LABEL_COLOR,
    );
}
