//! Wireframe rendering for a viewport through egui's painter.
//!
//! Used when no GL context is available: only the green edges are drawn,
//! the transparent faces are skipped.

use std::collections::HashMap;

use egui::{Color32, Pos2, Rect, Stroke, Ui};
use glam::{Mat4, Vec3, Vec4};

use crate::build::NodeMeshes;
use crate::state::scene::{NodeId, WIREFRAME_WIDTH};

/// Project a world point into the viewport rectangle.
///
/// Returns `None` for points behind the camera or outside the clip volume depth.
pub fn project(vp: &Mat4, point: Vec3, rect: Rect) -> Option<Pos2> {
    let clip = *vp * Vec4::new(point.x, point.y, point.z, 1.0);
    if clip.w <= 0.0 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    if !(-1.0..=1.0).contains(&ndc.z) {
        return None;
    }
    Some(Pos2::new(
        rect.left() + (ndc.x + 1.0) * 0.5 * rect.width(),
        rect.top() + (1.0 - ndc.y) * 0.5 * rect.height(),
    ))
}

/// Paint node edges as wireframe
pub fn paint_viewport(
    ui: &Ui,
    rect: Rect,
    vp: &Mat4,
    meshes: &HashMap<NodeId, NodeMeshes>,
    bg: [u8; 3],
) {
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, Color32::from_rgb(bg[0], bg[1], bg[2]));

    for node in meshes.values() {
        let Some(ref edges) = node.edges else {
            continue;
        };
        for segment in edges.vertices.chunks_exact(14) {
            let a = Vec3::new(segment[0], segment[1], segment[2]);
            let b = Vec3::new(segment[7], segment[8], segment[9]);
            let color = Color32::from_rgb(
                (segment[3] * 255.0) as u8,
                (segment[4] * 255.0) as u8,
                (segment[5] * 255.0) as u8,
            );
            if let (Some(pa), Some(pb)) = (project(vp, a, rect), project(vp, b, rect)) {
                painter.line_segment([pa, pb], Stroke::new(WIREFRAME_WIDTH, color));
            }
        }
    }
}
