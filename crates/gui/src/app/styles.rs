//! Application style configuration

use eframe::egui;

/// Configure initial application styles with given font size
pub fn configure_styles(ctx: &egui::Context, font_size: f32) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::dark();

    style.visuals.window_corner_radius = egui::CornerRadius::same(6);
    style.visuals.widgets.inactive.corner_radius = egui::CornerRadius::same(3);
    style.visuals.widgets.hovered.corner_radius = egui::CornerRadius::same(3);

    style.spacing.item_spacing = egui::vec2(6.0, 4.0);
    style.spacing.button_padding = egui::vec2(6.0, 3.0);

    // Panels sit next to black views
    style.visuals.panel_fill = egui::Color32::from_rgb(24, 24, 28);
    style.visuals.extreme_bg_color = egui::Color32::from_rgb(12, 12, 14);

    apply_text_styles(&mut style, font_size);

    ctx.set_style(style);
}

fn apply_text_styles(style: &mut egui::Style, font_size: f32) {
    for (text_style, scale) in [
        (egui::TextStyle::Body, 1.0),
        (egui::TextStyle::Button, 1.0),
        (egui::TextStyle::Small, 0.85),
        (egui::TextStyle::Heading, 1.3),
    ] {
        style
            .text_styles
            .insert(text_style, egui::FontId::proportional(font_size * scale));
    }
    style.text_styles.insert(
        egui::TextStyle::Monospace,
        egui::FontId::monospace(font_size),
    );
}
