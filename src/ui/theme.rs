// VidScope - ui/theme.rs
//
// Global visual theme and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Accent colour for primary actions and links.
pub const ACCENT: Color32 = Color32::from_rgb(25, 118, 210); // Blue 700

/// Colour for secondary text (field captions, file-name hints).
pub const TEXT_DIM: Color32 = Color32::from_rgb(156, 163, 175); // Gray 400

/// Layout constants.
pub const CONTENT_MAX_WIDTH: f32 = 600.0;
pub const FIELD_SPACING: f32 = 8.0;
pub const SECTION_SPACING: f32 = 16.0;
pub const DESCRIPTION_ROWS: usize = 4;
pub const RESULT_MAX_HEIGHT: f32 = 240.0;

/// Apply the application theme to the egui context.
///
/// Installs dark visuals with the accent colour on interactive elements and
/// normalises spacing, so every widget rendered afterwards inherits a
/// consistent baseline. Called once from the app constructor.
pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.hyperlink_color = ACCENT;
    visuals.selection.bg_fill = ACCENT;
    visuals.widgets.hovered.bg_fill = ACCENT.gamma_multiply(0.3);
    visuals.widgets.active.bg_fill = ACCENT.gamma_multiply(0.5);
    ctx.set_visuals(visuals);

    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(FIELD_SPACING, FIELD_SPACING);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
    });
}
