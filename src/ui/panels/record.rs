// VidScope - ui/panels/record.rs
//
// Uploaded-video section: record metadata, the playable media link, and the
// analysis result rendered as formatted structured text.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the uploaded record, if one exists.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    let Some(record) = &state.record else {
        return;
    };

    ui.add_space(theme::SECTION_SPACING);
    ui.separator();
    ui.add_space(theme::FIELD_SPACING);
    ui.heading("Uploaded Video");

    egui::Grid::new("record_grid")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            if let Some(title) = &record.title {
                ui.label("Title:");
                ui.label(title);
                ui.end_row();
            }

            if let Some(description) = &record.description {
                ui.label("Description:");
                ui.label(description);
                ui.end_row();
            }

            ui.label("Video:");
            // egui has no video widget; the playable reference opens in the
            // system browser or media player.
            ui.hyperlink(&record.video_url);
            ui.end_row();

            if let Some(created_at) = &record.created_at {
                ui.label("Uploaded:");
                ui.label(created_at.to_rfc3339());
                ui.end_row();
            }
        });

    if let Some(pretty) = record.analysis_pretty() {
        ui.add_space(theme::FIELD_SPACING);
        ui.label(egui::RichText::new("Analysis Result:").strong());
        egui::ScrollArea::vertical()
            .id_salt("analysis_result")
            .max_height(theme::RESULT_MAX_HEIGHT)
            .show(ui, |ui| {
                ui.label(egui::RichText::new(pretty).monospace());
            });
    }
}
