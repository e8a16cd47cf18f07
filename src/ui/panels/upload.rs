// VidScope - ui/panels/upload.rs
//
// The submission form: title, description, video file picker, and the
// Upload / Analyze actions with the busy spinner.
//
// The panel never starts a request itself; it sets `request_upload` /
// `request_analyze` on the state and the frame loop (which owns the
// transfer manager) dispatches them. Both actions are disabled whenever a
// request is in flight.

use crate::app::state::AppState;
use crate::core::model::BusyReason;
use crate::ui::theme;
use crate::util::constants::VIDEO_EXTENSIONS;

/// Render the upload-and-analyze form.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Video Analyzer");
    ui.add_space(theme::FIELD_SPACING);

    ui.label("Title");
    ui.add(egui::TextEdit::singleline(&mut state.draft.title).desired_width(f32::INFINITY));

    ui.label("Description");
    ui.add(
        egui::TextEdit::multiline(&mut state.draft.description)
            .desired_rows(theme::DESCRIPTION_ROWS)
            .desired_width(f32::INFINITY),
    );

    ui.add_space(theme::FIELD_SPACING);
    ui.horizontal(|ui| {
        // The file dialog blocks the UI thread, which is fine: nothing is
        // animating while the user picks a file.
        if ui.button("Choose Video\u{2026}").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Video files", VIDEO_EXTENSIONS)
                .pick_file()
            {
                state.draft.file = Some(path);
            }
        }
        match state.draft.file_name() {
            Some(name) => ui.label(name),
            None => ui.label(egui::RichText::new("No file selected").color(theme::TEXT_DIM)),
        };
    });

    ui.add_space(theme::FIELD_SPACING);
    ui.horizontal(|ui| {
        if ui
            .add_enabled(state.can_upload(), egui::Button::new("Upload Video"))
            .clicked()
        {
            state.request_upload = true;
        }

        // Analyze appears only once an uploaded record exists.
        if state.record.is_some()
            && ui
                .add_enabled(state.can_analyze(), egui::Button::new("Analyze Video"))
                .clicked()
        {
            state.request_analyze = true;
        }

        if let Some(busy) = state.busy {
            ui.spinner();
            ui.label(busy.label());
        }
    });

    // Nudge the user towards the gating condition instead of a dead button.
    if state.draft.file.is_none() && state.busy != Some(BusyReason::Upload) {
        ui.label(
            egui::RichText::new("Select a video file to enable upload.")
                .small()
                .color(theme::TEXT_DIM),
        );
    }
}
