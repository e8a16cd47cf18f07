// VidScope - ui/panels/toast.rs
//
// Transient bottom-anchored notification. A single slot overwritten by each
// new event; dismissible by the user and auto-expired by the frame loop.

use crate::app::state::AppState;

/// Render the current notification, if any.
///
/// Expiry is handled by the frame loop (gui.rs) so that a repaint is
/// scheduled for the dismissal moment; this function only draws and handles
/// the manual dismiss.
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    let Some(notification) = &state.notification else {
        return;
    };
    let message = notification.message.clone();

    egui::Area::new(egui::Id::new("notification_toast"))
        .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -16.0])
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(message);
                    if ui.small_button("\u{2715}").clicked() {
                        state.notification = None;
                    }
                });
            });
        });
}
