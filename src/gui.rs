// VidScope - gui.rs
//
// Top-level eframe::App implementation.
// Each frame: poll the transfer worker, apply completions to state, expire
// the notification, dispatch actions requested by the panels, then lay out
// the single page.

use crate::app::state::AppState;
use crate::app::transfer::TransferManager;
use crate::core::model::BusyReason;
use crate::ui;
use crate::util::constants::NOTIFICATION_TIMEOUT_MS;
use std::time::Duration;

/// The VidScope application.
pub struct VidScopeApp {
    pub state: AppState,
    pub transfer: TransferManager,
}

impl VidScopeApp {
    /// Create the application and install the global theme on the context.
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        ui::theme::apply(&cc.egui_ctx);
        Self {
            state,
            transfer: TransferManager::new(),
        }
    }
}

impl eframe::App for VidScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll for request completions.
        for msg in self.transfer.poll_progress() {
            self.state.apply_progress(msg);
        }
        // Repaint promptly while a request is in flight so its completion is
        // picked up without waiting for user input.
        if self.state.busy.is_some() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        // Auto-dismiss the notification and schedule a repaint for the
        // moment it expires.
        let timeout = Duration::from_millis(NOTIFICATION_TIMEOUT_MS);
        if let Some(notification) = &self.state.notification {
            if notification.is_expired(timeout) {
                self.state.notification = None;
            } else {
                ctx.request_repaint_after(notification.remaining(timeout));
            }
        }

        // ---- Handle flags set by the form panel ----
        // The busy guard is re-checked here: a stale click processed in the
        // same frame as a new request must not start a second one.
        if std::mem::take(&mut self.state.request_upload) && self.state.can_upload() {
            self.state.busy = Some(BusyReason::Upload);
            self.transfer
                .start_upload(self.state.server_url.clone(), &self.state.draft);
        }
        if std::mem::take(&mut self.state.request_analyze) && self.state.can_analyze() {
            if let Some(record) = &self.state.record {
                self.state.busy = Some(BusyReason::Analyze);
                self.transfer
                    .start_analyze(self.state.server_url.clone(), record.id);
            }
        }

        // Single page: a constrained-width column, scrollable once the
        // analysis output grows past the window.
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(ui::theme::CONTENT_MAX_WIDTH.min(ui.available_width()));
                    ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                        ui.add_space(ui::theme::SECTION_SPACING);
                        ui::panels::upload::render(ui, &mut self.state);
                        ui::panels::record::render(ui, &self.state);
                    });
                });
            });
        });

        ui::panels::toast::render(ctx, &mut self.state);
    }
}
