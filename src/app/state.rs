// VidScope - app/state.rs
//
// Application state management. Holds the draft form data, the uploaded
// video record, the busy indicator, and the current notification.
// Owned by the eframe::App implementation.
//
// `apply_progress` is the whole upload/analyze state machine; it is pure
// state mutation so the transitions can be tested without any rendering.

use crate::core::model::{BusyReason, DraftSubmission, Notification, TransferProgress, VideoRecord};

/// Notification texts, fixed regardless of failure cause: the user sees a
/// generic message while the detail goes to the logs.
pub const MSG_UPLOAD_OK: &str = "Video uploaded successfully!";
pub const MSG_UPLOAD_ERR: &str = "Error uploading video";
pub const MSG_ANALYZE_OK: &str = "Analysis complete!";
pub const MSG_ANALYZE_ERR: &str = "Error analyzing video";

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Base URL of the video service.
    pub server_url: String,

    /// User-entered form data. Survives failures untouched.
    pub draft: DraftSubmission,

    /// Server-confirmed record, present only after a successful upload.
    pub record: Option<VideoRecord>,

    /// The in-flight remote call, if any. While set, every trigger is
    /// disabled so a second call cannot be started.
    pub busy: Option<BusyReason>,

    /// Current notification (single slot, last write wins).
    pub notification: Option<Notification>,

    /// Set by the form panel when the user presses Upload; consumed by the
    /// frame loop, which owns the transfer manager.
    pub request_upload: bool,

    /// Set by the form panel when the user presses Analyze.
    pub request_analyze: bool,
}

impl AppState {
    pub fn new(server_url: String) -> Self {
        Self {
            server_url,
            draft: DraftSubmission::default(),
            record: None,
            busy: None,
            notification: None,
            request_upload: false,
            request_analyze: false,
        }
    }

    /// Upload is allowed once a file is selected and nothing is in flight.
    pub fn can_upload(&self) -> bool {
        self.draft.file.is_some() && self.busy.is_none()
    }

    /// Analyze is allowed once an uploaded record exists and nothing is in
    /// flight.
    pub fn can_analyze(&self) -> bool {
        self.record.is_some() && self.busy.is_none()
    }

    /// Replace the current notification.
    pub fn notify(&mut self, message: &str) {
        self.notification = Some(Notification::new(message));
    }

    /// Apply a worker completion message.
    ///
    /// Clears the busy indicator in every case; the draft is never touched,
    /// and on analyze success the existing record keeps all prior fields with
    /// only the analysis result added or replaced.
    pub fn apply_progress(&mut self, msg: TransferProgress) {
        self.busy = None;
        match msg {
            TransferProgress::UploadCompleted { record } => {
                tracing::info!(video_id = record.id, "Upload complete");
                self.record = Some(record);
                self.notify(MSG_UPLOAD_OK);
            }
            TransferProgress::UploadFailed { error } => {
                tracing::warn!(error = %error, "Upload failed");
                self.notify(MSG_UPLOAD_ERR);
            }
            TransferProgress::AnalyzeCompleted { result } => {
                if let Some(record) = &mut self.record {
                    tracing::info!(video_id = record.id, "Analysis complete");
                    record.analysis_result = Some(result);
                }
                self.notify(MSG_ANALYZE_OK);
            }
            TransferProgress::AnalyzeFailed { error } => {
                tracing::warn!(error = %error, "Analysis failed");
                self.notify(MSG_ANALYZE_ERR);
            }
        }
    }
}
