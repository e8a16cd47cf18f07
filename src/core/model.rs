// VidScope - core/model.rs
//
// Domain types shared between the API client, the background transfer
// worker, and the UI: the draft form data, the server-confirmed video
// record, and the progress messages streamed back to the UI thread.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// User-entered form data that has not yet been uploaded.
///
/// Never cleared by upload success or failure; only closing the window
/// discards it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftSubmission {
    /// The selected video file, if any. Upload is gated on this.
    pub file: Option<PathBuf>,
    pub title: String,
    pub description: String,
}

impl DraftSubmission {
    /// File name of the selected video, for display next to the picker.
    pub fn file_name(&self) -> Option<String> {
        self.file
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
    }
}

/// Server-confirmed representation of a stored video.
///
/// Deserialized from the upload response. The service guarantees `id` and
/// `video_url`; the remaining fields are kept when present and unknown
/// fields are ignored. Analysis output is attached later by the analyze
/// call and stored opaquely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoRecord {
    pub id: i64,
    /// Playable media reference (a URL hosted by the service's storage).
    pub video_url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Arbitrary structured analysis output, rendered without interpretation.
    #[serde(default)]
    pub analysis_result: Option<serde_json::Value>,
}

impl VideoRecord {
    /// Pretty-printed analysis result for display, if one exists.
    pub fn analysis_pretty(&self) -> Option<String> {
        self.analysis_result
            .as_ref()
            .and_then(|v| serde_json::to_string_pretty(v).ok())
    }
}

/// Which remote call is currently outstanding.
///
/// At most one call is in flight at a time; while this is set every trigger
/// in the UI is disabled, so a second call cannot be started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusyReason {
    Upload,
    Analyze,
}

impl BusyReason {
    /// Short progress label shown next to the spinner.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Upload => "Uploading\u{2026}",
            Self::Analyze => "Analyzing\u{2026}",
        }
    }
}

/// Completion message sent from a transfer worker thread to the UI.
#[derive(Debug)]
pub enum TransferProgress {
    UploadCompleted { record: VideoRecord },
    UploadFailed { error: String },
    AnalyzeCompleted { result: serde_json::Value },
    AnalyzeFailed { error: String },
}

/// A transient, dismissible message shown after each success or failure.
///
/// A single slot, overwritten by each new event (last write wins).
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    shown_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    /// True once the auto-dismiss timeout has elapsed.
    pub fn is_expired(&self, timeout: Duration) -> bool {
        self.shown_at.elapsed() >= timeout
    }

    /// Time left before auto-dismissal, used to schedule the next repaint.
    pub fn remaining(&self, timeout: Duration) -> Duration {
        timeout.saturating_sub(self.shown_at.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_deserializes_with_only_required_fields() {
        let record: VideoRecord =
            serde_json::from_value(json!({"id": 42, "video_url": "http://x/42.mp4"})).unwrap();
        assert_eq!(record.id, 42);
        assert_eq!(record.video_url, "http://x/42.mp4");
        assert!(record.analysis_result.is_none());
        assert!(record.created_at.is_none());
    }

    #[test]
    fn record_ignores_unknown_fields() {
        let record: VideoRecord = serde_json::from_value(json!({
            "id": 7,
            "video_url": "http://x/7.mp4",
            "title": "clip",
            "some_future_field": {"nested": true}
        }))
        .unwrap();
        assert_eq!(record.title.as_deref(), Some("clip"));
    }

    #[test]
    fn analysis_pretty_formats_structured_output() {
        let record = VideoRecord {
            id: 1,
            video_url: "http://x/1.mp4".to_string(),
            title: None,
            description: None,
            created_at: None,
            analysis_result: Some(json!({"labels": ["cat", "dog"]})),
        };
        let pretty = record.analysis_pretty().unwrap();
        assert!(pretty.contains("\"labels\""));
        assert!(pretty.contains('\n'), "expected multi-line output");
    }

    #[test]
    fn notification_expires_after_timeout() {
        let n = Notification::new("done");
        assert!(!n.is_expired(Duration::from_secs(60)));
        assert!(n.is_expired(Duration::ZERO));
    }

    #[test]
    fn draft_file_name_strips_directories() {
        let draft = DraftSubmission {
            file: Some(PathBuf::from("/home/user/videos/cat.mp4")),
            ..Default::default()
        };
        assert_eq!(draft.file_name().as_deref(), Some("cat.mp4"));
    }
}
