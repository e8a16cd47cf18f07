// VidScope - app/transfer.rs
//
// Remote call lifecycle management. Runs each upload or analyze request on
// a background thread, sending the completion message to the UI thread via
// an mpsc channel.
//
// Architecture:
//   - `TransferManager` lives on the UI thread; the request runs to
//     completion on a detached worker thread.
//   - All cross-thread communication is via `TransferProgress` messages.
//   - The UI's busy guard ensures at most one request is in flight, so a
//     single receiver slot suffices.
//
// There is no cancellation: a request already on the wire runs to
// completion, and if the window closes first the send fails and the worker
// exits quietly.

use crate::core::api::ApiClient;
use crate::core::model::{DraftSubmission, TransferProgress};
use std::path::PathBuf;
use std::sync::mpsc;

/// Manages the in-flight remote call, if any.
pub struct TransferManager {
    /// Channel receiver for the UI to poll completion messages.
    progress_rx: Option<mpsc::Receiver<TransferProgress>>,
}

impl TransferManager {
    pub fn new() -> Self {
        Self { progress_rx: None }
    }

    /// Start uploading the draft's file, title, and description.
    ///
    /// The caller must have verified that a file is selected and that no
    /// other request is in flight.
    pub fn start_upload(&mut self, server_url: String, draft: &DraftSubmission) {
        let Some(file) = draft.file.clone() else {
            tracing::warn!("Upload requested with no file selected; ignoring");
            return;
        };
        let title = draft.title.clone();
        let description = draft.description.clone();

        let (tx, rx) = mpsc::channel();
        self.progress_rx = Some(rx);

        std::thread::spawn(move || {
            run_upload(server_url, file, title, description, tx);
        });

        tracing::info!("Upload started");
    }

    /// Start analysis of a previously uploaded video.
    pub fn start_analyze(&mut self, server_url: String, video_id: i64) {
        let (tx, rx) = mpsc::channel();
        self.progress_rx = Some(rx);

        std::thread::spawn(move || {
            run_analyze(server_url, video_id, tx);
        });

        tracing::info!(video_id, "Analysis started");
    }

    /// Poll for completion messages without blocking.
    pub fn poll_progress(&self) -> Vec<TransferProgress> {
        let mut messages = Vec::new();
        if let Some(ref rx) = self.progress_rx {
            while let Ok(msg) = rx.try_recv() {
                messages.push(msg);
            }
        }
        messages
    }
}

impl Default for TransferManager {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Background workers
// =============================================================================

fn run_upload(
    server_url: String,
    file: PathBuf,
    title: String,
    description: String,
    tx: mpsc::Sender<TransferProgress>,
) {
    let result = ApiClient::new(&server_url)
        .and_then(|client| client.upload_video(&file, &title, &description));

    let msg = match result {
        Ok(record) => TransferProgress::UploadCompleted { record },
        Err(e) => {
            tracing::warn!(error = %e, "Upload request failed");
            TransferProgress::UploadFailed {
                error: e.to_string(),
            }
        }
    };

    // Receiver dropped (window closed); exit quietly.
    let _ = tx.send(msg);
}

fn run_analyze(server_url: String, video_id: i64, tx: mpsc::Sender<TransferProgress>) {
    let result = ApiClient::new(&server_url).and_then(|client| client.analyze_video(video_id));

    let msg = match result {
        Ok(result) => TransferProgress::AnalyzeCompleted { result },
        Err(e) => {
            tracing::warn!(error = %e, "Analyze request failed");
            TransferProgress::AnalyzeFailed {
                error: e.to_string(),
            }
        }
    };

    let _ = tx.send(msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poll_with_no_request_returns_nothing() {
        let manager = TransferManager::new();
        assert!(manager.poll_progress().is_empty());
    }

    /// An unreachable server must surface as an UploadFailed message, not a
    /// hang or a panic.
    #[test]
    fn failed_upload_delivers_failure_message() {
        let mut manager = TransferManager::new();
        let draft = DraftSubmission {
            file: Some(PathBuf::from("/nonexistent/vidscope-test.mp4")),
            title: "t".to_string(),
            description: "d".to_string(),
        };
        // Port 9 (discard) is never a live HTTP server; the missing file
        // fails the attach step before any connection is attempted anyway.
        manager.start_upload("http://127.0.0.1:9".to_string(), &draft);

        let rx = manager.progress_rx.as_ref().unwrap();
        let msg = rx
            .recv_timeout(std::time::Duration::from_secs(10))
            .expect("worker should report completion");
        assert!(matches!(msg, TransferProgress::UploadFailed { .. }));
    }

    #[test]
    fn upload_without_file_is_ignored() {
        let mut manager = TransferManager::new();
        manager.start_upload(
            "http://127.0.0.1:9".to_string(),
            &DraftSubmission::default(),
        );
        assert!(manager.progress_rx.is_none());
    }
}
