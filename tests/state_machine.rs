// VidScope - tests/state_machine.rs
//
// The observable state machine of the upload-and-analyze flow, exercised
// through AppState without any rendering:
//   Idle/Editing -> Uploading -> Uploaded -> Analyzing -> Uploaded-with-Result
// with failures returning to the previous state and the draft preserved.

use serde_json::json;
use std::path::PathBuf;
use vidscope::app::state::{
    AppState, MSG_ANALYZE_OK, MSG_UPLOAD_ERR, MSG_UPLOAD_OK,
};
use vidscope::core::model::{BusyReason, DraftSubmission, TransferProgress, VideoRecord};

fn editing_state() -> AppState {
    let mut state = AppState::new("http://localhost:8000".to_string());
    state.draft = DraftSubmission {
        file: Some(PathBuf::from("cat.mp4")),
        title: "My cat".to_string(),
        description: "A video of my cat".to_string(),
    };
    state
}

fn uploaded_record() -> VideoRecord {
    serde_json::from_value(json!({"id": 42, "video_url": "http://x/42.mp4"})).unwrap()
}

/// The happy path end to end: both operations, busy strictly during
/// pendency, record replaced on upload and merged on analyze.
#[test]
fn full_flow_reaches_uploaded_with_result() {
    let mut state = editing_state();

    // Idle/Editing: upload offered, analyze not.
    assert!(state.can_upload());
    assert!(!state.can_analyze());

    // Uploading: busy blocks both triggers.
    state.busy = Some(BusyReason::Upload);
    assert!(!state.can_upload());
    assert!(!state.can_analyze());

    // Uploaded.
    state.apply_progress(TransferProgress::UploadCompleted {
        record: uploaded_record(),
    });
    assert!(state.busy.is_none());
    assert!(state.can_analyze());
    assert_eq!(state.record.as_ref().unwrap().video_url, "http://x/42.mp4");
    assert!(
        state.record.as_ref().unwrap().analysis_result.is_none(),
        "no analysis section before analyze"
    );
    assert_eq!(state.notification.as_ref().unwrap().message, MSG_UPLOAD_OK);

    // Analyzing.
    state.busy = Some(BusyReason::Analyze);
    assert!(!state.can_upload());
    assert!(!state.can_analyze());

    // Uploaded-with-Result: result merged, video URL unchanged.
    state.apply_progress(TransferProgress::AnalyzeCompleted {
        result: json!({"labels": ["cat", "dog"]}),
    });
    let record = state.record.as_ref().unwrap();
    assert_eq!(record.video_url, "http://x/42.mp4");
    assert_eq!(record.analysis_result, Some(json!({"labels": ["cat", "dog"]})));
    assert_eq!(state.notification.as_ref().unwrap().message, MSG_ANALYZE_OK);
    assert!(state.busy.is_none());
}

/// Upload failure returns to Idle/Editing with the draft exactly as entered.
#[test]
fn upload_failure_returns_to_editing_with_draft_intact() {
    let mut state = editing_state();
    let draft_before = state.draft.clone();

    state.busy = Some(BusyReason::Upload);
    state.apply_progress(TransferProgress::UploadFailed {
        error: "connection reset".to_string(),
    });

    assert!(state.busy.is_none());
    assert!(state.record.is_none());
    assert_eq!(state.draft, draft_before);
    assert_eq!(state.notification.as_ref().unwrap().message, MSG_UPLOAD_ERR);
    assert!(state.can_upload(), "retry must be possible after failure");
}

/// Analyze failure leaves the uploaded record byte-for-byte unchanged.
#[test]
fn analyze_failure_leaves_record_unchanged() {
    let mut state = editing_state();
    state.record = Some(uploaded_record());
    state.busy = Some(BusyReason::Analyze);

    state.apply_progress(TransferProgress::AnalyzeFailed {
        error: "timeout".to_string(),
    });

    assert_eq!(state.record, Some(uploaded_record()));
    assert!(state.can_analyze(), "retry must be possible after failure");
}

/// A second upload replaces the record wholesale, including a previously
/// attached analysis result.
#[test]
fn reupload_replaces_record_not_merges() {
    let mut state = editing_state();
    let mut first = uploaded_record();
    first.analysis_result = Some(json!({"labels": ["cat"]}));
    state.record = Some(first);

    state.busy = Some(BusyReason::Upload);
    state.apply_progress(TransferProgress::UploadCompleted {
        record: serde_json::from_value(json!({"id": 43, "video_url": "http://x/43.mp4"}))
            .unwrap(),
    });

    let record = state.record.as_ref().unwrap();
    assert_eq!(record.id, 43);
    assert!(
        record.analysis_result.is_none(),
        "old analysis must not survive a re-upload"
    );
}
