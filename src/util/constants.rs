// VidScope - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "VidScope";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Remote service
// =============================================================================

/// Default base URL of the video service. Override with --server.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

/// Path of the upload endpoint, relative to the base URL.
pub const UPLOAD_PATH: &str = "/api/videos/";

/// Maximum number of bytes of an error response body kept for logging.
/// Truncation stops a misbehaving server from bloating the log output.
pub const MAX_ERROR_BODY_BYTES: usize = 512;

// =============================================================================
// UI behaviour
// =============================================================================

/// How long a notification stays on screen before auto-dismissing.
pub const NOTIFICATION_TIMEOUT_MS: u64 = 6_000;

/// Extensions offered by the video file picker.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "mkv", "avi", "webm", "m4v"];

/// Default log level when neither RUST_LOG nor --debug is given.
pub const DEFAULT_LOG_LEVEL: &str = "info";
