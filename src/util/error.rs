// VidScope - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; every variant keeps its source so the
// full causal chain is available for diagnostic logging. The UI deliberately
// collapses all of these to a generic failure notification — the detail here
// exists for the logs, not the user.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors produced while talking to the video service.
///
/// `operation` is a short verb ("upload", "analyze") identifying which of
/// the two remote calls failed.
#[derive(Debug)]
pub enum ApiError {
    /// The HTTP client itself could not be constructed (TLS backend init).
    ClientBuild { source: reqwest::Error },

    /// The selected video file could not be attached to the multipart form.
    Attach { path: PathBuf, source: io::Error },

    /// The request could not be sent or the connection failed mid-flight.
    Request {
        operation: &'static str,
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    Status {
        operation: &'static str,
        status: reqwest::StatusCode,
        /// Response body, truncated to `MAX_ERROR_BODY_BYTES`.
        body: String,
    },

    /// The response body could not be decoded as the expected JSON shape.
    Decode {
        operation: &'static str,
        source: reqwest::Error,
    },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClientBuild { source } => {
                write!(f, "Cannot construct HTTP client: {source}")
            }
            Self::Attach { path, source } => {
                write!(f, "Cannot attach '{}': {source}", path.display())
            }
            Self::Request { operation, source } => {
                write!(f, "Request failed during {operation}: {source}")
            }
            Self::Status {
                operation,
                status,
                body,
            } => {
                if body.is_empty() {
                    write!(f, "Server returned {status} during {operation}")
                } else {
                    write!(f, "Server returned {status} during {operation}: {body}")
                }
            }
            Self::Decode { operation, source } => {
                write!(f, "Cannot decode {operation} response: {source}")
            }
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ClientBuild { source } => Some(source),
            Self::Attach { source, .. } => Some(source),
            Self::Request { source, .. } => Some(source),
            Self::Status { .. } => None,
            Self::Decode { source, .. } => Some(source),
        }
    }
}
