// VidScope - core/api.rs
//
// Blocking HTTP client for the video service. Always driven from a
// background thread (see app/transfer.rs); never called on the UI thread.
//
// Two endpoints:
//   POST {base}/api/videos/              multipart: video, title, description
//   POST {base}/api/videos/{id}/analyze/ empty body, returns arbitrary JSON

use crate::core::model::VideoRecord;
use crate::util::constants::{MAX_ERROR_BODY_BYTES, UPLOAD_PATH};
use crate::util::error::ApiError;
use reqwest::blocking::{multipart, Client, Response};
use std::path::Path;

/// Client for the video service's upload and analyze endpoints.
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Create a client for the service at `base_url`.
    ///
    /// A trailing slash on the base URL is tolerated. No request timeout is
    /// set: reqwest's blocking default of 30 seconds would cut off large
    /// video uploads, and the service enforces its own limits.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(None)
            .build()
            .map_err(|source| ApiError::ClientBuild { source })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Upload a video file with its title and description.
    ///
    /// Sends a multipart form with fields `video` (the file), `title`, and
    /// `description`, and decodes the response into a [`VideoRecord`].
    pub fn upload_video(
        &self,
        file: &Path,
        title: &str,
        description: &str,
    ) -> Result<VideoRecord, ApiError> {
        let form = multipart::Form::new()
            .text("title", title.to_string())
            .text("description", description.to_string())
            .file("video", file)
            .map_err(|source| ApiError::Attach {
                path: file.to_path_buf(),
                source,
            })?;

        let url = format!("{}{}", self.base_url, UPLOAD_PATH);
        tracing::debug!(url = %url, file = %file.display(), "Uploading video");

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .map_err(|source| ApiError::Request {
                operation: "upload",
                source,
            })?;

        let response = Self::expect_success(response, "upload")?;
        response.json().map_err(|source| ApiError::Decode {
            operation: "upload",
            source,
        })
    }

    /// Trigger server-side analysis of a previously uploaded video.
    ///
    /// The result is arbitrary JSON, returned opaquely.
    pub fn analyze_video(&self, video_id: i64) -> Result<serde_json::Value, ApiError> {
        let url = format!("{}{}{}/analyze/", self.base_url, UPLOAD_PATH, video_id);
        tracing::debug!(url = %url, video_id, "Requesting analysis");

        let response = self
            .client
            .post(&url)
            .send()
            .map_err(|source| ApiError::Request {
                operation: "analyze",
                source,
            })?;

        let response = Self::expect_success(response, "analyze")?;
        response.json().map_err(|source| ApiError::Decode {
            operation: "analyze",
            source,
        })
    }

    /// Map a non-success status to `ApiError::Status`, keeping a truncated
    /// copy of the body for the logs.
    fn expect_success(response: Response, operation: &'static str) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let mut body = response.text().unwrap_or_default();
        if body.len() > MAX_ERROR_BODY_BYTES {
            let mut end = MAX_ERROR_BODY_BYTES;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            body.truncate(end);
        }

        Err(ApiError::Status {
            operation,
            status,
            body,
        })
    }
}
