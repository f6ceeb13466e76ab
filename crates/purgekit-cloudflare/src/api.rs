//! Cloudflare v4 API response envelope
//!
//! Every endpoint wraps its payload in the same JSON envelope. An HTTP-level
//! success still requires `success: true` in the decoded body; error bodies
//! carry `result: null` and a list of coded messages.

use crate::error::{CloudflareError, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub result: Option<T>,
    #[serde(default)]
    pub errors: Vec<ApiError>,
    #[serde(default)]
    pub messages: Vec<ApiMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ApiMessage {
    #[allow(dead_code)]
    pub code: i64,
    #[allow(dead_code)]
    pub message: String,
}

impl<T> ApiResponse<T> {
    /// Unwraps the envelope, turning `success: false` into an API error
    /// built from the first error message.
    pub fn into_result(self) -> Result<T> {
        if !self.success {
            return Err(CloudflareError::ApiError(self.first_error_message()));
        }
        self.result
            .ok_or_else(|| CloudflareError::ApiError("missing result in response body".to_string()))
    }

    fn first_error_message(&self) -> String {
        self.errors
            .first()
            .map(|e| e.message.clone())
            .unwrap_or_else(|| "Unknown error".to_string())
    }
}
