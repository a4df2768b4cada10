//! Error body returned by the backend.

use serde::{Deserialize, Serialize};

/// Error response body sent by the backend on non-success statuses.
///
/// The backend is not consistent about the field it uses, so both
/// `message` and `error` are accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Human-readable message.
    #[serde(default)]
    pub message: Option<String>,
    /// Alternative message field used by some endpoints.
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorResponse {
    /// Parse a raw body, returning `None` if it is not a JSON error object.
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    /// The most specific message in the body, if any.
    pub fn text(&self) -> Option<&str> {
        self.message
            .as_deref()
            .or(self.error.as_deref())
            .filter(|m| !m.trim().is_empty())
    }
}
