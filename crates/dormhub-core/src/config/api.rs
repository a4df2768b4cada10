//! Backend API connection configuration.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Where and how the client talks to the backend.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ApiConfig {
    /// Backend origin, e.g. `http://localhost:4000`.
    #[serde(default = "default_base_url")]
    #[validate(url)]
    pub base_url: String,
    /// Path prefix under which every endpoint lives.
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    #[validate(range(min = 1, max = 300))]
    pub timeout_seconds: u64,
    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl ApiConfig {
    /// Join the origin and prefix into the API root, without a trailing slash.
    pub fn root(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let prefix = self.prefix.trim_matches('/');
        if prefix.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{prefix}")
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            prefix: default_prefix(),
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:4000".to_string()
}

fn default_prefix() -> String {
    "/api".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("dormhub/{}", env!("CARGO_PKG_VERSION"))
}
