//! Client configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section, and every field has a default so an empty file is valid.

pub mod api;
pub mod logging;
pub mod polling;

use serde::{Deserialize, Serialize};
use validator::Validate;

pub use self::api::ApiConfig;
pub use self::logging::LoggingConfig;
pub use self::polling::PollingConfig;

use crate::error::AppError;

/// Root client configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (base file + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// Backend API settings.
    #[serde(default)]
    #[validate(nested)]
    pub api: ApiConfig,
    /// Poller settings.
    #[serde(default)]
    #[validate(nested)]
    pub polling: PollingConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the file at `path` with an environment-specific overlay
    /// `config/<env>.toml` and environment variables prefixed with
    /// `DORMHUB__` (e.g. `DORMHUB__API__BASE_URL`). Missing files are
    /// skipped.
    pub fn load(path: &str, env: &str) -> Result<Self, AppError> {
        let base = path.strip_suffix(".toml").unwrap_or(path);

        let config = config::Config::builder()
            .add_source(config::File::with_name(base).required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("DORMHUB")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let loaded: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        loaded
            .validate()
            .map_err(|e| AppError::configuration(format!("Invalid configuration: {e}")))?;

        tracing::debug!(api = %loaded.api.root(), "Configuration loaded");

        Ok(loaded)
    }
}
