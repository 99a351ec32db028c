//! Centralized CLI configuration.
//!
//! Strongly-typed configuration loaded via the `config` crate from
//! environment variables (`STAFFGATE_API_BASE_URL`,
//! `STAFFGATE_SESSION_FILE`).

use serde::Deserialize;
use std::path::PathBuf;

/// Portal CLI configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PortalConfig {
    /// Base URL of the portal REST API.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Path of the persisted session file.
    #[serde(default = "default_session_file")]
    pub session_file: PathBuf,
}

fn default_api_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_session_file() -> PathBuf {
    PathBuf::from(".staffgate/session.json")
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            session_file: default_session_file(),
        }
    }
}

impl PortalConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a present variable cannot be deserialized.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::with_prefix("STAFFGATE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
