//! Backend API connection settings.

use serde::Deserialize;

/// Base URL used when neither the config file nor `API_BASE_URL` set one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/v1";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Root of the REST API, e.g. `http://localhost:8080/api/v1`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout. Unset keeps the HTTP client's default.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: None,
        }
    }
}
