//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct. Settings come from an optional TOML
//! file, then environment variables override them. The bot token is only
//! ever read from the environment.
//!
//! # Example
//!
//! ```no_run
//! use aracanix_bot::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_or_default("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;
use url::Url;

use super::backend::BackendConfig;
use super::logging::LoggingConfig;
use super::summary::SummaryConfig;
use super::telegram::TelegramAppConfig;
use crate::error::{ConfigError, Result};

pub const ENV_BOT_TOKEN: &str = "BOT_TOKEN";
pub const ENV_API_BASE_URL: &str = "API_BASE_URL";
pub const ENV_SUMMARY_CHAT_ID: &str = "SUMMARY_CHAT_ID";
pub const ENV_DEBUG_CHAT_ID: &str = "DEBUG_CHAT_ID";

/// Main application configuration.
///
/// Built once at startup and shared read-only afterwards.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub telegram: TelegramAppConfig,

    #[serde(default)]
    pub summary: SummaryConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn parse_chat_id(field: &'static str, raw: &str) -> Result<i64> {
    raw.trim().parse().map_err(|_| {
        ConfigError::InvalidValue {
            field,
            reason: format!("`{raw}` is not a chat id"),
        }
        .into()
    })
}

impl Config {
    /// Parse configuration from TOML content and apply process environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed, an override is invalid, or
    /// validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        Self::parse_toml_with_env(content, |key| std::env::var(key).ok())
    }

    /// Like [`Config::parse_toml`] with an explicit environment lookup.
    pub fn parse_toml_with_env<F>(content: &str, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env(env)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or
    /// [`Config::parse_toml`] fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load from `path` when it exists, otherwise start from defaults.
    /// Environment overrides apply either way.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Self::parse_toml("")
        }
    }

    fn apply_env<F>(&mut self, env: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        self.telegram.bot_token = non_empty(ENV_BOT_TOKEN);
        if let Some(url) = non_empty(ENV_API_BASE_URL) {
            self.backend.base_url = url;
        }
        if let Some(raw) = non_empty(ENV_SUMMARY_CHAT_ID) {
            self.telegram.summary_chat_id = Some(parse_chat_id(ENV_SUMMARY_CHAT_ID, &raw)?);
        }
        if let Some(raw) = non_empty(ENV_DEBUG_CHAT_ID) {
            self.telegram.debug_chat_id = Some(parse_chat_id(ENV_DEBUG_CHAT_ID, &raw)?);
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.backend.base_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "base_url" }.into());
        }
        let url = Url::parse(&self.backend.base_url).map_err(|e| ConfigError::InvalidValue {
            field: "base_url",
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field: "base_url",
                reason: format!("unsupported scheme `{}`", url.scheme()),
            }
            .into());
        }
        if self.backend.request_timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.summary.interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "interval_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// The bot token, required to connect to Telegram.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when `BOT_TOKEN` is not set.
    pub fn require_bot_token(&self) -> Result<&str> {
        self.telegram
            .bot_token
            .as_deref()
            .ok_or_else(|| ConfigError::MissingField { field: ENV_BOT_TOKEN }.into())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_empty() {
        let config = Config::parse_toml_with_env("", env(&[])).unwrap();

        assert_eq!(config.backend.base_url, "http://localhost:8080/api/v1");
        assert_eq!(config.summary.interval_secs, 3 * 60 * 60);
        assert!(config.telegram.summary_chat_id.is_none());
        assert!(config.telegram.bot_token.is_none());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn env_overrides_file() {
        let toml = r#"
[backend]
base_url = "http://file:8080/api"

[telegram]
summary_chat_id = 1
"#;
        let config = Config::parse_toml_with_env(
            toml,
            env(&[
                ("BOT_TOKEN", "secret"),
                ("API_BASE_URL", "https://api.example.com/v1"),
                ("SUMMARY_CHAT_ID", "-100200"),
                ("DEBUG_CHAT_ID", "77"),
            ]),
        )
        .unwrap();

        assert_eq!(config.backend.base_url, "https://api.example.com/v1");
        assert_eq!(config.telegram.summary_chat_id, Some(-100200));
        assert_eq!(config.telegram.debug_chat_id, Some(77));
        assert_eq!(config.require_bot_token().unwrap(), "secret");
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let config =
            Config::parse_toml_with_env("", env(&[("BOT_TOKEN", "  "), ("API_BASE_URL", "")]))
                .unwrap();

        assert!(config.telegram.bot_token.is_none());
        assert_eq!(config.backend.base_url, "http://localhost:8080/api/v1");
    }

    #[test]
    fn invalid_chat_id_env_rejected() {
        let result = Config::parse_toml_with_env("", env(&[("SUMMARY_CHAT_ID", "general")]));

        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "SUMMARY_CHAT_ID",
                ..
            }))
        ));
    }

    #[test]
    fn bot_token_required_on_demand() {
        let config = Config::parse_toml_with_env("", env(&[])).unwrap();

        assert!(matches!(
            config.require_bot_token(),
            Err(Error::Config(ConfigError::MissingField { field: "BOT_TOKEN" }))
        ));
    }

    #[test]
    fn rejects_non_http_base_url() {
        let toml = "[backend]\nbase_url = \"ftp://example.com\"\n";
        let result = Config::parse_toml_with_env(toml, env(&[]));

        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "base_url",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_zero_interval() {
        let toml = "[summary]\ninterval_secs = 0\n";
        let result = Config::parse_toml_with_env(toml, env(&[]));

        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "interval_secs",
                ..
            }))
        ));
    }
}
