use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::paths::config_json_path;

pub const DEFAULT_GREETING: &str = "Hello! How can I assist you with our menu today?";
pub const DEFAULT_FALLBACK_MESSAGE: &str = "Sorry, something went wrong. Please try again later.";

const DEFAULT_API_BASE: &str = "http://localhost:8000";
const DEFAULT_CHAT_PATH: &str = "/api/chat";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const CONFIG_FILE_PATH: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Base URL of the chat backend, e.g. `http://localhost:8000`
    pub api_base: String,
    /// Path of the chat endpoint below `api_base`
    pub chat_path: String,
    /// Upper bound for one request/response exchange
    pub request_timeout_secs: u64,
    /// Bot message seeded into every new session
    pub greeting: String,
    /// Bot message appended when an exchange fails
    pub fallback_message: String,
    pub http_proxy: String,
    pub https_proxy: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            chat_path: DEFAULT_CHAT_PATH.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            greeting: DEFAULT_GREETING.to_string(),
            fallback_message: DEFAULT_FALLBACK_MESSAGE.to_string(),
            http_proxy: String::new(),
            https_proxy: String::new(),
        }
    }
}

impl Config {
    /// Load the config from `~/.menu-chat/config.json`, falling back to
    /// `./config.toml`, then apply environment overrides.
    ///
    /// A file that cannot be parsed is skipped with a warning.
    pub fn load() -> Self {
        let mut config = Self::load_from(&config_json_path(), Path::new(CONFIG_FILE_PATH));
        config.apply_env_with(|key| std::env::var(key).ok());
        config
    }

    /// Load from explicit file locations without looking at the environment.
    pub fn load_from(json_path: &Path, toml_path: &Path) -> Self {
        if json_path.exists() {
            match Self::from_json_file(json_path) {
                Ok(config) => return config,
                Err(e) => log::warn!("Ignoring config {}: {}", json_path.display(), e),
            }
        }

        if toml_path.exists() {
            match Self::from_toml_file(toml_path) {
                Ok(config) => return config,
                Err(e) => log::warn!("Ignoring config {}: {}", toml_path.display(), e),
            }
        }

        Self::default()
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Override fields from environment-style variables provided by `lookup`.
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_base) = lookup("CHAT_API_BASE") {
            self.api_base = api_base;
        }
        if let Some(chat_path) = lookup("CHAT_PATH") {
            self.chat_path = chat_path;
        }
        if let Some(timeout) = lookup("CHAT_TIMEOUT_SECS") {
            match timeout.trim().parse::<u64>() {
                Ok(secs) => self.request_timeout_secs = secs,
                Err(_) => log::warn!("Ignoring invalid CHAT_TIMEOUT_SECS value {:?}", timeout),
            }
        }
        if let Some(http_proxy) = lookup("HTTP_PROXY") {
            self.http_proxy = http_proxy;
        }
        if let Some(https_proxy) = lookup("HTTPS_PROXY") {
            self.https_proxy = https_proxy;
        }
    }

    /// Greeting to seed a session with. Blank values fall back to the default.
    pub fn greeting(&self) -> &str {
        non_blank_or_default("greeting", &self.greeting, DEFAULT_GREETING)
    }

    /// Bot text for failed exchanges. Blank values fall back to the default.
    pub fn fallback_message(&self) -> &str {
        non_blank_or_default("fallback_message", &self.fallback_message, DEFAULT_FALLBACK_MESSAGE)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Full URL of the chat endpoint.
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            self.chat_path.trim_start_matches('/')
        )
    }
}

fn non_blank_or_default<'a>(field: &str, value: &'a str, default: &'static str) -> &'a str {
    if value.trim().is_empty() {
        log::warn!("Config field {} is blank, using the default", field);
        default
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_match_widget_texts() {
        let config = Config::default();
        assert_eq!(config.greeting, DEFAULT_GREETING);
        assert_eq!(config.fallback_message, DEFAULT_FALLBACK_MESSAGE);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.endpoint_url(), "http://localhost:8000/api/chat");
    }

    #[test]
    fn endpoint_url_joins_with_single_slash() {
        let config = Config {
            api_base: "http://example.com/".to_string(),
            chat_path: "api/chat".to_string(),
            ..Config::default()
        };
        assert_eq!(config.endpoint_url(), "http://example.com/api/chat");
    }

    #[test]
    fn env_overrides_fields() {
        let vars = env(&[
            ("CHAT_API_BASE", "http://backend:9000"),
            ("CHAT_TIMEOUT_SECS", "5"),
            ("HTTPS_PROXY", "http://proxy:3128"),
        ]);
        let mut config = Config::default();
        config.apply_env_with(|key| vars.get(key).cloned());

        assert_eq!(config.api_base, "http://backend:9000");
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.https_proxy, "http://proxy:3128");
        assert_eq!(config.chat_path, DEFAULT_CHAT_PATH);
    }

    #[test]
    fn invalid_timeout_env_is_ignored() {
        let vars = env(&[("CHAT_TIMEOUT_SECS", "soon")]);
        let mut config = Config::default();
        config.apply_env_with(|key| vars.get(key).cloned());
        assert_eq!(config.request_timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn json_file_takes_precedence_over_toml() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("config.json");
        let toml_path = dir.path().join("config.toml");
        std::fs::write(&json_path, r#"{"api_base":"http://json:1"}"#).unwrap();
        std::fs::write(&toml_path, "api_base = \"http://toml:2\"\n").unwrap();

        let config = Config::load_from(&json_path, &toml_path);
        assert_eq!(config.api_base, "http://json:1");
        assert_eq!(config.greeting, DEFAULT_GREETING);
    }

    #[test]
    fn broken_json_falls_back_to_toml() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("config.json");
        let toml_path = dir.path().join("config.toml");
        std::fs::write(&json_path, "{ not json").unwrap();
        std::fs::write(&toml_path, "request_timeout_secs = 12\n").unwrap();

        let config = Config::load_from(&json_path, &toml_path);
        assert_eq!(config.request_timeout_secs, 12);
    }

    #[test]
    fn blank_widget_texts_fall_back_to_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"greeting":"  ","fallback_message":""}"#).unwrap();
        assert_eq!(config.greeting(), DEFAULT_GREETING);
        assert_eq!(config.fallback_message(), DEFAULT_FALLBACK_MESSAGE);

        let custom = Config {
            greeting: "Welcome!".to_string(),
            ..Config::default()
        };
        assert_eq!(custom.greeting(), "Welcome!");
    }

    #[test]
    fn missing_files_yield_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(
            &dir.path().join("absent.json"),
            &dir.path().join("absent.toml"),
        );
        assert_eq!(config, Config::default());
    }
}
