use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::credential::DEFAULT_API_KEY_ENV;
use crate::error::ConfigurationError;
use crate::paths;
use crate::translation::{DEFAULT_LANGUAGE, validate_language};

/// Base URL of the OpenAI-compatible generative-language API.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/openai/";

/// Hosted model used when nothing else is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Request timeout used when nothing else is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Address the web form listens on when nothing else is configured.
pub const DEFAULT_BIND: &str = "127.0.0.1:8000";

/// Settings in the `[translator]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// OpenAI-compatible base endpoint.
    pub endpoint: Option<String>,
    /// Hosted model name.
    pub model: Option<String>,
    /// Environment variable containing the API key.
    pub api_key_env: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// Listen address for `translator serve`.
    pub bind: Option<String>,
    /// Language preselected in the interactive form.
    pub default_language: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/translator/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub translator: TranslatorConfig,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub timeout_secs: Option<u64>,
    pub bind: Option<String>,
}

/// Settings after merging CLI options, the config file and built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub endpoint: String,
    pub model: String,
    pub api_key_env: String,
    pub timeout: Duration,
    pub bind: String,
    pub default_language: String,
}

/// Resolves settings with priority CLI option > config file > built-in default.
pub fn resolve_settings(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<Settings, ConfigurationError> {
    let file = &config_file.translator;

    let endpoint = options
        .endpoint
        .as_ref()
        .or(file.endpoint.as_ref())
        .map_or(DEFAULT_ENDPOINT, String::as_str)
        .to_string();
    if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
        return Err(ConfigurationError::InvalidEndpoint(endpoint));
    }

    let timeout_secs = options
        .timeout_secs
        .or(file.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    if timeout_secs == 0 {
        return Err(ConfigurationError::InvalidTimeout);
    }

    let default_language = file
        .default_language
        .clone()
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
    if validate_language(&default_language).is_err() {
        return Err(ConfigurationError::InvalidDefaultLanguage(default_language));
    }

    Ok(Settings {
        endpoint,
        model: options
            .model
            .clone()
            .or_else(|| file.model.clone())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        api_key_env: file
            .api_key_env
            .clone()
            .unwrap_or_else(|| DEFAULT_API_KEY_ENV.to_string()),
        timeout: Duration::from_secs(timeout_secs),
        bind: options
            .bind
            .clone()
            .or_else(|| file.bind.clone())
            .unwrap_or_else(|| DEFAULT_BIND.to_string()),
        default_language,
    })
}

/// Loads the optional settings file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is read from `$XDG_CONFIG_HOME/translator/config.toml`
    /// or `~/.config/translator/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Reads the config file. A missing file yields the defaults.
    pub fn load(&self) -> Result<ConfigFile, ConfigurationError> {
        let contents = match fs::read_to_string(&self.config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.config_path.display(), "no config file, using defaults");
                return Ok(ConfigFile::default());
            }
            Err(e) => {
                return Err(ConfigurationError::InvalidFile {
                    path: self.config_path.display().to_string(),
                    message: e.to_string(),
                });
            }
        };

        toml::from_str(&contents).map_err(|e| ConfigurationError::InvalidFile {
            path: self.config_path.display().to_string(),
            message: e.message().to_string(),
        })
    }
}
