mod defaults;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::TallyError;
use crate::language::LanguageCode;
use defaults::*;

/// Top-level Tally configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tally: TallyConfig,
    #[serde(default)]
    pub i18n: I18nConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TallyConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Translation engine settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    /// Effective default language code. Unknown codes fall back to `en`.
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Server dictionaries younger than this are served without refetching.
    #[serde(default = "default_fresh_secs")]
    pub fresh_secs: u64,
    /// Server dictionaries older than this are dropped from the cache.
    #[serde(default = "default_retain_secs")]
    pub retain_secs: u64,
    /// Where the session language is kept. Empty = `{data_dir}/session`.
    #[serde(default)]
    pub session_dir: String,
    /// Persist the session language between runs of the CLI.
    #[serde(default = "default_true")]
    pub remember_session: bool,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            fresh_secs: default_fresh_secs(),
            retain_secs: default_retain_secs(),
            session_dir: String::new(),
            remember_session: true,
        }
    }
}

impl I18nConfig {
    /// The configured default as a supported language.
    pub fn default_language(&self) -> LanguageCode {
        LanguageCode::parse_or_default(&self.default_language)
    }

    pub fn fresh_for(&self) -> Duration {
        Duration::from_secs(self.fresh_secs)
    }

    pub fn retain_for(&self) -> Duration {
        Duration::from_secs(self.retain_secs)
    }
}

/// Translations API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
    /// Bearer token. Empty = unauthenticated, fallbacks only.
    #[serde(default)]
    pub token: String,
    #[serde(default = "default_api_timeout_secs")]
    pub timeout_secs: u64,
    /// Read dictionaries from `{dir}/{lang}.json` instead of the network.
    #[serde(default)]
    pub translations_dir: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: default_api_base_url(),
            token: String::new(),
            timeout_secs: default_api_timeout_secs(),
            translations_dir: String::new(),
        }
    }
}

impl ApiConfig {
    /// Whether server-backed fetching is allowed at all.
    pub fn is_authenticated(&self) -> bool {
        self.enabled && !self.token.trim().is_empty()
    }
}

impl Config {
    /// Reject settings that cannot work together.
    pub fn validate(&self) -> Result<(), TallyError> {
        if self.i18n.retain_secs < self.i18n.fresh_secs {
            return Err(TallyError::Config(format!(
                "i18n.retain_secs ({}) must be >= i18n.fresh_secs ({})",
                self.i18n.retain_secs, self.i18n.fresh_secs
            )));
        }
        if self.api.enabled && self.api.base_url.trim().is_empty() {
            return Err(TallyError::Config(
                "api.enabled is set but api.base_url is empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolved directory for session storage.
    pub fn session_dir(&self) -> PathBuf {
        if self.i18n.session_dir.trim().is_empty() {
            Path::new(&shellexpand(&self.tally.data_dir)).join("session")
        } else {
            PathBuf::from(shellexpand(&self.i18n.session_dir))
        }
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, TallyError> {
    let path = Path::new(path);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| TallyError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| TallyError::Config(format!("failed to parse config: {}", e)))?;

    config.validate()?;
    Ok(config)
}
