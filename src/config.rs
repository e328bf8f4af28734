//! Runtime configuration for the prediction client.
//!
//! Settings come from an optional `config.toml` in the app root. Every key is
//! optional; anything missing falls back to the built-in defaults, and the
//! `NETPREDICT_API_URL` environment variable overrides the service address.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::app_dirs;

/// Base URL of the hosted prediction service.
pub const DEFAULT_API_BASE_URL: &str = "https://minor-project-api.onrender.com";
/// File name of the settings file inside the app root.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Environment variable that overrides `api_base_url`.
pub const API_URL_ENV: &str = "NETPREDICT_API_URL";

const DEFAULT_HEALTH_INTERVAL_MS: u64 = 30_000;
const DEFAULT_HEALTH_TIMEOUT_MS: u64 = 10_000;
const MIN_HEALTH_INTERVAL_MS: u64 = 1_000;
const MIN_HEALTH_TIMEOUT_MS: u64 = 250;

/// Errors that may occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The app root could not be resolved or created.
    #[error("Config directory unavailable: {0}")]
    AppDir(#[from] app_dirs::AppDirError),
    /// Failed to read the settings file.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// The settings file is not valid TOML for [`AppSettings`].
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        /// TOML file path.
        path: PathBuf,
        /// TOML parse error.
        source: toml::de::Error,
    },
    /// The configured service address is unusable.
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// Offending value.
        url: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Settings as written in `config.toml`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Scheme and host of the prediction service, without a trailing slash.
    pub api_base_url: String,
    /// Milliseconds between liveness checks.
    pub health_interval_ms: u64,
    /// Upper bound for a single liveness check.
    pub health_timeout_ms: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            health_interval_ms: DEFAULT_HEALTH_INTERVAL_MS,
            health_timeout_ms: DEFAULT_HEALTH_TIMEOUT_MS,
        }
    }
}

impl AppSettings {
    /// Clamp timing values into a usable range.
    ///
    /// The check timeout is kept at or below half the interval so a check
    /// that times out still reports back before the next one is due.
    pub fn normalized(mut self) -> Self {
        self.health_interval_ms = self.health_interval_ms.max(MIN_HEALTH_INTERVAL_MS);
        self.health_timeout_ms = self
            .health_timeout_ms
            .min(self.health_interval_ms / 2)
            .max(MIN_HEALTH_TIMEOUT_MS);
        self
    }
}

/// Validated configuration consumed by the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Service address with no trailing slash.
    pub api_base_url: String,
    /// Delay between liveness checks.
    pub health_interval: Duration,
    /// Timeout applied to each liveness check.
    pub health_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            health_interval: Duration::from_millis(DEFAULT_HEALTH_INTERVAL_MS),
            health_timeout: Duration::from_millis(DEFAULT_HEALTH_TIMEOUT_MS),
        }
    }
}

impl AppConfig {
    /// Default timings pointed at a different service.
    pub fn with_base_url(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base_url: normalize_base_url(base_url)?,
            ..Self::default()
        })
    }
}

impl TryFrom<AppSettings> for AppConfig {
    type Error = ConfigError;

    fn try_from(settings: AppSettings) -> Result<Self, Self::Error> {
        let settings = settings.normalized();
        Ok(Self {
            api_base_url: normalize_base_url(&settings.api_base_url)?,
            health_interval: Duration::from_millis(settings.health_interval_ms),
            health_timeout: Duration::from_millis(settings.health_timeout_ms),
        })
    }
}

/// Resolve the settings file path inside the app root.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

/// Load configuration from disk and environment, using defaults if the file is missing.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    let mut settings = load_settings_from(&config_path()?)?;
    if let Ok(url) = std::env::var(API_URL_ENV) {
        if !url.trim().is_empty() {
            settings.api_base_url = url;
        }
    }
    AppConfig::try_from(settings)
}

pub(crate) fn load_settings_from(path: &Path) -> Result<AppSettings, ConfigError> {
    if !path.exists() {
        return Ok(AppSettings::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Check that `raw` is an absolute http(s) URL and strip any trailing slash.
pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        url: trimmed.to_string(),
        reason,
    };
    let parsed = Url::parse(trimmed).map_err(|err| invalid(err.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", parsed.scheme())));
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(invalid("missing host".to_string()));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(invalid("query strings and fragments are not allowed".to_string()));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}
