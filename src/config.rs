//! Client configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://localhost:3001/api/v1";
/// State directory name, created under the user's home directory.
pub const DEFAULT_STATE_DIR: &str = ".argent";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    Parse(String),
}

/// Optional HTTP timeouts. `None` waits indefinitely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: Option<u64>,
    pub connect_secs: Option<u64>,
}

/// Where and how to reach the authentication service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// API root without a trailing slash, e.g. `http://localhost:3001/api/v1`.
    pub api_url: String,
    /// Path appended to `api_url` for logout notifications, if the server has one.
    pub logout_path: Option<String>,
    pub timeouts: Timeouts,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self { api_url: DEFAULT_API_URL.to_owned(), logout_path: None, timeouts: Timeouts::default() }
    }
}

impl GatewayConfig {
    /// Full logout URL, when a logout path is configured.
    #[must_use]
    pub fn logout_url(&self) -> Option<String> {
        self.logout_path.as_deref().map(|path| {
            if path.starts_with('/') {
                format!("{}{path}", self.api_url)
            } else {
                format!("{}/{path}", self.api_url)
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub gateway: GatewayConfig,
    /// Directory holding the durable store of the native frontend.
    pub state_dir: PathBuf,
}

impl ClientConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `ARGENT_API_URL`: default `http://localhost:3001/api/v1`
    /// - `ARGENT_LOGOUT_PATH`: no logout notification when absent
    /// - `ARGENT_REQUEST_TIMEOUT_SECS`: no timeout when absent
    /// - `ARGENT_CONNECT_TIMEOUT_SECS`: no timeout when absent
    /// - `ARGENT_STATE_DIR`: default `~/.argent`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if a timeout is not a whole number of seconds.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match std::env::var(key) {
            Ok(value) => Some(value),
            Err(_) => None,
        })
    }

    /// Same as [`ClientConfig::from_env`] with an injectable variable source.
    ///
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if a timeout is not a whole number of seconds.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::resolve(lookup, dirs::home_dir())
    }

    fn resolve<F>(lookup: F, home: Option<PathBuf>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_url = var("ARGENT_API_URL")
            .unwrap_or_else(|| DEFAULT_API_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let timeouts = Timeouts {
            request_secs: parse_secs("ARGENT_REQUEST_TIMEOUT_SECS", var("ARGENT_REQUEST_TIMEOUT_SECS"))?,
            connect_secs: parse_secs("ARGENT_CONNECT_TIMEOUT_SECS", var("ARGENT_CONNECT_TIMEOUT_SECS"))?,
        };
        let state_dir = var("ARGENT_STATE_DIR").map_or_else(|| default_state_dir(home), PathBuf::from);

        Ok(Self {
            gateway: GatewayConfig { api_url, logout_path: var("ARGENT_LOGOUT_PATH"), timeouts },
            state_dir,
        })
    }
}

/// `~/.argent`, so the durable store does not depend on the working directory.
///
/// Without a home directory this falls back to `.argent` under the working
/// directory.
#[must_use]
pub fn default_state_dir(home: Option<PathBuf>) -> PathBuf {
    home.map_or_else(|| PathBuf::from(DEFAULT_STATE_DIR), |home| home.join(DEFAULT_STATE_DIR))
}

fn parse_secs(key: &str, raw: Option<String>) -> Result<Option<u64>, ConfigError> {
    raw.map(|value| {
        value
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::Parse(format!("{key} must be a whole number of seconds, got '{value}'")))
    })
    .transpose()
}
