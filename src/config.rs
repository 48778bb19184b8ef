//! Client configuration parsed from environment variables.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_STORAGE_PATH: &str = ".moment-admin/storage.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin, without a trailing slash.
    pub base_url: String,
    pub request_timeout: Duration,
    /// Local storage file holding the persisted credential.
    pub storage_path: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
        }
    }
}

impl ClientConfig {
    /// Config for `base_url` with every other field at its default.
    ///
    /// # Errors
    ///
    /// Returns an error unless `base_url` is an `http://` or `https://` URL.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self { base_url: normalize_base_url(base_url)?, ..Self::default() })
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `ADMIN_BASE_URL`: default `http://127.0.0.1:8080`
    /// - `ADMIN_TIMEOUT_SECS`: default 10
    /// - `ADMIN_STORAGE_PATH`: default `.moment-admin/storage.json`
    ///
    /// # Errors
    ///
    /// Returns an error if `ADMIN_BASE_URL` is not an HTTP(S) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
        let timeout_secs = env_parse_u64("ADMIN_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS);
        let storage_path = std::env::var("ADMIN_STORAGE_PATH").unwrap_or_else(|_| DEFAULT_STORAGE_PATH.to_owned());

        Ok(Self {
            base_url: normalize_base_url(&base_url)?,
            request_timeout: Duration::from_secs(timeout_secs),
            storage_path: PathBuf::from(storage_path),
        })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidBaseUrl(raw.to_owned()));
    }
    Ok(trimmed.to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
