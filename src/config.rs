//! Configuration
//!
//! Defaults, overridden by `BLOODWORK_*` environment variables, overridden in
//! turn by command-line flags in the binaries.

use std::path::PathBuf;

use thiserror::Error;

use crate::flows::upload::DEFAULT_MAX_UPLOAD_BYTES;
use crate::render::markdown::DEFAULT_MAX_MARKDOWN_BYTES;

pub const ENV_BASE_URL: &str = "BLOODWORK_BASE_URL";
pub const ENV_ASSET_BASE_URL: &str = "BLOODWORK_ASSET_BASE_URL";
pub const ENV_OUTPUT_DIR: &str = "BLOODWORK_OUTPUT_DIR";
pub const ENV_ROLE: &str = "BLOODWORK_ROLE";
pub const ENV_MAX_UPLOAD_BYTES: &str = "BLOODWORK_MAX_UPLOAD_BYTES";

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_OUTPUT_DIR: &str = "bloodwork-out";
const DEFAULT_ROLE: &str = "Patient";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a whole number of bytes, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Backend root, e.g. `http://127.0.0.1:5000`
    pub base_url: String,
    /// Where plot images are loaded from; the backend root when unset
    pub asset_base_url: Option<String>,
    pub output_dir: PathBuf,
    /// Value of the chat role selector
    pub role: String,
    pub max_upload_bytes: u64,
    pub max_markdown_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            asset_base_url: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            role: DEFAULT_ROLE.to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            max_markdown_bytes: DEFAULT_MAX_MARKDOWN_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable source (the process environment in
    /// `from_env`)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_BASE_URL) {
            config.base_url = non_empty(ENV_BASE_URL, url)?;
        }
        if let Some(url) = lookup(ENV_ASSET_BASE_URL) {
            config.asset_base_url = Some(url.trim().to_string());
        }
        if let Some(dir) = lookup(ENV_OUTPUT_DIR) {
            config.output_dir = PathBuf::from(non_empty(ENV_OUTPUT_DIR, dir)?);
        }
        if let Some(role) = lookup(ENV_ROLE) {
            config.role = non_empty(ENV_ROLE, role)?;
        }
        if let Some(value) = lookup(ENV_MAX_UPLOAD_BYTES) {
            config.max_upload_bytes =
                value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidNumber {
                        var: ENV_MAX_UPLOAD_BYTES,
                        value: value.clone(),
                    })?;
        }

        Ok(config)
    }

    /// Prefix for `/static/...` image URLs in rendered pages
    pub fn asset_base(&self) -> &str {
        self.asset_base_url.as_deref().unwrap_or(&self.base_url)
    }
}

fn non_empty(var: &'static str, value: String) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Empty { var });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| map.get(var).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.max_upload_bytes, 16 * 1024 * 1024);
        assert_eq!(config.asset_base(), "http://127.0.0.1:5000");
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::from_lookup(lookup(&[
            (ENV_BASE_URL, "http://reports.local:8080"),
            (ENV_ROLE, "Doctor"),
            (ENV_MAX_UPLOAD_BYTES, "1024"),
            (ENV_ASSET_BASE_URL, "https://cdn.example.com"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://reports.local:8080");
        assert_eq!(config.role, "Doctor");
        assert_eq!(config.max_upload_bytes, 1024);
        assert_eq!(config.asset_base(), "https://cdn.example.com");
    }

    #[test]
    fn test_invalid_number() {
        let err = Config::from_lookup(lookup(&[(ENV_MAX_UPLOAD_BYTES, "lots")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidNumber {
                var: ENV_MAX_UPLOAD_BYTES,
                value: "lots".to_string()
            }
        );
    }

    #[test]
    fn test_empty_role_rejected() {
        let err = Config::from_lookup(lookup(&[(ENV_ROLE, "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::Empty { var: ENV_ROLE });
    }
}
