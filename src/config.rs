//! Runtime configuration.
//!
//! Resolved once at startup from environment variables. Use the builder
//! methods to override values in tests.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `GIFTREND_API_KEY` | required |
//! | `GIFTREND_BASE_URL` | `https://api.giphy.com` |
//! | `GIFTREND_PAGE_SIZE` | `20` (1..=50) |
//! | `GIFTREND_LOG` | `<data_dir>/giftrend/giftrend.log` |
//! | `GIFTREND_STATE` | `<data_dir>/giftrend/gallery.json` |

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://api.giphy.com";
pub const DEFAULT_PAGE_SIZE: u32 = 20;
/// Giphy rejects `limit` above 50 on beta keys.
pub const MAX_PAGE_SIZE: u32 = 50;

const ENV_API_KEY: &str = "GIFTREND_API_KEY";
const ENV_BASE_URL: &str = "GIFTREND_BASE_URL";
const ENV_PAGE_SIZE: &str = "GIFTREND_PAGE_SIZE";
const ENV_LOG: &str = "GIFTREND_LOG";
const ENV_STATE: &str = "GIFTREND_STATE";

/// Configuration for the gallery.
///
/// # Example
///
/// ```ignore
/// use giftrend::config::GalleryConfig;
///
/// let config = GalleryConfig::new("my-key")
///     .with_base_url("http://localhost:8080")
///     .with_page_size(10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryConfig {
    /// Giphy API key sent as the `api_key` query parameter
    pub api_key: String,
    /// Scheme and host of the Giphy API, without a trailing slash
    pub base_url: String,
    /// Items requested per page, also the cursor increment
    pub page_size: u32,
    /// Explicit log file path
    pub log_path: Option<PathBuf>,
    /// Explicit snapshot path
    pub state_path: Option<PathBuf>,
}

impl GalleryConfig {
    /// Create a config with the given key and default everything else.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            log_path: None,
            state_path: None,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(path.into());
        self
    }

    pub fn with_state_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.state_path = Some(path.into());
        self
    }

    /// Resolve from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_env_map(&vars)
    }

    /// Resolve from an explicit variable map.
    pub fn from_env_map(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let api_key = vars
            .get(ENV_API_KEY)
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let mut config = Self::new(api_key);

        if let Some(url) = vars.get(ENV_BASE_URL).filter(|u| !u.trim().is_empty()) {
            let url = url.trim();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidValue {
                    name: ENV_BASE_URL,
                    value: url.to_string(),
                    reason: "must start with http:// or https://".to_string(),
                });
            }
            config = config.with_base_url(url);
        }

        if let Some(raw) = vars.get(ENV_PAGE_SIZE) {
            config = config.with_page_size(parse_page_size(raw)?);
        }

        if let Some(path) = vars.get(ENV_LOG).filter(|p| !p.is_empty()) {
            config = config.with_log_path(path);
        }

        if let Some(path) = vars.get(ENV_STATE).filter(|p| !p.is_empty()) {
            config = config.with_state_path(path);
        }

        Ok(config)
    }

    /// Snapshot location from the environment alone.
    ///
    /// `--clear-state` uses this so it works without an API key.
    pub fn state_path_from_env() -> Result<PathBuf, ConfigError> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::state_path_from_env_map(&vars)
    }

    pub fn state_path_from_env_map(vars: &HashMap<String, String>) -> Result<PathBuf, ConfigError> {
        match vars.get(ENV_STATE).filter(|p| !p.is_empty()) {
            Some(path) => Ok(PathBuf::from(path)),
            None => Ok(app_data_dir()?.join("gallery.json")),
        }
    }

    /// Log file location, falling back to the platform data directory.
    pub fn resolved_log_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.log_path {
            Some(path) => Ok(path.clone()),
            None => Ok(app_data_dir()?.join("giftrend.log")),
        }
    }

    /// Snapshot location, falling back to the platform data directory.
    pub fn resolved_state_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.state_path {
            Some(path) => Ok(path.clone()),
            None => Ok(app_data_dir()?.join("gallery.json")),
        }
    }
}

fn parse_page_size(raw: &str) -> Result<u32, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidValue {
        name: ENV_PAGE_SIZE,
        value: raw.to_string(),
        reason: reason.to_string(),
    };

    let size: u32 = raw.trim().parse().map_err(|_| invalid("not a number"))?;
    if size == 0 || size > MAX_PAGE_SIZE {
        return Err(invalid("must be between 1 and 50"));
    }
    Ok(size)
}

/// `<platform data dir>/giftrend`
pub fn app_data_dir() -> Result<PathBuf, ConfigError> {
    dirs::data_dir()
        .map(|dir| dir.join("giftrend"))
        .ok_or(ConfigError::NoDataDirectory)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = GalleryConfig::from_env_map(&vars(&[("GIFTREND_API_KEY", "k")])).unwrap();
        assert_eq!(config.api_key, "k");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.page_size, 20);
        assert!(config.log_path.is_none());
        assert!(config.state_path.is_none());
    }

    #[test]
    fn test_missing_api_key() {
        assert_eq!(
            GalleryConfig::from_env_map(&vars(&[])),
            Err(ConfigError::MissingApiKey)
        );
        assert_eq!(
            GalleryConfig::from_env_map(&vars(&[("GIFTREND_API_KEY", "   ")])),
            Err(ConfigError::MissingApiKey)
        );
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = GalleryConfig::from_env_map(&vars(&[
            ("GIFTREND_API_KEY", "k"),
            ("GIFTREND_BASE_URL", "http://localhost:9000/"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:9000");
    }

    #[test]
    fn test_base_url_requires_scheme() {
        let result = GalleryConfig::from_env_map(&vars(&[
            ("GIFTREND_API_KEY", "k"),
            ("GIFTREND_BASE_URL", "api.giphy.com"),
        ]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { name: "GIFTREND_BASE_URL", .. })
        ));
    }

    #[test]
    fn test_page_size_parsing() {
        let config = GalleryConfig::from_env_map(&vars(&[
            ("GIFTREND_API_KEY", "k"),
            ("GIFTREND_PAGE_SIZE", " 25 "),
        ]))
        .unwrap();
        assert_eq!(config.page_size, 25);

        for bad in ["0", "51", "-1", "twenty"] {
            let result = GalleryConfig::from_env_map(&vars(&[
                ("GIFTREND_API_KEY", "k"),
                ("GIFTREND_PAGE_SIZE", bad),
            ]));
            assert!(
                matches!(result, Err(ConfigError::InvalidValue { .. })),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_explicit_paths_win() {
        let config = GalleryConfig::from_env_map(&vars(&[
            ("GIFTREND_API_KEY", "k"),
            ("GIFTREND_LOG", "/tmp/g.log"),
            ("GIFTREND_STATE", "/tmp/g.json"),
        ]))
        .unwrap();
        assert_eq!(config.resolved_log_path().unwrap(), PathBuf::from("/tmp/g.log"));
        assert_eq!(config.resolved_state_path().unwrap(), PathBuf::from("/tmp/g.json"));
    }

    #[test]
    fn test_state_path_without_api_key() {
        let path =
            GalleryConfig::state_path_from_env_map(&vars(&[("GIFTREND_STATE", "/tmp/s.json")]))
                .unwrap();
        assert_eq!(path, PathBuf::from("/tmp/s.json"));
    }
}
