//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/justicaa-discovery/config.toml

pub mod defaults;

use crate::error::{Error, Result};
use defaults::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Directory dataset settings
    #[serde(default)]
    pub directory: DirectoryConfig,

    /// Location resolution settings
    #[serde(default)]
    pub location: LocationConfig,

    /// Map URL settings
    #[serde(default)]
    pub url: UrlConfig,
}

/// Directory dataset settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Path to a JSON dataset overriding the embedded one (empty = embedded)
    #[serde(default = "default_directory_path")]
    pub path: String,
}

/// Location resolution settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Whether IP geolocation results are cached on disk
    #[serde(default = "default_ip_cache")]
    pub ip_cache: bool,

    /// Device geolocation timeout in seconds before the IP fallback
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl LocationConfig {
    /// Device timeout as a [`Duration`](std::time::Duration)
    pub fn device_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}

/// Map URL settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlConfig {
    /// Default map provider
    #[serde(default = "default_url_provider")]
    pub default: String,

    /// Provider templates for directions and search URLs
    #[serde(default = "default_url_providers")]
    pub providers: HashMap<String, UrlProvider>,
}

/// Templates for one map provider
///
/// Directions templates take `{olat}`, `{olng}`, `{dlat}`, `{dlng}`;
/// search templates take a percent-encoded `{query}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlProvider {
    pub directions: String,
    pub search: String,
}

// Default value functions for serde
fn default_directory_path() -> String {
    DEFAULT_DIRECTORY_PATH.to_string()
}
fn default_ip_cache() -> bool {
    DEFAULT_IP_CACHE
}
fn default_timeout_secs() -> u64 {
    DEFAULT_DEVICE_TIMEOUT_SECS
}
fn default_url_provider() -> String {
    DEFAULT_URL_PROVIDER.to_string()
}
fn default_url_providers() -> HashMap<String, UrlProvider> {
    let mut providers = HashMap::new();
    providers.insert(
        "google".to_string(),
        UrlProvider {
            directions:
                "https://www.google.com/maps/dir/?api=1&origin={olat},{olng}&destination={dlat},{dlng}"
                    .to_string(),
            search: "https://www.google.com/maps/search/?api=1&query={query}".to_string(),
        },
    );
    providers.insert(
        "openstreetmap".to_string(),
        UrlProvider {
            directions:
                "https://www.openstreetmap.org/directions?from={olat},{olng}&to={dlat},{dlng}"
                    .to_string(),
            search: "https://www.openstreetmap.org/search?query={query}".to_string(),
        },
    );
    providers
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            path: default_directory_path(),
        }
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            ip_cache: default_ip_cache(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            default: default_url_provider(),
            providers: default_url_providers(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

            toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config directory: {}", e)))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&path, content)
            .map_err(|e| Error::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["directory", "path"] => Some(self.directory.path.clone()),
            ["location", "ip_cache"] => Some(self.location.ip_cache.to_string()),
            ["location", "timeout_secs"] => Some(self.location.timeout_secs.to_string()),
            ["url", "default"] => Some(self.url.default.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["directory", "path"] => {
                self.directory.path = value.to_string();
            }
            ["location", "ip_cache"] => {
                self.location.ip_cache = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid ip_cache value: {}", value)))?;
            }
            ["location", "timeout_secs"] => {
                self.location.timeout_secs = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid timeout_secs value: {}", value)))?;
            }
            ["url", "default"] => {
                if !self.url.providers.contains_key(value) {
                    return Err(Error::Config(format!("Unknown URL provider: {}", value)));
                }
                self.url.default = value.to_string();
            }
            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// All settable config keys
    pub fn available_keys() -> &'static [&'static str] {
        &[
            "directory.path",
            "location.ip_cache",
            "location.timeout_secs",
            "url.default",
        ]
    }

    /// Look up the template set for a provider (default when `None`)
    pub fn url_provider(&self, provider: Option<&str>) -> Result<&UrlProvider> {
        let name = provider.unwrap_or(&self.url.default);
        self.url
            .providers
            .get(name)
            .ok_or_else(|| Error::Config(format!("Unknown URL provider: {}", name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.directory.path, "");
        assert!(config.location.ip_cache);
        assert_eq!(config.url.default, "google");
        assert!(config.url.providers.contains_key("google"));
        assert!(config.url.providers.contains_key("openstreetmap"));
    }

    #[test]
    fn test_get_set_roundtrip() {
        let mut config = Config::default();

        config.set("directory.path", "/tmp/lawyers.json").unwrap();
        assert_eq!(
            config.get("directory.path").unwrap(),
            "/tmp/lawyers.json"
        );

        config.set("location.ip_cache", "false").unwrap();
        assert_eq!(config.get("location.ip_cache").unwrap(), "false");

        config.set("location.timeout_secs", "5").unwrap();
        assert_eq!(config.get("location.timeout_secs").unwrap(), "5");

        config.set("url.default", "openstreetmap").unwrap();
        assert_eq!(config.get("url.default").unwrap(), "openstreetmap");
    }

    #[test]
    fn test_set_rejects_unknown_key() {
        let mut config = Config::default();
        assert!(config.set("unknown.key", "value").is_err());
    }

    #[test]
    fn test_set_rejects_unknown_provider() {
        let mut config = Config::default();
        assert!(config.set("url.default", "mapquest").is_err());
    }

    #[test]
    fn test_set_rejects_bad_bool() {
        let mut config = Config::default();
        assert!(config.set("location.ip_cache", "maybe").is_err());
    }

    #[test]
    fn test_set_rejects_bad_timeout() {
        let mut config = Config::default();
        assert!(config.set("location.timeout_secs", "soon").is_err());
    }

    #[test]
    fn test_device_timeout_duration() {
        let mut config = Config::default();
        assert_eq!(config.location.device_timeout().as_secs(), 10);
        config.set("location.timeout_secs", "3").unwrap();
        assert_eq!(config.location.device_timeout().as_secs(), 3);
    }

    #[test]
    fn test_url_provider_lookup() {
        let config = Config::default();
        assert!(config.url_provider(None).is_ok());
        assert!(config.url_provider(Some("openstreetmap")).is_ok());
        assert!(config.url_provider(Some("mapquest")).is_err());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.url.default, config.url.default);
        assert_eq!(parsed.location.ip_cache, config.location.ip_cache);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert!(parsed.location.ip_cache);
        assert_eq!(parsed.url.default, "google");
    }
}
