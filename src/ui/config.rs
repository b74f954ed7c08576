//! # Configuration Persistence
//!
//! Manages user configuration stored in `~/.config/roster/config.json`.
//!
//! ## Overview
//!
//! The [`Config`] struct is serialized to / deserialized from a JSON file in
//! the user's XDG config directory. It holds the selected theme name and an
//! optional replacement for the member source URL.
//!
//! ```json
//! {
//!   "theme": "Nord",
//!   "source_url": "https://example.com/members.json"
//! }
//! ```
//!
//! The `directories` crate is used to resolve the platform-appropriate config
//! directory.

use crate::member::DEFAULT_SOURCE_URL;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Persisted user configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The name of the selected theme (must match a built-in theme name).
    #[serde(default = "default_theme_name")]
    pub theme: String,

    /// Member list URL used when `--url` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

fn default_theme_name() -> String {
    "Catppuccin Mocha".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            source_url: None,
        }
    }
}

impl Config {
    /// Load configuration from disk. Returns `Config::default()` if the file
    /// does not exist or cannot be parsed.
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %format!("{e:#}"), "using default configuration");
                Self::default()
            }
        }
    }

    fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path. Returns `Config::default()` if
    /// the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save the current configuration to disk.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Save the current configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// The member source to use: `cli_url` if given, then the configured URL,
    /// then the built-in one.
    pub fn resolve_source_url(&self, cli_url: Option<&str>) -> String {
        cli_url
            .or(self.source_url.as_deref())
            .unwrap_or(DEFAULT_SOURCE_URL)
            .to_string()
    }

    fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "roster")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, "Catppuccin Mocha");
        assert!(config.source_url.is_none());
    }

    #[test]
    fn test_deserialize_missing_fields_uses_default() {
        let config: Config = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(config.theme, "Catppuccin Mocha");
        assert!(config.source_url.is_none());
    }

    #[test]
    fn test_source_url_not_written_when_unset() {
        let json = serde_json::to_string(&Config::default()).expect("serialize");
        assert!(!json.contains("source_url"));
    }

    #[test]
    fn test_save_to_load_from_roundtrip() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_path = temp_dir.path().join("subdir").join("config.json");

        let config = Config {
            theme: "Dracula".to_string(),
            source_url: Some("http://localhost:8000/members.json".to_string()),
        };

        config.save_to(&config_path).expect("save_to");
        let loaded = Config::load_from(&config_path).expect("load_from");
        assert_eq!(loaded.theme, config.theme);
        assert_eq!(loaded.source_url, config.source_url);
    }

    #[test]
    fn test_load_from_missing_file_returns_default() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_path = temp_dir.path().join("does_not_exist.json");

        let loaded = Config::load_from(&config_path).expect("load_from");
        assert_eq!(loaded.theme, "Catppuccin Mocha");
    }

    #[test]
    fn test_load_from_invalid_file_is_error() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_path = temp_dir.path().join("config.json");
        fs::write(&config_path, "{ theme: ").expect("write");

        let err = Config::load_from(&config_path).expect_err("invalid json");
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_deny_unknown_fields() {
        let json = r#"{"theme": "Nord", "unknown_field": true}"#;
        let result: Result<Config, _> = serde_json::from_str(json);
        assert!(result.is_err(), "should reject unknown fields");
    }

    #[test]
    fn test_resolve_source_url_precedence() {
        let mut config = Config::default();
        assert_eq!(config.resolve_source_url(None), DEFAULT_SOURCE_URL);

        config.source_url = Some("http://configured".to_string());
        assert_eq!(config.resolve_source_url(None), "http://configured");
        assert_eq!(
            config.resolve_source_url(Some("http://cli")),
            "http://cli"
        );
    }
}
