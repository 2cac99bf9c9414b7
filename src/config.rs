//! Configuration handling for the TUI

use crate::countries::DEFAULT_COUNTRIES_URL;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable overriding the countries endpoint
pub const COUNTRIES_URL_ENV: &str = "REGFORM_COUNTRIES_URL";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Countries endpoint
    pub countries_url: Option<String>,
    /// Write logs to a file in the data directory (default) instead of stderr
    pub log_file: Option<bool>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "regform", "regform-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Get the log file path
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("regform-tui.log"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Countries endpoint: environment, then config file, then the default
    pub fn countries_url(&self) -> String {
        resolve_countries_url(std::env::var(COUNTRIES_URL_ENV).ok(), self)
    }

    pub fn log_to_file(&self) -> bool {
        self.log_file.unwrap_or(true)
    }
}

fn resolve_countries_url(env_value: Option<String>, config: &TuiConfig) -> String {
    env_value
        .filter(|v| !v.is_empty())
        .or_else(|| config.countries_url.clone())
        .unwrap_or_else(|| DEFAULT_COUNTRIES_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.countries_url.is_none());
        assert!(config.log_file.is_none());
        assert!(config.log_to_file());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            countries_url: Some("http://localhost:8080/all".to_string()),
            log_file: Some(false),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.countries_url,
            Some("http://localhost:8080/all".to_string())
        );
        assert_eq!(parsed.log_file, Some(false));
        assert!(!parsed.log_to_file());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.countries_url.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"countries_url": "http://x", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.countries_url, Some("http://x".to_string()));
    }

    #[test]
    fn test_url_falls_back_to_default() {
        let url = resolve_countries_url(None, &TuiConfig::default());
        assert_eq!(url, DEFAULT_COUNTRIES_URL);
    }

    #[test]
    fn test_url_from_config() {
        let config = TuiConfig {
            countries_url: Some("http://config".to_string()),
            ..Default::default()
        };
        assert_eq!(resolve_countries_url(None, &config), "http://config");
    }

    #[test]
    fn test_env_overrides_config() {
        let config = TuiConfig {
            countries_url: Some("http://config".to_string()),
            ..Default::default()
        };
        let url = resolve_countries_url(Some("http://env".to_string()), &config);
        assert_eq!(url, "http://env");
    }

    #[test]
    fn test_empty_env_is_ignored() {
        let url = resolve_countries_url(Some(String::new()), &TuiConfig::default());
        assert_eq!(url, DEFAULT_COUNTRIES_URL);
    }

    #[test]
    fn test_load_returns_ok() {
        // Default config when the file does not exist
        assert!(TuiConfig::load().is_ok());
    }
}
