//! Configuration handling for the TUI

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable that overrides the configured webhook URL
pub const WEBHOOK_URL_ENV: &str = "INTERVIEW_TUI_WEBHOOK_URL";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Webhook endpoint that receives submissions
    pub webhook_url: Option<String>,
}

/// Where the webhook URL came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointSource {
    Environment,
    ConfigFile,
}

impl EndpointSource {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Environment => "environment",
            Self::ConfigFile => "config file",
        }
    }
}

impl TuiConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "interview-tui", "interview-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                let config: TuiConfig = serde_json::from_str(&content)
                    .with_context(|| format!("Invalid config file {}", path.display()))?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Resolve the webhook URL from the process environment and this config
    pub fn webhook_url(&self) -> Option<(String, EndpointSource)> {
        resolve_webhook_url(std::env::var(WEBHOOK_URL_ENV).ok(), self)
    }
}

/// Pick the webhook URL: a non-blank environment value wins over the config file
pub fn resolve_webhook_url(
    env_value: Option<String>,
    config: &TuiConfig,
) -> Option<(String, EndpointSource)> {
    let non_blank = |value: &str| {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    };

    env_value
        .as_deref()
        .and_then(non_blank)
        .map(|url| (url, EndpointSource::Environment))
        .or_else(|| {
            config
                .webhook_url
                .as_deref()
                .and_then(non_blank)
                .map(|url| (url, EndpointSource::ConfigFile))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(url: Option<&str>) -> TuiConfig {
        TuiConfig {
            webhook_url: url.map(str::to_string),
        }
    }

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.webhook_url.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = config_with(Some("https://hooks.example.com/interview"));

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.webhook_url,
            Some("https://hooks.example.com/interview".to_string())
        );
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.webhook_url.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"webhook_url": "http://localhost:5678/webhook", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed.webhook_url,
            Some("http://localhost:5678/webhook".to_string())
        );
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = TuiConfig::config_path();
    }

    #[test]
    fn test_env_wins_over_config() {
        let config = config_with(Some("http://file/hook"));
        let resolved = resolve_webhook_url(Some("http://env/hook".to_string()), &config);
        assert_eq!(
            resolved,
            Some(("http://env/hook".to_string(), EndpointSource::Environment))
        );
    }

    #[test]
    fn test_blank_env_falls_back_to_config() {
        let config = config_with(Some(" http://file/hook "));
        let resolved = resolve_webhook_url(Some("   ".to_string()), &config);
        assert_eq!(
            resolved,
            Some(("http://file/hook".to_string(), EndpointSource::ConfigFile))
        );
    }

    #[test]
    fn test_nothing_configured() {
        assert!(resolve_webhook_url(None, &config_with(None)).is_none());
        assert!(resolve_webhook_url(None, &config_with(Some(""))).is_none());
    }

    #[test]
    fn test_source_labels() {
        assert_eq!(EndpointSource::Environment.label(), "environment");
        assert_eq!(EndpointSource::ConfigFile.label(), "config file");
    }
}
