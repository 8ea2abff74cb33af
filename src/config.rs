//! Configuration handling for the editor

use crate::state::Section;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// How long the warning banner rests before sliding away
const DEFAULT_BANNER_SECONDS: u64 = 3;

/// User configuration for the editor
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EditorConfig {
    /// Seconds the first-run warning banner stays on screen
    pub banner_seconds: Option<u64>,
    /// Override for the flag file location
    pub flags_path: Option<String>,
    /// Section open at startup (`headers`, `infos`, `notice`, `response`, `tips`)
    pub initial_section: Option<String>,
}

impl EditorConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "notice-forge", "notice-forge")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: EditorConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn banner_duration(&self) -> Duration {
        Duration::from_secs(self.banner_seconds.unwrap_or(DEFAULT_BANNER_SECONDS))
    }

    pub fn flags_path(&self) -> Option<PathBuf> {
        self.flags_path.as_ref().map(PathBuf::from)
    }

    /// Startup section; unknown keys fall back to the first section
    pub fn initial_section(&self) -> Section {
        match self.initial_section.as_deref() {
            Some(key) => Section::from_key(key).unwrap_or_else(|| {
                tracing::warn!("Unknown initial_section `{key}`, using default");
                Section::default()
            }),
            None => Section::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EditorConfig::default();
        assert!(config.banner_seconds.is_none());
        assert!(config.flags_path.is_none());
        assert!(config.initial_section.is_none());
        assert_eq!(config.banner_duration(), Duration::from_secs(3));
        assert_eq!(config.initial_section(), Section::Headers);
    }

    #[test]
    fn test_serialization() {
        let config = EditorConfig {
            banner_seconds: Some(5),
            flags_path: Some("/tmp/flags.json".to_string()),
            initial_section: Some("tips".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: EditorConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.banner_duration(), Duration::from_secs(5));
        assert_eq!(parsed.flags_path(), Some(PathBuf::from("/tmp/flags.json")));
        assert_eq!(parsed.initial_section(), Section::Tips);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: EditorConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.banner_seconds.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"banner_seconds": 1, "unknown_field": "value"}"#;
        let parsed: EditorConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.banner_seconds, Some(1));
    }

    #[test]
    fn test_unknown_section_falls_back() {
        let config = EditorConfig {
            initial_section: Some("sidebar".to_string()),
            ..Default::default()
        };
        assert_eq!(config.initial_section(), Section::Headers);
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = EditorConfig::config_path();
    }

    #[test]
    fn test_load_returns_ok_when_no_file() {
        // Passes unless a malformed config exists on this machine
        let result = EditorConfig::load();
        assert!(result.is_ok());
    }
}
