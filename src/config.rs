// PhantomJump configuration
//
// Which languages trigger the comment lookup is an open set: hosts can widen or
// narrow it without touching the scanner. Loaded from JSON; any missing field
// keeps its default.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the jump action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhantomJumpConfig {
    /// Language ids (or host file-type names) the action is enabled for.
    /// Matched case-insensitively, so "JAVA" and "java" are the same entry.
    pub supported_languages: Vec<String>,
    /// Title shown on user-visible notifications
    pub notification_title: String,
}

impl Default for PhantomJumpConfig {
    fn default() -> Self {
        Self {
            supported_languages: ["java", "kotlin", "javascript", "typescript", "tsx"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            notification_title: "PhantomJump".to_string(),
        }
    }
}

impl PhantomJumpConfig {
    /// Parse a configuration from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid PhantomJump configuration")
    }

    /// Load a configuration file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_json_str(&content)
            .with_context(|| format!("Failed to load config file {}", path.display()))?;

        tracing::debug!(
            "Loaded PhantomJump config from {} ({} languages)",
            path.display(),
            config.supported_languages.len()
        );
        Ok(config)
    }

    /// Whether the action should run for a file of this language
    pub fn is_supported(&self, language: &str) -> bool {
        // `jsx` rides on the javascript entry
        let language = match language {
            "jsx" => "javascript",
            other => other,
        };
        self.supported_languages
            .iter()
            .any(|supported| supported.eq_ignore_ascii_case(language))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_languages() {
        let config = PhantomJumpConfig::default();
        assert!(config.is_supported("java"));
        assert!(config.is_supported("kotlin"));
        assert!(config.is_supported("javascript"));
        assert!(config.is_supported("jsx"));
        assert!(config.is_supported("typescript"));
        assert!(config.is_supported("tsx"));
        assert!(!config.is_supported("python"));
        assert_eq!(config.notification_title, "PhantomJump");
    }

    #[test]
    fn test_host_file_type_names_match() {
        let config = PhantomJumpConfig::default();
        // File-type names as editors report them
        assert!(config.is_supported("JAVA"));
        assert!(config.is_supported("Kotlin"));
        assert!(config.is_supported("JavaScript"));
        assert!(config.is_supported("TypeScript"));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            PhantomJumpConfig::from_json_str(r#"{ "supported_languages": ["java"] }"#).unwrap();
        assert!(config.is_supported("java"));
        assert!(!config.is_supported("kotlin"));
        assert_eq!(config.notification_title, "PhantomJump");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = PhantomJumpConfig::from_json_str("{ supported_languages: ").unwrap_err();
        assert!(err.to_string().contains("Invalid PhantomJump configuration"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "supported_languages": ["kotlin"], "notification_title": "Jump" }}"#
        )
        .unwrap();

        let config = PhantomJumpConfig::load(file.path()).unwrap();
        assert_eq!(config.supported_languages, vec!["kotlin".to_string()]);
        assert_eq!(config.notification_title, "Jump");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = PhantomJumpConfig::load(&dir.path().join("missing.json"));
        assert!(result.is_err());
    }
}
