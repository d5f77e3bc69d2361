//! Configuration module for the toyt CLI.
//!
//! This module handles loading, saving, and validating `toyt.toml`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use toyc_lex::{Dialect, KeywordTable};

use crate::commands::common::OutputFormat;
use crate::error::{Result, ToytError};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "toyt.toml";

/// Application configuration structure.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Keyword preset (`standard` or `go`).
    #[serde(default = "default_dialect")]
    pub dialect: String,

    /// Default output format (`text` or `json`).
    #[serde(default = "default_format")]
    pub format: String,

    /// Print spans in text output.
    #[serde(default)]
    pub show_spans: bool,

    /// Fail when any illegal token is produced.
    #[serde(default)]
    pub deny_illegal: bool,

    /// Additional reserved words, spelling to keyword kind name.
    #[serde(default)]
    pub extra_keywords: BTreeMap<String, String>,
}

/// Default value functions for configuration fields.
fn default_dialect() -> String {
    Dialect::Standard.to_string()
}

fn default_format() -> String {
    "text".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dialect: default_dialect(),
            format: default_format(),
            show_spans: false,
            deny_illegal: false,
            extra_keywords: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/toyt/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ToytError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| ToytError::Config(format!("Failed to parse configuration: {}", e)))?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ToytError::Config(format!("Failed to serialize configuration: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// The configured dialect.
    pub fn dialect(&self) -> Result<Dialect> {
        Ok(self.dialect.parse::<Dialect>()?)
    }

    /// The configured output format.
    pub fn output_format(&self) -> Result<OutputFormat> {
        self.format.parse()
    }

    /// The keyword table for `dialect` plus the configured extra keywords.
    pub fn keyword_table(&self, dialect: Dialect) -> Result<KeywordTable> {
        let mut table = KeywordTable::for_dialect(dialect);
        for (word, kind) in &self.extra_keywords {
            table.insert_named(word, kind)?;
        }
        Ok(table)
    }

    /// Check every field that is stored as text.
    pub fn validate(&self) -> Result<()> {
        let dialect = self.dialect()?;
        self.output_format()?;
        self.keyword_table(dialect)?;
        Ok(())
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("toyt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("toyt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use toyc_lex::TokenKind;

    fn create_test_config() -> Config {
        let mut extra_keywords = BTreeMap::new();
        extra_keywords.insert("fun".to_string(), "func".to_string());
        extra_keywords.insert("loop".to_string(), "while".to_string());
        Config {
            dialect: "go".to_string(),
            format: "json".to_string(),
            show_spans: true,
            deny_illegal: true,
            extra_keywords,
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.dialect, "standard");
        assert_eq!(config.format, "text");
        assert!(!config.show_spans);
        assert!(!config.deny_illegal);
        assert!(config.extra_keywords.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("toyt.toml");

        let original_config = create_test_config();
        original_config.save_to_path(&config_path).unwrap();

        let loaded_config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(original_config, loaded_config);
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/toyt.toml"));
        assert!(matches!(result, Err(ToytError::Config(_))));
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("toyt.toml");
        std::fs::write(&config_path, "dialect = [").unwrap();
        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(err.to_string().starts_with("Configuration error: Failed to parse"));
    }

    #[test]
    fn test_keyword_table_with_extras() {
        let config = create_test_config();
        let table = config.keyword_table(config.dialect().unwrap()).unwrap();
        assert_eq!(table.lookup("fun"), Some(TokenKind::Func));
        assert_eq!(table.lookup("loop"), Some(TokenKind::While));
        assert_eq!(table.lookup("package"), Some(TokenKind::Package));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config {
            dialect: "cobol".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ToytError::Keyword(_))));

        config.dialect = "standard".to_string();
        config.format = "yaml".to_string();
        assert!(matches!(config.validate(), Err(ToytError::Validation(_))));

        config.format = "text".to_string();
        config
            .extra_keywords
            .insert("plus".to_string(), "PLUS".to_string());
        assert!(matches!(config.validate(), Err(ToytError::Keyword(_))));
    }
}
