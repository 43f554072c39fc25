//! Configuration module for the fastdt CLI.
//!
//! This module handles locating and loading the `fastdt.toml` settings file.

use dirs::{config_dir, home_dir};
use fastdc_lex::{DEFAULT_CAPACITY, MIN_CAPACITY};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::commands::common::OutputFormat;
use crate::error::{FastdtError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "fastdt.toml";

/// Application configuration structure.
///
/// Every key is optional; missing keys take their default values.
///
/// ```toml
/// verbose = false
///
/// [lexer]
/// capacity = 1024
///
/// [output]
/// format = "text"
/// show_spans = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Lexer settings.
    #[serde(default)]
    pub lexer: LexerSection,

    /// Token output settings.
    #[serde(default)]
    pub output: OutputSection,
}

/// Lexer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LexerSection {
    /// Lookahead window size in bytes.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

/// Token output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputSection {
    /// Default output format of the `tokens` command.
    #[serde(default)]
    pub format: OutputFormat,

    /// Whether token locations are printed.
    #[serde(default = "default_true")]
    pub show_spans: bool,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn default_true() -> bool {
    true
}

impl Default for LexerSection {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            show_spans: true,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/fastdt/`
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
            return Err(FastdtError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            FastdtError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Rejects values the lexer cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.lexer.capacity < MIN_CAPACITY {
            return Err(FastdtError::Config(format!(
                "lexer.capacity must be at least {} bytes, got {}",
                MIN_CAPACITY, self.lexer.capacity
            )));
        }
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
            .map(|dir| dir.join(".config").join("fastdt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("fastdt").join(CONFIG_FILE_NAME))
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

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.verbose);
        assert_eq!(config.lexer.capacity, 1024);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.show_spans);
    }

    #[test]
    fn test_load_full_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(
            &temp_dir,
            r#"
verbose = true

[lexer]
capacity = 64

[output]
format = "json"
show_spans = false
"#,
        );

        let config = Config::load_from_path(&path).unwrap();
        assert!(config.verbose);
        assert_eq!(config.lexer.capacity, 64);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.show_spans);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "[output]\nformat = \"json\"\n");

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.lexer, LexerSection::default());
        assert!(config.output.show_spans);
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = Config {
            verbose: true,
            lexer: LexerSection { capacity: 4096 },
            output: OutputSection {
                format: OutputFormat::Json,
                show_spans: false,
            },
        };
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(toml::from_str::<Config>(&text).unwrap(), config);
    }

    #[test]
    fn test_capacity_below_minimum_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "[lexer]\ncapacity = 8\n");

        let err = Config::load_from_path(&path).unwrap_err();
        assert!(matches!(err, FastdtError::Config(_)));
        assert!(err.to_string().contains("at least 16"));
    }

    #[test]
    fn test_unknown_format_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "[output]\nformat = \"yaml\"\n");

        assert!(matches!(
            Config::load_from_path(&path),
            Err(FastdtError::Config(_))
        ));
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/fastdt.toml"));
        assert!(result.is_err());
    }
}
