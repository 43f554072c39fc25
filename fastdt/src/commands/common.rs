//! Common types and utilities for fastdt commands.
//!
//! This module provides shared types and helpers used by the command
//! implementations: output formats, input opening, and lexer settings.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use clap::ValueEnum;
use fastdc_lex::{LexerConfig, MIN_CAPACITY};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{FastdtError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats for token listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One token per line, optionally preceded by its span.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

// ============================================================================
// Input
// ============================================================================

/// Path argument that stands for standard input.
pub const STDIN_PATH: &str = "-";

/// Returns true if `path` names standard input.
pub fn is_stdin(path: &Path) -> bool {
    path == Path::new(STDIN_PATH)
}

/// Name an input is reported under in diagnostics.
pub fn display_name(path: &Path) -> String {
    if is_stdin(path) {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

/// Opens a configuration file, or standard input for `-`.
pub fn open_input(path: &Path) -> Result<Box<dyn Read>> {
    if is_stdin(path) {
        return Ok(Box::new(io::stdin().lock()));
    }

    let file = File::open(path).map_err(|source| FastdtError::Input {
        path: path.display().to_string(),
        source,
    })?;
    Ok(Box::new(file))
}

// ============================================================================
// Lexer Settings
// ============================================================================

/// Lexer settings from the configuration file, with a command-line
/// capacity taking precedence.
pub fn lexer_config(capacity: Option<usize>, config: &Config) -> Result<LexerConfig> {
    let capacity = capacity.unwrap_or(config.lexer.capacity);
    if capacity < MIN_CAPACITY {
        return Err(FastdtError::Validation(format!(
            "--capacity must be at least {} bytes, got {}",
            MIN_CAPACITY, capacity
        )));
    }
    Ok(LexerConfig { capacity })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("-")), "<stdin>");
        assert_eq!(display_name(Path::new("fastd.conf")), "fastd.conf");
    }

    #[test]
    fn test_open_missing_input() {
        let err = open_input(&PathBuf::from("/nonexistent/fastd.conf")).err().unwrap();
        assert!(matches!(err, FastdtError::Input { .. }));
        assert!(err.to_string().starts_with("Cannot open /nonexistent/fastd.conf:"));
    }

    #[test]
    fn test_lexer_config_prefers_flag() {
        let config = Config::default();
        assert_eq!(lexer_config(None, &config).unwrap().capacity, 1024);
        assert_eq!(lexer_config(Some(32), &config).unwrap().capacity, 32);
    }

    #[test]
    fn test_lexer_config_rejects_small_capacity() {
        let err = lexer_config(Some(4), &Config::default()).unwrap_err();
        assert!(matches!(err, FastdtError::Validation(_)));
    }

    #[test]
    fn test_output_format_names() {
        assert_eq!(
            OutputFormat::from_str("json", true).unwrap(),
            OutputFormat::Json
        );
        assert!(OutputFormat::from_str("yaml", true).is_err());
    }
}
