//! Error handling module for the fastdt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use fastdc_lex::LexError;
use fastdc_util::DiagnosticError;
use thiserror::Error;

/// Main error type for the fastdt CLI application.
///
/// This enum represents all possible errors that can occur
/// during the execution of fastdt commands.
#[derive(Error, Debug)]
pub enum FastdtError {
    /// Error in the configuration file or its values.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when a command-line value is out of range.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when an input file cannot be opened.
    #[error("Cannot open {path}: {source}")]
    Input {
        /// Path as given on the command line.
        path: String,
        /// Underlying error.
        source: std::io::Error,
    },

    /// A configuration file failed to lex. Displays as a diagnostic line.
    #[error("{}", .source.to_diagnostic().render(.file))]
    Lex {
        /// Name the file is reported under.
        file: String,
        /// The first lexical error in the file.
        source: LexError,
    },

    /// One or more files given to `check` had lexical errors.
    #[error("{failed} of {total} file(s) failed the check")]
    CheckFailed {
        /// Files with errors.
        failed: usize,
        /// Files checked.
        total: usize,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when a diagnostic cannot be written out.
    #[error(transparent)]
    Diagnostic(#[from] DiagnosticError),
}

/// Result type alias using FastdtError.
///
/// This type alias simplifies function signatures by providing
/// a consistent result type throughout the application.
pub type Result<T> = std::result::Result<T, FastdtError>;
