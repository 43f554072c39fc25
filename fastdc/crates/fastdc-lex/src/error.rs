//! Lexical errors.
//!
//! Every error is final for the token that produced it. The lexer does not
//! try to resynchronize; a caller that wants to go on simply pulls the next
//! token, which starts right after the rejected text.

use std::fmt;
use std::io;

use fastdc_util::{Diagnostic, DiagnosticBuilder, Span};
use thiserror::Error;

/// Literal that was still open when the input ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unterminated {
    /// `"...` without the closing quote.
    String,
    /// `/* ...` without the closing `*/`.
    BlockComment,
}

impl fmt::Display for Unterminated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unterminated::String => f.write_str("string"),
            Unterminated::BlockComment => f.write_str("block comment"),
        }
    }
}

/// What went wrong.
#[derive(Debug, Error)]
pub enum LexErrorKind {
    /// Unexpected character, unknown keyword, or two words with nothing
    /// between them.
    #[error("syntax error: {0}")]
    Syntax(String),

    /// Input ended inside a string or block comment.
    #[error("unterminated {0}")]
    Unterminated(Unterminated),

    /// Address text that does not decode to an address.
    #[error("invalid address `{0}`")]
    InvalidAddress(String),

    /// Digit run that does not fit an unsigned 64-bit integer.
    #[error("invalid integer constant `{0}`")]
    InvalidInteger(String),

    /// The source failed while being read.
    #[error("I/O error: {0}")]
    Io(#[source] io::Error),
}

impl LexErrorKind {
    /// Stable category name, used for machine-readable output.
    pub fn short_name(&self) -> &'static str {
        match self {
            LexErrorKind::Syntax(_) => "syntax",
            LexErrorKind::Unterminated(_) => "unterminated",
            LexErrorKind::InvalidAddress(_) => "invalid-address",
            LexErrorKind::InvalidInteger(_) => "invalid-integer",
            LexErrorKind::Io(_) => "io",
        }
    }
}

/// A lexical error and the location of the offending text.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct LexError {
    /// What went wrong.
    pub kind: LexErrorKind,
    /// Text scanned up to the point of failure.
    pub span: Span,
}

impl LexError {
    /// Creates an error.
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Converts the error into an error diagnostic at its span.
    pub fn to_diagnostic(&self) -> Diagnostic {
        DiagnosticBuilder::error(self.kind.to_string())
            .span(self.span)
            .build()
    }
}

/// Result type alias for lexing operations
pub type LexResult<T> = std::result::Result<T, LexError>;
