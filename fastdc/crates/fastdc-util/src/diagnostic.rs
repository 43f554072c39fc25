//! Diagnostics for configuration errors.
//!
//! A [`Diagnostic`] pairs a message with a severity and the [`Span`] it
//! refers to. Diagnostics are built with [`DiagnosticBuilder`] and collected
//! by a [`Handler`], which the caller drains or prints once a file has been
//! processed.
//!
//! ```
//! use fastdc_util::{DiagnosticBuilder, Handler, Span};
//!
//! let mut handler = Handler::new();
//! DiagnosticBuilder::error("unterminated string")
//!     .span(Span::new(4, 9, 4, 20))
//!     .emit(&mut handler);
//!
//! assert!(handler.has_errors());
//! assert_eq!(
//!     handler.diagnostics()[0].render("fastd.conf"),
//!     "fastd.conf:4:9: error: unterminated string"
//! );
//! ```

use std::fmt;
use std::io;

use crate::error::DiagnosticResult;
use crate::Span;

/// Diagnostic level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Informational note attached to another diagnostic.
    Note,
    /// Suggestion on how to fix a problem.
    Help,
    /// Suspicious input that is still accepted.
    Warning,
    /// Input that cannot be processed.
    Error,
}

impl Level {
    /// Returns the lowercase name printed in rendered diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Note => "note",
            Level::Help => "help",
            Level::Warning => "warning",
            Level::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Diagnostic for error reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity.
    pub level: Level,
    /// Human-readable message.
    pub message: String,
    /// Location the message refers to, or [`Span::DUMMY`].
    pub span: Span,
}

impl Diagnostic {
    /// Renders the diagnostic on one line, prefixed with its location.
    ///
    /// The location is `file:line:column` of the first byte of the span.
    /// Diagnostics without a span are prefixed with the file name only.
    pub fn render(&self, file_name: &str) -> String {
        if self.span.is_dummy() {
            format!("{}: {}: {}", file_name, self.level, self.message)
        } else {
            format!(
                "{}:{}:{}: {}: {}",
                file_name, self.span.first_line, self.span.first_column, self.level, self.message
            )
        }
    }

    /// Writes the rendered diagnostic followed by a newline.
    pub fn write_to<W: io::Write>(&self, writer: &mut W, file_name: &str) -> DiagnosticResult<()> {
        writeln!(writer, "{}", self.render(file_name))?;
        Ok(())
    }
}

/// Builder for [`Diagnostic`] values.
#[derive(Debug, Clone)]
pub struct DiagnosticBuilder {
    diagnostic: Diagnostic,
}

impl DiagnosticBuilder {
    /// Starts a diagnostic with the given level and message.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            diagnostic: Diagnostic {
                level,
                message: message.into(),
                span: Span::DUMMY,
            },
        }
    }

    /// Starts an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Starts a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Attaches a source location.
    pub fn span(mut self, span: Span) -> Self {
        self.diagnostic.span = span;
        self
    }

    /// Finishes the diagnostic without emitting it.
    pub fn build(self) -> Diagnostic {
        self.diagnostic
    }

    /// Hands the diagnostic to `handler`.
    pub fn emit(self, handler: &mut Handler) {
        handler.emit(self.diagnostic);
    }
}

/// Handler for diagnostics
///
/// Collects every diagnostic emitted while processing one or more files.
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
}

impl Handler {
    /// Create new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.level == Level::Error {
            self.error_count += 1;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Returns true if at least one error was emitted.
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Number of errors emitted so far.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// All diagnostics in emission order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Removes and returns all diagnostics, resetting the error count.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        self.error_count = 0;
        std::mem::take(&mut self.diagnostics)
    }
}
