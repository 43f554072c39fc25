//! Line/column tracking.
//!
//! The tracker sees every byte the lexer passes over, whether it ends up in
//! a token, in lookahead, or in skipped whitespace and comments. Lines start
//! at 1. The column is the number of bytes passed on the current line, so
//! it is 0 right after a newline and the next byte lands in column 1.

use fastdc_util::Span;

/// Position of the lexer plus the start of the token being scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    line: u32,
    column: u32,
    first_line: u32,
    first_column: u32,
}

impl Location {
    /// Position before the first byte of a source.
    pub fn new() -> Self {
        Self {
            line: 1,
            column: 0,
            first_line: 1,
            first_column: 1,
        }
    }

    /// Accounts for passing over `byte`.
    #[inline]
    pub fn pass(&mut self, byte: u8) {
        if byte == b'\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }

    /// Marks the next byte as the start of a token.
    #[inline]
    pub fn mark(&mut self) {
        self.first_line = self.line;
        self.first_column = self.column + 1;
    }

    /// Span from the last mark to the last byte passed.
    pub fn span(&self) -> Span {
        Span::new(self.first_line, self.first_column, self.line, self.column)
    }

    /// Current line (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Bytes passed on the current line.
    pub fn column(&self) -> u32 {
        self.column
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new()
    }
}
