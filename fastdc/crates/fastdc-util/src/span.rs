//! Source locations for configuration tokens.
//!
//! A [`Span`] records where a token started and where it ended, as
//! line/column pairs. Lines are 1-based. Columns count bytes: the column
//! of a byte is the number of bytes consumed on its line up to and
//! including it, so the first byte of a line sits in column 1.

use std::fmt;

use static_assertions::assert_impl_all;

/// Line/column range of a token in its source.
///
/// Both ends are inclusive. A span that covers nothing (for example the
/// end-of-input marker) has `last_column == first_column - 1`.
///
/// # Example
///
/// ```
/// use fastdc_util::Span;
///
/// let span = Span::new(3, 5, 3, 7);
/// assert_eq!(span.to_string(), "3:5-7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Line of the first byte (1-based).
    pub first_line: u32,
    /// Column of the first byte.
    pub first_column: u32,
    /// Line of the last byte (1-based).
    pub last_line: u32,
    /// Column of the last byte.
    pub last_column: u32,
}

assert_impl_all!(Span: Copy, Send, Sync);

impl Span {
    /// Placeholder for diagnostics that do not point into a source.
    pub const DUMMY: Span = Span {
        first_line: 0,
        first_column: 0,
        last_line: 0,
        last_column: 0,
    };

    /// Creates a span from its four coordinates.
    pub const fn new(first_line: u32, first_column: u32, last_line: u32, last_column: u32) -> Self {
        Self {
            first_line,
            first_column,
            last_line,
            last_column,
        }
    }

    /// Creates a span covering a single byte.
    pub const fn point(line: u32, column: u32) -> Self {
        Self::new(line, column, line, column)
    }

    /// Returns a span starting at `self` and ending at `other`.
    pub fn merge(self, other: Span) -> Span {
        Span {
            first_line: self.first_line,
            first_column: self.first_column,
            last_line: other.last_line,
            last_column: other.last_column,
        }
    }

    /// Returns true if the span starts and ends on the same line.
    pub fn is_single_line(&self) -> bool {
        self.first_line == self.last_line
    }

    /// Returns true for [`Span::DUMMY`].
    pub fn is_dummy(&self) -> bool {
        *self == Self::DUMMY
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single_line() {
            if self.first_column >= self.last_column {
                write!(f, "{}:{}", self.first_line, self.first_column)
            } else {
                write!(f, "{}:{}-{}", self.first_line, self.first_column, self.last_column)
            }
        } else {
            write!(
                f,
                "{}:{}-{}:{}",
                self.first_line, self.first_column, self.last_line, self.last_column
            )
        }
    }
}
