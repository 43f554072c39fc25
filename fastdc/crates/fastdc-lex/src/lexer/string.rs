//! String literal lexing.
//!
//! Strings are delimited by `"`. A backslash takes the next byte literally,
//! except that a backslash before a newline removes both (line
//! continuation). There are no other escape sequences and no restriction
//! on the bytes inside, so the value is a byte string, not UTF-8.

use std::io::Read;

use crate::error::{LexResult, Unterminated};
use crate::token::{Token, TokenKind};
use crate::Lexer;

/// Initial size of the value buffer.
const STRING_CAPACITY: usize = 1024;

impl<'a, R: Read + ?Sized> Lexer<'a, R> {
    /// Lexes a string literal. The current byte is the opening quote.
    ///
    /// The literal is committed byte by byte, so its length is not bounded
    /// by the lookahead window.
    pub(super) fn scan_string(&mut self) -> LexResult<Token> {
        self.expect_separator()?;

        let mut value = Vec::with_capacity(STRING_CAPACITY);

        loop {
            let byte = match self.next_committed() {
                Some(b'"') => break,
                Some(b'\\') => match self.next_committed() {
                    Some(b'\n') => continue,
                    Some(escaped) => escaped,
                    None => return Err(self.unterminated(Unterminated::String)),
                },
                Some(byte) => byte,
                None => return Err(self.unterminated(Unterminated::String)),
            };
            value.push(byte);
        }

        self.advance(true);
        Ok(self.finish(TokenKind::String(value)))
    }
}
