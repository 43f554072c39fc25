//! Integer and IPv4 address lexing.
//!
//! Both start with a digit. The scanner reads digits until it either hits a
//! `.`, which turns the token into a dotted-quad address, or any other byte,
//! which ends a decimal integer.

use std::io::Read;
use std::net::Ipv4Addr;

use crate::error::{LexErrorKind, LexResult};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a, R: Read + ?Sized> Lexer<'a, R> {
    /// Lexes an unsigned integer or an IPv4 address. The current byte is a
    /// digit.
    pub(super) fn scan_number(&mut self) -> LexResult<Token> {
        self.expect_separator()?;

        loop {
            match self.extend()? {
                Some(b'0'..=b'9') => continue,
                Some(b'.') => return self.scan_ipv4(),
                _ => break,
            }
        }

        let text = self.token_text();
        let value = text
            .parse::<u64>()
            .map_err(|_| self.error(LexErrorKind::InvalidInteger(text)))?;

        Ok(self.finish(TokenKind::UInt(value)))
    }

    /// Continues a number as an IPv4 address. The digits read so far are
    /// in the lookahead and the current byte is the first `.`.
    ///
    /// The separator check was done by [`scan_number`](Self::scan_number).
    fn scan_ipv4(&mut self) -> LexResult<Token> {
        while let Some(b'0'..=b'9' | b'.') = self.extend()? {}

        let text = self.token_text();
        let addr = text
            .parse::<Ipv4Addr>()
            .map_err(|_| self.error(LexErrorKind::InvalidAddress(text)))?;

        Ok(self.finish(TokenKind::Addr4(addr)))
    }
}
