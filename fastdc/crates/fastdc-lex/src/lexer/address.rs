//! IPv6 address lexing.
//!
//! IPv6 addresses are written in brackets, `[2001:db8::1]`, so they cannot
//! be confused with the `:` that separates an address from a port.

use std::io::Read;
use std::net::Ipv6Addr;

use crate::error::{LexErrorKind, LexResult};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a, R: Read + ?Sized> Lexer<'a, R> {
    /// Lexes a bracketed IPv6 address. The current byte is the `[`.
    pub(super) fn scan_ipv6(&mut self) -> LexResult<Token> {
        self.expect_separator()?;

        let mut terminator = self.extend()?;
        while let Some(byte) = terminator {
            if !(byte.is_ascii_hexdigit() || byte == b':') {
                break;
            }
            terminator = self.extend()?;
        }

        if terminator != Some(b']') {
            return Err(self.error(LexErrorKind::InvalidAddress(self.token_text())));
        }

        let addr = std::str::from_utf8(&self.stream.token()[1..])
            .ok()
            .and_then(|text| text.parse::<Ipv6Addr>().ok());
        let Some(addr) = addr else {
            return Err(self.error(LexErrorKind::InvalidAddress(self.token_text())));
        };

        self.advance(false);
        Ok(self.finish(TokenKind::Addr6(addr)))
    }
}
