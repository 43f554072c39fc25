//! Keyword lexing.
//!
//! The configuration language has no free-form identifiers: every bare
//! word must be one of the reserved words in the keyword table.

use std::io::Read;

use crate::error::{LexErrorKind, LexResult};
use crate::token::{Keyword, Token, TokenKind};
use crate::Lexer;

/// Bytes that may continue a keyword after its leading letter.
#[inline]
fn is_keyword_byte(byte: u8) -> bool {
    matches!(byte, b'a'..=b'z' | b'0'..=b'9' | b'-')
}

impl<'a, R: Read + ?Sized> Lexer<'a, R> {
    /// Lexes a keyword. The current byte is a lowercase letter.
    pub(super) fn scan_keyword(&mut self) -> LexResult<Token> {
        self.expect_separator()?;

        while let Some(byte) = self.extend()? {
            if !is_keyword_byte(byte) {
                break;
            }
        }

        let Some(keyword) = Keyword::lookup(self.stream.token()) else {
            return Err(self.error(LexErrorKind::Syntax(format!(
                "unknown keyword `{}`",
                self.token_text()
            ))));
        };

        Ok(self.finish(TokenKind::Keyword(keyword)))
    }
}

#[cfg(test)]
mod tests {
    use fastdc_util::Span;
    use proptest::prelude::*;

    use super::*;

    fn lex_one(source: &str) -> LexResult<Token> {
        let mut input = source.as_bytes();
        Lexer::new(&mut input).next_token()
    }

    #[test]
    fn test_every_keyword() {
        for keyword in Keyword::all() {
            let token = lex_one(keyword.as_str()).unwrap();
            assert_eq!(token.kind, TokenKind::Keyword(keyword));
        }
    }

    #[test]
    fn test_hyphenated_keywords() {
        assert_eq!(
            lex_one("post-down").unwrap().kind,
            TokenKind::Keyword(Keyword::PostDown)
        );
        assert_eq!(
            lex_one("pre-up ").unwrap().kind,
            TokenKind::Keyword(Keyword::PreUp)
        );
    }

    #[test]
    fn test_keyword_with_digit() {
        assert_eq!(
            lex_one("ipv6;").unwrap().kind,
            TokenKind::Keyword(Keyword::Ipv6)
        );
    }

    #[test]
    fn test_longest_match() {
        assert_eq!(
            lex_one("peers").unwrap().kind,
            TokenKind::Keyword(Keyword::Peers)
        );
        assert_eq!(
            lex_one("peer{").unwrap().kind,
            TokenKind::Keyword(Keyword::Peer)
        );
    }

    #[test]
    fn test_unknown_keyword() {
        let err = lex_one("interfaces").unwrap_err();
        assert_eq!(err.to_string(), "syntax error: unknown keyword `interfaces`");
        assert_eq!(err.span, Span::new(1, 1, 1, 10));
    }

    #[test]
    fn test_uppercase_ends_keyword() {
        let mut input: &[u8] = b"keyX";
        let mut lexer = Lexer::new(&mut input);
        assert_eq!(
            lexer.next_token().unwrap().kind,
            TokenKind::Keyword(Keyword::Key)
        );
        assert!(lexer.next_token().is_err());
    }

    #[test]
    fn test_keywords_need_space() {
        let mut input: &[u8] = b"yes\"\"";
        let mut lexer = Lexer::new(&mut input);
        lexer.next_token().unwrap();
        let err = lexer.next_token().unwrap_err();
        assert!(matches!(err.kind, LexErrorKind::Syntax(_)));
    }

    #[test]
    fn test_non_keywords_rejected() {
        proptest!(|(word in "[a-z][a-z0-9-]{0,15}")| {
            prop_assume!(Keyword::lookup(word.as_bytes()).is_none());
            let err = lex_one(&word).unwrap_err();
            prop_assert!(matches!(err.kind, LexErrorKind::Syntax(_)));
        });
    }
}
