//! Comment skipping.
//!
//! Three forms are recognized: `# ...` and `// ...` run to the end of the
//! line, `/* ... */` runs to the first `*/` and does not nest.

use std::io::Read;

use crate::error::{LexResult, Unterminated};
use crate::Lexer;

impl<'a, R: Read + ?Sized> Lexer<'a, R> {
    /// Skips a block comment. The opening `/` has been passed and the
    /// current byte is the `*`.
    pub(super) fn skip_block_comment(&mut self) -> LexResult<()> {
        // The opening `*` never pairs with a following `/`.
        let mut prev = 0;

        while let Some(byte) = self.next_committed() {
            if prev == b'*' && byte == b'/' {
                self.advance(true);
                self.needspace = false;
                return Ok(());
            }
            prev = byte;
        }

        Err(self.unterminated(Unterminated::BlockComment))
    }

    /// Skips a line comment starting at the current byte, the newline
    /// included.
    pub(super) fn skip_line_comment(&mut self) {
        while let Some(byte) = self.next_committed() {
            if byte == b'\n' {
                break;
            }
        }
        self.advance(true);
        self.needspace = false;
    }
}

#[cfg(test)]
mod tests {
    use crate::error::LexErrorKind;
    use crate::token::{Keyword, TokenKind};
    use crate::Lexer;

    fn lex_kinds(source: &str) -> Vec<TokenKind> {
        let mut input = source.as_bytes();
        Lexer::new(&mut input)
            .map(|token| token.expect("unexpected lex error").kind)
            .collect()
    }

    #[test]
    fn test_hash_comment() {
        assert_eq!(
            lex_kinds("# log level debug;\nup;"),
            vec![TokenKind::Keyword(Keyword::Up), TokenKind::Semicolon]
        );
    }

    #[test]
    fn test_slash_comment() {
        assert_eq!(
            lex_kinds("key;//c\nkey;"),
            vec![
                TokenKind::Keyword(Keyword::Key),
                TokenKind::Semicolon,
                TokenKind::Keyword(Keyword::Key),
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_comment_at_end_of_input() {
        assert!(lex_kinds("# no newline").is_empty());
        assert!(lex_kinds("//").is_empty());
    }

    #[test]
    fn test_block_comment() {
        assert_eq!(
            lex_kinds("mtu /* 1400\n 1500 */ 1426"),
            vec![TokenKind::Keyword(Keyword::Mtu), TokenKind::UInt(1426)]
        );
    }

    #[test]
    fn test_block_comment_ends_at_first_close() {
        assert_eq!(
            lex_kinds("/* /* */ on"),
            vec![TokenKind::Keyword(Keyword::On)]
        );
        assert_eq!(lex_kinds("/***/ on"), vec![TokenKind::Keyword(Keyword::On)]);
    }

    #[test]
    fn test_comment_separates_words() {
        assert_eq!(
            lex_kinds("yes/**/no"),
            vec![
                TokenKind::Keyword(Keyword::Yes),
                TokenKind::Keyword(Keyword::No)
            ]
        );
        assert_eq!(
            lex_kinds("yes#\nno"),
            vec![
                TokenKind::Keyword(Keyword::Yes),
                TokenKind::Keyword(Keyword::No)
            ]
        );
    }

    #[test]
    fn test_unterminated_block_comment() {
        for source in ["/* unterminated", "/*/", "/* almost *"] {
            let mut input = source.as_bytes();
            let err = Lexer::new(&mut input).next_token().unwrap_err();
            assert!(
                matches!(err.kind, LexErrorKind::Unterminated(_)),
                "{:?} gave {:?}",
                source,
                err
            );
            assert_eq!(err.to_string(), "unterminated block comment");
        }
    }
}
