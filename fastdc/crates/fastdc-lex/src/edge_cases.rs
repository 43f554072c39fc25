//! Edge case tests for fastdc-lex

#[cfg(test)]
mod tests {
    use std::net::{Ipv4Addr, Ipv6Addr};

    use crate::{tokenize, Keyword, LexError, LexErrorKind, Lexer, LexerConfig, Span, TokenKind};

    fn lex_all(source: &[u8]) -> Vec<TokenKind> {
        let mut input = source;
        tokenize(&mut input)
            .unwrap_or_else(|err| panic!("lex error in {:?}: {}", source, err))
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    fn lex_err(source: &[u8]) -> LexError {
        let mut input = source;
        tokenize(&mut input).unwrap_err()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all(b"").is_empty());
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        assert_eq!(
            lex_all(b"mtu 1400;\r\nmode tap;\r\n"),
            vec![
                TokenKind::Keyword(Keyword::Mtu),
                TokenKind::UInt(1400),
                TokenKind::Semicolon,
                TokenKind::Keyword(Keyword::Mode),
                TokenKind::Keyword(Keyword::Tap),
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_edge_crlf_continuation_keeps_cr() {
        assert_eq!(
            lex_all(b"\"a\\\r\nb\""),
            vec![TokenKind::String(b"a\r\nb".to_vec())]
        );
    }

    #[test]
    fn test_edge_tab_is_one_column() {
        let mut input: &[u8] = b"\t\tpeer";
        let token = Lexer::new(&mut input).next_token().unwrap();
        assert_eq!(token.span, Span::new(1, 3, 1, 6));
    }

    #[test]
    fn test_edge_comment_markers_in_string() {
        assert_eq!(
            lex_all(b"\"# not /* a */ comment // \""),
            vec![TokenKind::String(b"# not /* a */ comment // ".to_vec())]
        );
    }

    #[test]
    fn test_edge_words_at_end_of_input() {
        assert_eq!(lex_all(b"yes"), vec![TokenKind::Keyword(Keyword::Yes)]);
        assert_eq!(lex_all(b"65535"), vec![TokenKind::UInt(65535)]);
        assert_eq!(
            lex_all(b"10.0.0.1"),
            vec![TokenKind::Addr4(Ipv4Addr::new(10, 0, 0, 1))]
        );
    }

    #[test]
    fn test_edge_uppercase_hex_in_ipv6() {
        assert_eq!(
            lex_all(b"[FE80::1]"),
            vec![TokenKind::Addr6(Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, 1))]
        );
    }

    #[test]
    fn test_edge_ipv4_mapped_ipv6_rejected() {
        // Only hex digits and `:` are scanned, so the `.` ends the address.
        let err = lex_err(b"[::ffff:192.0.2.1]");
        assert!(matches!(err.kind, LexErrorKind::InvalidAddress(_)));
    }

    #[test]
    fn test_edge_block_comment_spans_lines() {
        let mut input: &[u8] = b"/*\n\n*/ up";
        let token = Lexer::new(&mut input).next_token().unwrap();
        assert_eq!(token.kind, TokenKind::Keyword(Keyword::Up));
        assert_eq!(token.span, Span::new(3, 4, 3, 5));
    }

    #[test]
    fn test_edge_many_tokens_small_window() {
        let source = "peer \"x\" { remote 10.0.0.1:10000; }\n".repeat(200);
        let mut input = source.as_bytes();
        let lexer = Lexer::with_config(&mut input, LexerConfig { capacity: 16 });
        let tokens = lexer.collect::<Result<Vec<_>, _>>().unwrap();
        assert_eq!(tokens.len(), 200 * 9);
        assert_eq!(tokens.last().map(|token| token.span.first_line), Some(200));
    }

    #[test]
    fn test_edge_longest_keyword_in_smallest_window() {
        let mut input: &[u8] = b"capabilities disestablish";
        let lexer = Lexer::with_config(&mut input, LexerConfig { capacity: 1 });
        assert_eq!(lexer.capacity(), crate::MIN_CAPACITY);
        let kinds: Vec<_> = lexer.map(|token| token.unwrap().kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Keyword(Keyword::Capabilities),
                TokenKind::Keyword(Keyword::Disestablish)
            ]
        );
    }

    #[test]
    fn test_edge_string_longer_than_window() {
        let body = "0123456789".repeat(10);
        let source = format!("secret \"{}\";", body);
        let mut input = source.as_bytes();
        let lexer = Lexer::with_config(&mut input, LexerConfig { capacity: 16 });
        let kinds: Vec<_> = lexer.map(|token| token.unwrap().kind).collect();
        assert_eq!(kinds[1], TokenKind::String(body.into_bytes()));
    }

    #[test]
    fn test_edge_leading_zeros_integer() {
        assert_eq!(lex_all(b"00000000000000000000001"), vec![TokenKind::UInt(1)]);
    }

    // ==================== ERROR CASES ====================

    #[test]
    fn test_err_byte_order_mark() {
        let err = lex_err(b"\xef\xbb\xbfpeer");
        assert_eq!(err.to_string(), "syntax error: unexpected byte 0xef");
    }

    #[test]
    fn test_err_nul_byte() {
        let err = lex_err(b"up;\0");
        assert_eq!(err.to_string(), "syntax error: unexpected byte 0x00");
        assert_eq!(err.span, Span::point(1, 4));
    }

    #[test]
    fn test_err_negative_number() {
        let err = lex_err(b"mtu -1;");
        assert_eq!(err.to_string(), "syntax error: unexpected character `-`");
    }

    #[test]
    fn test_err_slash_space() {
        assert!(matches!(lex_err(b"/ comment").kind, LexErrorKind::Syntax(_)));
    }

    #[test]
    fn test_err_digit_led_word() {
        let mut input: &[u8] = b"4ipv";
        let mut lexer = Lexer::new(&mut input);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::UInt(4));
        let err = lexer.next_token().unwrap_err();
        assert_eq!(err.to_string(), "syntax error: missing whitespace between tokens");
    }

    #[test]
    fn test_err_address_then_word() {
        let mut input: &[u8] = b"[::1]port";
        let mut lexer = Lexer::new(&mut input);
        assert_eq!(
            lexer.next_token().unwrap().kind,
            TokenKind::Addr6(Ipv6Addr::LOCALHOST)
        );
        assert!(matches!(
            lexer.next_token().unwrap_err().kind,
            LexErrorKind::Syntax(_)
        ));
    }

    #[test]
    fn test_err_unknown_keyword_span() {
        let err = lex_err(b"peer \"a\" {\n  remtoe 1.2.3.4;\n}");
        assert_eq!(err.to_string(), "syntax error: unknown keyword `remtoe`");
        assert_eq!(err.span, Span::new(2, 3, 2, 8));
    }

    #[test]
    fn test_err_unterminated_string_span() {
        let err = lex_err(b"key \"abc\ndef");
        assert_eq!(err.to_string(), "unterminated string");
        assert_eq!(err.span, Span::new(1, 5, 2, 3));
    }
}
