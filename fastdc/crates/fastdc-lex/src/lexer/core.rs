//! Core lexer implementation.
//!
//! This module contains the Lexer struct, the byte stepping primitives the
//! scanners share, and the dispatcher that picks a scanner for each token.

use std::io::{self, Read};

use tracing::{debug, trace};

use crate::buffer::{StreamBuffer, DEFAULT_CAPACITY};
use crate::error::{LexError, LexErrorKind, LexResult, Unterminated};
use crate::location::Location;
use crate::token::{Token, TokenKind};

/// Lexer settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerConfig {
    /// Size of the lookahead window in bytes. Values below
    /// [`MIN_CAPACITY`](crate::buffer::MIN_CAPACITY) are raised to it.
    ///
    /// Keywords, numbers and addresses must be shorter than the window.
    pub capacity: usize,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

/// Streaming lexer for fastd configuration files.
///
/// The lexer pulls bytes from a borrowed reader through a fixed-size window
/// and hands out one [`Token`] per call to [`next_token`](Self::next_token).
/// Once the input is exhausted every further call returns an `Eof` token.
///
/// # Example
///
/// ```
/// use fastdc_lex::{Keyword, Lexer, TokenKind};
///
/// let mut input: &[u8] = b"mtu 1426;";
/// let mut lexer = Lexer::new(&mut input);
///
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Keyword(Keyword::Mtu));
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::UInt(1426));
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Semicolon);
/// assert!(lexer.next_token().unwrap().is_eof());
/// ```
#[derive(Debug)]
pub struct Lexer<'a, R: Read + ?Sized> {
    pub(super) stream: StreamBuffer<'a, R>,

    pub(super) location: Location,

    /// Set after a word-like token; cleared by whitespace, comments and
    /// punctuation. A word-like token may not start while it is set.
    pub(super) needspace: bool,

    /// Iteration has returned its last item.
    finished: bool,
}

impl<'a, R: Read + ?Sized> Lexer<'a, R> {
    /// Creates a lexer over `reader` with the default window size.
    pub fn new(reader: &'a mut R) -> Self {
        Self::with_config(reader, LexerConfig::default())
    }

    /// Creates a lexer over `reader` with the given settings.
    ///
    /// The first read from `reader` happens here.
    pub fn with_config(reader: &'a mut R, config: LexerConfig) -> Self {
        Self {
            stream: StreamBuffer::new(reader, config.capacity),
            location: Location::new(),
            needspace: false,
            finished: false,
        }
    }

    /// Returns the next token.
    ///
    /// An error rejects the text scanned so far; the following call starts
    /// right after it.
    pub fn next_token(&mut self) -> LexResult<Token> {
        match self.lex() {
            Ok(token) => {
                trace!(token = %token.kind, span = %token.span, "token");
                Ok(token)
            },
            Err(err) => {
                debug!(error = %err, span = %err.span, "rejected token");
                self.stream.commit();
                self.needspace = false;
                Err(err)
            },
        }
    }

    /// Current line (1-based).
    pub fn line(&self) -> u32 {
        self.location.line()
    }

    /// Bytes passed on the current line.
    pub fn column(&self) -> u32 {
        self.location.column()
    }

    /// Current `(line, column)`.
    pub fn location(&self) -> (u32, u32) {
        (self.line(), self.column())
    }

    /// Size of the lookahead window in bytes.
    pub fn capacity(&self) -> usize {
        self.stream.capacity()
    }

    fn lex(&mut self) -> LexResult<Token> {
        loop {
            let byte = match self.stream.current() {
                Some(byte) => byte,
                None if self.stream.refill() => continue,
                None => return self.end(),
            };

            self.location.mark();

            match byte {
                b' ' | b'\t' | b'\r' | b'\n' => {
                    self.advance(true);
                    self.needspace = false;
                },
                b';' => return Ok(self.punctuation(TokenKind::Semicolon)),
                b':' => return Ok(self.punctuation(TokenKind::Colon)),
                b'{' => return Ok(self.punctuation(TokenKind::LBrace)),
                b'}' => return Ok(self.punctuation(TokenKind::RBrace)),
                b'/' => match self.next_committed() {
                    Some(b'*') => self.skip_block_comment()?,
                    Some(b'/') => self.skip_line_comment(),
                    Some(_) => {
                        return Err(self.error(LexErrorKind::Syntax(
                            "`/` does not start a comment".to_string(),
                        )))
                    },
                    None => {
                        return Err(self.cut_short(LexErrorKind::Syntax(
                            "unexpected end of input after `/`".to_string(),
                        )))
                    },
                },
                b'#' => self.skip_line_comment(),
                b'"' => return self.scan_string(),
                b'[' => return self.scan_ipv6(),
                b'0'..=b'9' => return self.scan_number(),
                b'a'..=b'z' => return self.scan_keyword(),
                _ => {
                    self.advance(true);
                    return Err(self.error(LexErrorKind::Syntax(format!(
                        "unexpected {}",
                        describe(byte)
                    ))));
                },
            }
        }
    }

    /// The window is empty and the source has nothing more to give.
    fn end(&mut self) -> LexResult<Token> {
        self.location.mark();
        match self.stream.error() {
            Some(err) => Err(LexError::new(
                LexErrorKind::Io(copy_io_error(err)),
                self.location.span(),
            )),
            None => Ok(Token::new(TokenKind::Eof, self.location.span())),
        }
    }

    fn punctuation(&mut self, kind: TokenKind) -> Token {
        self.advance(true);
        self.finish(kind)
    }

    /// Passes over the current byte, refilling the window if it ran dry.
    ///
    /// Returns false if there is no byte after it.
    pub(super) fn advance(&mut self, commit: bool) -> bool {
        let Some(byte) = self.stream.current() else {
            return false;
        };
        self.location.pass(byte);
        self.stream.step(commit);
        self.stream.current().is_some() || self.stream.refill()
    }

    /// Commits the current byte and returns the one after it.
    pub(super) fn next_committed(&mut self) -> Option<u8> {
        if self.advance(true) {
            self.stream.current()
        } else {
            None
        }
    }

    /// Adds the current byte to the lookahead and returns the one after it.
    ///
    /// Fails if the source reported an error, or if the lookahead fills
    /// the whole window.
    pub(super) fn extend(&mut self) -> LexResult<Option<u8>> {
        if self.advance(false) {
            return Ok(self.stream.current());
        }
        if let Some(err) = self.stream.error() {
            return Err(self.error(LexErrorKind::Io(copy_io_error(err))));
        }
        if self.stream.token().len() == self.stream.capacity() {
            return Err(self.error(LexErrorKind::Syntax(format!(
                "token must be shorter than the {}-byte lookahead window",
                self.stream.capacity()
            ))));
        }
        Ok(None)
    }

    /// Folds the lookahead into the consumed region and builds a token of
    /// `kind` spanning the text since the last mark.
    pub(super) fn finish(&mut self, kind: TokenKind) -> Token {
        self.stream.commit();
        self.needspace = kind.is_word();
        self.token(kind)
    }

    /// Rejects a word-like token that directly follows another one.
    pub(super) fn expect_separator(&self) -> LexResult<()> {
        if self.needspace {
            return Err(self.error(LexErrorKind::Syntax(
                "missing whitespace between tokens".to_string(),
            )));
        }
        Ok(())
    }

    /// Builds a token of `kind` spanning the text since the last mark.
    pub(super) fn token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.location.span())
    }

    pub(super) fn error(&self, kind: LexErrorKind) -> LexError {
        LexError::new(kind, self.location.span())
    }

    /// Error for input that ended early. A failed read takes precedence
    /// over `kind`.
    pub(super) fn cut_short(&self, kind: LexErrorKind) -> LexError {
        match self.stream.error() {
            Some(err) => self.error(LexErrorKind::Io(copy_io_error(err))),
            None => self.error(kind),
        }
    }

    pub(super) fn unterminated(&self, what: Unterminated) -> LexError {
        self.cut_short(LexErrorKind::Unterminated(what))
    }

    /// The lookahead as text, for parsing and messages.
    pub(super) fn token_text(&self) -> String {
        String::from_utf8_lossy(self.stream.token()).into_owned()
    }
}

impl<R: Read + ?Sized> Iterator for Lexer<'_, R> {
    type Item = LexResult<Token>;

    /// Yields tokens up to, not including, `Eof`. Stops after the first
    /// error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is_eof() => {
                self.finished = true;
                None
            },
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            },
        }
    }
}

/// The read error stays with the stream so every later pull can report it.
fn copy_io_error(err: &io::Error) -> io::Error {
    io::Error::new(err.kind(), err.to_string())
}

fn describe(byte: u8) -> String {
    match byte {
        b'!'..=b'~' => format!("character `{}`", byte as char),
        _ => format!("byte 0x{:02x}", byte),
    }
}
