//! fastdc-lex - Streaming Lexer for fastd Configuration Files
//!
//! This crate turns the bytes of a fastd-style configuration file into a
//! stream of typed tokens. It reads from any [`std::io::Read`] source
//! through a fixed-size lookahead window, so a file never has to be held in
//! memory as a whole.
//!
//! # Example Usage
//!
//! ```
//! use std::net::Ipv4Addr;
//! use fastdc_lex::{Keyword, Lexer, TokenKind};
//!
//! let mut config: &[u8] = b"remote 192.0.2.1:10000;";
//! let mut lexer = Lexer::new(&mut config);
//!
//! assert_eq!(lexer.next_token()?.kind, TokenKind::Keyword(Keyword::Remote));
//! assert_eq!(lexer.next_token()?.kind, TokenKind::Addr4(Ipv4Addr::new(192, 0, 2, 1)));
//!
//! // The rest of the tokens through the iterator.
//! let rest: Vec<_> = lexer.collect::<Result<_, _>>()?;
//! assert_eq!(rest.len(), 3);
//! # Ok::<(), fastdc_lex::LexError>(())
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds and the keyword table
//! - [`lexer`] - The lexer and its scanners
//! - [`buffer`] - Lookahead window over the reader
//! - [`location`] - Line/column tracking
//! - [`error`] - Lexical errors
//!
//! # Token Categories
//!
//! ## Punctuation
//!
//! `;`, `:`, `{`, `}`
//!
//! ## Keywords
//!
//! 58 reserved words such as `peer`, `remote`, `mtu`, `post-down`. There are
//! no other bare words; see [`Keyword`].
//!
//! ## Literals
//!
//! - **String**: `"secret"`, with `\` taking the next byte literally and
//!   `\` + newline continuing the line
//! - **Integer**: unsigned decimal, up to `u64::MAX`
//! - **IPv4 address**: `192.0.2.1`
//! - **IPv6 address**: `[2001:db8::1]`
//!
//! ## Comments
//!
//! `# ...`, `// ...` and `/* ... */`
//!
//! Two words (strings, integers, addresses, keywords) must be separated by
//! whitespace, a comment, or punctuation.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod error;
pub mod lexer;
pub mod location;
pub mod token;

#[cfg(test)]
mod edge_cases;

use std::io::Read;

// Re-export main types for convenience
pub use buffer::{DEFAULT_CAPACITY, MIN_CAPACITY};
pub use error::{LexError, LexErrorKind, LexResult, Unterminated};
pub use fastdc_util::Span;
pub use lexer::{Lexer, LexerConfig};
pub use token::{Keyword, Token, TokenKind};

/// Lexes a whole source with default settings.
///
/// Returns all tokens before `Eof`, or the first error.
pub fn tokenize<R: Read + ?Sized>(reader: &mut R) -> LexResult<Vec<Token>> {
    Lexer::new(reader).collect()
}
