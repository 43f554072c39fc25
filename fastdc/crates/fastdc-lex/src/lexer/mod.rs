//! Lexer module.
//!
//! The lexer is split by token class:
//! - `core` - Lexer struct, byte stepping and dispatch
//! - `comment` - block and line comments
//! - `string` - quoted strings
//! - `number` - integers and IPv4 addresses
//! - `address` - bracketed IPv6 addresses
//! - `keyword` - reserved words

mod address;
mod comment;
mod core;
mod keyword;
mod number;
mod string;

pub use self::core::{Lexer, LexerConfig};
