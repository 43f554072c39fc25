//! Command modules for the fastdt CLI.
//!
//! This module contains implementations for all available subcommands.
//! Each subcommand is implemented in its own file following the same
//! pattern: an `Args` struct filled from the command line and a command
//! handler that merges it with the loaded configuration.

pub mod common;

pub mod check;
pub mod tokens;

// Re-export command types
pub use check::{CheckArgs, CheckCommand};
pub use tokens::{TokensArgs, TokensCommand};
