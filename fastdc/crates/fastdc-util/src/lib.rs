//! fastdc-util - Core Utilities and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! This crate provides the small set of types shared by the fastdc lexer and
//! the tools built on top of it:
//!
//! - [`Span`]: line/column range of a token in a configuration file.
//! - [`Diagnostic`], [`DiagnosticBuilder`], [`Handler`]: collection and
//!   one-line rendering of errors and warnings.
//! - [`DiagnosticError`]: failures while writing diagnostics out.
//!
//! DESIGN PRINCIPLES:
//! ------------------
//! 1. PLAIN DATA
//!    Spans are `Copy` and carry no reference to the source they describe,
//!    so tokens and errors can outlive the reader they were lexed from.
//!
//! 2. NO GLOBAL STATE
//!    Diagnostics are collected in an explicit [`Handler`] owned by the
//!    caller instead of a process-wide sink.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, Handler, Level};
pub use error::{DiagnosticError, DiagnosticResult};
pub use span::Span;
