//! Core error types for fastdc-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for diagnostic operations
#[derive(Debug, Error)]
pub enum DiagnosticError {
    /// Failed to write a rendered diagnostic
    #[error("Failed to write diagnostic: {0}")]
    Write(#[from] std::io::Error),
}

/// Result type alias for diagnostic operations
pub type DiagnosticResult<T> = std::result::Result<T, DiagnosticError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err = DiagnosticError::Write(io_err);
        assert_eq!(err.to_string(), "Failed to write diagnostic: disk full");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: DiagnosticError = io_err.into();
        assert!(matches!(err, DiagnosticError::Write(_)));
    }
}
