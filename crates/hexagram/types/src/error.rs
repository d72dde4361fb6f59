//! Error types for line parsing and line-sequence construction.

use thiserror::Error;

/// Errors raised when untrusted input cannot form a line sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    /// A sequence had the wrong number of lines.
    #[error("expected {expected} lines, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    /// A line token was neither yin nor yang.
    #[error("unrecognised line value: {0}")]
    UnknownLine(String),
}

/// Result type for line operations.
pub type LineResult<T> = Result<T, LineError>;
