//! Structured error types for the Aequorea toolkit.

use thiserror::Error;

/// Unified error type for all Aequorea operations.
#[derive(Debug, Error)]
pub enum AequoreaError {
    /// I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error (malformed input data)
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid sequence (empty input or residues outside the alphabet)
    #[error("invalid sequence: {0}")]
    InvalidSequence(String),

    /// A numeric solver exhausted its iteration cap without converging
    #[error("no convergence: {0}")]
    NoConvergence(String),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the Aequorea toolkit.
pub type Result<T> = std::result::Result<T, AequoreaError>;
