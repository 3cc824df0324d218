//! Error types for the biosniff crate.
//!
//! Probe failures never surface through `sniff`; these types exist for
//! the bounded I/O helpers and for callers embedding the sniffer in a
//! larger pipeline.

use thiserror::Error;

/// Main error type for biosniff operations.
#[derive(Debug, Error)]
pub enum SniffError {
    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed structural content
    #[error("parse error: {0}")]
    Parse(String),

    /// Generic internal error
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias for biosniff operations
pub type Result<T> = std::result::Result<T, SniffError>;
