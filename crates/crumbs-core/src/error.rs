//! Error types for crumbs core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps them to
//! user-facing messages and exit codes.

use thiserror::Error;

/// Result type alias for crumbs operations.
pub type Result<T> = std::result::Result<T, CrumbsError>;

/// Core error type for crumbs operations.
#[derive(Debug, Error)]
pub enum CrumbsError {
    /// A crumb with this name is already in the store
    #[error("Crumb \"{0}\" already exists")]
    DuplicateName(String),

    /// No crumb with this name
    #[error("Crumb \"{0}\" not found")]
    NotFound(String),

    /// The crumb is in the wrong encryption state for the requested transition
    #[error("{0}")]
    InvalidState(String),

    /// The encryption primitive could not produce a ciphertext
    #[error("Encryption failed: {0}")]
    Encryption(String),

    /// The encryption primitive could not recover the plaintext
    #[error("Decryption failed: {0}")]
    Decryption(String),

    /// Malformed template or bad argument reference
    #[error("Template error: {0}")]
    Template(String),

    /// The backing document is structurally invalid
    #[error("Store is corrupt: {0}")]
    StoreCorrupt(String),

    /// Missing or invalid configuration (e.g. no editor)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Crumb name rejected
    #[error("Invalid crumb name: {0}")]
    InvalidName(String),

    /// Filesystem or process error
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for CrumbsError {
    fn from(err: std::io::Error) -> Self {
        CrumbsError::Io(err.to_string())
    }
}
