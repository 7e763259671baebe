//! Passphrase sources and validation.

use age::secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::error::{CrumbsError, Result};

/// Minimum passphrase length in characters for new ciphertext.
const MIN_PASSPHRASE_LENGTH: usize = 8;

/// Raised by a [`PassphraseSource`] that cannot supply a passphrase
/// (no TTY, prompt cancelled, confirmation mismatch).
#[derive(Debug, Error)]
#[error("{0}")]
pub struct PassphraseUnavailable(pub String);

/// Where the cipher gets its passphrase from.
///
/// `confirm` is true when the passphrase is about to protect new
/// ciphertext, so interactive sources can ask twice.
pub trait PassphraseSource {
    fn passphrase(&self, confirm: bool) -> std::result::Result<SecretString, PassphraseUnavailable>;
}

/// A fixed passphrase, e.g. from `CRUMBS_PASSPHRASE` or a test.
pub struct StaticPassphrase(SecretString);

impl StaticPassphrase {
    pub fn new(passphrase: impl Into<String>) -> Self {
        Self(SecretString::from(passphrase.into()))
    }
}

impl PassphraseSource for StaticPassphrase {
    fn passphrase(&self, _confirm: bool) -> std::result::Result<SecretString, PassphraseUnavailable> {
        Ok(SecretString::from(self.0.expose_secret().to_string()))
    }
}

/// Validate passphrase meets minimum security requirements.
///
/// # Requirements
///
/// - At least 8 characters long
/// - Not empty or only whitespace
///
/// Returns `CrumbsError::Encryption`, since a weak passphrase is refused at
/// encryption time.
///
/// # Examples
///
/// ```
/// use crumbs_core::crypto::validate_passphrase;
///
/// assert!(validate_passphrase("my-secure-passphrase-123").is_ok());
/// assert!(validate_passphrase("short").is_err());
/// ```
pub fn validate_passphrase(passphrase: &str) -> Result<()> {
    if passphrase.trim().is_empty() {
        return Err(CrumbsError::Encryption(
            "Passphrase cannot be empty".to_string(),
        ));
    }

    if passphrase.chars().count() < MIN_PASSPHRASE_LENGTH {
        return Err(CrumbsError::Encryption(format!(
            "Passphrase must be at least {} characters (got {})",
            MIN_PASSPHRASE_LENGTH,
            passphrase.chars().count()
        )));
    }

    Ok(())
}
