//! Symmetric encryption of crumb contents.
//!
//! Crumbs treat encryption as an opaque capability behind the [`Cipher`]
//! trait. The production implementation, [`AgeCipher`], uses Age's
//! passphrase (scrypt) recipients and ASCII armor so that ciphertext can be
//! stored as a plain string in the YAML document.
//!
//! ## Threat Model
//!
//! We defend against:
//! - Someone reading the crumbs file at rest
//!
//! We do NOT defend against:
//! - Compromised OS / keylogger
//! - A process environment that leaks `CRUMBS_PASSPHRASE`

mod age_cipher;
pub mod passphrase;

pub use age::secrecy::SecretString;
pub use age_cipher::AgeCipher;
pub use passphrase::{validate_passphrase, PassphraseSource, PassphraseUnavailable, StaticPassphrase};

use crate::error::Result;

/// Encrypt and decrypt crumb contents.
///
/// Implementations must report failures as `CrumbsError::Encryption` and
/// `CrumbsError::Decryption` respectively, never panic.
pub trait Cipher {
    /// Produce an opaque ciphertext blob for `plaintext`.
    fn encrypt(&self, plaintext: &str) -> Result<String>;

    /// Recover the plaintext from a blob produced by [`Cipher::encrypt`].
    fn decrypt(&self, ciphertext: &str) -> Result<String>;
}

impl<C: Cipher + ?Sized> Cipher for &C {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        (**self).encrypt(plaintext)
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        (**self).decrypt(ciphertext)
    }
}
