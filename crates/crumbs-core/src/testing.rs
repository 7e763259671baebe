//! Fakes shared by unit tests.

use crate::crypto::Cipher;
use crate::error::{CrumbsError, Result};

/// Reversible stand-in for the real cipher so tests stay fast.
pub struct ReverseCipher {
    pub fail: bool,
}

impl Cipher for ReverseCipher {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        if self.fail {
            return Err(CrumbsError::Encryption("primitive failed".to_string()));
        }
        Ok(format!("enc:{}", plaintext.chars().rev().collect::<String>()))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        if self.fail {
            return Err(CrumbsError::Decryption("primitive failed".to_string()));
        }
        ciphertext
            .strip_prefix("enc:")
            .map(|s| s.chars().rev().collect())
            .ok_or_else(|| CrumbsError::Decryption("corrupt blob".to_string()))
    }
}

pub const OK: ReverseCipher = ReverseCipher { fail: false };
pub const BROKEN: ReverseCipher = ReverseCipher { fail: true };

/// Decrypts like [`OK`] but refuses to produce new ciphertext.
pub struct DecryptOnly;

impl Cipher for DecryptOnly {
    fn encrypt(&self, _plaintext: &str) -> Result<String> {
        Err(CrumbsError::Encryption("primitive failed".to_string()))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        OK.decrypt(ciphertext)
    }
}
