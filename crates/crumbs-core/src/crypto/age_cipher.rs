//! Age passphrase encryption with ASCII armor.
//!
//! Note: Age uses scrypt internally for passphrase-based encryption, so a
//! single encrypt or decrypt deliberately takes around a second.

use std::io::{Read, Write};
use std::iter;

use age::armor::{ArmoredReader, ArmoredWriter, Format};
use age::secrecy::{ExposeSecret, SecretString};
use once_cell::unsync::OnceCell;

use super::passphrase::{validate_passphrase, PassphraseSource, PassphraseUnavailable};
use super::Cipher;
use crate::error::{CrumbsError, Result};

/// Age-backed [`Cipher`].
///
/// The passphrase is requested from the source lazily, at most once per
/// cipher, so commands that never touch ciphertext never prompt.
pub struct AgeCipher<S> {
    source: S,
    passphrase: OnceCell<SecretString>,
}

impl<S: PassphraseSource> AgeCipher<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            passphrase: OnceCell::new(),
        }
    }

    fn passphrase(&self, confirm: bool) -> std::result::Result<&SecretString, PassphraseUnavailable> {
        self.passphrase
            .get_or_try_init(|| self.source.passphrase(confirm))
    }
}

impl<S: PassphraseSource> Cipher for AgeCipher<S> {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        let passphrase = self
            .passphrase(true)
            .map_err(|e| CrumbsError::Encryption(e.to_string()))?;
        validate_passphrase(passphrase.expose_secret())?;

        let encryptor = age::Encryptor::with_user_passphrase(SecretString::from(
            passphrase.expose_secret().to_string(),
        ));

        let mut encrypted = Vec::new();
        {
            let armor = ArmoredWriter::wrap_output(&mut encrypted, Format::AsciiArmor)
                .map_err(|e| CrumbsError::Encryption(format!("Failed to create armor: {}", e)))?;
            let mut writer = encryptor
                .wrap_output(armor)
                .map_err(|e| CrumbsError::Encryption(format!("Failed to create encryptor: {}", e)))?;
            writer
                .write_all(plaintext.as_bytes())
                .map_err(|e| CrumbsError::Encryption(format!("Encryption write failed: {}", e)))?;
            writer
                .finish()
                .and_then(|armor| armor.finish())
                .map_err(|e| CrumbsError::Encryption(format!("Encryption finish failed: {}", e)))?;
        }

        String::from_utf8(encrypted)
            .map_err(|e| CrumbsError::Encryption(format!("Armored output is not UTF-8: {}", e)))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        let decryptor = age::Decryptor::new(ArmoredReader::new(ciphertext.as_bytes()))
            .map_err(|e| CrumbsError::Decryption(format!("Not a valid Age blob: {}", e)))?;

        let passphrase = self
            .passphrase(false)
            .map_err(|e| CrumbsError::Decryption(e.to_string()))?;
        let identity = age::scrypt::Identity::new(SecretString::from(
            passphrase.expose_secret().to_string(),
        ));

        let mut reader = decryptor
            .decrypt(iter::once(&identity as &dyn age::Identity))
            .map_err(|e| match e {
                age::DecryptError::NoMatchingKeys
                | age::DecryptError::DecryptionFailed
                | age::DecryptError::KeyDecryptionFailed => {
                    CrumbsError::Decryption("Incorrect passphrase".to_string())
                }
                _ => CrumbsError::Decryption(e.to_string()),
            })?;

        let mut decrypted = Vec::new();
        reader
            .read_to_end(&mut decrypted)
            .map_err(|e| CrumbsError::Decryption(format!("Failed to read decrypted data: {}", e)))?;

        String::from_utf8(decrypted)
            .map_err(|e| CrumbsError::Decryption(format!("Plaintext is not UTF-8: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::crypto::StaticPassphrase;

    const PASSPHRASE: &str = "test-passphrase-secure-123";

    /// Counts how often the cipher asks for a passphrase.
    struct CountingSource<'a> {
        calls: &'a Cell<usize>,
    }

    impl PassphraseSource for CountingSource<'_> {
        fn passphrase(
            &self,
            _confirm: bool,
        ) -> std::result::Result<SecretString, PassphraseUnavailable> {
            self.calls.set(self.calls.get() + 1);
            Ok(SecretString::from(PASSPHRASE.to_string()))
        }
    }

    struct NoPassphrase;

    impl PassphraseSource for NoPassphrase {
        fn passphrase(
            &self,
            _confirm: bool,
        ) -> std::result::Result<SecretString, PassphraseUnavailable> {
            Err(PassphraseUnavailable("No passphrase available".to_string()))
        }
    }

    #[test]
    fn test_encrypt_decrypt_round_trip() {
        let cipher = AgeCipher::new(StaticPassphrase::new(PASSPHRASE));
        let plaintext = "ssh -L 5432:localhost:5432 {{args[0]}}";

        let encrypted = cipher.encrypt(plaintext).unwrap();
        assert!(encrypted.starts_with("-----BEGIN AGE ENCRYPTED FILE-----"));
        assert!(!encrypted.contains("5432"));

        let decrypted = cipher.decrypt(&encrypted).unwrap();
        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn test_wrong_passphrase_fails_decryption() {
        let encrypted = AgeCipher::new(StaticPassphrase::new(PASSPHRASE))
            .encrypt("secret")
            .unwrap();

        let other = AgeCipher::new(StaticPassphrase::new("wrong-passphrase-456"));
        let result = other.decrypt(&encrypted);
        assert!(matches!(result, Err(CrumbsError::Decryption(_))));
    }

    #[test]
    fn test_garbage_blob_fails_before_prompting() {
        let calls = Cell::new(0);
        let cipher = AgeCipher::new(CountingSource { calls: &calls });

        let result = cipher.decrypt("echo not really ciphertext");
        assert!(matches!(result, Err(CrumbsError::Decryption(_))));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_passphrase_requested_once() {
        let calls = Cell::new(0);
        let cipher = AgeCipher::new(CountingSource { calls: &calls });

        let encrypted = cipher.encrypt("one").unwrap();
        cipher.decrypt(&encrypted).unwrap();
        cipher.encrypt("two").unwrap();

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_missing_passphrase_maps_to_operation_error() {
        let cipher = AgeCipher::new(NoPassphrase);
        assert!(matches!(
            cipher.encrypt("x"),
            Err(CrumbsError::Encryption(_))
        ));

        let encrypted = AgeCipher::new(StaticPassphrase::new(PASSPHRASE))
            .encrypt("x")
            .unwrap();
        assert!(matches!(
            cipher.decrypt(&encrypted),
            Err(CrumbsError::Decryption(_))
        ));
    }

    #[test]
    fn test_short_passphrase_refused_for_encryption() {
        let cipher = AgeCipher::new(StaticPassphrase::new("short"));
        assert!(matches!(
            cipher.encrypt("x"),
            Err(CrumbsError::Encryption(_))
        ));
    }
}
