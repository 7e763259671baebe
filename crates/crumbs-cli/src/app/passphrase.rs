//! Passphrase source backed by the environment or a TTY prompt.

use std::io::IsTerminal;

use crumbs_core::crypto::{PassphraseSource, PassphraseUnavailable, SecretString};

use crate::helpers::prompt_passphrase;

/// Reads `CRUMBS_PASSPHRASE`, falling back to an interactive prompt.
pub struct PromptPassphrase {
    interactive: bool,
}

impl PromptPassphrase {
    /// Prompting is only allowed when stdin is a terminal.
    pub fn from_env() -> Self {
        Self {
            interactive: std::io::stdin().is_terminal(),
        }
    }
}

impl PassphraseSource for PromptPassphrase {
    fn passphrase(&self, confirm: bool) -> Result<SecretString, PassphraseUnavailable> {
        prompt_passphrase(self.interactive, confirm)
            .map(SecretString::from)
            .map_err(|e| PassphraseUnavailable(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_interactive_source_reports_unavailable() {
        if std::env::var("CRUMBS_PASSPHRASE").is_ok() {
            return;
        }
        let source = PromptPassphrase { interactive: false };
        let err = source.passphrase(true).unwrap_err();
        assert!(err.to_string().contains("CRUMBS_PASSPHRASE"));
    }
}
