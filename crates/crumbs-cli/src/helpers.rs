//! Input helper functions for the CLI.

use dialoguer::Password;

use crate::constants::PASSPHRASE_ENV;

/// Prompt for passphrase, or read from CRUMBS_PASSPHRASE env var.
///
/// With `confirm`, the prompt asks twice; used before creating new
/// ciphertext.
pub fn prompt_passphrase(interactive: bool, confirm: bool) -> anyhow::Result<String> {
    if let Some(value) = env_passphrase() {
        return Ok(value);
    }
    if !interactive {
        return Err(anyhow::anyhow!(
            "No passphrase provided and no TTY available. Set {}.",
            PASSPHRASE_ENV
        ));
    }
    let mut prompt = Password::new().with_prompt("Passphrase");
    if confirm {
        prompt = prompt.with_confirmation("Confirm passphrase", "Passphrases do not match");
    }
    prompt
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read passphrase: {}", e))
}

fn env_passphrase() -> Option<String> {
    std::env::var(PASSPHRASE_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
}

/// Join `insert` words back into one command line.
pub fn join_cmdline(words: &[String]) -> String {
    words.join(" ")
}
