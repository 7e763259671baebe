//! Application context for the Crumbs CLI.
//!
//! Provides a unified context that combines CLI arguments with
//! lazily-loaded configuration.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use crumbs_core::{AgeCipher, CommandEditor};

use crate::cli::Cli;
use crate::config::{read_config, CrumbsConfig};
use crate::ui::UiContext;

use super::passphrase::PromptPassphrase;
use super::resolver::{resolve_config_path, resolve_editor, resolve_store_path};

/// Application context that bundles CLI args with configuration.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<CrumbsConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&CrumbsConfig> {
        self.config.get_or_try_init(|| {
            let path = resolve_config_path(self.cli)?;
            read_config(&path)
        })
    }

    /// Where the store document lives.
    pub fn store_path(&self) -> anyhow::Result<PathBuf> {
        let path = resolve_store_path(self.cli, self.config()?)?;
        tracing::debug!(path = %path.display(), "resolved store path");
        Ok(path)
    }

    /// The editor for `edit`, failing when none is configured.
    pub fn editor(&self) -> anyhow::Result<CommandEditor> {
        let command_line = resolve_editor(self.config()?)?;
        Ok(CommandEditor::from_command_line(&command_line)?)
    }

    /// The cipher for this invocation. The passphrase is only asked for
    /// once something actually needs to encrypt or decrypt.
    pub fn cipher(&self) -> AgeCipher<PromptPassphrase> {
        AgeCipher::new(PromptPassphrase::from_env())
    }

    /// Build a UI context for output rendering.
    pub fn ui_context(&self, json: bool) -> UiContext {
        UiContext::from_env(json, self.cli.no_color)
    }
}
