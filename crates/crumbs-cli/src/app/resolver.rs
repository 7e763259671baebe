//! Path and editor resolution.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{default_config_path, default_store_path, expand_tilde, CrumbsConfig};
use crate::errors::CliError;

/// Resolve the config file path: `--config`/`CRUMBS_CONFIG`, else XDG.
pub fn resolve_config_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(value) = cli.config.as_deref() {
        if !value.trim().is_empty() {
            return expand_tilde(value);
        }
    }
    default_config_path()
}

/// Resolve the store path: `--store`/`CRUMBS_STORE`, then config, then
/// `~/.crumbs.yaml`.
pub fn resolve_store_path(cli: &Cli, config: &CrumbsConfig) -> anyhow::Result<PathBuf> {
    match pick_store(cli.store.as_deref(), config.store.path.as_deref()) {
        Some(value) => expand_tilde(value),
        None => default_store_path(),
    }
}

/// First non-blank of the command-line store and config `store.path`.
pub fn pick_store<'a>(given: Option<&'a str>, configured: Option<&'a str>) -> Option<&'a str> {
    given
        .into_iter()
        .chain(configured)
        .find(|value| !value.trim().is_empty())
}

/// First non-blank of config `ui.editor`, `$VISUAL`, `$EDITOR`.
pub fn pick_editor(
    configured: Option<&str>,
    visual: Option<String>,
    editor: Option<String>,
) -> Option<String> {
    configured
        .map(str::to_string)
        .into_iter()
        .chain(visual)
        .chain(editor)
        .find(|value| !value.trim().is_empty())
}

/// The editor command line to use for `edit`.
pub fn resolve_editor(config: &CrumbsConfig) -> Result<String, CliError> {
    pick_editor(
        config.ui.editor.as_deref(),
        std::env::var("VISUAL").ok(),
        std::env::var("EDITOR").ok(),
    )
    .ok_or_else(|| {
        CliError::configuration(
            "No editor configured",
            "Hint: Set $EDITOR or `ui.editor` in the config file.",
        )
    })
}
