//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to exit codes and carry an
//! optional hint line, enabling consistent error reporting across the CLI.

use std::fmt;

use crumbs_core::CrumbsError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug, Clone)]
pub enum CliError {
    /// A crumb (or other resource) does not exist
    NotFound { message: String, hint: String },

    /// Missing or unusable configuration (editor, paths)
    Configuration {
        message: String,
        hint: Option<String>,
    },

    /// Any other domain failure
    Failed(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create a Configuration error with message and hint.
    pub fn configuration(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::Configuration {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            CliError::NotFound { message, .. }
            | CliError::Configuration { message, .. }
            | CliError::Failed(message) => message,
        }
    }

    pub fn hint(&self) -> Option<&str> {
        match self {
            CliError::NotFound { hint, .. } => Some(hint),
            CliError::Configuration { hint, .. } => hint.as_deref(),
            CliError::Failed(_) => None,
        }
    }

    /// Get the exit code for this error.
    ///
    /// Every variant exits 1 today; the variants differ in their hints.
    pub fn exit_code(&self) -> i32 {
        exit_codes::FAILURE
    }

    /// Classify an error coming out of a command handler.
    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        if let Some(cli) = err.downcast_ref::<CliError>() {
            return cli.clone();
        }
        if let Some(core) = err.downcast_ref::<CrumbsError>() {
            return CliError::from(core);
        }
        CliError::Failed(format!("{:#}", err))
    }
}

impl From<&CrumbsError> for CliError {
    fn from(err: &CrumbsError) -> Self {
        match err {
            CrumbsError::NotFound(_) => CliError::not_found(
                err.to_string(),
                "Hint: Run `crumbs list` to see stored crumbs.",
            ),
            CrumbsError::Configuration(_) => CliError::configuration(
                err.to_string(),
                "Hint: Set $EDITOR or `ui.editor` in the config file.",
            ),
            _ => CliError::Failed(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_not_found_gets_hint() {
        let err = anyhow::Error::new(CrumbsError::NotFound("x".to_string()));
        let cli = CliError::from_anyhow(&err);
        assert_eq!(cli.message(), "Crumb \"x\" not found");
        assert!(cli.hint().unwrap().contains("crumbs list"));
        assert_eq!(cli.exit_code(), exit_codes::FAILURE);
    }

    #[test]
    fn test_other_core_errors_have_no_hint() {
        let err = anyhow::Error::new(CrumbsError::DuplicateName("x".to_string()));
        let cli = CliError::from_anyhow(&err);
        assert_eq!(cli.message(), "Crumb \"x\" already exists");
        assert!(cli.hint().is_none());
    }

    #[test]
    fn test_context_is_kept_for_foreign_errors() {
        let err = anyhow::anyhow!("disk on fire").context("Failed to read config");
        let cli = CliError::from_anyhow(&err);
        assert_eq!(cli.message(), "Failed to read config: disk on fire");
    }

    #[test]
    fn test_cli_error_passes_through() {
        let err = anyhow::Error::new(CliError::configuration("no editor", "Hint: set one"));
        let cli = CliError::from_anyhow(&err);
        assert_eq!(cli.hint(), Some("Hint: set one"));
    }
}
