//! External editor capability.

use std::path::Path;
use std::process::Command;

use crate::error::{CrumbsError, Result};

/// Something that lets the user edit a file in place.
pub trait EditorInvoker {
    /// Block until the user is done with `path`.
    ///
    /// Returns `Ok(true)` when the edit should be kept, `Ok(false)` when it
    /// was abandoned (e.g. the editor exited non-zero).
    fn edit(&self, path: &Path) -> Result<bool>;
}

/// Runs a configured editor program, e.g. `vim` or `code --wait`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEditor {
    program: String,
    args: Vec<String>,
}

impl CommandEditor {
    /// Build from an `$EDITOR`-style command line, split on whitespace.
    pub fn from_command_line(command_line: &str) -> Result<Self> {
        let mut words = command_line.split_whitespace().map(str::to_string);
        let program = words.next().ok_or_else(|| {
            CrumbsError::Configuration("Editor command is empty".to_string())
        })?;
        Ok(Self {
            program,
            args: words.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl EditorInvoker for CommandEditor {
    fn edit(&self, path: &Path) -> Result<bool> {
        tracing::debug!(editor = %self.program, "launching editor");
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .status()
            .map_err(|e| {
                CrumbsError::Io(format!("Failed to launch editor {}: {}", self.program, e))
            })?;
        Ok(status.success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_splits_arguments() {
        let editor = CommandEditor::from_command_line("code --wait -n").unwrap();
        assert_eq!(editor.program(), "code");
        assert_eq!(editor.args, vec!["--wait".to_string(), "-n".to_string()]);
    }

    #[test]
    fn test_blank_command_line_is_configuration_error() {
        assert!(matches!(
            CommandEditor::from_command_line("   "),
            Err(CrumbsError::Configuration(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_status_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("buffer");
        std::fs::write(&path, "x").unwrap();

        assert!(CommandEditor::from_command_line("true").unwrap().edit(&path).unwrap());
        assert!(!CommandEditor::from_command_line("false").unwrap().edit(&path).unwrap());
    }

    #[test]
    fn test_missing_program_is_io_error() {
        let editor = CommandEditor::from_command_line("crumbs-no-such-editor-xyz").unwrap();
        assert!(matches!(
            editor.edit(Path::new("whatever")),
            Err(CrumbsError::Io(_))
        ));
    }
}
