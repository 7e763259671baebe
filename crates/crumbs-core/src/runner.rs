//! Execution of rendered command lines.

use std::process::{Command, ExitStatus};

use crate::error::{CrumbsError, Result};

/// Runs a rendered command line and reports its exit code.
pub trait CommandRunner {
    fn run(&self, command_line: &str) -> Result<i32>;
}

/// Hands the command line to `sh -c`, inheriting stdio.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: String,
}

impl ShellRunner {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new("sh")
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command_line: &str) -> Result<i32> {
        tracing::debug!(shell = %self.shell, "executing rendered command");
        let status = Command::new(&self.shell)
            .arg("-c")
            .arg(command_line)
            .status()
            .map_err(|e| CrumbsError::Io(format!("Failed to launch {}: {}", self.shell, e)))?;
        Ok(exit_code(status))
    }
}

/// Map a child's status to our own exit code, shell style.
///
/// A child killed by a signal reports `128 + signal`.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}
