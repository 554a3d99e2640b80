// file: src/shell/executor.rs
// version: 1.1.0
// guid: e05c9b3a-61f2-4d87-b4a0-8c3e27d91f56

//! Blocking shell execution

use crate::error::{LauncherError, Result};
use std::process::{Command, Stdio};
use tracing::debug;

/// Trait for handing a command line to a shell
pub trait ShellRunner {
    /// Run `line` to completion and return its exit code.
    ///
    /// `Ok(None)` means the child was terminated by a signal.
    fn run(&mut self, line: &str) -> Result<Option<i32>>;
}

/// Runs lines through `<shell> -c` on the host, inheriting stdio
#[derive(Debug, Clone)]
pub struct SystemShell {
    shell: String,
}

impl SystemShell {
    /// Create a runner for the given shell binary
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }
}

impl Default for SystemShell {
    fn default() -> Self {
        Self::new("sh")
    }
}

impl ShellRunner for SystemShell {
    fn run(&mut self, line: &str) -> Result<Option<i32>> {
        debug!("Executing via {}: {}", self.shell, line);

        let status = Command::new(&self.shell)
            .arg("-c")
            .arg(line)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| {
                LauncherError::execution(format!("Failed to spawn {}: {}", self.shell, e))
            })?;

        debug!("Shell exited with {:?}", status.code());
        Ok(status.code())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_success_exit_code() {
        let mut shell = SystemShell::default();
        assert_eq!(shell.run("true").unwrap(), Some(0));
    }

    #[test]
    fn test_failure_exit_code() {
        let mut shell = SystemShell::default();
        assert_eq!(shell.run("exit 3").unwrap(), Some(3));
    }

    #[test]
    fn test_cd_into_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("marker"), "x").unwrap();

        let mut shell = SystemShell::default();
        let line = format!("cd {}; test -f marker", dir.path().display());
        assert_eq!(shell.run(&line).unwrap(), Some(0));
    }

    #[test]
    fn test_missing_shell_is_execution_error() {
        let mut shell = SystemShell::new("/definitely/not/a/shell");
        let err = shell.run("true").unwrap_err();
        assert!(matches!(err, LauncherError::Execution(_)));
    }
}
