// file: src/apps/preflight.rs
// version: 1.1.0
// guid: c3e9a150-7b2d-4e86-a1f4-38d06b9e5c72

//! Preflight checks for the pieces a dispatch depends on

use crate::config::Config;
use crate::utils::{expand_path, is_bare_program};
use serde::Serialize;
use tracing::debug;

/// Result of a single preflight check
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub ok: bool,
    pub detail: String,
}

impl CheckResult {
    fn pass(name: &str, detail: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            ok: true,
            detail: detail.into(),
        }
    }

    fn fail(name: &str, detail: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            ok: false,
            detail: detail.into(),
        }
    }
}

/// Checks app directory, interpreter, script and shell without running anything
pub struct Preflight<'a> {
    config: &'a Config,
}

impl<'a> Preflight<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Run every check for `script`
    pub fn run(&self, script: &str) -> Vec<CheckResult> {
        vec![
            self.check_app_directory(),
            self.check_interpreter(),
            self.check_script(script),
            self.check_shell(),
        ]
    }

    fn check_app_directory(&self) -> CheckResult {
        let raw = &self.config.launcher.app_directory;
        match expand_path(raw) {
            Ok(dir) if dir.is_dir() => CheckResult::pass("app_directory", dir.display().to_string()),
            Ok(dir) => CheckResult::fail(
                "app_directory",
                format!("{} is not a directory", dir.display()),
            ),
            Err(e) => CheckResult::fail("app_directory", e.to_string()),
        }
    }

    fn check_interpreter(&self) -> CheckResult {
        resolve_program("interpreter", &self.config.launcher.interpreter)
    }

    fn check_script(&self, script: &str) -> CheckResult {
        let dir = match expand_path(&self.config.launcher.app_directory) {
            Ok(dir) => dir,
            Err(e) => return CheckResult::fail("script", e.to_string()),
        };

        let path = dir.join(script);
        debug!("Looking for script at {}", path.display());
        if path.is_file() {
            CheckResult::pass("script", path.display().to_string())
        } else {
            CheckResult::fail("script", format!("{} not found", path.display()))
        }
    }

    fn check_shell(&self) -> CheckResult {
        resolve_program("shell", &self.config.launcher.shell)
    }
}

fn resolve_program(name: &str, program: &str) -> CheckResult {
    if is_bare_program(program) {
        return match which::which(program) {
            Ok(path) => CheckResult::pass(name, path.display().to_string()),
            Err(_) => CheckResult::fail(name, format!("{} not found on PATH", program)),
        };
    }

    match expand_path(program) {
        Ok(path) if path.is_file() => CheckResult::pass(name, path.display().to_string()),
        Ok(path) => CheckResult::fail(name, format!("{} does not exist", path.display())),
        Err(e) => CheckResult::fail(name, e.to_string()),
    }
}
