// file: src/utils.rs
// version: 1.1.0
// guid: 0a6d3f85-e19c-4b27-9d48-c57b1e02a9f3

//! Utility functions for the bugtracker launcher

use crate::error::{LauncherError, Result};
use std::path::PathBuf;

/// Expand `~` and `$VAR` in a path the way the shell would
pub fn expand_path(path: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(path)
        .map_err(|e| LauncherError::config(format!("Cannot expand {}: {}", path, e)))?;
    Ok(PathBuf::from(expanded.as_ref()))
}

/// True when `value` names a program to look up on `PATH` rather than a path.
///
/// Values starting with `~` or `$` need expanding first and count as paths.
pub fn is_bare_program(value: &str) -> bool {
    !value.contains('/') && !value.starts_with('~') && !value.starts_with('$')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_plain_path() {
        assert_eq!(expand_path("/tmp/app").unwrap(), PathBuf::from("/tmp/app"));
    }

    #[test]
    fn test_expand_home() {
        if let Some(home) = dirs::home_dir() {
            let expanded = expand_path("~/miniconda3/bin/python").unwrap();
            assert_eq!(expanded, home.join("miniconda3/bin/python"));
        }
    }

    #[test]
    fn test_expand_missing_var() {
        let result = expand_path("$BUGTRACKER_LAUNCHER_TEST_UNSET_VAR/apps");
        assert!(result.is_err());
    }

    #[test]
    fn test_is_bare_program() {
        assert!(is_bare_program("python3"));
        assert!(!is_bare_program("~/miniconda3/bin/python"));
        assert!(!is_bare_program("/usr/bin/python"));
        assert!(!is_bare_program("$PYTHON"));
        assert!(!is_bare_program("${CONDA_PREFIX}"));
    }
}
