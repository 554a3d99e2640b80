// file: src/config/mod.rs
// version: 1.0.0
// guid: 61f7b0c4-d29e-4a53-8e16-9b3a0d72e5c8

//! Configuration module for the bugtracker launcher
//!
//! Holds the launcher and calibration settings and their defaults. Loading
//! from files and the environment lives in [`loader`].

pub mod loader;

pub use loader::ConfigLoader;

use crate::error::{LauncherError, Result};
use crate::shell::{ExitPolicy, DEFAULT_STATUS_MESSAGE};
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub launcher: LauncherConfig,
    pub calib: CalibConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    pub app_directory: String,
    pub interpreter: String,
    pub shell: String,
    pub status_message: String,
    pub exit_policy: ExitPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibConfig {
    pub script: String,
    pub stations: Vec<String>,
    pub default_timestamp: String,
    pub default_station: String,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            app_directory: "/home/spruce/repos/bugtracker/apps/".to_string(),
            interpreter: "~/miniconda3/envs/bugtracker/bin/python".to_string(),
            shell: "sh".to_string(),
            status_message: DEFAULT_STATUS_MESSAGE.to_string(),
            exit_policy: ExitPolicy::AlwaysSucceed,
        }
    }
}

impl Default for CalibConfig {
    fn default() -> Self {
        Self {
            script: "calib.py".to_string(),
            stations: vec!["xam".to_string(), "wgj".to_string()],
            default_timestamp: "201806121500".to_string(),
            default_station: "xam".to_string(),
        }
    }
}

impl Config {
    /// Check required fields are present and the calibration defaults are usable
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("launcher.app_directory", &self.launcher.app_directory),
            ("launcher.interpreter", &self.launcher.interpreter),
            ("launcher.shell", &self.launcher.shell),
            ("calib.script", &self.calib.script),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(LauncherError::config(format!("{} must not be empty", key)));
            }
        }

        if self.calib.stations.is_empty() {
            return Err(LauncherError::config("calib.stations must not be empty"));
        }

        crate::apps::calib::validate_station(&self.calib.default_station, &self.calib.stations)
            .map_err(|e| LauncherError::config(format!("calib.default_station: {}", e)))?;

        Ok(())
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.launcher.shell, "sh");
        assert_eq!(config.launcher.exit_policy, ExitPolicy::AlwaysSucceed);
        assert_eq!(config.calib.script, "calib.py");
    }

    #[test]
    fn test_empty_interpreter_rejected() {
        let mut config = Config::default();
        config.launcher.interpreter = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("launcher.interpreter"));
    }

    #[test]
    fn test_default_station_must_be_known() {
        let mut config = Config::default();
        config.calib.default_station = "zzz".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_output_round_trips() {
        let config = Config::default();
        let text = config.to_toml().unwrap();
        assert!(text.contains("exit_policy = \"always-succeed\""));
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
