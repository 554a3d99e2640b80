// file: src/config/loader.rs
// version: 1.0.0
// guid: 8e4a2d17-c05f-4b39-a6d2-13f9e7b0c584

//! Configuration file loading and environment variable substitution

use super::Config;
use crate::error::{LauncherError, Result};
use regex::Regex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Project-local configuration file, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = ".bugtracker-launcher.toml";

const ENV_APP_DIR: &str = "BUGTRACKER_LAUNCHER_APP_DIR";
const ENV_INTERPRETER: &str = "BUGTRACKER_LAUNCHER_INTERPRETER";
const ENV_SHELL: &str = "BUGTRACKER_LAUNCHER_SHELL";
const ENV_EXIT_POLICY: &str = "BUGTRACKER_LAUNCHER_EXIT_POLICY";

/// Configuration loader with environment variable substitution
pub struct ConfigLoader {
    env_vars: HashMap<String, String>,
}

impl ConfigLoader {
    /// Create a new config loader over the process environment
    pub fn new() -> Self {
        Self {
            env_vars: std::env::vars().collect(),
        }
    }

    /// Create a loader over an explicit environment
    pub fn with_env(env_vars: HashMap<String, String>) -> Self {
        Self { env_vars }
    }

    /// Set environment variable for substitution and overrides
    pub fn set_env_var(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.env_vars.insert(key.into(), value.into());
    }

    /// Load the effective configuration.
    ///
    /// With `explicit` set only that file is read; otherwise the user file
    /// and then the project file are tried. Environment overrides apply last.
    pub async fn load(&self, explicit: Option<&Path>) -> Result<Config> {
        let mut config = Config::default();

        if let Some(path) = explicit {
            info!("Loading configuration from: {}", path.display());
            config = self.load_file(path).await?;
        } else {
            if let Some(user_config) = user_config_path() {
                if user_config.exists() {
                    info!("Loading user configuration from: {}", user_config.display());
                    config = self.load_file(&user_config).await?;
                }
            }

            let project_config = Path::new(PROJECT_CONFIG_FILE);
            if project_config.exists() {
                info!(
                    "Loading project configuration from: {}",
                    project_config.display()
                );
                config = self.load_file(project_config).await?;
            }
        }

        config = self.apply_env_overrides(config)?;
        config.validate()?;

        debug!("Final configuration: {:#?}", config);
        Ok(config)
    }

    /// Load a TOML or YAML configuration file
    pub async fn load_file(&self, path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).await.map_err(|e| {
            LauncherError::config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let expanded = self.expand_env_vars(&content)?;
        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );

        if is_yaml {
            Ok(serde_yaml::from_str(&expanded)?)
        } else {
            toml::from_str(&expanded).map_err(|e| {
                LauncherError::config(format!(
                    "Failed to parse config file {}: {}",
                    path.display(),
                    e
                ))
            })
        }
    }

    /// Expand `${VAR}` placeholders in configuration content
    fn expand_env_vars(&self, content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| LauncherError::config(format!("Invalid regex pattern: {}", e)))?;

        let mut result = content.to_string();
        let mut missing_vars = Vec::new();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];

            if let Some(value) = self.env_vars.get(var_name) {
                result = result.replace(placeholder, value);
            } else if !missing_vars.iter().any(|v| v == var_name) {
                missing_vars.push(var_name.to_string());
            }
        }

        if !missing_vars.is_empty() {
            return Err(LauncherError::config(format!(
                "Missing environment variables: {}",
                missing_vars.join(", ")
            )));
        }

        Ok(result)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&self, mut config: Config) -> Result<Config> {
        if let Some(dir) = self.env_vars.get(ENV_APP_DIR) {
            config.launcher.app_directory = dir.clone();
        }

        if let Some(interpreter) = self.env_vars.get(ENV_INTERPRETER) {
            config.launcher.interpreter = interpreter.clone();
        }

        if let Some(shell) = self.env_vars.get(ENV_SHELL) {
            config.launcher.shell = shell.clone();
        }

        if let Some(policy) = self.env_vars.get(ENV_EXIT_POLICY) {
            config.launcher.exit_policy = policy
                .parse()
                .map_err(|e| LauncherError::config(format!("{}: {}", ENV_EXIT_POLICY, e)))?;
        }

        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the user configuration file path
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bugtracker-launcher").join("config.toml"))
}
