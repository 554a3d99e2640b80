// file: src/cli/commands.rs
// version: 1.1.0
// guid: 36d1f9b8-e74a-4c05-b2a9-05e8c3d7f461

//! Command implementations for the CLI
//!
//! Each command returns the process exit code on success.

use super::args::DispatchArgs;
use crate::{
    apps::{CalibRequest, Preflight},
    config::Config,
    error::LauncherError,
    shell::{Dispatcher, ExitPolicy, ScriptInvocation, ShellCommand, SystemShell},
    Result,
};
use std::io::Write;
use tracing::{error, info};

/// Run an arbitrary command from `dir`
pub async fn run_command(
    config: &Config,
    dir: String,
    command: Vec<String>,
    opts: DispatchArgs,
) -> Result<i32> {
    let command = ShellCommand::new(dir, command.join(" "));
    dispatch(config, command, &opts).await
}

/// Run the calibration script
pub async fn calib_command(
    config: &Config,
    timestamp: Option<String>,
    station: Option<String>,
    debug: bool,
    clear: bool,
    opts: DispatchArgs,
) -> Result<i32> {
    let timestamp = timestamp.unwrap_or_else(|| config.calib.default_timestamp.clone());
    let station = station.unwrap_or_else(|| config.calib.default_station.clone());

    let request = CalibRequest::new(&timestamp, &station, &config.calib.stations)?
        .with_debug(debug)
        .with_clear(clear);

    info!(
        "Calibration for station {} at {}",
        request.station, request.timestamp
    );

    let command = request
        .to_invocation(&config.launcher.interpreter, &config.calib.script)
        .into_shell_command(config.launcher.app_directory.clone());
    dispatch(config, command, &opts).await
}

/// Run any script from the app directory
pub async fn app_command(
    config: &Config,
    script: String,
    args: Vec<String>,
    opts: DispatchArgs,
) -> Result<i32> {
    if script.trim().is_empty() {
        return Err(LauncherError::validation("Script name must not be empty"));
    }

    let command = ScriptInvocation::new(config.launcher.interpreter.clone(), script)
        .args(args)
        .into_shell_command(config.launcher.app_directory.clone());
    dispatch(config, command, &opts).await
}

/// Report whether everything a dispatch needs is in place
pub fn check_command(config: &Config, script: Option<String>, json: bool) -> Result<i32> {
    let script = script.unwrap_or_else(|| config.calib.script.clone());
    let results = Preflight::new(config).run(&script);

    let mut stdout = std::io::stdout().lock();
    if json {
        writeln!(stdout, "{}", serde_json::to_string_pretty(&results)?)?;
    } else {
        for result in &results {
            let mark = if result.ok { "ok" } else { "missing" };
            writeln!(stdout, "{:<14} {:<8} {}", result.name, mark, result.detail)?;
        }
    }

    let failed = results.iter().filter(|r| !r.ok).count();
    if failed == 0 {
        info!("All preflight checks passed");
        Ok(0)
    } else {
        error!("{} preflight check(s) failed", failed);
        Ok(1)
    }
}

/// Print the effective configuration
pub fn show_config_command(config: &Config) -> Result<i32> {
    print!("{}", config.to_toml()?);
    Ok(0)
}

/// Dispatch `command` on a blocking thread and return the reported exit code
async fn dispatch(config: &Config, command: ShellCommand, opts: &DispatchArgs) -> Result<i32> {
    let shell = opts
        .shell
        .clone()
        .unwrap_or_else(|| config.launcher.shell.clone());
    let policy = if opts.strict {
        ExitPolicy::Propagate
    } else {
        config.launcher.exit_policy
    };

    let mut dispatcher = Dispatcher::new(SystemShell::new(shell))
        .with_policy(policy)
        .with_status_message(config.launcher.status_message.clone())
        .with_dry_run(opts.dry_run);

    let report = tokio::task::spawn_blocking(move || {
        let mut stdout = std::io::stdout().lock();
        dispatcher.dispatch(&command, &mut stdout)
    })
    .await
    .map_err(|e| LauncherError::execution(format!("Dispatch task failed: {}", e)))??;

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(report.exit_code)
}
