// file: src/cli/args.rs
// version: 1.1.0
// guid: a7c3e5f1-9d04-4b28-8f61-e2b0d94c7a35

//! Command line argument definitions

use crate::logging::LogFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bugtracker-launcher")]
#[command(about = "Run bugtracker radar scripts through the host shell")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        short,
        long,
        global = true,
        env = "BUGTRACKER_LAUNCHER_CONFIG",
        help = "Configuration file (TOML or YAML)"
    )]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(long, global = true, value_enum, default_value = "compact")]
    pub log_format: LogFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run an arbitrary command from a directory: `cd DIR; COMMAND`
    Run {
        #[arg(short, long)]
        dir: String,

        #[command(flatten)]
        dispatch: DispatchArgs,

        #[arg(
            required = true,
            trailing_var_arg = true,
            allow_hyphen_values = true,
            help = "Command words, joined with spaces"
        )]
        command: Vec<String>,
    },

    /// Run the calibration script for a timestamp and station
    Calib {
        #[arg(help = "Data timestamp YYYYmmddHHMM")]
        timestamp: Option<String>,

        #[arg(help = "3 letter station code")]
        station: Option<String>,

        #[arg(short, long, help = "Ask the script for debug plotting")]
        debug: bool,

        #[arg(long, help = "Ask the script to clear its cache first")]
        clear: bool,

        #[command(flatten)]
        dispatch: DispatchArgs,
    },

    /// Run any script in the app directory with the configured interpreter
    App {
        script: String,

        #[command(flatten)]
        dispatch: DispatchArgs,

        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Check that the app directory, interpreter, script and shell exist
    Check {
        #[arg(short, long, help = "Script to look for (defaults to the calibration script)")]
        script: Option<String>,

        #[arg(long, help = "Print the check results as JSON")]
        json: bool,
    },

    /// Print the effective configuration as TOML
    ShowConfig,
}

/// Options shared by every subcommand that dispatches a shell command
#[derive(Args, Debug, Clone, Default)]
pub struct DispatchArgs {
    #[arg(long, help = "Show the command without running it")]
    pub dry_run: bool,

    #[arg(long, help = "Report the child's exit status instead of always succeeding")]
    pub strict: bool,

    #[arg(long, help = "Print a JSON dispatch report after the command exits")]
    pub json: bool,

    #[arg(long, help = "Shell used to run the command")]
    pub shell: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run_with_trailing_command() {
        let cli = Cli::try_parse_from([
            "bugtracker-launcher",
            "run",
            "--dir",
            "/tmp/app",
            "--strict",
            "--",
            "echo",
            "-n",
            "hi",
        ])
        .unwrap();

        match cli.command {
            Commands::Run { dir, dispatch, command } => {
                assert_eq!(dir, "/tmp/app");
                assert!(dispatch.strict);
                assert_eq!(command, vec!["echo", "-n", "hi"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_calib_defaults() {
        let cli = Cli::try_parse_from(["bugtracker-launcher", "calib", "--dry-run"]).unwrap();
        match cli.command {
            Commands::Calib {
                timestamp,
                station,
                debug,
                dispatch,
                ..
            } => {
                assert!(timestamp.is_none());
                assert!(station.is_none());
                assert!(!debug);
                assert!(dispatch.dry_run);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
