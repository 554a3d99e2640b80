// file: src/main.rs
// version: 1.1.0
// guid: 58c2e0a7-d93b-4f16-a7e4-3b9f01c6d825

//! Bugtracker Launcher - Main entry point

use bugtracker_launcher::{
    cli::{commands::*, Cli, Commands},
    config::ConfigLoader,
    logging::init_logger,
    Result,
};
use clap::Parser;
use tokio::signal;
use tracing::{error, warn};

/// Exit code reported when interrupted with Ctrl+C
const EXIT_INTERRUPTED: i32 = 130;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logger(cli.verbose, cli.quiet, cli.log_format) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    // Set up signal handling for interruption
    let shutdown_signal = async {
        match signal::ctrl_c().await {
            Ok(()) => warn!("Received Ctrl+C, aborting"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    let code = tokio::select! {
        biased;
        _ = shutdown_signal => EXIT_INTERRUPTED,
        result = run(cli) => match result {
            Ok(code) => code,
            Err(e) => {
                error!("{}", e);
                1
            }
        },
    };

    std::process::exit(code);
}

async fn run(cli: Cli) -> Result<i32> {
    let config = ConfigLoader::new().load(cli.config.as_deref()).await?;

    match cli.command {
        Commands::Run {
            dir,
            dispatch,
            command,
        } => run_command(&config, dir, command, dispatch).await,
        Commands::Calib {
            timestamp,
            station,
            debug,
            clear,
            dispatch,
        } => calib_command(&config, timestamp, station, debug, clear, dispatch).await,
        Commands::App {
            script,
            dispatch,
            args,
        } => app_command(&config, script, args, dispatch).await,
        Commands::Check { script, json } => check_command(&config, script, json),
        Commands::ShowConfig => show_config_command(&config),
    }
}
