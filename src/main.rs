//! teams-relay: post a status card to an MS Teams inbound webhook.
//!
//! Entry point for the teams-relay application.

use std::process::ExitCode;
use teams_relay::config::{Cli, Command, ValidatedConfig, write_default_config};

mod app;
mod run;

use app::{exit_code, print_config_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    if let Some(Command::Init { output }) = &cli.command {
        return handle_init(output);
    }

    let config = match ValidatedConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    setup_tracing(config.verbose);
    tracing::info!("{config}");

    run_application(&config)
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> ExitCode {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Sends the configured notification.
///
/// Excluded from coverage - requires async runtime.
#[cfg(not(tarpaulin_include))]
fn run_application(config: &ValidatedConfig) -> ExitCode {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to create Tokio runtime: {e}");
            return exit_code::delivery_failed();
        }
    };

    match runtime.block_on(run::execute(config)) {
        Ok(true) => exit_code::SUCCESS,
        Ok(false) => exit_code::delivery_failed(),
        Err(e) => {
            tracing::error!("Application error: {e}");
            e.exit_code()
        }
    }
}
