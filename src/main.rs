// phiscan - PHI detection for healthcare compliance
// Licensed under the MIT License

use clap::Parser;
use phiscan::cli::{Cli, Commands};
use phiscan::config::resolve_config;
use phiscan::logging::init_logging;
use std::process;

fn main() {
    // Optional .env support; silently ignored when absent
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Logging config comes from the config file when it exists; the CLI
    // flag wins for the level. Config load errors surface in the command
    // itself, with its exit code.
    let logging_config = resolve_config(cli.config.as_deref())
        .map(|c| c.logging)
        .unwrap_or_default();
    let log_level = cli.log_level.as_deref().unwrap_or("info");
    let _guard = match init_logging(log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "phiscan starting");

    let exit_code = match execute_command(&cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e:#}");
            5 // Fatal error exit code
        }
    };

    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Scan(args) => args.execute(cli.config.as_deref()),
        Commands::Patterns(args) => args.execute(),
        Commands::ValidateConfig(args) => args.execute(cli.config.as_deref()),
        Commands::Init(args) => args.execute(),
    }
}
