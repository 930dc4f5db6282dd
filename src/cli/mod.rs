//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for phiscan using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// phiscan - PHI detection for healthcare compliance
#[derive(Parser, Debug)]
#[command(name = "phiscan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (implicit phiscan.toml lookup when omitted)
    #[arg(short, long, env = "PHISCAN_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PHISCAN_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a file (or stdin) for likely PHI
    Scan(commands::scan::ScanArgs),

    /// List the built-in detection rules
    Patterns(commands::patterns::PatternsArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
