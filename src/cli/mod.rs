//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for ClinicFlow using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// ClinicFlow - clinical records from flat files
#[derive(Parser, Debug)]
#[command(name = "clinicflow")]
#[command(version, about, long_about = None)]
#[command(author = "ClinicFlow Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "clinicflow.toml", env = "CLINICFLOW_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "CLINICFLOW_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new configuration file
    Init(commands::init::InitArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Load the configured files and report counts
    Import(commands::import::ImportArgs),

    /// Re-write loaded records as canonical CSVs
    Export(commands::export::ExportArgs),

    /// Submit a referral and write the queue and letter
    Refer(commands::refer::ReferArgs),

    /// Render a referral letter or prescription slip
    Document(commands::document::DocumentArgs),

    /// Compare a written CSV with its source records
    Verify(commands::verify::VerifyArgs),
}

impl Commands {
    /// Runs the command, returning the process exit code
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        match self {
            Commands::Init(args) => args.execute(),
            Commands::ValidateConfig(args) => args.execute(config_path),
            Commands::Import(args) => args.execute(config_path),
            Commands::Export(args) => args.execute(config_path),
            Commands::Refer(args) => args.execute(config_path),
            Commands::Document(args) => args.execute(config_path),
            Commands::Verify(args) => args.execute(config_path),
        }
    }
}
