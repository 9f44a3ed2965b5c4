// ClinicFlow - clinical record ingestion and referral workflow
// Copyright (c) 2025 ClinicFlow Contributors
// Licensed under the MIT License

use clap::Parser;
use clinicflow::cli::{Cli, Commands};
use clinicflow::config::{load_config, LoggingConfig};
use clinicflow::domain::ClinicError;
use clinicflow::logging::init_logging;
use std::process;

fn main() {
    // A missing .env is not an error
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // File logging follows the configuration when it loads; commands report
    // configuration errors themselves.
    let file_config = match &cli.command {
        Commands::Init(_) => None,
        _ => load_config(&cli.config).ok(),
    };
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| file_config.as_ref().map(|c| c.application.log_level.clone()))
        .unwrap_or_else(|| "info".to_string());
    let logging_config = file_config
        .map(|c| c.logging)
        .unwrap_or_else(LoggingConfig::default);

    let guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "ClinicFlow - clinical record ingestion and referral workflow"
    );

    let exit_code = match cli.command.execute(&cli.config) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e:#}");
            match e.downcast_ref::<ClinicError>() {
                Some(ClinicError::Configuration(_)) => 2,
                Some(_) => 3,
                None => 5,
            }
        }
    };

    // Flush the file writer before exiting
    drop(guard);
    process::exit(exit_code);
}
