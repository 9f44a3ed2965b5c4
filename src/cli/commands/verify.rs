//! Verify command implementation
//!
//! Compares a canonical CSV with the records in the configured source file
//! for the same kind.

use crate::core::Clinic;
use crate::domain::EntityKind;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the verify command
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Entity kind in the file
    #[arg(short, long)]
    pub kind: EntityKind,

    /// Canonical CSV to check
    #[arg(short, long)]
    pub file: PathBuf,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl VerifyArgs {
    /// Execute the verify command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let Some(config) = super::load_config_or_report(config_path) else {
            return Ok(super::EXIT_CONFIG);
        };

        let mut clinic = Clinic::from_config(&config);
        clinic.load_kind(
            self.kind,
            config.data.path_for(self.kind),
            config.data.layout_for(self.kind),
        )?;

        let report = clinic.verify_kind(self.kind, &self.file)?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("{}", report.format_summary());
        }

        Ok(if report.is_success() { 0 } else { super::EXIT_DATA })
    }
}
