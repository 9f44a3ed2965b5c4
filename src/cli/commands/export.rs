//! Export command implementation
//!
//! Loads the configured source files, then writes each store back out in
//! its canonical layout under the output directory.

use crate::core::Clinic;
use crate::domain::EntityKind;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export only this entity kind
    #[arg(short, long)]
    pub kind: Option<EntityKind>,

    /// Skip the reload-and-compare check after writing
    #[arg(long)]
    pub no_verify: bool,

    /// Quote fields containing commas, overriding the configuration
    #[arg(long)]
    pub quote: bool,
}

/// Output file name for `kind`
pub fn export_file_name(kind: EntityKind) -> String {
    format!("{}.csv", kind.plural())
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let Some(mut config) = super::load_config_or_report(config_path) else {
            return Ok(super::EXIT_CONFIG);
        };
        if self.quote {
            config.export.quote_embedded_separators = true;
        }
        let verify = config.export.verify_after_write && !self.no_verify;

        let mut clinic = Clinic::from_config(&config);
        let mut exit_code = 0;

        println!("📤 Export");
        for kind in super::selected_kinds(self.kind) {
            if let Err(e) =
                clinic.load_kind(kind, config.data.path_for(kind), config.data.layout_for(kind))
            {
                crate::log_error_with_context!(&e, "export load");
                println!("  ❌ {}: {}", kind.plural(), e);
                exit_code = super::EXIT_DATA;
                continue;
            }

            let target: PathBuf = config.export.output_path(&export_file_name(kind));
            let written = match clinic.save_kind(kind, &target) {
                Ok(n) => n,
                Err(e) => {
                    crate::log_error_with_context!(&e, "export write");
                    println!("  ❌ {}: {}", kind.plural(), e);
                    exit_code = super::EXIT_DATA;
                    continue;
                }
            };
            println!("  ✅ {:<14} {:>6} written to {}", kind.plural(), written, target.display());

            if verify {
                let report = clinic.verify_kind(kind, &target)?;
                if report.is_success() {
                    println!("     verified, sha256 {}", report.checksum);
                } else {
                    tracing::warn!(kind = %kind, failed = report.failed, "Verification failed");
                    println!("{}", report.format_summary());
                    exit_code = super::EXIT_DATA;
                }
            }
        }

        Ok(exit_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name(EntityKind::Prescription), "prescriptions.csv");
    }
}
