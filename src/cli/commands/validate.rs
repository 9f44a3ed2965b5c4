//! Validate config command implementation

use crate::domain::EntityKind;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates before returning
        let Some(config) = super::load_config_or_report(config_path) else {
            return Ok(super::EXIT_CONFIG);
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Data Directory: {}", config.data.directory);
        for kind in EntityKind::ALL {
            let path = config.data.path_for(kind);
            let marker = if path.exists() { "" } else { "  (missing)" };
            println!(
                "    {:<14} {} [{}]{}",
                kind.plural(),
                path.display(),
                config.data.layout_for(kind),
                marker
            );
        }
        println!(
            "  Sentinels: clinician {}, location {}",
            config.ingest.default_clinician_id, config.ingest.default_location
        );
        println!("  Output Directory: {}", config.export.output_directory);
        println!("  Quote Separators: {}", config.export.quote_embedded_separators);
        println!(
            "  Referral Queue: {} ({})",
            config.export.referral_queue_path().display(),
            config.export.referral_queue_layout
        );
        println!("  Verify After Write: {}", config.export.verify_after_write);
        println!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                format!("{} ({})", config.logging.local_path, config.logging.local_rotation)
            } else {
                "disabled".to_string()
            }
        );
        println!();

        Ok(0)
    }
}
