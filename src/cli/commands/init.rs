//! Init command implementation
//!
//! Writes a sample configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "clinicflow.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing ClinicFlow configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(super::EXIT_CONFIG);
        }

        match fs::write(&self.output, SAMPLE_CONFIG) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Point [data] at your CSV files and pick each file's layout");
                println!("  2. Validate configuration: clinicflow validate-config");
                println!("  3. Check the files load: clinicflow import");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5)
            }
        }
    }
}

/// Configuration written by `init`
pub const SAMPLE_CONFIG: &str = r#"# ClinicFlow Configuration File
# Values may reference environment variables as ${VAR_NAME}.
# Any key can also be overridden with CLINICFLOW_<SECTION>_<KEY>.

[application]
log_level = "info"  # trace | debug | info | warn | error

[data]
directory = "data"
patients = "patients.csv"
clinicians = "clinicians.csv"
appointments = "appointments.csv"
prescriptions = "prescriptions.csv"
referrals = "referrals.csv"
patient_layout = "canonical"       # canonical | registry
appointment_layout = "canonical"   # canonical | schedule
prescription_layout = "canonical"  # canonical | ledger
referral_layout = "canonical"      # canonical | registry

[ingest]
# Used when a file has no column for the value
default_clinician_id = "C001"
default_location = "Main Clinic"

[export]
output_directory = "output"
# Quote fields containing commas so written files read back unchanged
quote_embedded_separators = false
referral_queue_file = "referral_queue.txt"
referral_queue_layout = "extended"  # compact | extended
verify_after_write = true

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"  # daily | hourly | never
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use tempfile::TempDir;

    #[test]
    fn test_sample_config_is_valid() {
        let config = parse_config(SAMPLE_CONFIG).unwrap();
        assert_eq!(config, crate::config::ClinicConfig::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("clinicflow.toml");
        fs::write(&output, "existing").unwrap();

        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            force: false,
        };
        assert_eq!(args.execute().unwrap(), 2);
        assert_eq!(fs::read_to_string(&output).unwrap(), "existing");
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("clinicflow.toml");
        fs::write(&output, "existing").unwrap();

        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            force: true,
        };
        assert_eq!(args.execute().unwrap(), 0);
        assert!(fs::read_to_string(&output).unwrap().contains("[export]"));
    }
}
