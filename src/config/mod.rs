//! Configuration management for ClinicFlow.
//!
//! # Overview
//!
//! ClinicFlow uses a TOML configuration file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `CLINICFLOW_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting, so an empty file is valid
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use clinicflow::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("clinicflow.toml")?;
//! println!("Data directory: {}", config.data.directory);
//! println!("Output directory: {}", config.export.output_directory);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - log level
//! - [`DataConfig`] - source files and the schema of each
//! - [`IngestConfig`] - sentinel values for columns a schema lacks
//! - [`ExportConfig`] - output directory, quoting, queue file, verification
//! - [`LoggingConfig`] - local file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [data]
//! directory = "${CLINIC_DATA_HOME}/csv"
//! patient_layout = "registry"
//!
//! [ingest]
//! default_clinician_id = "C001"
//! default_location = "Main Clinic"
//!
//! [export]
//! output_directory = "output"
//! referral_queue_layout = "extended"
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, parse_config};
pub use schema::{
    supported_layouts, ApplicationConfig, ClinicConfig, DataConfig, ExportConfig, IngestConfig,
    LoggingConfig,
};
