//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ClinicConfig;
use crate::domain::errors::ClinicError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "CLINICFLOW_";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into ClinicConfig
/// 4. Applies environment variable overrides (CLINICFLOW_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns [`ClinicError::Configuration`] if the file is missing or
/// unreadable, a referenced variable is unset, the TOML is malformed, an
/// override has an unparseable value, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use clinicflow::config::loader::load_config;
///
/// let config = load_config("clinicflow.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ClinicConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ClinicError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ClinicError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let config = parse_config(&contents)?;
    tracing::debug!(path = %path.display(), "Configuration loaded");
    Ok(config)
}

/// Parses configuration text: substitution, overrides and validation
pub fn parse_config(contents: &str) -> Result<ClinicConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: ClinicConfig = toml::from_str(&contents)?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        ClinicError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error naming every referenced variable that is not set
pub fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| ClinicError::Configuration(format!("Invalid placeholder pattern: {e}")))?;
    let mut lines = Vec::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_string());
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    processed_line = processed_line.replace(&format!("${{{}}}", var_name), &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        lines.push(processed_line);
    }

    if !missing_vars.is_empty() {
        return Err(ClinicError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    let mut result = lines.join("\n");
    if input.ends_with('\n') {
        result.push('\n');
    }
    Ok(result)
}

fn env(key: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}{key}")).ok()
}

fn parse_env<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e| {
        ClinicError::Configuration(format!("Invalid value for {ENV_PREFIX}{key}: {e}"))
    })
}

macro_rules! override_string {
    ($target:expr, $key:literal) => {
        if let Some(val) = env($key) {
            $target = val;
        }
    };
}

macro_rules! override_parsed {
    ($target:expr, $key:literal) => {
        if let Some(val) = env($key) {
            $target = parse_env($key, &val)?;
        }
    };
}

/// Applies environment variable overrides using the CLINICFLOW_* prefix
///
/// Environment variables follow the pattern `CLINICFLOW_<SECTION>_<KEY>`,
/// for example `CLINICFLOW_DATA_DIRECTORY` or `CLINICFLOW_EXPORT_VERIFY_AFTER_WRITE`.
pub fn apply_env_overrides(config: &mut ClinicConfig) -> Result<()> {
    override_string!(config.application.log_level, "APPLICATION_LOG_LEVEL");

    override_string!(config.data.directory, "DATA_DIRECTORY");
    override_string!(config.data.patients, "DATA_PATIENTS");
    override_string!(config.data.clinicians, "DATA_CLINICIANS");
    override_string!(config.data.appointments, "DATA_APPOINTMENTS");
    override_string!(config.data.prescriptions, "DATA_PRESCRIPTIONS");
    override_string!(config.data.referrals, "DATA_REFERRALS");
    override_parsed!(config.data.patient_layout, "DATA_PATIENT_LAYOUT");
    override_parsed!(config.data.appointment_layout, "DATA_APPOINTMENT_LAYOUT");
    override_parsed!(config.data.prescription_layout, "DATA_PRESCRIPTION_LAYOUT");
    override_parsed!(config.data.referral_layout, "DATA_REFERRAL_LAYOUT");

    override_string!(config.ingest.default_clinician_id, "INGEST_DEFAULT_CLINICIAN_ID");
    override_string!(config.ingest.default_location, "INGEST_DEFAULT_LOCATION");

    override_string!(config.export.output_directory, "EXPORT_OUTPUT_DIRECTORY");
    override_parsed!(config.export.quote_embedded_separators, "EXPORT_QUOTE_EMBEDDED_SEPARATORS");
    override_string!(config.export.referral_queue_file, "EXPORT_REFERRAL_QUEUE_FILE");
    override_parsed!(config.export.referral_queue_layout, "EXPORT_REFERRAL_QUEUE_LAYOUT");
    override_parsed!(config.export.verify_after_write, "EXPORT_VERIFY_AFTER_WRITE");

    override_parsed!(config.logging.local_enabled, "LOGGING_LOCAL_ENABLED");
    override_string!(config.logging.local_path, "LOGGING_LOCAL_PATH");
    override_string!(config.logging.local_rotation, "LOGGING_LOCAL_ROTATION");

    Ok(())
}
