//! Configuration schema types
//!
//! Every section has defaults, so an empty file is a valid configuration.

use crate::core::ingest::layouts::{LayoutVariant, SentinelDefaults, DEFAULT_CLINICIAN_ID, DEFAULT_LOCATION};
use crate::core::referral::QueueLayout;
use crate::domain::EntityKind;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main ClinicFlow configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClinicConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Source data files
    #[serde(default)]
    pub data: DataConfig,

    /// Placeholders for columns a schema lacks
    #[serde(default)]
    pub ingest: IngestConfig,

    /// Output settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ClinicConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid value
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.data.validate()?;
        self.ingest.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Where the delimited source files live and which schema each uses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_directory")]
    pub directory: String,

    #[serde(default = "default_patients_file")]
    pub patients: String,

    #[serde(default = "default_clinicians_file")]
    pub clinicians: String,

    #[serde(default = "default_appointments_file")]
    pub appointments: String,

    #[serde(default = "default_prescriptions_file")]
    pub prescriptions: String,

    #[serde(default = "default_referrals_file")]
    pub referrals: String,

    /// canonical | registry
    #[serde(default)]
    pub patient_layout: LayoutVariant,

    /// canonical | schedule
    #[serde(default)]
    pub appointment_layout: LayoutVariant,

    /// canonical | ledger
    #[serde(default)]
    pub prescription_layout: LayoutVariant,

    /// canonical | registry
    #[serde(default)]
    pub referral_layout: LayoutVariant,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            directory: default_data_directory(),
            patients: default_patients_file(),
            clinicians: default_clinicians_file(),
            appointments: default_appointments_file(),
            prescriptions: default_prescriptions_file(),
            referrals: default_referrals_file(),
            patient_layout: LayoutVariant::Canonical,
            appointment_layout: LayoutVariant::Canonical,
            prescription_layout: LayoutVariant::Canonical,
            referral_layout: LayoutVariant::Canonical,
        }
    }
}

impl DataConfig {
    /// File name configured for `kind`
    pub fn file_for(&self, kind: EntityKind) -> &str {
        match kind {
            EntityKind::Patient => &self.patients,
            EntityKind::Clinician => &self.clinicians,
            EntityKind::Appointment => &self.appointments,
            EntityKind::Prescription => &self.prescriptions,
            EntityKind::Referral => &self.referrals,
        }
    }

    /// Full path of the source file for `kind`
    pub fn path_for(&self, kind: EntityKind) -> PathBuf {
        PathBuf::from(&self.directory).join(self.file_for(kind))
    }

    /// Schema of the source file for `kind`
    pub fn layout_for(&self, kind: EntityKind) -> LayoutVariant {
        match kind {
            EntityKind::Patient => self.patient_layout,
            EntityKind::Clinician => LayoutVariant::Canonical,
            EntityKind::Appointment => self.appointment_layout,
            EntityKind::Prescription => self.prescription_layout,
            EntityKind::Referral => self.referral_layout,
        }
    }

    fn validate(&self) -> Result<(), String> {
        if self.directory.trim().is_empty() {
            return Err("data.directory cannot be empty".to_string());
        }
        for kind in EntityKind::ALL {
            if self.file_for(kind).trim().is_empty() {
                return Err(format!("data.{} cannot be empty", kind.plural()));
            }
            let layout = self.layout_for(kind);
            if !supported_layouts(kind).contains(&layout) {
                return Err(format!(
                    "data.{}_layout '{}' is not available for {}. Must be one of: {}",
                    kind,
                    layout,
                    kind.plural(),
                    supported_layouts(kind)
                        .iter()
                        .map(|l| l.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                ));
            }
        }
        Ok(())
    }
}

/// Schemas the loader can read for `kind`
pub fn supported_layouts(kind: EntityKind) -> &'static [LayoutVariant] {
    match kind {
        EntityKind::Patient | EntityKind::Referral => {
            &[LayoutVariant::Canonical, LayoutVariant::Registry]
        }
        EntityKind::Clinician => &[LayoutVariant::Canonical],
        EntityKind::Appointment => &[LayoutVariant::Canonical, LayoutVariant::Schedule],
        EntityKind::Prescription => &[LayoutVariant::Canonical, LayoutVariant::Ledger],
    }
}

/// Sentinel values for columns a schema does not carry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Prescriber for prescriptions read without a clinician column
    #[serde(default = "default_clinician_id")]
    pub default_clinician_id: String,

    /// Location for appointments read without a location column
    #[serde(default = "default_location")]
    pub default_location: String,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            default_clinician_id: default_clinician_id(),
            default_location: default_location(),
        }
    }
}

impl IngestConfig {
    pub fn sentinel_defaults(&self) -> SentinelDefaults {
        SentinelDefaults {
            clinician_id: self.default_clinician_id.clone(),
            location: self.default_location.clone(),
        }
    }

    fn validate(&self) -> Result<(), String> {
        if self.default_clinician_id.trim().is_empty() {
            return Err("ingest.default_clinician_id cannot be empty".to_string());
        }
        if self.default_location.trim().is_empty() {
            return Err("ingest.default_location cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory for written CSVs, documents and the queue file
    #[serde(default = "default_output_directory")]
    pub output_directory: String,

    /// Quote fields containing a comma or quote when writing
    #[serde(default)]
    pub quote_embedded_separators: bool,

    /// Referral queue file name inside `output_directory`
    #[serde(default = "default_referral_queue_file")]
    pub referral_queue_file: String,

    /// compact | extended
    #[serde(default)]
    pub referral_queue_layout: QueueLayout,

    /// Reload and compare every file after writing it
    #[serde(default = "default_true")]
    pub verify_after_write: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_directory: default_output_directory(),
            quote_embedded_separators: false,
            referral_queue_file: default_referral_queue_file(),
            referral_queue_layout: QueueLayout::default(),
            verify_after_write: true,
        }
    }
}

impl ExportConfig {
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        PathBuf::from(&self.output_directory).join(file_name)
    }

    pub fn referral_queue_path(&self) -> PathBuf {
        self.output_path(&self.referral_queue_file)
    }

    fn validate(&self) -> Result<(), String> {
        if self.output_directory.trim().is_empty() {
            return Err("export.output_directory cannot be empty".to_string());
        }
        if self.referral_queue_file.trim().is_empty() {
            return Err("export.referral_queue_file cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }
        Ok(())
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_data_directory() -> String {
    "data".to_string()
}

fn default_patients_file() -> String {
    "patients.csv".to_string()
}

fn default_clinicians_file() -> String {
    "clinicians.csv".to_string()
}

fn default_appointments_file() -> String {
    "appointments.csv".to_string()
}

fn default_prescriptions_file() -> String {
    "prescriptions.csv".to_string()
}

fn default_referrals_file() -> String {
    "referrals.csv".to_string()
}

fn default_clinician_id() -> String {
    DEFAULT_CLINICIAN_ID.to_string()
}

fn default_location() -> String {
    DEFAULT_LOCATION.to_string()
}

fn default_output_directory() -> String {
    "output".to_string()
}

fn default_referral_queue_file() -> String {
    "referral_queue.txt".to_string()
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
