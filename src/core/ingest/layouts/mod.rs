//! Row layouts: column schemas and the mappers that turn a split row into a record
//!
//! Each layout names a file schema. [`RowLayout::map_row`] is a pure function
//! from fields to a record; it returns `None` when the row has fewer than
//! [`RowLayout::MIN_COLUMNS`] fields, and the loader counts that row as
//! skipped. Every value is read with quotes stripped and whitespace trimmed.
//!
//! When a schema has no column for a field the record needs, the mapper fills
//! in a sentinel from [`SentinelDefaults`] instead of leaving it blank.
//!
//! Only the canonical layouts implement [`CanonicalLayout`] and can be written
//! back out.

pub mod appointment;
pub mod clinician;
pub mod patient;
pub mod prescription;
pub mod referral;

use crate::core::ingest::splitter::clean_field;
use crate::domain::errors::ClinicError;
use crate::domain::Record;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use appointment::{AppointmentRow, AppointmentScheduleRow};
pub use clinician::ClinicianRow;
pub use patient::{PatientRegistryRow, PatientRow};
pub use prescription::{PrescriptionLedgerRow, PrescriptionRow};
pub use referral::{ReferralRegistryRow, ReferralRow};

/// Clinician id used when a prescription schema has no clinician column
pub const DEFAULT_CLINICIAN_ID: &str = "C001";

/// Location used when an appointment schema has no location column
pub const DEFAULT_LOCATION: &str = "Main Clinic";

/// Placeholder values for columns a schema does not carry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentinelDefaults {
    pub clinician_id: String,
    pub location: String,
}

impl Default for SentinelDefaults {
    fn default() -> Self {
        Self {
            clinician_id: DEFAULT_CLINICIAN_ID.to_string(),
            location: DEFAULT_LOCATION.to_string(),
        }
    }
}

/// A file schema for one entity kind
pub trait RowLayout {
    /// Record produced by this layout
    type Record: Record;

    /// Layout name used in logs and configuration
    const NAME: &'static str;

    /// Rows with fewer fields are skipped
    const MIN_COLUMNS: usize;

    /// Header line written for this schema
    const HEADER: &'static str;

    /// Maps one split row to a record, or `None` to skip it
    fn map_row(fields: &[String], defaults: &SentinelDefaults) -> Option<Self::Record>;
}

/// A layout that can also be written
pub trait CanonicalLayout: RowLayout {
    /// Field values in header order
    fn to_row(record: &Self::Record) -> Vec<String>;
}

/// Cleaned read access to a split row
pub(crate) struct Row<'a> {
    fields: &'a [String],
}

impl<'a> Row<'a> {
    /// Wraps `fields` if there are at least `min` of them
    pub(crate) fn with_min(fields: &'a [String], min: usize) -> Option<Self> {
        (fields.len() >= min).then_some(Self { fields })
    }

    /// Cleaned value at `index`, empty when the column is absent
    pub(crate) fn get(&self, index: usize) -> String {
        self.fields
            .get(index)
            .map(|raw| clean_field(raw))
            .unwrap_or_default()
    }

    /// Cleaned value at `index`, `None` when absent or blank
    pub(crate) fn opt(&self, index: usize) -> Option<String> {
        Some(self.get(index)).filter(|v| !v.is_empty())
    }
}

/// Which schema a data file uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutVariant {
    /// The schema the writer produces
    #[default]
    Canonical,
    /// Wide registry export (patients, referrals)
    Registry,
    /// Wide scheduling export (appointments)
    Schedule,
    /// Wide pharmacy ledger (prescriptions)
    Ledger,
}

impl fmt::Display for LayoutVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LayoutVariant::Canonical => "canonical",
            LayoutVariant::Registry => "registry",
            LayoutVariant::Schedule => "schedule",
            LayoutVariant::Ledger => "ledger",
        };
        f.write_str(name)
    }
}

impl FromStr for LayoutVariant {
    type Err = ClinicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "canonical" => Ok(Self::Canonical),
            "registry" => Ok(Self::Registry),
            "schedule" => Ok(Self::Schedule),
            "ledger" => Ok(Self::Ledger),
            _ => Err(ClinicError::Parse(format!(
                "Invalid layout '{s}'. Expected one of: canonical, registry, schedule, ledger"
            ))),
        }
    }
}
