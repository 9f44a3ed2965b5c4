//! Prescription record

use super::kind::{EntityKind, Record};
use super::status::PrescriptionStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A medication prescription
///
/// `issued_date` is stamped with the current date when the value is
/// constructed and cannot be changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    prescription_id: String,
    pub patient_id: String,
    pub clinician_id: String,
    pub medication: String,
    pub dosage: String,
    pub duration: Option<String>,
    pub status: PrescriptionStatus,
    issued_date: NaiveDate,
    pub notes: Option<String>,
}

impl Prescription {
    /// Creates an Issued prescription dated today
    pub fn new(
        prescription_id: impl Into<String>,
        patient_id: impl Into<String>,
        clinician_id: impl Into<String>,
        medication: impl Into<String>,
        dosage: impl Into<String>,
    ) -> Self {
        Self {
            prescription_id: prescription_id.into(),
            patient_id: patient_id.into(),
            clinician_id: clinician_id.into(),
            medication: medication.into(),
            dosage: dosage.into(),
            duration: None,
            status: PrescriptionStatus::default(),
            issued_date: super::today(),
            notes: None,
        }
    }

    pub fn prescription_id(&self) -> &str {
        &self.prescription_id
    }

    pub fn issued_date(&self) -> NaiveDate {
        self.issued_date
    }

    pub fn mark_collected(&mut self) {
        self.status = PrescriptionStatus::Collected;
    }

    pub fn mark_expired(&mut self) {
        self.status = PrescriptionStatus::Expired;
    }
}

impl Record for Prescription {
    const KIND: EntityKind = EntityKind::Prescription;

    fn key(&self) -> &str {
        &self.prescription_id
    }
}

/// Partial update for a [`Prescription`]. Blank values leave the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrescriptionUpdate {
    pub medication: Option<String>,
    pub dosage: Option<String>,
    pub duration: Option<String>,
    pub status: Option<PrescriptionStatus>,
    pub notes: Option<String>,
}
