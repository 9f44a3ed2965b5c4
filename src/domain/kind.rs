//! Entity kinds and the keyed-record contract shared by every entity

use crate::domain::errors::ClinicError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five record kinds the system keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Patient,
    Clinician,
    Appointment,
    Prescription,
    Referral,
}

impl EntityKind {
    /// All kinds, in bootstrap order
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Patient,
        EntityKind::Clinician,
        EntityKind::Appointment,
        EntityKind::Prescription,
        EntityKind::Referral,
    ];

    /// Plural label used in log lines and summaries
    pub fn plural(&self) -> &'static str {
        match self {
            EntityKind::Patient => "patients",
            EntityKind::Clinician => "clinicians",
            EntityKind::Appointment => "appointments",
            EntityKind::Prescription => "prescriptions",
            EntityKind::Referral => "referrals",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Patient => "patient",
            EntityKind::Clinician => "clinician",
            EntityKind::Appointment => "appointment",
            EntityKind::Prescription => "prescription",
            EntityKind::Referral => "referral",
        };
        f.write_str(name)
    }
}

impl FromStr for EntityKind {
    type Err = ClinicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().trim_end_matches('s') {
            "patient" => Ok(Self::Patient),
            "clinician" => Ok(Self::Clinician),
            "appointment" => Ok(Self::Appointment),
            "prescription" => Ok(Self::Prescription),
            "referral" => Ok(Self::Referral),
            _ => Err(ClinicError::Parse(format!(
                "Unknown entity kind '{s}'. Expected one of: patient, clinician, appointment, prescription, referral"
            ))),
        }
    }
}

/// A record with a caller-assigned key that never changes after construction
pub trait Record: Clone {
    /// Kind of this record
    const KIND: EntityKind;

    /// The record's key (`userId`, `clinicianId`, `appointmentId`, ...)
    fn key(&self) -> &str;
}
