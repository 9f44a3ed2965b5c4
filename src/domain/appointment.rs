//! Appointment record

use super::kind::{EntityKind, Record};
use super::status::AppointmentStatus;
use serde::{Deserialize, Serialize};

/// A scheduled appointment between a patient and a clinician
///
/// `date_time` is the composite `"YYYY-MM-DD HH:MM"` string, stored as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    appointment_id: String,
    pub patient_id: String,
    pub clinician_id: String,
    pub date_time: String,
    pub location: String,
    pub status: AppointmentStatus,
    pub reason: String,
}

impl Appointment {
    /// Creates a Scheduled appointment with an empty reason
    pub fn new(
        appointment_id: impl Into<String>,
        patient_id: impl Into<String>,
        clinician_id: impl Into<String>,
        date_time: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            appointment_id: appointment_id.into(),
            patient_id: patient_id.into(),
            clinician_id: clinician_id.into(),
            date_time: date_time.into(),
            location: location.into(),
            status: AppointmentStatus::default(),
            reason: String::new(),
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    pub fn appointment_id(&self) -> &str {
        &self.appointment_id
    }

    /// Moves the appointment to a new time and place
    pub fn amend(&mut self, date_time: impl Into<String>, location: impl Into<String>) {
        self.date_time = date_time.into();
        self.location = location.into();
    }

    pub fn cancel(&mut self) {
        self.status = AppointmentStatus::Cancelled;
    }

    /// Patient arrived; the appointment counts as completed
    pub fn check_in(&mut self) {
        self.status = AppointmentStatus::Completed;
    }
}

impl Record for Appointment {
    const KIND: EntityKind = EntityKind::Appointment;

    fn key(&self) -> &str {
        &self.appointment_id
    }
}

/// Partial update for an [`Appointment`]. Blank values leave the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentUpdate {
    pub date_time: Option<String>,
    pub location: Option<String>,
    pub status: Option<AppointmentStatus>,
    pub reason: Option<String>,
}
