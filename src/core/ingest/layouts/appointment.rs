//! Appointment schemas
//!
//! Neither schema guarantees a location, so a blank or missing location is
//! replaced by [`SentinelDefaults::location`].

use super::{CanonicalLayout, Row, RowLayout, SentinelDefaults};
use crate::domain::status::parse_lenient;
use crate::domain::Appointment;

/// `appointmentId,patientId,clinicianId,dateTime,status,reason`
pub struct AppointmentRow;

impl RowLayout for AppointmentRow {
    type Record = Appointment;

    const NAME: &'static str = "canonical";
    const MIN_COLUMNS: usize = 5;
    const HEADER: &'static str = "appointmentId,patientId,clinicianId,dateTime,status,reason";

    fn map_row(fields: &[String], defaults: &SentinelDefaults) -> Option<Appointment> {
        let row = Row::with_min(fields, Self::MIN_COLUMNS)?;
        let mut appointment = Appointment::new(
            row.get(0),
            row.get(1),
            row.get(2),
            row.get(3),
            defaults.location.clone(),
        )
        .with_reason(row.get(5));
        if let Some(status) = parse_lenient(&row.get(4)) {
            appointment.status = status;
        }
        Some(appointment)
    }
}

impl CanonicalLayout for AppointmentRow {
    fn to_row(a: &Appointment) -> Vec<String> {
        vec![
            a.appointment_id().to_string(),
            a.patient_id.clone(),
            a.clinician_id.clone(),
            a.date_time.clone(),
            a.status.to_string(),
            a.reason.clone(),
        ]
    }
}

/// Scheduling system export with separate date and time columns:
/// `appointment_id,patient_id,clinician_id,facility_id,appointment_date,appointment_time,duration_minutes,appointment_type,status,reason_for_visit,...`
pub struct AppointmentScheduleRow;

impl RowLayout for AppointmentScheduleRow {
    type Record = Appointment;

    const NAME: &'static str = "schedule";
    const MIN_COLUMNS: usize = 10;
    const HEADER: &'static str = "appointment_id,patient_id,clinician_id,facility_id,appointment_date,appointment_time,duration_minutes,appointment_type,status,reason_for_visit,notes,created_date,last_modified";

    fn map_row(fields: &[String], defaults: &SentinelDefaults) -> Option<Appointment> {
        let row = Row::with_min(fields, Self::MIN_COLUMNS)?;
        let location = row.opt(3).unwrap_or_else(|| defaults.location.clone());
        let date_time = format!("{} {}", row.get(4), row.get(5)).trim().to_string();
        let mut appointment = Appointment::new(row.get(0), row.get(1), row.get(2), date_time, location)
            .with_reason(row.get(9));
        if let Some(status) = parse_lenient(&row.get(8)) {
            appointment.status = status;
        }
        Some(appointment)
    }
}
