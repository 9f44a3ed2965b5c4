//! Patient schemas

use super::{CanonicalLayout, Row, RowLayout, SentinelDefaults};
use crate::domain::Patient;

/// `userId,name,nhsNumber,email,phone`
pub struct PatientRow;

impl RowLayout for PatientRow {
    type Record = Patient;

    const NAME: &'static str = "canonical";
    const MIN_COLUMNS: usize = 5;
    const HEADER: &'static str = "userId,name,nhsNumber,email,phone";

    fn map_row(fields: &[String], _defaults: &SentinelDefaults) -> Option<Patient> {
        let row = Row::with_min(fields, Self::MIN_COLUMNS)?;
        Some(Patient::new(
            row.get(0),
            row.get(1),
            row.get(3),
            row.get(4),
            row.get(2),
        ))
    }
}

impl CanonicalLayout for PatientRow {
    fn to_row(patient: &Patient) -> Vec<String> {
        vec![
            patient.user_id().to_string(),
            patient.name.clone(),
            patient.nhs_number.clone(),
            patient.email.clone(),
            patient.phone.clone(),
        ]
    }
}

/// Registry export with split names and an address column:
/// `patient_id,first_name,last_name,date_of_birth,nhs_number,gender,phone_number,email,address,...`
pub struct PatientRegistryRow;

impl RowLayout for PatientRegistryRow {
    type Record = Patient;

    const NAME: &'static str = "registry";
    const MIN_COLUMNS: usize = 9;
    const HEADER: &'static str = "patient_id,first_name,last_name,date_of_birth,nhs_number,gender,phone_number,email,address,postcode,emergency_contact_name,emergency_contact_phone,registration_date,gp_surgery_id";

    fn map_row(fields: &[String], _defaults: &SentinelDefaults) -> Option<Patient> {
        let row = Row::with_min(fields, Self::MIN_COLUMNS)?;
        let name = format!("{} {}", row.get(1), row.get(2)).trim().to_string();
        let mut patient = Patient::new(row.get(0), name, row.get(7), row.get(6), row.get(4));
        patient.address = row.opt(8);
        Some(patient)
    }
}
