//! Clinician schema

use super::{CanonicalLayout, Row, RowLayout, SentinelDefaults};
use crate::domain::Clinician;

/// Twelve-column staff register
pub struct ClinicianRow;

impl RowLayout for ClinicianRow {
    type Record = Clinician;

    const NAME: &'static str = "canonical";
    const MIN_COLUMNS: usize = 12;
    const HEADER: &'static str = "clinician_id,first_name,last_name,title,speciality,gmc_number,phone_number,email,workplace_id,workplace_type,employment_status,start_date";

    fn map_row(fields: &[String], _defaults: &SentinelDefaults) -> Option<Clinician> {
        let row = Row::with_min(fields, Self::MIN_COLUMNS)?;
        Some(
            Clinician::builder(row.get(0), row.get(1), row.get(2))
                .title(row.get(3))
                .speciality(row.get(4))
                .gmc_number(row.get(5))
                .phone(row.get(6))
                .email(row.get(7))
                .workplace(row.get(8), row.get(9))
                .employment_status(row.get(10))
                .start_date(row.get(11))
                .build(),
        )
    }
}

impl CanonicalLayout for ClinicianRow {
    fn to_row(c: &Clinician) -> Vec<String> {
        vec![
            c.clinician_id().to_string(),
            c.first_name.clone(),
            c.last_name.clone(),
            c.title.clone(),
            c.speciality.clone(),
            c.gmc_number.clone(),
            c.phone.clone(),
            c.email.clone(),
            c.workplace_id.clone(),
            c.workplace_type.clone(),
            c.employment_status.clone(),
            c.start_date.clone(),
        ]
    }
}
