//! Referral schemas

use super::{CanonicalLayout, Row, RowLayout, SentinelDefaults};
use crate::domain::status::parse_lenient;
use crate::domain::Referral;

/// `referralId,patientId,fromGP,toSpecialist,reason,status,urgency`
pub struct ReferralRow;

impl RowLayout for ReferralRow {
    type Record = Referral;

    const NAME: &'static str = "canonical";
    const MIN_COLUMNS: usize = 5;
    const HEADER: &'static str = "referralId,patientId,fromGP,toSpecialist,reason,status,urgency";

    fn map_row(fields: &[String], _defaults: &SentinelDefaults) -> Option<Referral> {
        let row = Row::with_min(fields, Self::MIN_COLUMNS)?;
        let mut referral = Referral::new(row.get(0), row.get(1), row.get(2), row.get(3), row.get(4));
        if let Some(status) = parse_lenient(&row.get(5)) {
            referral.status = status;
        }
        if let Some(urgency) = parse_lenient(&row.get(6)) {
            referral.urgency_level = urgency;
        }
        Some(referral)
    }
}

impl CanonicalLayout for ReferralRow {
    fn to_row(r: &Referral) -> Vec<String> {
        vec![
            r.referral_id().to_string(),
            r.patient_id.clone(),
            r.from_gp_id.clone(),
            r.to_specialist_id.clone(),
            r.reason.clone(),
            r.status.to_string(),
            r.urgency_level.to_string(),
        ]
    }
}

/// Referral registry export:
/// `referral_id,patient_id,referring_clinician_id,referred_to_clinician_id,referring_facility_id,referred_to_facility_id,referral_date,urgency_level,referral_reason,clinical_summary,requested_investigations,status,...`
pub struct ReferralRegistryRow;

impl RowLayout for ReferralRegistryRow {
    type Record = Referral;

    const NAME: &'static str = "registry";
    const MIN_COLUMNS: usize = 10;
    const HEADER: &'static str = "referral_id,patient_id,referring_clinician_id,referred_to_clinician_id,referring_facility_id,referred_to_facility_id,referral_date,urgency_level,referral_reason,clinical_summary,requested_investigations,status,appointment_id,notes,created_date,last_updated";

    fn map_row(fields: &[String], _defaults: &SentinelDefaults) -> Option<Referral> {
        let row = Row::with_min(fields, Self::MIN_COLUMNS)?;
        let mut referral = Referral::new(row.get(0), row.get(1), row.get(2), row.get(3), row.get(8));
        if let Some(urgency) = parse_lenient(&row.get(7)) {
            referral.urgency_level = urgency;
        }
        referral.clinical_summary = row.opt(9);
        if let Some(status) = parse_lenient(&row.get(11)) {
            referral.status = status;
        }
        Some(referral)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ingest::splitter::split_fields;
    use crate::domain::{ReferralStatus, UrgencyLevel};

    #[test]
    fn test_canonical_five_columns_keeps_defaults() {
        let fields = split_fields("REF001,P001,GP001,SPEC001,Chest pain");
        let r = ReferralRow::map_row(&fields, &SentinelDefaults::default()).unwrap();

        assert_eq!(r.referral_id(), "REF001");
        assert_eq!(r.from_gp_id, "GP001");
        assert_eq!(r.to_specialist_id, "SPEC001");
        assert_eq!(r.status, ReferralStatus::Pending);
        assert_eq!(r.urgency_level, UrgencyLevel::Routine);
    }

    #[test]
    fn test_canonical_status_and_urgency() {
        let fields = split_fields("REF002,P001,GP001,SPEC001,\"Pain, left arm\",In Progress,Emergency");
        let r = ReferralRow::map_row(&fields, &SentinelDefaults::default()).unwrap();

        assert_eq!(r.reason, "Pain, left arm");
        assert_eq!(r.status, ReferralStatus::InProgress);
        assert_eq!(r.urgency_level, UrgencyLevel::Emergency);
    }

    #[test]
    fn test_canonical_to_row_writes_display_labels() {
        let r = Referral::new("REF003", "P002", "GP002", "SPEC002", "Rash")
            .with_urgency(UrgencyLevel::Urgent);
        assert_eq!(
            ReferralRow::to_row(&r).join(","),
            "REF003,P002,GP002,SPEC002,Rash,Pending,Urgent"
        );
    }

    #[test]
    fn test_registry_row() {
        let line = "R100,P005,C001,C010,S01,S02,2024-01-10,Urgent,Suspected fracture,X-ray shows shadow,MRI,Accepted,A77";
        let r = ReferralRegistryRow::map_row(&split_fields(line), &SentinelDefaults::default()).unwrap();

        assert_eq!(r.reason, "Suspected fracture");
        assert_eq!(r.urgency_level, UrgencyLevel::Urgent);
        assert_eq!(r.clinical_summary.as_deref(), Some("X-ray shows shadow"));
        assert_eq!(r.status, ReferralStatus::Accepted);
    }

    #[test]
    fn test_registry_row_too_short() {
        let line = "R100,P005,C001,C010,S01,S02,2024-01-10,Urgent,Suspected fracture";
        assert!(ReferralRegistryRow::map_row(&split_fields(line), &SentinelDefaults::default()).is_none());
    }
}
