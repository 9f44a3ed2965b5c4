//! Prescription schemas

use super::{CanonicalLayout, Row, RowLayout, SentinelDefaults};
use crate::domain::status::parse_lenient;
use crate::domain::Prescription;

/// `prescriptionId,patientId,medication,dosage,status`
///
/// There is no prescriber column; the clinician comes from
/// [`SentinelDefaults::clinician_id`].
pub struct PrescriptionRow;

impl RowLayout for PrescriptionRow {
    type Record = Prescription;

    const NAME: &'static str = "canonical";
    const MIN_COLUMNS: usize = 4;
    const HEADER: &'static str = "prescriptionId,patientId,medication,dosage,status";

    fn map_row(fields: &[String], defaults: &SentinelDefaults) -> Option<Prescription> {
        let row = Row::with_min(fields, Self::MIN_COLUMNS)?;
        let mut prescription = Prescription::new(
            row.get(0),
            row.get(1),
            defaults.clinician_id.clone(),
            row.get(2),
            row.get(3),
        );
        if let Some(status) = parse_lenient(&row.get(4)) {
            prescription.status = status;
        }
        Some(prescription)
    }
}

impl CanonicalLayout for PrescriptionRow {
    fn to_row(p: &Prescription) -> Vec<String> {
        vec![
            p.prescription_id().to_string(),
            p.patient_id.clone(),
            p.medication.clone(),
            p.dosage.clone(),
            p.status.to_string(),
        ]
    }
}

/// Pharmacy ledger export:
/// `prescription_id,patient_id,clinician_id,appointment_id,prescription_date,medication_name,dosage,frequency,duration_days,quantity,instructions,pharmacy_name,status,...`
pub struct PrescriptionLedgerRow;

impl RowLayout for PrescriptionLedgerRow {
    type Record = Prescription;

    const NAME: &'static str = "ledger";
    const MIN_COLUMNS: usize = 7;
    const HEADER: &'static str = "prescription_id,patient_id,clinician_id,appointment_id,prescription_date,medication_name,dosage,frequency,duration_days,quantity,instructions,pharmacy_name,status,issue_date,collection_date";

    fn map_row(fields: &[String], defaults: &SentinelDefaults) -> Option<Prescription> {
        let row = Row::with_min(fields, Self::MIN_COLUMNS)?;
        let clinician = row.opt(2).unwrap_or_else(|| defaults.clinician_id.clone());
        let mut prescription =
            Prescription::new(row.get(0), row.get(1), clinician, row.get(5), row.get(6));
        prescription.duration = row.opt(8);
        prescription.notes = row.opt(10);
        if let Some(status) = parse_lenient(&row.get(12)) {
            prescription.status = status;
        }
        Some(prescription)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ingest::splitter::split_fields;
    use crate::domain::PrescriptionStatus;

    #[test]
    fn test_canonical_four_columns_defaults_status_and_clinician() {
        let fields = split_fields("RX001,P001,Amoxicillin,500mg");
        let p = PrescriptionRow::map_row(&fields, &SentinelDefaults::default()).unwrap();

        assert_eq!(p.prescription_id(), "RX001");
        assert_eq!(p.patient_id, "P001");
        assert_eq!(p.clinician_id, "C001");
        assert_eq!(p.medication, "Amoxicillin");
        assert_eq!(p.dosage, "500mg");
        assert_eq!(p.status, PrescriptionStatus::Issued);
    }

    #[test]
    fn test_canonical_status_column_overrides_default() {
        let fields = split_fields("RX001,P001,Amoxicillin,500mg,collected");
        let p = PrescriptionRow::map_row(&fields, &SentinelDefaults::default()).unwrap();
        assert_eq!(p.status, PrescriptionStatus::Collected);
    }

    #[test]
    fn test_canonical_three_columns_skipped() {
        let fields = split_fields("RX001,P001,Amoxicillin");
        assert!(PrescriptionRow::map_row(&fields, &SentinelDefaults::default()).is_none());
    }

    #[test]
    fn test_ledger_reads_prescriber_and_extras() {
        let line = "RX100,P004,C009,A001,2024-02-01,Metformin,500mg,Twice daily,28,56,Take with food,Boots,Expired";
        let p = PrescriptionLedgerRow::map_row(&split_fields(line), &SentinelDefaults::default()).unwrap();

        assert_eq!(p.clinician_id, "C009");
        assert_eq!(p.medication, "Metformin");
        assert_eq!(p.duration.as_deref(), Some("28"));
        assert_eq!(p.notes.as_deref(), Some("Take with food"));
        assert_eq!(p.status, PrescriptionStatus::Expired);
    }

    #[test]
    fn test_ledger_short_row_keeps_defaults() {
        let line = "RX101,P004,,A001,2024-02-01,Metformin,500mg";
        let p = PrescriptionLedgerRow::map_row(&split_fields(line), &SentinelDefaults::default()).unwrap();

        assert_eq!(p.clinician_id, "C001");
        assert_eq!(p.duration, None);
        assert_eq!(p.status, PrescriptionStatus::Issued);
    }
}
