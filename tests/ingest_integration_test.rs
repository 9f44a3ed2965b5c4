//! Integration tests for bulk loading delimited files into stores

use clinicflow::core::ingest::{
    AppointmentScheduleRow, BulkLoader, LayoutVariant, PatientRegistryRow, PrescriptionLedgerRow,
    PrescriptionRow, ReferralRegistryRow, SentinelDefaults,
};
use clinicflow::core::Clinic;
use clinicflow::domain::{
    AppointmentStatus, EntityKind, PrescriptionStatus, Record, ReferralStatus, UrgencyLevel,
};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_four_column_prescriptions_default_to_issued() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "prescriptions.csv",
        "prescriptionId,patientId,medication,dosage\n\
         RX001,P001,Amoxicillin,500mg\n\
         RX002,P002,Ibuprofen,200mg\n",
    );

    let mut clinic = Clinic::default();
    let summary = clinic
        .load_kind(EntityKind::Prescription, &path, LayoutVariant::Canonical)
        .unwrap();

    assert_eq!(summary.loaded, 2);
    assert_eq!(summary.skipped, 0);

    let all = clinic.prescriptions.get_all();
    let ids: Vec<&str> = all.iter().map(|p| p.key()).collect();
    assert_eq!(ids, ["RX001", "RX002"]);
    assert!(all.iter().all(|p| p.status == PrescriptionStatus::Issued));
    assert!(all.iter().all(|p| p.clinician_id == "C001"));
    assert_eq!(clinic.prescriptions.issued().len(), 2);

    let for_patient = clinic.prescriptions.by_patient("P001");
    let ids: Vec<&str> = for_patient.iter().map(|p| p.key()).collect();
    assert_eq!(ids, ["RX001"]);
}

#[test]
fn test_short_rows_are_skipped_and_counted() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "prescriptions.csv",
        "prescriptionId,patientId,medication,dosage,status\n\
         RX001,P001\n\
         \n\
         RX002,P002,Metformin,850mg\n",
    );

    let outcome = BulkLoader::default().load::<PrescriptionRow>(&path).unwrap();
    assert_eq!(outcome.loaded(), 1);
    assert_eq!(outcome.skipped, 2);
    assert_eq!(outcome.records[0].status, PrescriptionStatus::Issued);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = BulkLoader::default()
        .load::<PrescriptionRow>(dir.path().join("absent.csv"))
        .unwrap_err();
    assert!(err.is_io());
    assert!(err.to_string().contains("absent.csv"));
}

#[test]
fn test_patient_registry_layout() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "patients.csv",
        "patient_id,first_name,last_name,date_of_birth,nhs_number,gender,phone_number,email,address\n\
         P001,John,Smith,1985-03-15,1234567890,M,07700 900123,john.smith@email.com,12 High Street\n",
    );

    let outcome = BulkLoader::default().load::<PatientRegistryRow>(&path).unwrap();
    let patient = &outcome.records[0];
    assert_eq!(patient.key(), "P001");
    assert_eq!(patient.name, "John Smith");
    assert_eq!(patient.nhs_number, "1234567890");
    assert_eq!(patient.email, "john.smith@email.com");
    assert_eq!(patient.address.as_deref(), Some("12 High Street"));
}

#[test]
fn test_schedule_layout_uses_default_location_for_blank_facility() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "appointments.csv",
        "appointment_id,patient_id,clinician_id,facility_id,appointment_date,appointment_time,duration_minutes,appointment_type,status,reason_for_visit\n\
         A001,P001,C002,,2025-09-20,09:00,15,Routine,Scheduled,Annual review\n\
         A002,P002,C002,S004,2025-09-20,09:30,15,Routine,Cancelled,Follow up\n",
    );

    let loader = BulkLoader::new(SentinelDefaults {
        clinician_id: "C001".to_string(),
        location: "Outreach Van".to_string(),
    });
    let outcome = loader.load::<AppointmentScheduleRow>(&path).unwrap();

    assert_eq!(outcome.loaded(), 2);
    assert_eq!(outcome.records[0].location, "Outreach Van");
    assert_eq!(outcome.records[0].date_time, "2025-09-20 09:00");
    assert_eq!(outcome.records[1].location, "S004");
    assert_eq!(outcome.records[1].status, AppointmentStatus::Cancelled);
}

#[test]
fn test_ledger_layout_falls_back_to_default_clinician() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "prescriptions.csv",
        "prescription_id,patient_id,clinician_id,appointment_id,prescription_date,medication_name,dosage\n\
         RX010,P003,,A001,2025-09-01,Salbutamol,100mcg\n",
    );

    let outcome = BulkLoader::default().load::<PrescriptionLedgerRow>(&path).unwrap();
    let rx = &outcome.records[0];
    assert_eq!(rx.clinician_id, "C001");
    assert_eq!(rx.medication, "Salbutamol");
    assert_eq!(rx.status, PrescriptionStatus::Issued);
}

#[test]
fn test_referral_registry_layout() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "referrals.csv",
        "referral_id,patient_id,referring_clinician_id,referred_to_clinician_id,referring_facility_id,referred_to_facility_id,referral_date,urgency_level,referral_reason,clinical_summary,requested_investigations,status\n\
         R001,P001,C001,C005,S001,H001,2025-09-01,Urgent,Chest pain,Exertional chest pain for 2 weeks,ECG,Pending\n",
    );

    let outcome = BulkLoader::default().load::<ReferralRegistryRow>(&path).unwrap();
    let referral = &outcome.records[0];
    assert_eq!(referral.to_specialist_id, "C005");
    assert_eq!(referral.reason, "Chest pain");
    assert_eq!(referral.urgency_level, UrgencyLevel::Urgent);
    assert_eq!(referral.status, ReferralStatus::Pending);
    assert_eq!(
        referral.clinical_summary.as_deref(),
        Some("Exertional chest pain for 2 weeks")
    );
}
