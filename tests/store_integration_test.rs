//! Integration tests for the copy-on-read record stores

use clinicflow::core::store::RecordStore;
use clinicflow::domain::{
    Appointment, AppointmentStatus, AppointmentUpdate, Clinician, Patient, PatientUpdate,
    Prescription, PrescriptionStatus, PrescriptionUpdate, Record,
};

fn patients() -> RecordStore<Patient> {
    let mut store = RecordStore::new();
    store.insert(Patient::new("P001", "John Smith", "john@example.com", "0700", "1234567890"));
    store.insert(Patient::new("P002", "Jane Doe", "jane@example.com", "0701", "9876543210"));
    store
}

#[test]
fn test_reads_return_independent_copies() {
    let store = patients();

    let mut copy = store.get_by_key("P001").unwrap();
    copy.name = "Changed".to_string();
    copy.add_allergy("Penicillin");

    let stored = store.get_by_key("P001").unwrap();
    assert_eq!(stored.name, "John Smith");
    assert!(stored.allergies().is_empty());

    let mut all = store.get_all();
    all.clear();
    assert_eq!(store.len(), 2);
}

#[test]
fn test_insert_refuses_blank_key() {
    let mut store = patients();
    assert!(!store.insert(Patient::new("  ", "Nobody", "", "", "")));
    assert_eq!(store.len(), 2);
}

#[test]
fn test_update_applies_only_supplied_fields() {
    let mut store = patients();
    let updated = store.update(
        "P001",
        PatientUpdate {
            email: Some("new@example.com".to_string()),
            phone: Some("   ".to_string()),
            ..Default::default()
        },
    );
    assert!(updated);

    let p = store.get_by_key("P001").unwrap();
    assert_eq!(p.email, "new@example.com");
    assert_eq!(p.phone, "0700");
    assert_eq!(p.key(), "P001");

    assert!(!store.update("P999", PatientUpdate::default()));
}

#[test]
fn test_delete_and_contains() {
    let mut store = patients();
    assert!(store.delete("P002"));
    assert!(!store.delete("P002"));
    assert!(!store.contains("P002"));
    assert!(store.contains("P001"));
}

#[test]
fn test_nhs_number_lookup() {
    let store = patients();
    let found = store.by_nhs_number("9876543210");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].key(), "P002");
    assert!(store.by_nhs_number("0000000000").is_empty());
}

#[test]
fn test_speciality_lookup_ignores_case() {
    let mut store = RecordStore::new();
    store.insert(
        Clinician::builder("C001", "Sarah", "Jones")
            .speciality("Cardiology")
            .build(),
    );
    store.insert(Clinician::builder("C002", "Ali", "Khan").build());

    let cardiologists = store.by_speciality("cardiology");
    assert_eq!(cardiologists.len(), 1);
    assert_eq!(cardiologists[0].key(), "C001");
}

#[test]
fn test_appointment_queries_after_status_update() {
    let mut store = RecordStore::new();
    store.insert(Appointment::new("A1", "P001", "C001", "2025-09-20 09:00", "Main Clinic"));
    store.insert(Appointment::new("A2", "P001", "C002", "2025-09-21 10:00", "Main Clinic"));
    store.insert(Appointment::new("A3", "P002", "C001", "2025-09-22 11:00", "Main Clinic"));

    store.update(
        "A2",
        AppointmentUpdate {
            status: Some(AppointmentStatus::Cancelled),
            ..Default::default()
        },
    );

    assert_eq!(store.by_patient("P001").len(), 2);
    assert_eq!(store.by_clinician("C001").len(), 2);
    let cancelled = store.by_status(AppointmentStatus::Cancelled);
    assert_eq!(cancelled.len(), 1);
    assert_eq!(cancelled[0].key(), "A2");
}

#[test]
fn test_issued_prescriptions_exclude_collected() {
    let mut store = RecordStore::new();
    store.insert(Prescription::new("RX1", "P001", "C001", "Aspirin", "75mg"));
    store.insert(Prescription::new("RX2", "P001", "C001", "Statin", "20mg"));
    store.update(
        "RX2",
        PrescriptionUpdate {
            status: Some(PrescriptionStatus::Collected),
            ..Default::default()
        },
    );

    let issued = store.issued();
    assert_eq!(issued.len(), 1);
    assert_eq!(issued[0].key(), "RX1");

    let today = issued[0].issued_date();
    assert_eq!(store.by_issued_date(today).len(), 2);
    assert_eq!(store.by_status(PrescriptionStatus::Collected).len(), 1);
}

#[test]
fn test_load_from_replaces_contents() {
    let mut store = patients();
    store.load_from(vec![Patient::new("P100", "New", "", "", "")]);
    assert_eq!(store.len(), 1);
    assert!(store.contains("P100"));
}
