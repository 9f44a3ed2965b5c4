//! Entity-specific lookups over [`RecordStore`]
//!
//! Each is a filtered read: results are clones in store order.

use super::RecordStore;
use crate::domain::{
    Appointment, AppointmentStatus, Clinician, Patient, Prescription, PrescriptionStatus,
    Referral, ReferralStatus,
};
use chrono::NaiveDate;

impl RecordStore<Patient> {
    /// Patients with this NHS number; the number is not unique
    pub fn by_nhs_number(&self, nhs_number: &str) -> Vec<Patient> {
        self.get_filtered(|p| p.nhs_number == nhs_number)
    }
}

impl RecordStore<Clinician> {
    /// Case-insensitive match on speciality
    pub fn by_speciality(&self, speciality: &str) -> Vec<Clinician> {
        let wanted = speciality.to_lowercase();
        self.get_filtered(|c| c.speciality.to_lowercase() == wanted)
    }
}

impl RecordStore<Appointment> {
    pub fn by_patient(&self, patient_id: &str) -> Vec<Appointment> {
        self.get_filtered(|a| a.patient_id == patient_id)
    }

    pub fn by_clinician(&self, clinician_id: &str) -> Vec<Appointment> {
        self.get_filtered(|a| a.clinician_id == clinician_id)
    }

    pub fn by_status(&self, status: AppointmentStatus) -> Vec<Appointment> {
        self.get_filtered(|a| a.status == status)
    }
}

impl RecordStore<Prescription> {
    pub fn by_patient(&self, patient_id: &str) -> Vec<Prescription> {
        self.get_filtered(|p| p.patient_id == patient_id)
    }

    pub fn by_clinician(&self, clinician_id: &str) -> Vec<Prescription> {
        self.get_filtered(|p| p.clinician_id == clinician_id)
    }

    pub fn by_status(&self, status: PrescriptionStatus) -> Vec<Prescription> {
        self.get_filtered(|p| p.status == status)
    }

    pub fn by_issued_date(&self, date: NaiveDate) -> Vec<Prescription> {
        self.get_filtered(|p| p.issued_date() == date)
    }

    /// Prescriptions not yet collected or expired
    pub fn issued(&self) -> Vec<Prescription> {
        self.by_status(PrescriptionStatus::Issued)
    }
}

impl RecordStore<Referral> {
    pub fn by_patient(&self, patient_id: &str) -> Vec<Referral> {
        self.get_filtered(|r| r.patient_id == patient_id)
    }

    /// Referrals sent by this GP
    pub fn by_gp(&self, gp_id: &str) -> Vec<Referral> {
        self.get_filtered(|r| r.from_gp_id == gp_id)
    }

    /// Referrals addressed to this specialist
    pub fn by_specialist(&self, specialist_id: &str) -> Vec<Referral> {
        self.get_filtered(|r| r.to_specialist_id == specialist_id)
    }

    pub fn by_status(&self, status: ReferralStatus) -> Vec<Referral> {
        self.get_filtered(|r| r.status == status)
    }

    /// Urgent and Emergency referrals
    pub fn urgent(&self) -> Vec<Referral> {
        self.get_filtered(Referral::is_urgent)
    }
}
