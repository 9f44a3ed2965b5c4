//! Clinician record

use super::kind::{EntityKind, Record};
use super::role::{Member, Role, UserIdentity};
use serde::{Deserialize, Serialize};

/// Speciality value that marks a general practitioner
pub const GENERAL_PRACTICE: &str = "General Practice";

/// A clinician (GP, specialist, nurse, ...) with employment details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clinician {
    clinician_id: String,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub speciality: String,
    pub gmc_number: String,
    pub phone: String,
    pub email: String,
    pub workplace_id: String,
    pub workplace_type: String,
    /// Full-time, Part-time
    pub employment_status: String,
    /// `YYYY-MM-DD`, kept as written
    pub start_date: String,
}

impl Clinician {
    /// Creates a new builder for constructing a Clinician
    pub fn builder(
        clinician_id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> ClinicianBuilder {
        ClinicianBuilder::new(clinician_id, first_name, last_name)
    }

    pub fn clinician_id(&self) -> &str {
        &self.clinician_id
    }

    /// First and last name joined by a space
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Identity and role of this clinician as a system member
    ///
    /// The role is derived from title and speciality: nurses by title,
    /// GPs by the General Practice speciality, everyone else is a specialist.
    pub fn member(&self) -> Member {
        let identity = UserIdentity::new(
            &self.clinician_id,
            self.display_name(),
            &self.email,
            &self.phone,
        );
        let role = if self.title.to_lowercase().contains("nurse") {
            Role::Nurse {
                grade: self.title.clone(),
            }
        } else if self.speciality.eq_ignore_ascii_case(GENERAL_PRACTICE) {
            Role::GeneralPractitioner {
                practice: self.workplace_id.clone(),
            }
        } else {
            Role::Specialist {
                speciality: self.speciality.clone(),
            }
        };
        Member::new(identity, role)
    }
}

impl Record for Clinician {
    const KIND: EntityKind = EntityKind::Clinician;

    fn key(&self) -> &str {
        &self.clinician_id
    }
}

/// Builder for [`Clinician`]; fields not set stay empty
#[derive(Debug, Clone)]
pub struct ClinicianBuilder {
    inner: Clinician,
}

impl ClinicianBuilder {
    pub fn new(
        clinician_id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            inner: Clinician {
                clinician_id: clinician_id.into(),
                first_name: first_name.into(),
                last_name: last_name.into(),
                title: String::new(),
                speciality: String::new(),
                gmc_number: String::new(),
                phone: String::new(),
                email: String::new(),
                workplace_id: String::new(),
                workplace_type: String::new(),
                employment_status: String::new(),
                start_date: String::new(),
            },
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.inner.title = title.into();
        self
    }

    pub fn speciality(mut self, speciality: impl Into<String>) -> Self {
        self.inner.speciality = speciality.into();
        self
    }

    pub fn gmc_number(mut self, gmc_number: impl Into<String>) -> Self {
        self.inner.gmc_number = gmc_number.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.inner.phone = phone.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.inner.email = email.into();
        self
    }

    /// Sets workplace id and type together
    pub fn workplace(mut self, id: impl Into<String>, kind: impl Into<String>) -> Self {
        self.inner.workplace_id = id.into();
        self.inner.workplace_type = kind.into();
        self
    }

    pub fn employment_status(mut self, status: impl Into<String>) -> Self {
        self.inner.employment_status = status.into();
        self
    }

    pub fn start_date(mut self, start_date: impl Into<String>) -> Self {
        self.inner.start_date = start_date.into();
        self
    }

    pub fn build(self) -> Clinician {
        self.inner
    }
}

/// Partial update for a [`Clinician`]. Blank values leave the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClinicianUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub title: Option<String>,
    pub speciality: Option<String>,
    pub gmc_number: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub workplace_id: Option<String>,
    pub workplace_type: Option<String>,
    pub employment_status: Option<String>,
    pub start_date: Option<String>,
}
