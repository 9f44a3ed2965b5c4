//! Patient record

use super::kind::{EntityKind, Record};
use super::role::{Member, Role, UserIdentity};
use serde::{Deserialize, Serialize};

/// A registered patient
///
/// The NHS number is not required to be unique across patients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    user_id: String,

    /// Full display name
    pub name: String,

    /// Email address
    pub email: String,

    /// Phone number
    pub phone: String,

    /// NHS number
    pub nhs_number: String,

    /// Postal address, only present in the registry layout
    pub address: Option<String>,

    /// Free-text medical history
    pub medical_history: Option<String>,

    allergies: Vec<String>,
}

impl Patient {
    /// Creates a patient with no allergies and no medical history
    pub fn new(
        user_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        nhs_number: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            nhs_number: nhs_number.into(),
            address: None,
            medical_history: None,
            allergies: Vec::new(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Allergies in the order they were recorded
    pub fn allergies(&self) -> &[String] {
        &self.allergies
    }

    /// Records an allergy. Blank values are ignored.
    pub fn add_allergy(&mut self, allergy: impl Into<String>) -> bool {
        let allergy = allergy.into();
        if allergy.trim().is_empty() {
            return false;
        }
        self.allergies.push(allergy);
        true
    }

    /// Removes the first matching allergy
    pub fn remove_allergy(&mut self, allergy: &str) -> bool {
        match self.allergies.iter().position(|a| a == allergy) {
            Some(index) => {
                self.allergies.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn update_medical_history(&mut self, history: impl Into<String>) {
        self.medical_history = Some(history.into());
    }

    /// Identity and role of this patient as a system member
    pub fn member(&self) -> Member {
        Member::new(
            UserIdentity::new(&self.user_id, &self.name, &self.email, &self.phone),
            Role::Patient,
        )
    }
}

impl Record for Patient {
    const KIND: EntityKind = EntityKind::Patient;

    fn key(&self) -> &str {
        &self.user_id
    }
}

/// Partial update for a [`Patient`]. Blank values leave the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub nhs_number: Option<String>,
    pub address: Option<String>,
    pub medical_history: Option<String>,
}
