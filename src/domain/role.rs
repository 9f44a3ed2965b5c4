//! Member identities and roles
//!
//! Every person the system knows about has the same identity fields and
//! exactly one role. Role-specific behaviour is a `match` over [`Role`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity fields shared by every kind of member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl UserIdentity {
    pub fn new(
        user_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

/// The closed set of member roles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Role {
    Patient,
    GeneralPractitioner { practice: String },
    Specialist { speciality: String },
    Nurse { grade: String },
    Pharmacist { pharmacy: String },
    LabTechnician { laboratory: String },
    Receptionist { desk: String },
    Carer { cared_for_patient_id: String },
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Patient => "Patient",
            Role::GeneralPractitioner { .. } => "GP",
            Role::Specialist { .. } => "Specialist",
            Role::Nurse { .. } => "Nurse",
            Role::Pharmacist { .. } => "Pharmacist",
            Role::LabTechnician { .. } => "Lab Technician",
            Role::Receptionist { .. } => "Receptionist",
            Role::Carer { .. } => "Carer",
        };
        f.write_str(label)
    }
}

/// A member: identity plus role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub identity: UserIdentity,
    pub role: Role,
}

impl Member {
    pub fn new(identity: UserIdentity, role: Role) -> Self {
        Self { identity, role }
    }

    /// One line describing what this member does in the system
    pub fn describe_duty(&self) -> String {
        let name = &self.identity.name;
        match &self.role {
            Role::Patient => format!("{name} is viewing their medical record."),
            Role::GeneralPractitioner { practice } => {
                format!("{name} is seeing patients and issuing referrals at {practice}.")
            }
            Role::Specialist { speciality } => {
                format!("{name} is reviewing referrals in {speciality}.")
            }
            Role::Nurse { grade } => {
                format!("{name} ({grade}) is taking patient vitals and updating records.")
            }
            Role::Pharmacist { pharmacy } => {
                format!("{name} is dispensing prescriptions at {pharmacy}.")
            }
            Role::LabTechnician { laboratory } => {
                format!("{name} is processing test orders at {laboratory}.")
            }
            Role::Receptionist { desk } => {
                format!("{name} is booking appointments at {desk}.")
            }
            Role::Carer {
                cared_for_patient_id,
            } => format!("{name} is supporting patient {cared_for_patient_id}."),
        }
    }
}
