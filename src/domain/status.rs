//! Status and urgency vocabularies
//!
//! Parsing is lenient: case-insensitive, and spaces, underscores and hyphens
//! are ignored, so `"In Progress"`, `"in_progress"` and `"InProgress"` all name
//! [`ReferralStatus::InProgress`]. Display uses the human-readable form.

use crate::domain::errors::ClinicError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident, default = $default:ident, {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every value, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Human-readable label written to files and documents
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ClinicError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = normalize(s);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| normalize(v.as_str()) == wanted)
                    .ok_or_else(|| {
                        ClinicError::Parse(format!(
                            "Invalid {} '{}'. Expected one of: {}",
                            stringify!($name),
                            s,
                            Self::ALL.iter().map(|v| v.as_str()).collect::<Vec<_>>().join(", ")
                        ))
                    })
            }
        }
    };
}

vocabulary! {
    /// Appointment lifecycle status
    AppointmentStatus, default = Scheduled, {
        Scheduled => "Scheduled",
        Completed => "Completed",
        Cancelled => "Cancelled",
    }
}

vocabulary! {
    /// Prescription lifecycle status
    PrescriptionStatus, default = Issued, {
        Issued => "Issued",
        Collected => "Collected",
        Expired => "Expired",
    }
}

vocabulary! {
    /// Referral lifecycle status
    ///
    /// The usual path is Pending → Accepted|Rejected, Accepted → InProgress,
    /// InProgress → Completed. Nothing enforces it: any status may be set at
    /// any time, including moving a Completed referral back to Pending.
    ReferralStatus, default = Pending, {
        Pending => "Pending",
        Accepted => "Accepted",
        Rejected => "Rejected",
        InProgress => "In Progress",
        Completed => "Completed",
    }
}

vocabulary! {
    /// Referral urgency
    UrgencyLevel, default = Routine, {
        Routine => "Routine",
        Urgent => "Urgent",
        Emergency => "Emergency",
    }
}

impl ReferralStatus {
    /// Statuses the usual workflow moves to next. Advisory only.
    pub fn usual_successors(&self) -> &'static [ReferralStatus] {
        match self {
            ReferralStatus::Pending => &[ReferralStatus::Accepted, ReferralStatus::Rejected],
            ReferralStatus::Accepted => &[ReferralStatus::InProgress],
            ReferralStatus::InProgress => &[ReferralStatus::Completed],
            ReferralStatus::Rejected | ReferralStatus::Completed => &[],
        }
    }

    /// Whether `next` follows the usual workflow from `self`
    pub fn is_usual_transition(&self, next: ReferralStatus) -> bool {
        self.usual_successors().contains(&next)
    }
}

impl UrgencyLevel {
    /// Urgent and Emergency referrals
    pub fn is_urgent(&self) -> bool {
        matches!(self, UrgencyLevel::Urgent | UrgencyLevel::Emergency)
    }
}

/// Parses an optional status column.
///
/// A blank or unrecognised value yields `None` so the caller keeps the
/// constructor default.
pub fn parse_lenient<T: FromStr>(raw: &str) -> Option<T> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::debug!(value = %raw, "Unrecognised status value, keeping default");
            None
        }
    }
}
