use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::store::{Record, RepoError};

/// Self-reported by the student. Unlike a class level there is no
/// "all levels" here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl RegistrationStatus {
    /// Cancelled registrations are final; a new registration is required.
    pub fn check_transition(self, to: RegistrationStatus) -> Result<(), RepoError> {
        match (self, to) {
            (RegistrationStatus::Cancelled, to) if to != RegistrationStatus::Cancelled => {
                Err(RepoError::InvalidTransition { from: self.to_string(), to: to.to_string() })
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RegistrationStatus::Pending => "pending",
            RegistrationStatus::Confirmed => "confirmed",
            RegistrationStatus::Cancelled => "cancelled",
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Registration {
    pub id: Uuid,
    pub class_slug: String,
    pub student_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub experience_level: Option<ExperienceLevel>,
    pub notes: Option<String>,
    pub status: RegistrationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Registration {
    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RegistrationCreate {
    pub class_slug: String,
    pub student_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub experience_level: Option<ExperienceLevel>,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RegistrationStatusUpdate {
    pub status: RegistrationStatus,
}
