use chrono::Utc;
use uuid::Uuid;

use crate::plugins::registrations::models::{ExperienceLevel, Registration, RegistrationStatus};
use crate::store::{MemoryTable, RepoError};

pub struct NewRegistration {
    pub class_slug: String,
    pub student_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub experience_level: Option<ExperienceLevel>,
    pub notes: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct RegistrationFilter {
    pub status: Option<RegistrationStatus>,
    pub class_slug: Option<String>,
}

#[derive(Clone, Default)]
pub struct RegistrationRepo {
    table: MemoryTable<Registration>,
}

impl RegistrationRepo {
    pub fn insert_registration(&self, new: NewRegistration) -> Registration {
        let now = Utc::now();
        self.table.insert(Registration {
            id: Uuid::new_v4(),
            class_slug: new.class_slug,
            student_name: new.student_name,
            email: new.email,
            phone: new.phone,
            experience_level: new.experience_level,
            notes: new.notes,
            status: RegistrationStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn get_registration(&self, id: Uuid) -> Result<Registration, RepoError> {
        self.table.get(id)
    }

    pub fn list_registrations(&self, filter: &RegistrationFilter) -> Vec<Registration> {
        self.table.list(|r| {
            filter.status.map_or(true, |s| r.status == s)
                && filter.class_slug.as_deref().map_or(true, |slug| r.class_slug == slug)
        })
    }

    /// Returns the previous status alongside the updated registration.
    pub fn set_status(&self, id: Uuid, status: RegistrationStatus) -> Result<(RegistrationStatus, Registration), RepoError> {
        let mut previous = status;
        let updated = self.table.update(id, |r| {
            previous = r.status;
            r.status.check_transition(status)?;
            if r.status != status {
                r.status = status;
                r.updated_at = Utc::now();
            }
            Ok(())
        })?;
        Ok((previous, updated))
    }

    pub fn delete_registration(&self, id: Uuid) -> Result<Registration, RepoError> {
        self.table.delete(id)
    }

    pub fn count(&self) -> usize {
        self.table.len()
    }
}
