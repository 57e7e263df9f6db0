use chrono::Utc;
use uuid::Uuid;

use crate::plugins::contacts::models::{ContactMessage, ContactStatus};
use crate::store::{MemoryTable, RepoError};

/// Validated fields of a new message.
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
}

#[derive(Clone, Default)]
pub struct ContactRepo {
    table: MemoryTable<ContactMessage>,
}

impl ContactRepo {
    pub fn insert_contact(&self, new: NewContact) -> ContactMessage {
        let now = Utc::now();
        self.table.insert(ContactMessage {
            id: Uuid::new_v4(),
            name: new.name,
            email: new.email,
            phone: new.phone,
            subject: new.subject,
            message: new.message,
            status: ContactStatus::Unread,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn get_contact(&self, id: Uuid) -> Result<ContactMessage, RepoError> {
        self.table.get(id)
    }

    pub fn list_contacts(&self, status: Option<ContactStatus>) -> Vec<ContactMessage> {
        self.table.list(|c| status.map_or(true, |s| c.status == s))
    }

    /// Returns the previous status alongside the updated message.
    pub fn set_status(&self, id: Uuid, status: ContactStatus) -> Result<(ContactStatus, ContactMessage), RepoError> {
        let mut previous = status;
        let updated = self.table.update(id, |c| {
            previous = c.status;
            if c.status != status {
                c.status = status;
                c.updated_at = Utc::now();
            }
            Ok(())
        })?;
        Ok((previous, updated))
    }

    pub fn delete_contact(&self, id: Uuid) -> Result<ContactMessage, RepoError> {
        self.table.delete(id)
    }

    pub fn count(&self) -> usize {
        self.table.len()
    }
}
