//! In-process tables standing in for the external data store.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepoError {
    #[error("record not found")]
    NotFound,
    #[error("cannot change status from {from} to {to}")]
    InvalidTransition { from: String, to: String },
}

pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> Uuid;
    fn created_at(&self) -> DateTime<Utc>;
}

/// Rows kept in insertion order; listings come back newest first.
pub struct MemoryTable<T> {
    rows: Arc<RwLock<Vec<T>>>,
}

impl<T> Clone for MemoryTable<T> {
    fn clone(&self) -> Self {
        Self { rows: self.rows.clone() }
    }
}

impl<T: Record> Default for MemoryTable<T> {
    fn default() -> Self {
        Self { rows: Arc::new(RwLock::new(Vec::new())) }
    }
}

impl<T: Record> MemoryTable<T> {
    pub fn insert(&self, row: T) -> T {
        self.rows.write().push(row.clone());
        row
    }

    pub fn get(&self, id: Uuid) -> Result<T, RepoError> {
        self.rows.read().iter().find(|r| r.id() == id).cloned().ok_or(RepoError::NotFound)
    }

    pub fn list<F: Fn(&T) -> bool>(&self, filter: F) -> Vec<T> {
        let mut rows: Vec<T> = self.rows.read().iter().filter(|r| filter(*r)).cloned().collect();
        // equal timestamps keep insertion order, so later inserts end up first
        rows.sort_by_key(|r| r.created_at());
        rows.reverse();
        rows
    }

    /// Applies `f` to the row under the write lock; the row is left untouched
    /// when `f` fails.
    pub fn update<F>(&self, id: Uuid, f: F) -> Result<T, RepoError>
    where
        F: FnOnce(&mut T) -> Result<(), RepoError>,
    {
        let mut rows = self.rows.write();
        let row = rows.iter_mut().find(|r| r.id() == id).ok_or(RepoError::NotFound)?;
        let mut next = row.clone();
        f(&mut next)?;
        *row = next.clone();
        Ok(next)
    }

    pub fn delete(&self, id: Uuid) -> Result<T, RepoError> {
        let mut rows = self.rows.write();
        let idx = rows.iter().position(|r| r.id() == id).ok_or(RepoError::NotFound)?;
        Ok(rows.remove(idx))
    }

    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
