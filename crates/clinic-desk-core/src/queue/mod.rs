//! Queue service: the walk-in registration list.
//!
//! Updates and deletes of an unknown ID are silent no-ops so that a
//! repeated form submission never surfaces as an error.

use thiserror::Error;

use crate::db::{Database, DbError, MAX_NAME_LEN};
use crate::models::{Registration, INITIAL_STATUS};

/// Queue service errors.
#[derive(Error, Debug)]
pub enum QueueError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

pub type QueueResult<T> = Result<T, QueueError>;

/// Registration operations over a borrowed database.
pub struct QueueService<'a> {
    db: &'a Database,
}

impl<'a> QueueService<'a> {
    /// Create a new queue service.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// All registrations in sequence order.
    pub fn list_registrations(&self) -> QueueResult<Vec<Registration>> {
        Ok(self.db.list_registrations()?)
    }

    /// Register a walk-in patient with the initial status.
    pub fn add_registration(&self, patient_name: &str) -> QueueResult<Registration> {
        require("patient_name", patient_name)?;
        check_len("patient_name", patient_name)?;
        let registration = self.db.insert_registration(patient_name, INITIAL_STATUS)?;
        tracing::info!(id = registration.id, "registration added");
        Ok(registration)
    }

    /// Overwrite name and status of an existing registration.
    ///
    /// Any text is accepted, including blank text, up to the store's length
    /// bound. An unknown ID is ignored before the values are looked at.
    /// Returns whether a registration was changed.
    pub fn update_registration(
        &self,
        id: i64,
        patient_name: &str,
        status: &str,
    ) -> QueueResult<bool> {
        if self.db.get_registration(id)?.is_none() {
            tracing::debug!(id, "update of unknown registration ignored");
            return Ok(false);
        }

        check_len("patient_name", patient_name)?;
        check_len("status", status)?;
        let updated = self.db.update_registration(id, patient_name, status)?;
        if updated {
            tracing::info!(id, status, "registration updated");
        }
        Ok(updated)
    }

    /// Remove one registration. Returns whether it existed.
    pub fn delete_registration(&self, id: i64) -> QueueResult<bool> {
        let deleted = self.db.delete_registration(id)?;
        if deleted {
            tracing::info!(id, "registration deleted");
        } else {
            tracing::debug!(id, "delete of unknown registration ignored");
        }
        Ok(deleted)
    }

    /// Clear the queue and restart numbering at 1.
    pub fn reset_registrations(&self) -> QueueResult<usize> {
        let removed = self.db.reset_registrations()?;
        tracing::warn!(removed, "registration queue reset");
        Ok(removed)
    }
}

fn require(field: &str, value: &str) -> QueueResult<()> {
    if value.trim().is_empty() {
        return Err(QueueError::InvalidInput(format!("{field} is required")));
    }
    Ok(())
}

fn check_len(field: &str, value: &str) -> QueueResult<()> {
    if value.chars().count() > MAX_NAME_LEN {
        return Err(QueueError::InvalidInput(format!(
            "{field} must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}
