//! Clinic Desk Core Library
//!
//! Record store and services behind a single-operator clinic front desk.
//!
//! # Architecture
//!
//! ```text
//!            HTTP handler
//!                 │
//!           ClinicDesk (Arc<Mutex<Database>>)
//!                 │
//!        ┌────────┴────────┐
//!        ▼                 ▼
//!   VisitService      QueueService
//!        │                 │
//!        └────────┬────────┘
//!                 ▼
//!         SQLite (visit_records, registrations)
//! ```
//!
//! # Modules
//!
//! - [`db`]: SQLite database layer
//! - [`models`]: Domain types (VisitRecord, Registration, ...)
//! - [`emr`]: Visit notes and per-patient history paging
//! - [`queue`]: Walk-in registration queue
//! - [`auth`]: Operator credential check

pub mod auth;
pub mod db;
pub mod emr;
pub mod models;
pub mod queue;

// Re-export commonly used types
pub use auth::{AuthError, Authenticator, Credentials, Principal, StaticCredentials};
pub use db::Database;
pub use emr::VisitService;
pub use models::{NewVisit, PatientKey, Registration, VisitPage, VisitRecord, INITIAL_STATUS};
pub use queue::QueueService;

use std::path::Path;
use std::sync::{Arc, Mutex};

// =========================================================================
// Error Type
// =========================================================================

#[derive(Debug, thiserror::Error)]
pub enum ClinicDeskError {
    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    #[error("Patient not found: {0}")]
    PatientNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<db::DbError> for ClinicDeskError {
    fn from(e: db::DbError) -> Self {
        ClinicDeskError::DatabaseError(e.to_string())
    }
}

impl From<emr::EmrError> for ClinicDeskError {
    fn from(e: emr::EmrError) -> Self {
        match e {
            emr::EmrError::InvalidDateFormat { .. } => {
                ClinicDeskError::InvalidDateFormat(e.to_string())
            }
            emr::EmrError::PatientNotFound { .. } => {
                ClinicDeskError::PatientNotFound(e.to_string())
            }
            emr::EmrError::InvalidInput(msg) => ClinicDeskError::InvalidInput(msg),
            emr::EmrError::Database(db) => db.into(),
        }
    }
}

impl From<queue::QueueError> for ClinicDeskError {
    fn from(e: queue::QueueError) -> Self {
        match e {
            queue::QueueError::InvalidInput(msg) => ClinicDeskError::InvalidInput(msg),
            queue::QueueError::Database(db) => db.into(),
        }
    }
}

impl<T> From<std::sync::PoisonError<T>> for ClinicDeskError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        ClinicDeskError::DatabaseError(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe database handle shared by request handlers.
#[derive(Clone)]
pub struct ClinicDesk {
    db: Arc<Mutex<Database>>,
}

impl ClinicDesk {
    /// Open or create a database at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ClinicDeskError> {
        let db = Database::open(path)?;
        Ok(Self::from_database(db))
    }

    /// Create an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, ClinicDeskError> {
        let db = Database::open_in_memory()?;
        Ok(Self::from_database(db))
    }

    /// Wrap an already opened database.
    pub fn from_database(db: Database) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
        }
    }

    // =========================================================================
    // Visit Operations
    // =========================================================================

    /// Search patients by name substring.
    pub fn search_patients(&self, query: &str) -> Result<Vec<PatientKey>, ClinicDeskError> {
        let db = self.db.lock()?;
        Ok(VisitService::new(&db).search_patients(query)?)
    }

    /// Record a new visit.
    pub fn create_visit(&self, visit: &NewVisit) -> Result<VisitRecord, ClinicDeskError> {
        let db = self.db.lock()?;
        Ok(VisitService::new(&db).create_visit(visit)?)
    }

    /// Get one visit of a patient, newest first.
    pub fn get_patient_visits(
        &self,
        name: &str,
        birth_date: &str,
        index: i64,
    ) -> Result<VisitPage, ClinicDeskError> {
        let db = self.db.lock()?;
        Ok(VisitService::new(&db).get_patient_visits(name, birth_date, index)?)
    }

    // =========================================================================
    // Registration Operations
    // =========================================================================

    /// List the walk-in queue.
    pub fn list_registrations(&self) -> Result<Vec<Registration>, ClinicDeskError> {
        let db = self.db.lock()?;
        Ok(QueueService::new(&db).list_registrations()?)
    }

    /// Add a walk-in patient.
    pub fn add_registration(&self, patient_name: &str) -> Result<Registration, ClinicDeskError> {
        let db = self.db.lock()?;
        Ok(QueueService::new(&db).add_registration(patient_name)?)
    }

    /// Update name and status; unknown IDs are ignored.
    pub fn update_registration(
        &self,
        id: i64,
        patient_name: &str,
        status: &str,
    ) -> Result<bool, ClinicDeskError> {
        let db = self.db.lock()?;
        Ok(QueueService::new(&db).update_registration(id, patient_name, status)?)
    }

    /// Delete a registration; unknown IDs are ignored.
    pub fn delete_registration(&self, id: i64) -> Result<bool, ClinicDeskError> {
        let db = self.db.lock()?;
        Ok(QueueService::new(&db).delete_registration(id)?)
    }

    /// Delete every registration and restart numbering at 1.
    pub fn reset_registrations(&self) -> Result<usize, ClinicDeskError> {
        let db = self.db.lock()?;
        Ok(QueueService::new(&db).reset_registrations()?)
    }
}
