//! Database layer for the clinic front desk.

mod schema;
mod registrations;
mod visits;

pub use schema::*;

use rusqlite::Connection;
use std::path::Path;
use thiserror::Error;

/// Database errors.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

pub type DbResult<T> = Result<T, DbError>;

/// Database connection wrapper.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open database at path, creating if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    /// Create in-memory database (for testing).
    pub fn open_in_memory() -> DbResult<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    /// Initialize schema.
    fn initialize(&self) -> DbResult<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Get raw connection (for advanced queries).
    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}

/// Map CHECK/NOT NULL failures to [`DbError::Constraint`], keep the rest as-is.
pub(crate) fn classify(err: rusqlite::Error) -> DbError {
    match err {
        rusqlite::Error::SqliteFailure(ref code, ref msg)
            if code.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            DbError::Constraint(msg.clone().unwrap_or_else(|| code.to_string()))
        }
        other => DbError::Sqlite(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_in_memory() {
        let db = Database::open_in_memory();
        assert!(db.is_ok());
    }

    #[test]
    fn test_schema_initialized() {
        let db = Database::open_in_memory().unwrap();

        let tables: Vec<String> = db
            .conn()
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        assert!(tables.contains(&"visit_records".to_string()));
        assert!(tables.contains(&"registrations".to_string()));
        assert!(tables.contains(&"sqlite_sequence".to_string()));
    }

    #[test]
    fn test_reopen_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("desk.db");

        Database::open(&path).unwrap();
        assert!(Database::open(&path).is_ok());
    }

    #[test]
    fn test_name_length_is_constrained() {
        let db = Database::open_in_memory().unwrap();
        let long_name = "x".repeat(MAX_NAME_LEN + 1);

        let err = db
            .conn()
            .execute(
                "INSERT INTO registrations (patient_name, status) VALUES (?1, 'waiting')",
                [&long_name],
            )
            .map_err(classify)
            .unwrap_err();
        assert!(matches!(err, DbError::Constraint(_)));
    }
}
