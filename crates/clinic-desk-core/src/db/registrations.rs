//! Registration (walk-in queue) database operations.

use rusqlite::{params, OptionalExtension};

use super::{classify, Database, DbResult};
use crate::models::Registration;

impl Database {
    /// Insert a registration and return it with its sequence number.
    pub fn insert_registration(&self, patient_name: &str, status: &str) -> DbResult<Registration> {
        self.conn
            .execute(
                "INSERT INTO registrations (patient_name, status) VALUES (?1, ?2)",
                params![patient_name, status],
            )
            .map_err(classify)?;

        Ok(Registration {
            id: self.conn.last_insert_rowid(),
            patient_name: patient_name.to_string(),
            status: status.to_string(),
        })
    }

    /// Overwrite name and status. Returns false when the ID does not exist.
    pub fn update_registration(&self, id: i64, patient_name: &str, status: &str) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute(
                "UPDATE registrations SET patient_name = ?2, status = ?3 WHERE id = ?1",
                params![id, patient_name, status],
            )
            .map_err(classify)?;
        Ok(rows_affected > 0)
    }

    /// Get a registration by ID.
    pub fn get_registration(&self, id: i64) -> DbResult<Option<Registration>> {
        self.conn
            .query_row(
                "SELECT id, patient_name, status FROM registrations WHERE id = ?",
                [id],
                |row| {
                    Ok(Registration {
                        id: row.get(0)?,
                        patient_name: row.get(1)?,
                        status: row.get(2)?,
                    })
                },
            )
            .optional()
            .map_err(Into::into)
    }

    /// List all registrations in sequence order.
    pub fn list_registrations(&self) -> DbResult<Vec<Registration>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, patient_name, status FROM registrations ORDER BY id")?;

        let rows = stmt.query_map([], |row| {
            Ok(Registration {
                id: row.get(0)?,
                patient_name: row.get(1)?,
                status: row.get(2)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Delete a registration. Returns false when the ID does not exist.
    pub fn delete_registration(&self, id: i64) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM registrations WHERE id = ?", [id])
            .map_err(classify)?;
        Ok(rows_affected > 0)
    }

    /// Delete every registration and restart the sequence at 1.
    ///
    /// Both statements run in one transaction. Returns the number of rows removed.
    pub fn reset_registrations(&self) -> DbResult<usize> {
        let tx = self.conn.unchecked_transaction()?;
        let removed = tx.execute("DELETE FROM registrations", [])?;
        tx.execute("DELETE FROM sqlite_sequence WHERE name = 'registrations'", [])?;
        tx.commit()?;
        Ok(removed)
    }
}
