//! Visit record database operations.

use chrono::NaiveDate;
use rusqlite::{params, Row};

use super::{classify, Database, DbResult};
use crate::models::{PatientKey, VisitRecord};

fn visit_from_row(row: &Row<'_>) -> rusqlite::Result<VisitRecord> {
    Ok(VisitRecord {
        id: row.get(0)?,
        name: row.get(1)?,
        birth_date: row.get(2)?,
        visit_date: row.get(3)?,
        symptoms: row.get(4)?,
        treatment: row.get(5)?,
    })
}

impl Database {
    /// Insert a new visit record and return it with its assigned ID.
    pub fn insert_visit(
        &self,
        name: &str,
        birth_date: NaiveDate,
        visit_date: NaiveDate,
        symptoms: &str,
        treatment: &str,
    ) -> DbResult<VisitRecord> {
        self.conn
            .execute(
                r#"
                INSERT INTO visit_records (name, birth_date, visit_date, symptoms, treatment)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
                params![name, birth_date, visit_date, symptoms, treatment],
            )
            .map_err(classify)?;

        Ok(VisitRecord {
            id: self.conn.last_insert_rowid(),
            name: name.to_string(),
            birth_date,
            visit_date,
            symptoms: symptoms.to_string(),
            treatment: treatment.to_string(),
        })
    }

    /// Distinct (name, birth_date) pairs whose name contains `query` literally.
    pub fn search_patient_keys(&self, query: &str) -> DbResult<Vec<PatientKey>> {
        // instr() keeps '%' and '_' in the query literal and is case-sensitive.
        let mut stmt = self.conn.prepare(
            r#"
            SELECT DISTINCT name, birth_date
            FROM visit_records
            WHERE instr(name, ?1) > 0
            ORDER BY name, birth_date
            "#,
        )?;

        let rows = stmt.query_map([query], |row| {
            Ok(PatientKey {
                name: row.get(0)?,
                birth_date: row.get(1)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// All visits of one patient, most recent visit first.
    pub fn list_patient_visits(
        &self,
        name: &str,
        birth_date: NaiveDate,
    ) -> DbResult<Vec<VisitRecord>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, name, birth_date, visit_date, symptoms, treatment
            FROM visit_records
            WHERE name = ?1 AND birth_date = ?2
            ORDER BY visit_date DESC, id DESC
            "#,
        )?;

        let rows = stmt.query_map(params![name, birth_date], visit_from_row)?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Count all stored visit records.
    #[cfg(test)]
    pub(crate) fn count_visits(&self) -> DbResult<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM visit_records", [], |row| row.get(0))
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_db() -> Database {
        Database::open_in_memory().unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_insert_and_list() {
        let db = setup_db();

        let inserted = db
            .insert_visit("Kim Minsu", date("1985-04-12"), date("2024-01-01"), "fever", "rest")
            .unwrap();
        assert!(inserted.id > 0);

        let visits = db.list_patient_visits("Kim Minsu", date("1985-04-12")).unwrap();
        assert_eq!(visits, vec![inserted]);
    }

    #[test]
    fn test_dates_stored_as_iso_text() {
        let db = setup_db();
        db.insert_visit("Kim", date("1985-04-12"), date("2024-01-01"), "fever", "rest").unwrap();

        let raw: String = db
            .conn()
            .query_row("SELECT visit_date FROM visit_records", [], |row| row.get(0))
            .unwrap();
        assert_eq!(raw, "2024-01-01");
    }

    #[test]
    fn test_list_orders_by_visit_date_desc() {
        let db = setup_db();
        let birth = date("1985-04-12");

        for visit in ["2024-01-01", "2024-03-01", "2024-02-01"] {
            db.insert_visit("Kim", birth, date(visit), "s", "t").unwrap();
        }

        let dates: Vec<String> = db
            .list_patient_visits("Kim", birth)
            .unwrap()
            .into_iter()
            .map(|v| v.visit_date.to_string())
            .collect();
        assert_eq!(dates, vec!["2024-03-01", "2024-02-01", "2024-01-01"]);
    }

    #[test]
    fn test_list_requires_exact_pair() {
        let db = setup_db();
        db.insert_visit("Kim", date("1985-04-12"), date("2024-01-01"), "s", "t").unwrap();
        db.insert_visit("Kim", date("1990-01-01"), date("2024-01-02"), "s", "t").unwrap();
        db.insert_visit("Kimberly", date("1985-04-12"), date("2024-01-03"), "s", "t").unwrap();

        let visits = db.list_patient_visits("Kim", date("1985-04-12")).unwrap();
        assert_eq!(visits.len(), 1);
        assert_eq!(visits[0].visit_date, date("2024-01-01"));
    }

    #[test]
    fn test_search_patient_keys_is_distinct() {
        let db = setup_db();
        db.insert_visit("Kim", date("1985-04-12"), date("2024-01-01"), "s", "t").unwrap();
        db.insert_visit("Kim", date("1985-04-12"), date("2024-02-01"), "s", "t").unwrap();
        db.insert_visit("Park Kim", date("1970-07-07"), date("2024-02-01"), "s", "t").unwrap();
        db.insert_visit("Lee", date("1970-07-07"), date("2024-02-01"), "s", "t").unwrap();

        let keys = db.search_patient_keys("Kim").unwrap();
        assert_eq!(
            keys,
            vec![
                PatientKey {
                    name: "Kim".into(),
                    birth_date: date("1985-04-12"),
                },
                PatientKey {
                    name: "Park Kim".into(),
                    birth_date: date("1970-07-07"),
                },
            ]
        );
    }

    #[test]
    fn test_search_treats_wildcards_literally() {
        let db = setup_db();
        db.insert_visit("Kim", date("1985-04-12"), date("2024-01-01"), "s", "t").unwrap();

        assert!(db.search_patient_keys("%").unwrap().is_empty());
        assert!(db.search_patient_keys("K_m").unwrap().is_empty());
    }

    #[test]
    fn test_count_visits() {
        let db = setup_db();
        assert_eq!(db.count_visits().unwrap(), 0);
        db.insert_visit("Kim", date("1985-04-12"), date("2024-01-01"), "s", "t").unwrap();
        assert_eq!(db.count_visits().unwrap(), 1);
    }
}
