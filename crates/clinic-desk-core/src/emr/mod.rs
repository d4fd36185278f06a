//! Visit service: record visit notes and page through a patient's history.

use thiserror::Error;

use crate::db::{Database, DbError, MAX_NAME_LEN};
use crate::models::{parse_date, NewVisit, PatientKey, VisitPage, VisitRecord};

/// Visit service errors.
#[derive(Error, Debug)]
pub enum EmrError {
    #[error("Invalid date format for {field}: {value:?} (expected YYYY-MM-DD)")]
    InvalidDateFormat { field: &'static str, value: String },

    #[error("No visit records for {name} ({birth_date})")]
    PatientNotFound { name: String, birth_date: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

pub type EmrResult<T> = Result<T, EmrError>;

/// Visit record operations over a borrowed database.
pub struct VisitService<'a> {
    db: &'a Database,
}

impl<'a> VisitService<'a> {
    /// Create a new visit service.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Find patients whose name contains `query`.
    ///
    /// Search is opt-in: an empty query returns nothing.
    pub fn search_patients(&self, query: &str) -> EmrResult<Vec<PatientKey>> {
        if query.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.db.search_patient_keys(query)?)
    }

    /// Validate and store a submitted visit.
    ///
    /// Nothing is written unless both dates parse and every field is filled in.
    pub fn create_visit(&self, visit: &NewVisit) -> EmrResult<VisitRecord> {
        let birth_date = parse_field("birth_date", &visit.birth_date)?;
        let visit_date = parse_field("visit_date", &visit.visit_date)?;

        require("name", &visit.name)?;
        require("symptoms", &visit.symptoms)?;
        require("treatment", &visit.treatment)?;
        if visit.name.chars().count() > MAX_NAME_LEN {
            return Err(EmrError::InvalidInput(format!(
                "name must be at most {MAX_NAME_LEN} characters"
            )));
        }

        let record = self.db.insert_visit(
            &visit.name,
            birth_date,
            visit_date,
            &visit.symptoms,
            &visit.treatment,
        )?;
        tracing::info!(id = record.id, visit_date = %record.visit_date, "visit recorded");
        Ok(record)
    }

    /// Load one visit of a patient by its position in the newest-first history.
    ///
    /// An `index` outside `0..total` falls back to the most recent visit.
    pub fn get_patient_visits(
        &self,
        name: &str,
        birth_date: &str,
        index: i64,
    ) -> EmrResult<VisitPage> {
        let birth = parse_field("birth_date", birth_date)?;
        let mut visits = self.db.list_patient_visits(name, birth)?;

        if visits.is_empty() {
            return Err(EmrError::PatientNotFound {
                name: name.to_string(),
                birth_date: birth.to_string(),
            });
        }

        let total = visits.len();
        let index = clamp_index(index, total);
        let record = visits.swap_remove(index);

        Ok(VisitPage {
            record,
            index,
            total,
        })
    }
}

/// Clamp a requested history position to `0` when it falls outside `0..total`.
pub fn clamp_index(index: i64, total: usize) -> usize {
    match usize::try_from(index) {
        Ok(i) if i < total => i,
        _ => 0,
    }
}

fn parse_field(field: &'static str, value: &str) -> EmrResult<chrono::NaiveDate> {
    parse_date(value).map_err(|_| EmrError::InvalidDateFormat {
        field,
        value: value.to_string(),
    })
}

fn require(field: &str, value: &str) -> EmrResult<()> {
    if value.trim().is_empty() {
        return Err(EmrError::InvalidInput(format!("{field} is required")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_visit(name: &str, birth: &str, visit: &str) -> NewVisit {
        NewVisit {
            name: name.into(),
            birth_date: birth.into(),
            visit_date: visit.into(),
            symptoms: "headache".into(),
            treatment: "ibuprofen".into(),
        }
    }

    #[test]
    fn test_create_then_lookup() {
        let db = Database::open_in_memory().unwrap();
        let service = VisitService::new(&db);

        let created = service
            .create_visit(&new_visit("Kim", "1985-04-12", "2024-05-01"))
            .unwrap();

        let page = service.get_patient_visits("Kim", "1985-04-12", 0).unwrap();
        assert_eq!(page.record, created);
        assert_eq!(page.index, 0);
        assert_eq!(page.total, 1);
    }

    #[test]
    fn test_create_rejects_bad_dates() {
        let db = Database::open_in_memory().unwrap();
        let service = VisitService::new(&db);

        let err = service
            .create_visit(&new_visit("Kim", "1985/04/12", "2024-05-01"))
            .unwrap_err();
        assert!(matches!(err, EmrError::InvalidDateFormat { field: "birth_date", .. }));

        let err = service
            .create_visit(&new_visit("Kim", "1985-04-12", "not-a-date"))
            .unwrap_err();
        assert!(matches!(err, EmrError::InvalidDateFormat { field: "visit_date", .. }));

        assert_eq!(db.count_visits().unwrap(), 0);
    }

    #[test]
    fn test_create_rejects_blank_fields() {
        let db = Database::open_in_memory().unwrap();
        let service = VisitService::new(&db);

        let mut visit = new_visit("Kim", "1985-04-12", "2024-05-01");
        visit.symptoms = "   ".into();
        assert!(matches!(
            service.create_visit(&visit),
            Err(EmrError::InvalidInput(_))
        ));

        let long = new_visit(&"K".repeat(MAX_NAME_LEN + 1), "1985-04-12", "2024-05-01");
        assert!(matches!(
            service.create_visit(&long),
            Err(EmrError::InvalidInput(_))
        ));

        assert_eq!(db.count_visits().unwrap(), 0);
    }

    #[test]
    fn test_history_is_newest_first() {
        let db = Database::open_in_memory().unwrap();
        let service = VisitService::new(&db);
        for visit in ["2024-01-01", "2024-03-01", "2024-02-01"] {
            service
                .create_visit(&new_visit("Kim", "1985-04-12", visit))
                .unwrap();
        }

        let dates: Vec<String> = (0..3)
            .map(|i| {
                service
                    .get_patient_visits("Kim", "1985-04-12", i)
                    .unwrap()
                    .record
                    .visit_date
                    .to_string()
            })
            .collect();
        assert_eq!(dates, vec!["2024-03-01", "2024-02-01", "2024-01-01"]);
    }

    #[test]
    fn test_out_of_range_index_shows_most_recent() {
        let db = Database::open_in_memory().unwrap();
        let service = VisitService::new(&db);
        for visit in ["2024-01-01", "2024-03-01"] {
            service
                .create_visit(&new_visit("Kim", "1985-04-12", visit))
                .unwrap();
        }

        for index in [2, -1, i64::MAX, i64::MIN] {
            let page = service.get_patient_visits("Kim", "1985-04-12", index).unwrap();
            assert_eq!(page.index, 0);
            assert_eq!(page.record.visit_date.to_string(), "2024-03-01");
        }
    }

    #[test]
    fn test_lookup_errors() {
        let db = Database::open_in_memory().unwrap();
        let service = VisitService::new(&db);

        assert!(matches!(
            service.get_patient_visits("Kim", "1985-04-12", 0),
            Err(EmrError::PatientNotFound { .. })
        ));
        assert!(matches!(
            service.get_patient_visits("Kim", "12/04/1985", 0),
            Err(EmrError::InvalidDateFormat { .. })
        ));
    }

    #[test]
    fn test_empty_search_returns_nothing() {
        let db = Database::open_in_memory().unwrap();
        let service = VisitService::new(&db);
        service
            .create_visit(&new_visit("Kim", "1985-04-12", "2024-01-01"))
            .unwrap();

        assert!(service.search_patients("").unwrap().is_empty());
        assert_eq!(service.search_patients("Ki").unwrap().len(), 1);
    }

    #[test]
    fn test_clamp_index() {
        assert_eq!(clamp_index(0, 3), 0);
        assert_eq!(clamp_index(2, 3), 2);
        assert_eq!(clamp_index(3, 3), 0);
        assert_eq!(clamp_index(-1, 3), 0);
    }
}
