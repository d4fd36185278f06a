//! Visit (EMR) models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format accepted for every user-supplied date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single visit note. Immutable once stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VisitRecord {
    /// Store-assigned key
    pub id: i64,
    /// Patient name
    pub name: String,
    /// Patient date of birth
    pub birth_date: NaiveDate,
    /// Date of the visit
    pub visit_date: NaiveDate,
    /// Presenting symptoms
    pub symptoms: String,
    /// Treatment given
    pub treatment: String,
}

/// A visit as submitted from the entry form, dates still unparsed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewVisit {
    pub name: String,
    pub birth_date: String,
    pub visit_date: String,
    pub symptoms: String,
    pub treatment: String,
}

/// The pair that identifies a patient for search and grouping.
///
/// Not a unique key: one patient has one [`VisitRecord`] per visit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PatientKey {
    pub name: String,
    pub birth_date: NaiveDate,
}

/// One record out of a patient's history, newest first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VisitPage {
    /// The record at `index`
    pub record: VisitRecord,
    /// Position in the date-descending history (0 = most recent)
    pub index: usize,
    /// Number of visits on file for this patient
    pub total: usize,
}

impl VisitPage {
    /// Whether a more recent visit exists.
    pub fn has_newer(&self) -> bool {
        self.index > 0
    }

    /// Whether an older visit exists.
    pub fn has_older(&self) -> bool {
        self.index + 1 < self.total
    }

    /// Index of the next more recent visit, if any.
    pub fn newer_index(&self) -> Option<usize> {
        self.has_newer().then(|| self.index - 1)
    }

    /// Index of the next older visit, if any.
    pub fn older_index(&self) -> Option<usize> {
        self.has_older().then(|| self.index + 1)
    }
}

/// Parse a user-supplied `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(input, DATE_FORMAT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(index: usize, total: usize) -> VisitPage {
        VisitPage {
            record: VisitRecord {
                id: 1,
                name: "Kim".into(),
                birth_date: NaiveDate::from_ymd_opt(1990, 5, 1).unwrap(),
                visit_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                symptoms: "cough".into(),
                treatment: "rest".into(),
            },
            index,
            total,
        }
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-03-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert!(parse_date("2024/01/01").is_err());
        assert!(parse_date("not-a-date").is_err());
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_navigation_single_visit() {
        let p = page(0, 1);
        assert!(!p.has_newer());
        assert!(!p.has_older());
        assert_eq!(p.newer_index(), None);
        assert_eq!(p.older_index(), None);
    }

    #[test]
    fn test_navigation_middle_visit() {
        let p = page(1, 3);
        assert_eq!(p.newer_index(), Some(0));
        assert_eq!(p.older_index(), Some(2));
    }
}
