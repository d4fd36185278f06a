//! SQLite schema definition.

/// Maximum length of patient names and registration statuses.
pub const MAX_NAME_LEN: usize = 100;

/// Complete database schema for the front desk.
pub const SCHEMA: &str = r#"
-- ============================================================================
-- Visit Records (EMR - append-only)
-- ============================================================================

CREATE TABLE IF NOT EXISTS visit_records (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL CHECK (length(name) <= 100),
    birth_date TEXT NOT NULL,                    -- YYYY-MM-DD
    visit_date TEXT NOT NULL,                    -- YYYY-MM-DD
    symptoms TEXT NOT NULL,
    treatment TEXT NOT NULL
);

-- Patient lookup is always by (name, birth_date), newest visit first
CREATE INDEX IF NOT EXISTS idx_visits_patient
    ON visit_records(name, birth_date, visit_date DESC);

-- ============================================================================
-- Registrations (walk-in queue - mutable)
-- ============================================================================

-- AUTOINCREMENT so deleted sequence numbers are never handed out again
-- until the queue is reset.
CREATE TABLE IF NOT EXISTS registrations (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    patient_name TEXT NOT NULL CHECK (length(patient_name) <= 100),
    status TEXT NOT NULL CHECK (length(status) <= 100)
);
"#;
