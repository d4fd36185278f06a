//! Walk-in queue models.

use serde::{Deserialize, Serialize};

/// Status given to every new registration.
pub const INITIAL_STATUS: &str = "waiting";

/// A walk-in queue entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Registration {
    /// Auto-incremented key, shown as the sequence number
    pub id: i64,
    /// Patient name
    pub patient_name: String,
    /// Free-text status (e.g. "waiting", "done")
    pub status: String,
}

impl Registration {
    /// Whether the entry still carries the initial status.
    pub fn is_waiting(&self) -> bool {
        self.status == INITIAL_STATUS
    }
}
