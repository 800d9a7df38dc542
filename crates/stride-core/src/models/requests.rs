//! Validated request types passed to the store.

use std::collections::BTreeMap;

use jiff::Timestamp;

use super::SetLog;

/// A session ready to be inserted.
#[derive(Debug, Clone)]
pub struct NewSession {
    pub routine_id: u64,
    pub timestamp: Timestamp,
    pub duration_seconds: u32,
    pub logs: BTreeMap<u64, Vec<SetLog>>,
    pub notes: Option<String>,
}

/// Changes applied by the session editor.
#[derive(Debug, Default)]
pub struct SessionChanges {
    pub routine_id: Option<u64>,
    pub timestamp: Option<Timestamp>,
    pub notes: Option<String>,
}

impl SessionChanges {
    /// Whether any field would change.
    pub fn is_empty(&self) -> bool {
        self.routine_id.is_none() && self.timestamp.is_none() && self.notes.is_none()
    }
}

/// Exercise fields supplied when creating or replacing an exercise.
#[derive(Debug, Clone)]
pub struct NewExercise {
    pub name: String,
    pub muscle_group: Option<String>,
    pub target_sets: u32,
    pub target_reps: String,
    pub rest_seconds: u32,
}
