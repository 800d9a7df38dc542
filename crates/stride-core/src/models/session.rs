//! Workout session model definitions.

use std::collections::BTreeMap;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// One performed set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SetLog {
    /// Repetitions completed
    pub reps: u32,

    /// Extra load in kilograms, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_added: Option<f64>,
}

/// A completed (or back-logged) workout.
///
/// `routine_id` may refer to a routine that no longer exists; sessions are
/// never removed when their routine is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutSession {
    /// Unique identifier for the session
    pub id: u64,

    /// Routine that was performed
    pub routine_id: u64,

    /// Instant the session finished, or local noon for back-logged days
    pub timestamp: Timestamp,

    /// Wall-clock duration in seconds (0 for manual logs)
    pub duration_seconds: u32,

    /// Sets performed, keyed by exercise ID
    #[serde(default)]
    pub logs: BTreeMap<u64, Vec<SetLog>>,

    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl WorkoutSession {
    /// Total repetitions across every logged set.
    pub fn volume(&self) -> u64 {
        self.logs
            .values()
            .flat_map(|sets| sets.iter())
            .map(|set| u64::from(set.reps))
            .sum()
    }

    /// Number of logged sets.
    pub fn set_count(&self) -> usize {
        self.logs.values().map(Vec::len).sum()
    }
}

/// Drops sets with zero reps and exercises left without any set.
pub fn clean_logs(logs: BTreeMap<u64, Vec<SetLog>>) -> BTreeMap<u64, Vec<SetLog>> {
    logs.into_iter()
        .filter_map(|(exercise_id, sets)| {
            let sets: Vec<SetLog> = sets.into_iter().filter(|set| set.reps > 0).collect();
            (!sets.is_empty()).then_some((exercise_id, sets))
        })
        .collect()
}
