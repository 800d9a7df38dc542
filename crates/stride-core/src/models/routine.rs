//! Routine and exercise model definitions.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A single exercise prescription inside a routine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    /// Unique identifier for the exercise
    pub id: u64,

    /// Exercise name, e.g. "Pull-up"
    pub name: String,

    /// Primary muscle group worked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscle_group: Option<String>,

    /// Number of working sets (always positive)
    pub target_sets: u32,

    /// Free-form rep target such as "8-12", "5" or "Max"
    pub target_reps: String,

    /// Rest between sets, in seconds
    pub rest_seconds: u32,
}

/// A named, ordered template of exercises.
///
/// A routine's position in the routine list decides which rotation slot it
/// fills; its ID stays stable across edits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Routine {
    /// Unique identifier for the routine
    pub id: u64,

    /// Display name of the routine
    pub name: String,

    /// Optional notes about the routine's focus
    pub description: Option<String>,

    /// Exercises in the order they are performed
    #[serde(default)]
    pub exercises: Vec<Exercise>,

    /// Timestamp when the routine was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the routine was last modified (UTC)
    pub updated_at: Timestamp,
}

impl Routine {
    /// Looks up an exercise of this routine by ID.
    pub fn exercise(&self, id: u64) -> Option<&Exercise> {
        self.exercises.iter().find(|exercise| exercise.id == id)
    }

    /// Total prescribed sets across all exercises.
    pub fn total_sets(&self) -> u32 {
        self.exercises.iter().map(|exercise| exercise.target_sets).sum()
    }
}

/// Resolves a routine reference to a display name, falling back to a
/// placeholder for routines that have since been deleted.
pub fn routine_name(routines: &[Routine], id: u64) -> &str {
    routines
        .iter()
        .find(|routine| routine.id == id)
        .map_or(UNKNOWN_ROUTINE, |routine| routine.name.as_str())
}

/// Placeholder shown for dangling routine references.
pub const UNKNOWN_ROUTINE: &str = "Deleted routine";
