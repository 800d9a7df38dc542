//! Schedule entry model.

use serde::{Deserialize, Serialize};

use super::{DayKind, DayStatus};
use crate::schedule::DayKey;

/// One day of the derived schedule.
///
/// `routine_id` is present iff `kind` is [`DayKind::Workout`].
/// `previous_routine_id` remembers which routine a manually rested day held,
/// so toggling it back restores the same routine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleEntry {
    /// Calendar day of the entry
    pub date: DayKey,

    /// Workout or rest
    #[serde(rename = "type")]
    pub kind: DayKind,

    /// Routine assigned to a workout day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routine_id: Option<u64>,

    /// Whether a logged session backs this day
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub completed: bool,

    /// Routine this day held before being toggled to rest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_routine_id: Option<u64>,
}

impl ScheduleEntry {
    /// A rest day.
    pub fn rest(date: DayKey) -> Self {
        Self {
            date,
            kind: DayKind::Rest,
            routine_id: None,
            completed: false,
            previous_routine_id: None,
        }
    }

    /// A pending workout.
    pub fn planned(date: DayKey, routine_id: u64) -> Self {
        Self {
            date,
            kind: DayKind::Workout,
            routine_id: Some(routine_id),
            completed: false,
            previous_routine_id: None,
        }
    }

    /// A workout backed by a logged session.
    pub fn completed(date: DayKey, routine_id: u64) -> Self {
        Self {
            completed: true,
            ..Self::planned(date, routine_id)
        }
    }

    /// Whether this is a workout day.
    pub fn is_workout(&self) -> bool {
        self.kind == DayKind::Workout
    }

    /// Display status combining kind and completion.
    pub fn status(&self) -> DayStatus {
        match (self.kind, self.completed) {
            (DayKind::Rest, _) => DayStatus::Rest,
            (DayKind::Workout, true) => DayStatus::Completed,
            (DayKind::Workout, false) => DayStatus::Planned,
        }
    }
}
