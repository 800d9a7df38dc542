//! Dashboard summary derived from history and the stored schedule.

use serde::{Deserialize, Serialize};

use super::{routine_name, Routine, ScheduleEntry, WorkoutSession};
use crate::schedule::{DateNormalizer, DayKey};

/// Number of most recent sessions included in the volume trend.
pub const RECENT_SESSIONS: usize = 10;

/// Total reps of one session, keyed by the day it was performed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VolumePoint {
    pub day: DayKey,
    pub volume: u64,
}

/// A scheduled day together with its resolved routine name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduledDay {
    pub entry: ScheduleEntry,
    pub routine_name: Option<String>,
}

impl ScheduledDay {
    fn resolve(entry: &ScheduleEntry, routines: &[Routine]) -> Self {
        Self {
            entry: entry.clone(),
            routine_name: entry
                .routine_id
                .map(|id| routine_name(routines, id).to_string()),
        }
    }
}

/// At-a-glance training status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Overview {
    /// Today's calendar day
    pub today: DayKey,

    /// Today's schedule entry, if one exists
    pub today_entry: Option<ScheduledDay>,

    /// First workout on or after today that is not yet completed
    pub next_workout: Option<ScheduledDay>,

    pub routine_count: usize,
    pub total_sessions: usize,
    pub total_duration_seconds: u64,

    /// Volume of the most recent sessions, oldest first
    pub recent_volume: Vec<VolumePoint>,
}

impl Overview {
    /// Summarizes the current state. `schedule` must be sorted by day.
    pub fn compute(
        routines: &[Routine],
        history: &[WorkoutSession],
        schedule: &[ScheduleEntry],
        normalizer: &DateNormalizer,
    ) -> Self {
        let today = normalizer.today();

        let today_entry = schedule
            .iter()
            .find(|entry| entry.date == today)
            .map(|entry| ScheduledDay::resolve(entry, routines));

        let next_workout = schedule
            .iter()
            .find(|entry| entry.date >= today && entry.is_workout() && !entry.completed)
            .map(|entry| ScheduledDay::resolve(entry, routines));

        let mut sorted: Vec<&WorkoutSession> = history.iter().collect();
        sorted.sort_by_key(|session| session.timestamp);

        let skip = sorted.len().saturating_sub(RECENT_SESSIONS);
        let recent_volume = sorted
            .iter()
            .skip(skip)
            .map(|session| VolumePoint {
                day: normalizer.day_of(session.timestamp),
                volume: session.volume(),
            })
            .collect();

        Self {
            today,
            today_entry,
            next_workout,
            routine_count: routines.len(),
            total_sessions: history.len(),
            total_duration_seconds: history
                .iter()
                .map(|session| u64::from(session.duration_seconds))
                .sum(),
            recent_volume,
        }
    }
}
