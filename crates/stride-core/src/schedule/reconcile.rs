//! Recomputation of the authoritative schedule from history.
//!
//! The schedule is a derived view: every call rebuilds it from the session
//! history and the current routine list, so the previous schedule (including
//! any manual toggles) never influences the result.

use std::collections::BTreeMap;

use log::{debug, warn};

use super::{
    builder::{build_forward, FORWARD_DAYS},
    day_key::{DateNormalizer, DayKey},
    pattern::RotationPattern,
};
use crate::models::{Routine, ScheduleEntry, WorkoutSession};

/// Where the forward projection picks up the rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResumePoint {
    /// First day of the forward projection
    pub day: DayKey,

    /// Pattern position used for that day
    pub offset: usize,
}

impl ResumePoint {
    /// Computes the resume point after the most recent session.
    ///
    /// With no history the rotation starts today at position 0. Otherwise it
    /// starts the day after the last session, one slot past the first
    /// pattern position of that session's routine. A routine that is gone or
    /// has no slot in the pattern restarts the rotation at 0.
    pub fn after(
        last: Option<&WorkoutSession>,
        pattern: RotationPattern,
        routines: &[Routine],
        normalizer: &DateNormalizer,
    ) -> Self {
        let Some(last) = last else {
            return Self {
                day: normalizer.today(),
                offset: 0,
            };
        };

        let last_day = normalizer.day_of(last.timestamp);
        let position = routines
            .iter()
            .position(|routine| routine.id == last.routine_id)
            .and_then(|index| pattern.position_of(index));

        let offset = match position {
            Some(position) => (position + 1) % pattern.len(),
            None => {
                warn!(
                    "Session {} references routine {} outside the current rotation, restarting pattern",
                    last.id, last.routine_id
                );
                0
            }
        };

        Self {
            day: last_day.next().unwrap_or(last_day),
            offset,
        }
    }
}

/// Rebuilds the schedule from `history` and `routines`.
///
/// Every session becomes a completed workout on its local calendar day (the
/// latest session wins when two share a day). Days after the last session are
/// filled by projecting the rotation [`FORWARD_DAYS`] ahead. History always
/// overrides the projection. The result is sorted by day and holds at most one
/// entry per day.
///
/// Returns an empty schedule when there are no routines.
pub fn reconcile(
    history: &[WorkoutSession],
    routines: &[Routine],
    normalizer: &DateNormalizer,
) -> Vec<ScheduleEntry> {
    let Some(pattern) = RotationPattern::for_routine_count(routines.len()) else {
        return Vec::new();
    };

    let mut sorted: Vec<&WorkoutSession> = history.iter().collect();
    sorted.sort_by_key(|session| session.timestamp);

    let resume = ResumePoint::after(sorted.last().copied(), pattern, routines, normalizer);
    debug!(
        "Reconciling {} sessions over {} routines ({pattern}), resuming {} at offset {}",
        sorted.len(),
        routines.len(),
        resume.day,
        resume.offset
    );

    let mut days: BTreeMap<DayKey, ScheduleEntry> = BTreeMap::new();
    for session in &sorted {
        let day = normalizer.day_of(session.timestamp);
        days.insert(day, ScheduleEntry::completed(day, session.routine_id));
    }

    for entry in build_forward(resume.day, routines, FORWARD_DAYS, resume.offset) {
        days.entry(entry.date).or_insert(entry);
    }

    days.into_values().collect()
}
