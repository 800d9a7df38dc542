//! Manual workout/rest flips for future days.

use super::day_key::DayKey;
use crate::models::{DayKind, Routine, ScheduleEntry};

/// Flips `day` between workout and rest, returning the new schedule.
///
/// Only days strictly after `today` may be toggled; `None` is returned for
/// past days and when there is no routine to assign. A workout day becomes
/// rest and remembers its routine; a rest (or unscheduled) day becomes a
/// workout for the remembered routine when it still exists, otherwise for the
/// first routine. The change lasts until the next reconcile.
pub fn toggle_day(
    schedule: &[ScheduleEntry],
    day: DayKey,
    routines: &[Routine],
    today: DayKey,
) -> Option<Vec<ScheduleEntry>> {
    if day <= today {
        return None;
    }
    let first = routines.first()?;

    let mut updated: Vec<ScheduleEntry> = schedule
        .iter()
        .filter(|entry| entry.date != day)
        .cloned()
        .collect();

    let toggled = match schedule.iter().find(|entry| entry.date == day) {
        Some(entry) if entry.kind == DayKind::Workout => ScheduleEntry {
            previous_routine_id: entry.routine_id,
            ..ScheduleEntry::rest(day)
        },
        existing => {
            let remembered = existing
                .and_then(|entry| entry.previous_routine_id)
                .filter(|id| routines.iter().any(|routine| routine.id == *id));
            ScheduleEntry::planned(day, remembered.unwrap_or(first.id))
        }
    };

    updated.push(toggled);
    updated.sort_by_key(|entry| entry.date);
    Some(updated)
}
