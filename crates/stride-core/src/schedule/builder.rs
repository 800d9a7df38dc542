//! Forward projection of a rotation pattern onto calendar days.

use super::{
    day_key::DayKey,
    pattern::{RotationPattern, Slot},
};
use crate::models::{Routine, ScheduleEntry};

/// Number of days generated ahead of the resume point.
pub const FORWARD_DAYS: usize = 60;

/// Default size of the calendar display window (five weeks).
pub const CALENDAR_WINDOW_DAYS: usize = 35;

/// Projects the rotation for `routines` over `day_count` consecutive days
/// starting at `start`, beginning at pattern position `pattern_offset`.
///
/// Returns an empty schedule when there are no routines. Days advance with
/// civil date arithmetic, so DST transitions never skip or repeat a day.
///
/// # Examples
///
/// ```rust
/// use stride_core::schedule::{build_forward, DayKey};
///
/// let start = DayKey::from_ymd(2024, 1, 1).unwrap();
/// assert!(build_forward(start, &[], 10, 0).is_empty());
/// ```
pub fn build_forward(
    start: DayKey,
    routines: &[Routine],
    day_count: usize,
    pattern_offset: usize,
) -> Vec<ScheduleEntry> {
    let Some(pattern) = RotationPattern::for_routine_count(routines.len()) else {
        return Vec::new();
    };
    let offset = pattern_offset % pattern.len();

    start
        .days()
        .take(day_count)
        .enumerate()
        .map(|(i, day)| match pattern.slot_at(offset + i) {
            Slot::Rest => ScheduleEntry::rest(day),
            Slot::Routine(index) => {
                ScheduleEntry::planned(day, routines[index % routines.len()].id)
            }
        })
        .collect()
}

/// The days shown by the calendar grid: `day_count` days starting on the
/// Sunday of the week that contains `today - 7 days`.
///
/// The window always includes the whole previous week.
pub fn calendar_window(today: DayKey, day_count: usize) -> Vec<DayKey> {
    let Some(week_ago) = today.offset(-7) else {
        return Vec::new();
    };
    let back = i64::from(week_ago.date().weekday().to_sunday_zero_offset());
    let Some(start) = week_ago.offset(-back) else {
        return Vec::new();
    };

    start.days().take(day_count).collect()
}
