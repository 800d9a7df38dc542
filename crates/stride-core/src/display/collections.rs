//! Collection wrapper types for displaying groups of domain objects.

use std::{collections::BTreeMap, fmt, ops::Index};

use jiff::tz::TimeZone;

use super::datetime::{ElapsedTime, LocalDateTime};
use crate::{
    models::{routine_name, Routine, ScheduleEntry, WorkoutSession},
    schedule::{routine_letter, DayKey},
};

/// Newtype wrapper for displaying a list of routines.
///
/// # Examples
///
/// ```rust
/// use stride_core::display::Routines;
///
/// let routines = Routines(vec![]);
/// assert_eq!(format!("{routines}"), "No routines found.\n");
/// ```
pub struct Routines(pub Vec<Routine>);

impl Routines {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of routines in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the routine at the given index.
    pub fn get(&self, index: usize) -> Option<&Routine> {
        self.0.get(index)
    }

    /// Get an iterator over the routines.
    pub fn iter(&self) -> std::slice::Iter<'_, Routine> {
        self.0.iter()
    }
}

impl Index<usize> for Routines {
    type Output = Routine;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Routines {
    type Item = Routine;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Routines {
    type Item = &'a Routine;
    type IntoIter = std::slice::Iter<'a, Routine>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Routines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No routines found.");
        }

        for (index, routine) in self.0.iter().enumerate() {
            // Only the first four routines take part in the rotation.
            let slot = if index < 4 {
                routine_letter(index)
            } else {
                "-".to_string()
            };
            writeln!(f, "## {} (ID: {}) [{slot}]", routine.name, routine.id)?;
            writeln!(f)?;
            if let Some(desc) = &routine.description {
                writeln!(f, "- **Description**: {desc}")?;
            }
            writeln!(
                f,
                "- **Exercises**: {} ({} sets)",
                routine.exercises.len(),
                routine.total_sets()
            )?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A history listing with routine names resolved.
pub struct Sessions {
    pub sessions: Vec<WorkoutSession>,
    pub routines: Vec<Routine>,
    pub time_zone: TimeZone,
}

impl Sessions {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Get the number of sessions in the collection.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Get an iterator over the sessions.
    pub fn iter(&self) -> std::slice::Iter<'_, WorkoutSession> {
        self.sessions.iter()
    }
}

impl fmt::Display for Sessions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sessions.is_empty() {
            return writeln!(f, "No sessions found.");
        }

        // Newest first.
        for session in self.sessions.iter().rev() {
            writeln!(
                f,
                "## {} (ID: {})",
                routine_name(&self.routines, session.routine_id),
                session.id
            )?;
            writeln!(f)?;
            writeln!(
                f,
                "- **Date**: {}",
                LocalDateTime::in_zone(&session.timestamp, &self.time_zone)
            )?;
            writeln!(
                f,
                "- **Duration**: {}",
                ElapsedTime(u64::from(session.duration_seconds))
            )?;
            writeln!(f, "- **Volume**: {} reps", session.volume())?;
            if let Some(notes) = &session.notes {
                writeln!(f, "- **Notes**: {notes}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A slice of the schedule as a day-by-day list.
pub struct ScheduleView {
    pub entries: Vec<ScheduleEntry>,
    pub routines: Vec<Routine>,
    pub today: DayKey,
}

impl ScheduleView {
    /// Check if the view is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the number of days in the view.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Display for ScheduleView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return writeln!(f, "No scheduled days. Create a routine to generate a schedule.");
        }

        for entry in &self.entries {
            let marker = if entry.date == self.today { " ← today" } else { "" };
            match entry.routine_id {
                Some(id) => writeln!(
                    f,
                    "- {entry}: {}{marker}",
                    routine_name(&self.routines, id)
                )?,
                None => writeln!(f, "- {entry}{marker}")?,
            }
        }
        Ok(())
    }
}

/// The calendar window as a Sunday-first week grid.
pub struct CalendarGrid {
    pub days: Vec<DayKey>,
    pub entries: BTreeMap<DayKey, ScheduleEntry>,
    pub routines: Vec<Routine>,
    pub today: DayKey,
}

impl CalendarGrid {
    /// Routine label used inside grid cells: its rotation letter when it is
    /// one of the current routines, otherwise `?`.
    fn label(&self, routine_id: u64) -> String {
        self.routines
            .iter()
            .position(|routine| routine.id == routine_id)
            .map_or_else(|| "?".to_string(), routine_letter)
    }

    fn cell(&self, day: DayKey) -> String {
        let date = day.date();
        let mut cell = format!("{:02}", date.day());
        if date.day() == 1 {
            cell = format!("{} {cell}", date.strftime("%b"));
        }

        if let Some(entry) = self.entries.get(&day) {
            cell.push(' ');
            cell.push_str(entry.status().icon());
            if let Some(id) = entry.routine_id {
                cell.push_str(&self.label(id));
            }
        }

        if day == self.today {
            format!("**{cell}**")
        } else {
            cell
        }
    }
}

impl fmt::Display for CalendarGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.days.is_empty() {
            return writeln!(f, "No days to show.");
        }

        writeln!(f, "| Sun | Mon | Tue | Wed | Thu | Fri | Sat |")?;
        writeln!(f, "|---|---|---|---|---|---|---|")?;
        for week in self.days.chunks(7) {
            let cells: Vec<String> = week.iter().map(|day| self.cell(*day)).collect();
            writeln!(f, "| {} |", cells.join(" | "))?;
        }

        writeln!(f)?;
        writeln!(f, "✓ completed · ● planned · ○ rest")?;
        for (index, routine) in self.routines.iter().take(4).enumerate() {
            writeln!(f, "- {}: {}", routine_letter(index), routine.name)?;
        }
        Ok(())
    }
}
