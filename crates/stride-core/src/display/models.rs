//! Display implementations for domain models.
//!
//! Models format as markdown. Views that need context a bare model lacks
//! (routine names, the evaluating time zone) are defined here as well.

use std::fmt;

use jiff::tz::TimeZone;

use super::datetime::{ElapsedTime, LocalDateTime};
use crate::models::{
    DayKind, Exercise, Goal, Level, Overview, Profile, Routine, ScheduleEntry, ScheduledDay,
    WorkoutSession, UNKNOWN_ROUTINE,
};

impl fmt::Display for DayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "**{}** (ID: {}): {} × {}, rest {}s",
            self.name, self.id, self.target_sets, self.target_reps, self.rest_seconds
        )?;
        if let Some(group) = &self.muscle_group {
            write!(f, ", {group}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Routine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        writeln!(f, "- Exercises: {}", self.exercises.len())?;
        writeln!(f, "- Total sets: {}", self.total_sets())?;
        writeln!(f, "- Created: {}", LocalDateTime::new(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime::new(&self.updated_at))?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        if self.exercises.is_empty() {
            writeln!(f, "\nNo exercises in this routine.")?;
        } else {
            writeln!(f, "\n## Exercises")?;
            writeln!(f)?;
            for (position, exercise) in self.exercises.iter().enumerate() {
                writeln!(f, "{}. {exercise}", position + 1)?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) {}",
            self.date,
            self.date.date().strftime("%a"),
            self.status().with_icon()
        )
    }
}

impl fmt::Display for ScheduledDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entry)?;
        if let Some(name) = &self.routine_name {
            write!(f, ": {name}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "- Level: {}", self.level)?;
        writeln!(f, "- Goal: {}", self.goal)?;
        if let Some(days) = self.training_days_per_week {
            writeln!(f, "- Training days per week: {days}")?;
        }
        if self.available_equipment.is_empty() {
            writeln!(f, "- Equipment: none")?;
        } else {
            writeln!(f, "- Equipment: {}", self.available_equipment.join(", "))?;
        }
        Ok(())
    }
}

impl fmt::Display for Overview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Overview ({})", self.today)?;
        writeln!(f)?;

        writeln!(f, "## Today")?;
        writeln!(f)?;
        match &self.today_entry {
            Some(day) => writeln!(f, "{day}")?,
            None if self.routine_count == 0 => {
                writeln!(f, "No routines yet. Create one to generate a schedule.")?
            }
            None => writeln!(f, "Nothing scheduled today.")?,
        }
        writeln!(f)?;

        writeln!(f, "## Next workout")?;
        writeln!(f)?;
        match &self.next_workout {
            Some(day) => writeln!(f, "{day}")?,
            None => writeln!(f, "No pending workouts.")?,
        }
        writeln!(f)?;

        writeln!(f, "## Stats")?;
        writeln!(f)?;
        writeln!(f, "- Routines: {}", self.routine_count)?;
        writeln!(f, "- Sessions: {}", self.total_sessions)?;
        writeln!(
            f,
            "- Training time: {}",
            ElapsedTime(self.total_duration_seconds)
        )?;

        if !self.recent_volume.is_empty() {
            writeln!(f)?;
            writeln!(f, "## Recent volume")?;
            writeln!(f)?;
            writeln!(f, "| Day | Reps |")?;
            writeln!(f, "|---|---:|")?;
            for point in &self.recent_volume {
                writeln!(f, "| {} | {} |", point.day, point.volume)?;
            }
        }

        Ok(())
    }
}

/// A session together with the routine it references and the time zone its
/// timestamp is shown in.
pub struct SessionDetail {
    pub session: WorkoutSession,
    /// `None` when the routine has been deleted
    pub routine: Option<Routine>,
    pub time_zone: TimeZone,
}

impl SessionDetail {
    /// Name of the session's routine, or a placeholder.
    pub fn routine_name(&self) -> &str {
        self.routine
            .as_ref()
            .map_or(UNKNOWN_ROUTINE, |routine| routine.name.as_str())
    }

    fn exercise_name(&self, exercise_id: u64) -> String {
        self.routine
            .as_ref()
            .and_then(|routine| routine.exercise(exercise_id))
            .map_or_else(
                || format!("Exercise #{exercise_id}"),
                |exercise| exercise.name.clone(),
            )
    }
}

impl fmt::Display for SessionDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = &self.session;
        writeln!(f, "# Session {}: {}", session.id, self.routine_name())?;
        writeln!(f)?;

        writeln!(
            f,
            "- Date: {}",
            LocalDateTime::in_zone(&session.timestamp, &self.time_zone)
        )?;
        writeln!(
            f,
            "- Duration: {}",
            ElapsedTime(u64::from(session.duration_seconds))
        )?;
        writeln!(
            f,
            "- Volume: {} reps in {} sets",
            session.volume(),
            session.set_count()
        )?;
        if let Some(notes) = &session.notes {
            writeln!(f, "- Notes: {notes}")?;
        }

        if session.logs.is_empty() {
            writeln!(f, "\nNo sets logged.")?;
            return Ok(());
        }

        writeln!(f, "\n## Sets")?;
        for (exercise_id, sets) in &session.logs {
            writeln!(f)?;
            writeln!(f, "### {}", self.exercise_name(*exercise_id))?;
            writeln!(f)?;
            for (index, set) in sets.iter().enumerate() {
                write!(f, "- Set {}: {} reps", index + 1, set.reps)?;
                if let Some(weight) = set.weight_added {
                    write!(f, " (+{weight} kg)")?;
                }
                writeln!(f)?;
            }
        }

        Ok(())
    }
}
