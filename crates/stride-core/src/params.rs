//! Parameter structures for Stride operations
//!
//! Shared parameter structures used by every interface (CLI, MCP) without
//! framework-specific derives. Interface layers wrap these in their own types
//! (clap `Args` structs, `#[serde(transparent)]` MCP requests) and convert
//! with `.into()`.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! JSON schemas for the MCP layer are derived only with the `schema` feature.

use std::{collections::BTreeMap, str::FromStr};

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    models::{Goal, Level, NewExercise, SetLog},
    StrideError,
};

/// Generic parameters for operations requiring just an ID.
///
/// Used for show_routine, delete_routine, show_session, delete_session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// One exercise prescription as supplied by a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ExerciseSpec {
    /// Exercise name
    pub name: String,
    /// Primary muscle group worked
    #[serde(default)]
    pub muscle_group: Option<String>,
    /// Number of working sets (must be positive)
    pub target_sets: u32,
    /// Rep target, e.g. "8-12", "5" or "Max"
    pub target_reps: String,
    /// Rest between sets in seconds
    #[serde(default = "default_rest_seconds")]
    pub rest_seconds: u32,
}

fn default_rest_seconds() -> u32 {
    60
}

impl ExerciseSpec {
    /// Checks the prescription and converts it for the store.
    ///
    /// # Errors
    ///
    /// * `StrideError::InvalidInput` - empty name or rep target, zero sets
    pub fn validate(&self) -> crate::Result<NewExercise> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(StrideError::invalid_input("name").with_reason("Exercise name is empty"));
        }
        if self.target_sets == 0 {
            return Err(StrideError::invalid_input("target_sets")
                .with_reason(format!("Exercise '{name}' needs at least one set")));
        }
        let target_reps = self.target_reps.trim();
        if target_reps.is_empty() {
            return Err(StrideError::invalid_input("target_reps")
                .with_reason(format!("Exercise '{name}' has no rep target")));
        }

        Ok(NewExercise {
            name: name.to_string(),
            muscle_group: self.muscle_group.clone(),
            target_sets: self.target_sets,
            target_reps: target_reps.to_string(),
            rest_seconds: self.rest_seconds,
        })
    }
}

/// Parses the compact form `NAME:SETSxREPS[:REST]`, e.g. `Pull-up:3x8-12:90`.
impl FromStr for ExerciseSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        let name = parts.next().unwrap_or_default().trim();
        let prescription = parts
            .next()
            .ok_or_else(|| format!("Expected NAME:SETSxREPS[:REST], got '{s}'"))?;
        let (sets, reps) = prescription
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("Expected SETSxREPS, got '{prescription}'"))?;
        let target_sets = sets
            .trim()
            .parse()
            .map_err(|_| format!("Invalid set count '{sets}'"))?;
        let rest_seconds = match parts.next() {
            Some(rest) => rest
                .trim()
                .parse()
                .map_err(|_| format!("Invalid rest seconds '{rest}'"))?,
            None => default_rest_seconds(),
        };
        if parts.next().is_some() {
            return Err(format!("Too many fields in '{s}'"));
        }

        Ok(Self {
            name: name.to_string(),
            muscle_group: None,
            target_sets,
            target_reps: reps.trim().to_string(),
            rest_seconds,
        })
    }
}

/// Parameters for creating a new routine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateRoutine {
    /// Name of the routine (required)
    pub name: String,
    /// Optional description of the routine's focus
    pub description: Option<String>,
    /// Exercises in the order they are performed
    #[serde(default)]
    pub exercises: Vec<ExerciseSpec>,
}

/// Parameters for renaming or re-describing a routine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateRoutine {
    /// Routine ID to update
    pub id: u64,
    /// New name
    pub name: Option<String>,
    /// New description
    pub description: Option<String>,
}

/// Parameters for swapping one exercise for another.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ReplaceExercise {
    /// ID of the exercise being replaced
    pub exercise_id: u64,
    /// The replacement
    pub exercise: ExerciseSpec,
}

/// One performed set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetEntry {
    /// Exercise the set belongs to
    pub exercise_id: u64,
    /// Repetitions completed
    pub reps: u32,
    /// Extra load in kilograms
    #[serde(default)]
    pub weight_added: Option<f64>,
}

/// Parses `EXERCISE_ID:REPS[@WEIGHT]`, e.g. `3:10@12.5`.
impl FromStr for SetEntry {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (exercise, rest) = s
            .split_once(':')
            .ok_or_else(|| format!("Expected EXERCISE_ID:REPS[@WEIGHT], got '{s}'"))?;
        let (reps, weight) = match rest.split_once('@') {
            Some((reps, weight)) => (reps, Some(weight)),
            None => (rest, None),
        };

        Ok(Self {
            exercise_id: exercise
                .trim()
                .parse()
                .map_err(|_| format!("Invalid exercise ID '{exercise}'"))?,
            reps: reps
                .trim()
                .parse()
                .map_err(|_| format!("Invalid rep count '{reps}'"))?,
            weight_added: weight.map(parse_weight).transpose()?,
        })
    }
}

/// Added load must be a finite number of kilograms.
fn parse_weight(raw: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|weight| weight.is_finite())
        .ok_or_else(|| format!("Invalid weight '{raw}'"))
}

/// Groups flat set entries by exercise, keeping their order.
pub fn group_sets(sets: &[SetEntry]) -> BTreeMap<u64, Vec<SetLog>> {
    let mut logs: BTreeMap<u64, Vec<SetLog>> = BTreeMap::new();
    for set in sets {
        logs.entry(set.exercise_id).or_default().push(SetLog {
            reps: set.reps,
            weight_added: set.weight_added,
        });
    }
    logs
}

/// Parameters for back-logging a session on a calendar day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct LogSession {
    /// Routine that was performed
    pub routine_id: u64,
    /// Calendar day (`YYYY-MM-DD` or a timestamp); defaults to today
    pub date: Option<String>,
    /// Sets performed; sets with zero reps are dropped
    #[serde(default)]
    pub sets: Vec<SetEntry>,
    /// Notes; defaults to "Manual"
    pub notes: Option<String>,
}

/// Parameters for recording a session that just finished.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RecordSession {
    /// Routine that was performed
    pub routine_id: u64,
    /// Wall-clock duration in seconds
    pub duration_seconds: u32,
    /// Sets performed
    #[serde(default)]
    pub sets: Vec<SetEntry>,
    /// Optional notes
    pub notes: Option<String>,
}

/// Parameters for the session editor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct EditSession {
    /// Session ID to edit
    pub id: u64,
    /// Reassign to another routine
    pub routine_id: Option<u64>,
    /// Move to another calendar day
    pub date: Option<String>,
    /// Replace the notes
    pub notes: Option<String>,
}

/// Parameters for listing sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListSessions {
    /// Only sessions of this routine
    pub routine_id: Option<u64>,
    /// First calendar day to include
    pub from: Option<String>,
    /// Last calendar day to include
    pub to: Option<String>,
    /// Keep only the most recent N sessions
    pub limit: Option<usize>,
}

/// Parameters for flipping a future day between workout and rest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ToggleDay {
    /// Calendar day to toggle, strictly after today
    pub date: String,
}

/// Parameters for showing a slice of the schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ShowSchedule {
    /// First day to show; defaults to today
    pub from: Option<String>,
    /// Number of days to show; defaults to 14
    pub days: Option<usize>,
}

/// Parameters for the calendar grid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ShowCalendar {
    /// Number of days in the grid; defaults to 35
    pub days: Option<usize>,
}

/// Parameters for updating the profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateProfile {
    pub name: Option<String>,
    /// 'beginner', 'intermediate' or 'advanced'
    pub level: Option<String>,
    /// 'strength', 'hypertrophy', 'endurance' or 'skill'
    pub goal: Option<String>,
    pub equipment: Option<Vec<String>>,
    pub training_days_per_week: Option<u8>,
}

impl UpdateProfile {
    /// Parses the level and goal strings.
    ///
    /// # Errors
    ///
    /// * `StrideError::InvalidInput` - unknown level or goal, or more than
    ///   seven training days
    pub fn validate(&self) -> crate::Result<(Option<Level>, Option<Goal>)> {
        let level = self
            .level
            .as_deref()
            .map(|raw| {
                Level::from_str(raw).map_err(|_| {
                    StrideError::invalid_input("level").with_reason(format!(
                        "Invalid level: {raw}. Must be 'beginner', 'intermediate', or 'advanced'"
                    ))
                })
            })
            .transpose()?;

        let goal = self
            .goal
            .as_deref()
            .map(|raw| {
                Goal::from_str(raw).map_err(|_| {
                    StrideError::invalid_input("goal").with_reason(format!(
                        "Invalid goal: {raw}. Must be 'strength', 'hypertrophy', 'endurance', or 'skill'"
                    ))
                })
            })
            .transpose()?;

        if self.training_days_per_week.is_some_and(|days| days > 7) {
            return Err(StrideError::invalid_input("training_days_per_week")
                .with_reason("A week has at most 7 training days"));
        }

        Ok((level, goal))
    }
}
