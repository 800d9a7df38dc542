//! Data models for routines, sessions and the derived schedule.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping presentation apart from the data.
//!
//! # Examples
//!
//! ```rust
//! use stride_core::{models::ScheduleEntry, schedule::DayKey};
//!
//! let day = DayKey::from_ymd(2024, 3, 9).unwrap();
//! let entry = ScheduleEntry::completed(day, 1);
//! assert!(entry.is_workout());
//! assert!(entry.completed);
//! ```

pub mod filters;
pub mod overview;
pub mod profile;
pub mod requests;
pub mod routine;
pub mod schedule;
pub mod session;
pub mod snapshot;
pub mod status;

#[cfg(test)]
mod tests;

pub use filters::SessionFilter;
pub use overview::{Overview, ScheduledDay, VolumePoint, RECENT_SESSIONS};
pub use profile::{Goal, Level, Profile};
pub use requests::{NewExercise, NewSession, SessionChanges};
pub use routine::{routine_name, Exercise, Routine, UNKNOWN_ROUTINE};
pub use schedule::ScheduleEntry;
pub use session::{clean_logs, SetLog, WorkoutSession};
pub use snapshot::Snapshot;
pub use status::{DayKind, DayStatus};
