//! The scheduling core.
//!
//! Pure functions over in-memory values: no I/O, no shared state. The store
//! in [`crate::db`] calls [`reconcile`] after every mutation to history or to
//! the routine set and persists the result.

pub mod builder;
pub mod day_key;
pub mod pattern;
pub mod reconcile;
pub mod toggle;

pub use builder::{build_forward, calendar_window, CALENDAR_WINDOW_DAYS, FORWARD_DAYS};
pub use day_key::{DateLike, DateNormalizer, DayKey};
pub use pattern::{pattern_for, routine_letter, RotationPattern, Slot};
pub use reconcile::{reconcile, ResumePoint};
pub use toggle::toggle_day;
