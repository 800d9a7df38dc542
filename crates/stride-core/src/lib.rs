//! Core library for the Stride workout tracker.
//!
//! This crate owns the routine library, the session history and the
//! rotation schedule derived from them. The schedule is never edited
//! directly: every change to routines or history recomputes it, with the
//! past reflecting what was actually done and the future continuing the
//! rotation from the last session.
//!
//! # Layout
//!
//! - [`schedule`]: pure, synchronous scheduling (day keys, rotation
//!   patterns, reconciliation, manual toggles)
//! - [`db`]: the SQLite store; every mutation and its schedule rebuild
//!   share one transaction
//! - [`tracker`]: the async facade used by the CLI and the MCP server
//! - [`models`] and [`display`]: domain types and their markdown rendering
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use stride_core::{params::{CreateRoutine, ShowSchedule}, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("stride.db"))
//!     .build()
//!     .await?;
//!
//! tracker
//!     .create_routine(&CreateRoutine {
//!         name: "Upper".to_string(),
//!         description: None,
//!         exercises: vec!["Bench Press:4x8".parse()?],
//!     })
//!     .await?;
//!
//! let view = tracker.show_schedule(&ShowSchedule::default()).await?;
//! println!("{view}");
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod schedule;
pub mod tracker;

// Re-export commonly used types
pub use db::Database;
pub use error::{Result, StrideError};
pub use schedule::{DateNormalizer, DayKey};
pub use tracker::{Tracker, TrackerBuilder};
