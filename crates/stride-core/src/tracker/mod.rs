//! High-level tracker API.
//!
//! [`Tracker`] is the async facade every interface (CLI, MCP) talks to. Each
//! operation opens the SQLite store on a blocking thread, validates its
//! parameters, and lets the store apply the change together with the schedule
//! recomputation in a single transaction.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │  (display-ready │───▶│ (routine_ops,   │───▶│   (via db/)     │
//! │   wrappers)     │    │  session_ops..) │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,no_run
//! use stride_core::{params::CreateRoutine, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("/tmp/stride.db"))
//!     .build()
//!     .await?;
//!
//! let routine = tracker
//!     .create_routine(&CreateRoutine {
//!         name: "Full Body".to_string(),
//!         description: None,
//!         exercises: vec!["Push-up:3x10".parse()?],
//!     })
//!     .await?;
//! let schedule = tracker.schedule().await?;
//! assert!(!schedule.is_empty());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use tokio::task;

use crate::{
    db::Database,
    error::{Result, StrideError},
    schedule::{DateNormalizer, DayKey},
};

pub mod builder;
pub mod handlers;
pub mod profile_ops;
pub mod routine_ops;
pub mod schedule_ops;
pub mod session_ops;


pub use builder::TrackerBuilder;

/// Main tracker interface for routines, sessions and the schedule.
#[derive(Debug, Clone)]
pub struct Tracker {
    pub(crate) db_path: PathBuf,
    pub(crate) normalizer: DateNormalizer,
}

impl Tracker {
    pub(crate) fn new(db_path: PathBuf, normalizer: DateNormalizer) -> Self {
        Self {
            db_path,
            normalizer,
        }
    }

    /// The normalizer every day comparison goes through.
    pub fn normalizer(&self) -> &DateNormalizer {
        &self.normalizer
    }

    /// Runs `op` against a freshly opened store on the blocking pool.
    pub(crate) async fn with_db<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&mut Database, &DateNormalizer) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();
        let normalizer = self.normalizer.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db, &normalizer)
        })
        .await
        .map_err(StrideError::join)?
    }

    /// Parses a user-supplied day, rejecting text that names no calendar day.
    pub(crate) fn parse_day(&self, field: &str, raw: &str) -> Result<DayKey> {
        self.normalizer.normalize(raw).ok_or_else(|| {
            StrideError::invalid_input(field).with_reason(format!(
                "'{raw}' is not a calendar day (expected YYYY-MM-DD or a timestamp)"
            ))
        })
    }
}
