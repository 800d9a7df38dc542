//! Whole-store snapshot used for export and import.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Profile, Routine, ScheduleEntry, WorkoutSession};

/// The complete tracker state as a single document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    #[serde(default)]
    pub profile: Profile,

    #[serde(default)]
    pub routines: Vec<Routine>,

    #[serde(default)]
    pub history: Vec<WorkoutSession>,

    #[serde(default)]
    pub schedule: Vec<ScheduleEntry>,

    /// Instant of the last mutation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<Timestamp>,
}
