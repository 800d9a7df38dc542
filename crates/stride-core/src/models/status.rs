//! Status enumerations for schedule days and profile settings.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Whether a calendar day is for training or recovery.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DayKind {
    /// A training day assigned to a routine
    Workout,

    /// A recovery day
    Rest,
}

impl FromStr for DayKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "workout" => Ok(DayKind::Workout),
            "rest" => Ok(DayKind::Rest),
            _ => Err(format!("Invalid day kind: {s}")),
        }
    }
}

impl DayKind {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            DayKind::Workout => "workout",
            DayKind::Rest => "rest",
        }
    }
}

/// Display status of a schedule entry, derived from its kind and completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    /// A workout backed by a logged session
    Completed,

    /// A workout still to be done
    Planned,

    /// A rest day
    Rest,
}

impl DayStatus {
    /// Get status with consistent icon formatting for display.
    ///
    /// # Icons Used
    /// - `✓ Completed` - Checkmark for logged workouts
    /// - `● Planned` - Filled circle for pending workouts
    /// - `○ Rest` - Hollow circle for rest days
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stride_core::models::DayStatus;
    ///
    /// assert_eq!(DayStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(DayStatus::Rest.with_icon(), "○ Rest");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            DayStatus::Completed => "✓ Completed",
            DayStatus::Planned => "● Planned",
            DayStatus::Rest => "○ Rest",
        }
    }

    /// The bare icon, for compact grids.
    pub fn icon(&self) -> &'static str {
        match self {
            DayStatus::Completed => "✓",
            DayStatus::Planned => "●",
            DayStatus::Rest => "○",
        }
    }
}
