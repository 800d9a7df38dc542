#![allow(dead_code)]

use jiff::tz::{self, TimeZone};
use stride_core::{
    models::Routine,
    params::CreateRoutine,
    DayKey, Tracker, TrackerBuilder,
};
use tempfile::TempDir;

/// Pinned "now": noon of Sunday 2024-03-10 at UTC-3.
pub const NOW: &str = "2024-03-10T15:00:00Z";

/// The fixed UTC-3 zone every test evaluates days in.
pub fn test_zone() -> TimeZone {
    TimeZone::fixed(tz::offset(-3))
}

/// Helper function to create a test tracker with a pinned clock
pub async fn create_test_tracker() -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_time_zone(Some(test_zone()))
        .with_clock(NOW.parse().expect("valid timestamp"))
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}

/// Creates a routine with two exercises.
pub async fn add_routine(tracker: &Tracker, name: &str) -> Routine {
    tracker
        .create_routine(&CreateRoutine {
            name: name.to_string(),
            description: None,
            exercises: vec![
                "Pull-up:4x6-8".parse().expect("valid exercise"),
                "Dip:3x10:90".parse().expect("valid exercise"),
            ],
        })
        .await
        .expect("Failed to create routine")
}

pub fn day(raw: &str) -> DayKey {
    raw.parse().expect("valid day")
}
