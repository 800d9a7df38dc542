use std::collections::BTreeMap;

use jiff::{
    tz::{self, TimeZone},
    Timestamp,
};
use stride_core::{
    models::{DayKind, NewExercise, NewSession, Profile, ScheduleEntry, SessionChanges, SetLog},
    Database, DateNormalizer, DayKey,
};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn normalizer() -> DateNormalizer {
    DateNormalizer::new(TimeZone::fixed(tz::offset(-3)))
        .at("2024-03-10T15:00:00Z".parse().unwrap())
}

fn exercise(name: &str) -> NewExercise {
    NewExercise {
        name: name.to_string(),
        muscle_group: None,
        target_sets: 3,
        target_reps: "10".to_string(),
        rest_seconds: 60,
    }
}

fn session_at(routine_id: u64, at: &str, logs: BTreeMap<u64, Vec<SetLog>>) -> NewSession {
    NewSession {
        routine_id,
        timestamp: at.parse().unwrap(),
        duration_seconds: 1200,
        logs,
        notes: None,
    }
}

fn day(raw: &str) -> DayKey {
    raw.parse().unwrap()
}

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db();

    assert!(temp_file.path().exists());
    assert!(db.list_routines().unwrap().is_empty());
    assert!(db.get_schedule().unwrap().is_empty());
    assert_eq!(db.get_profile().unwrap(), Profile::default());
    assert_eq!(db.last_updated().unwrap(), None);
}

#[test]
fn test_create_routine_keeps_exercise_order() {
    let (_temp_file, mut db) = create_test_db();

    let routine = db
        .create_routine(
            "Pull",
            Some("Back and biceps"),
            &[exercise("Row"), exercise("Curl"), exercise("Face pull")],
            &normalizer(),
        )
        .expect("Failed to create routine");

    assert!(routine.id > 0);
    assert_eq!(routine.description.as_deref(), Some("Back and biceps"));
    let names: Vec<&str> = routine.exercises.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Row", "Curl", "Face pull"]);

    let fetched = db.get_routine(routine.id).unwrap().expect("Routine should exist");
    assert_eq!(fetched, routine);
    assert!(db.last_updated().unwrap().is_some());
}

#[test]
fn test_create_routine_rebuilds_schedule() {
    let (_temp_file, mut db) = create_test_db();
    let normalizer = normalizer();

    let a = db.create_routine("A", None, &[], &normalizer).unwrap();
    let schedule = db.get_schedule().unwrap();
    assert_eq!(schedule.len(), 60);
    assert_eq!(schedule[0], ScheduleEntry::planned(day("2024-03-10"), a.id));

    let b = db.create_routine("B", None, &[], &normalizer).unwrap();
    let schedule = db.get_schedule().unwrap();
    assert_eq!(schedule[1].routine_id, Some(b.id));
    assert_eq!(schedule[2].kind, DayKind::Rest);
}

#[test]
fn test_update_routine_leaves_schedule_alone() {
    let (_temp_file, mut db) = create_test_db();
    let normalizer = normalizer();

    let a = db.create_routine("A", None, &[], &normalizer).unwrap();
    let before = db.get_schedule().unwrap();

    let updated = db
        .update_routine(a.id, Some("Renamed"), None)
        .unwrap()
        .expect("Routine should exist");
    assert_eq!(updated.name, "Renamed");
    assert_eq!(db.get_schedule().unwrap(), before);

    assert!(db.update_routine(999, Some("x"), None).unwrap().is_none());
}

#[test]
fn test_replace_exercise_keeps_position() {
    let (_temp_file, mut db) = create_test_db();

    let routine = db
        .create_routine("Push", None, &[exercise("Bench"), exercise("Fly")], &normalizer())
        .unwrap();
    let bench_id = routine.exercises[0].id;

    let updated = db
        .replace_exercise(bench_id, &exercise("Incline Bench"))
        .unwrap()
        .expect("Exercise should exist");

    assert_eq!(updated.exercises.len(), 2);
    assert_eq!(updated.exercises[0].name, "Incline Bench");
    assert_ne!(updated.exercises[0].id, bench_id);
    assert_eq!(updated.exercises[1].name, "Fly");

    assert!(db.replace_exercise(bench_id, &exercise("Again")).unwrap().is_none());
}

#[test]
fn test_session_logs_round_trip() {
    let (_temp_file, mut db) = create_test_db();
    let normalizer = normalizer();

    let routine = db
        .create_routine("A", None, &[exercise("Squat")], &normalizer)
        .unwrap();
    let squat = routine.exercises[0].id;

    let mut logs = BTreeMap::new();
    logs.insert(
        squat,
        vec![
            SetLog {
                reps: 5,
                weight_added: Some(20.0),
            },
            SetLog {
                reps: 5,
                weight_added: None,
            },
        ],
    );

    let stored = db
        .insert_session(&session_at(routine.id, "2024-03-09T15:00:00Z", logs.clone()), &normalizer)
        .unwrap();
    assert_eq!(stored.logs, logs);
    assert_eq!(stored.volume(), 10);

    let schedule = db.get_schedule().unwrap();
    assert_eq!(schedule[0], ScheduleEntry::completed(day("2024-03-09"), routine.id));
}

#[test]
fn test_sessions_listed_oldest_first() {
    let (_temp_file, mut db) = create_test_db();
    let normalizer = normalizer();
    let routine = db.create_routine("A", None, &[], &normalizer).unwrap();

    for at in [
        "2024-03-05T15:00:00Z",
        "2024-03-01T15:00:00Z",
        "2024-03-03T15:00:00Z",
    ] {
        db.insert_session(&session_at(routine.id, at, BTreeMap::new()), &normalizer)
            .unwrap();
    }

    let timestamps: Vec<Timestamp> = db
        .list_sessions()
        .unwrap()
        .iter()
        .map(|s| s.timestamp)
        .collect();
    let mut sorted = timestamps.clone();
    sorted.sort();
    assert_eq!(timestamps, sorted);
}

#[test]
fn test_update_and_delete_session() {
    let (_temp_file, mut db) = create_test_db();
    let normalizer = normalizer();
    let routine = db.create_routine("A", None, &[], &normalizer).unwrap();

    let session = db
        .insert_session(
            &session_at(routine.id, "2024-03-08T15:00:00Z", BTreeMap::new()),
            &normalizer,
        )
        .unwrap();

    let updated = db
        .update_session(
            session.id,
            &SessionChanges {
                notes: Some("Moved".to_string()),
                timestamp: Some("2024-03-09T15:00:00Z".parse().unwrap()),
                ..Default::default()
            },
            &normalizer,
        )
        .unwrap()
        .expect("Session should exist");
    assert_eq!(updated.notes.as_deref(), Some("Moved"));
    assert_eq!(updated.duration_seconds, 1200);
    assert_eq!(db.get_schedule().unwrap()[0].date, day("2024-03-09"));

    let deleted = db.delete_session(session.id, &normalizer).unwrap();
    assert_eq!(deleted.map(|s| s.id), Some(session.id));
    assert!(db.get_session(session.id).unwrap().is_none());
    assert!(db.delete_session(session.id, &normalizer).unwrap().is_none());
    assert_eq!(db.get_schedule().unwrap()[0].date, day("2024-03-10"));
}

#[test]
fn test_delete_routine_cascades_exercises_but_keeps_sessions() {
    let (_temp_file, mut db) = create_test_db();
    let normalizer = normalizer();

    let routine = db
        .create_routine("A", None, &[exercise("Lunge")], &normalizer)
        .unwrap();
    db.insert_session(
        &session_at(routine.id, "2024-03-09T15:00:00Z", BTreeMap::new()),
        &normalizer,
    )
    .unwrap();

    let deleted = db.delete_routine(routine.id, &normalizer).unwrap();
    assert_eq!(deleted.map(|r| r.id), Some(routine.id));
    assert!(db.get_routine(routine.id).unwrap().is_none());
    assert_eq!(db.list_sessions().unwrap().len(), 1);

    // With no routines the schedule is empty, history included.
    assert!(db.get_schedule().unwrap().is_empty());
}

#[test]
fn test_toggle_is_persisted_until_rebuild() {
    let (_temp_file, mut db) = create_test_db();
    let normalizer = normalizer();
    let routine = db.create_routine("A", None, &[], &normalizer).unwrap();

    let toggled = db
        .toggle_schedule_day(day("2024-03-12"), &normalizer)
        .unwrap()
        .expect("future day toggles");
    assert_eq!(db.get_schedule().unwrap(), toggled);

    let entry = toggled.iter().find(|e| e.date == day("2024-03-12")).unwrap();
    assert_eq!(entry.kind, DayKind::Rest);
    assert_eq!(entry.previous_routine_id, Some(routine.id));

    assert!(db
        .toggle_schedule_day(day("2024-03-10"), &normalizer)
        .unwrap()
        .is_none());

    let rebuilt = db.rebuild_schedule(&normalizer).unwrap();
    let entry = rebuilt.iter().find(|e| e.date == day("2024-03-12")).unwrap();
    assert_eq!(entry.routine_id, Some(routine.id));
}

#[test]
fn test_profile_persists() {
    let (_temp_file, mut db) = create_test_db();

    let profile = Profile {
        name: "Sam".to_string(),
        available_equipment: vec!["kettlebell".to_string()],
        training_days_per_week: Some(3),
        ..Profile::default()
    };
    db.save_profile(&profile).unwrap();
    assert_eq!(db.get_profile().unwrap(), profile);
}

#[test]
fn test_snapshot_import_replaces_everything() {
    let (_source_file, mut source) = create_test_db();
    let normalizer = normalizer();

    let routine = source
        .create_routine("A", None, &[exercise("Press")], &normalizer)
        .unwrap();
    let mut logs = BTreeMap::new();
    logs.insert(
        routine.exercises[0].id,
        vec![SetLog {
            reps: 8,
            weight_added: None,
        }],
    );
    source
        .insert_session(&session_at(routine.id, "2024-03-09T15:00:00Z", logs), &normalizer)
        .unwrap();
    let snapshot = source.export_snapshot().unwrap();

    let (_target_file, mut target) = create_test_db();
    target.create_routine("Old", None, &[], &normalizer).unwrap();
    target.create_routine("Older", None, &[], &normalizer).unwrap();

    target.import_snapshot(&snapshot).unwrap();
    let imported = target.export_snapshot().unwrap();
    assert_eq!(imported, snapshot);
}
