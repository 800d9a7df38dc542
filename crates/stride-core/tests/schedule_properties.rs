//! Behavioral properties of the scheduling core, checked on plain values.

use std::collections::{BTreeMap, BTreeSet};

use jiff::{
    tz::{self, TimeZone},
    Timestamp,
};
use stride_core::{
    models::{DayKind, Routine, ScheduleEntry, WorkoutSession},
    schedule::{build_forward, pattern_for, reconcile, DateNormalizer, DayKey, Slot, FORWARD_DAYS},
};

fn routine(id: u64) -> Routine {
    Routine {
        id,
        name: format!("Routine {id}"),
        description: None,
        exercises: vec![],
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

fn session(id: u64, routine_id: u64, at: &str) -> WorkoutSession {
    WorkoutSession {
        id,
        routine_id,
        timestamp: at.parse().unwrap(),
        duration_seconds: 2400,
        logs: BTreeMap::new(),
        notes: None,
    }
}

fn minus_three() -> TimeZone {
    TimeZone::fixed(tz::offset(-3))
}

fn normalizer() -> DateNormalizer {
    DateNormalizer::new(minus_three()).at("2024-03-20T15:00:00Z".parse().unwrap())
}

fn day(raw: &str) -> DayKey {
    raw.parse().unwrap()
}

fn entry_on<'a>(schedule: &'a [ScheduleEntry], raw: &str) -> &'a ScheduleEntry {
    schedule
        .iter()
        .find(|entry| entry.date == day(raw))
        .expect("day not in schedule")
}

fn mixed_history() -> Vec<WorkoutSession> {
    vec![
        session(1, 1, "2024-03-01T15:00:00Z"),
        session(2, 3, "2024-03-02T15:00:00Z"),
        session(3, 2, "2024-03-04T15:00:00Z"),
        // Two sessions on one local day.
        session(4, 1, "2024-03-06T12:00:00Z"),
        session(5, 4, "2024-03-06T22:00:00Z"),
        session(6, 2, "2024-03-18T15:00:00Z"),
    ]
}

#[test]
fn reconcile_is_idempotent() {
    let routines: Vec<Routine> = (1..=4).map(routine).collect();
    let history = mixed_history();
    let normalizer = normalizer();

    let first = reconcile(&history, &routines, &normalizer);
    let second = reconcile(&history, &routines, &normalizer);
    assert_eq!(first, second);
}

#[test]
fn history_overrides_the_pattern() {
    let routines: Vec<Routine> = (1..=3).map(routine).collect();
    let normalizer = normalizer();
    // Logged on what the pattern would make rest days, out of rotation order.
    let history = vec![
        session(1, 3, "2024-03-15T15:00:00Z"),
        session(2, 3, "2024-03-16T15:00:00Z"),
        session(3, 1, "2024-03-19T15:00:00Z"),
    ];

    let schedule = reconcile(&history, &routines, &normalizer);
    for logged in &history {
        let entry = entry_on(&schedule, &normalizer.day_of(logged.timestamp).to_string());
        assert_eq!(entry.kind, DayKind::Workout);
        assert!(entry.completed);
        assert_eq!(entry.routine_id, Some(logged.routine_id));
    }
}

#[test]
fn reconciled_days_are_unique_and_sorted() {
    let routines: Vec<Routine> = (1..=4).map(routine).collect();
    let schedule = reconcile(&mixed_history(), &routines, &normalizer());

    let distinct: BTreeSet<DayKey> = schedule.iter().map(|entry| entry.date).collect();
    assert_eq!(distinct.len(), schedule.len());
    assert!(schedule.windows(2).all(|pair| pair[0].date < pair[1].date));

    // The later of the two sessions on the 6th wins.
    assert_eq!(entry_on(&schedule, "2024-03-06").routine_id, Some(4));
}

#[test]
fn single_routine_alternates_workout_and_rest() {
    assert_eq!(pattern_for(1), &[Slot::Routine(0), Slot::Rest]);

    let kinds: Vec<DayKind> = build_forward(day("2024-03-20"), &[routine(1)], 4, 0)
        .iter()
        .map(|entry| entry.kind)
        .collect();
    assert_eq!(
        kinds,
        [DayKind::Workout, DayKind::Rest, DayKind::Workout, DayKind::Rest]
    );
}

#[test]
fn rotation_resumes_one_slot_after_last_session() {
    let routines = vec![routine(1)];
    let history = vec![session(1, 1, "2024-03-12T15:00:00Z")];

    let schedule = reconcile(&history, &routines, &normalizer());
    assert_eq!(schedule[0], ScheduleEntry::completed(day("2024-03-12"), 1));
    assert_eq!(entry_on(&schedule, "2024-03-13").kind, DayKind::Rest);
    assert_eq!(entry_on(&schedule, "2024-03-14"), &ScheduleEntry::planned(day("2024-03-14"), 1));
    assert_eq!(schedule.len(), 1 + FORWARD_DAYS);
}

#[test]
fn day_keys_follow_local_fields() {
    // 23:30 and 00:30 local at UTC-3, one hour apart.
    let late: Timestamp = "2024-03-10T02:30:00Z".parse().unwrap();
    let early: Timestamp = "2024-03-10T03:30:00Z".parse().unwrap();

    let local = DateNormalizer::new(minus_three());
    assert_eq!(local.normalize(late), Some(day("2024-03-09")));
    assert_eq!(local.normalize(early), Some(day("2024-03-10")));
    assert_eq!(local.normalize(late).unwrap().next(), local.normalize(early));

    // Reading the UTC fields collapses both onto the same day.
    let utc = DateNormalizer::new(TimeZone::UTC);
    assert_eq!(utc.normalize(late), utc.normalize(early));
}

#[test]
fn deleting_only_session_restores_base_schedule() {
    let routines: Vec<Routine> = (1..=2).map(routine).collect();
    let normalizer = normalizer();

    let base = reconcile(&[], &routines, &normalizer);
    let with_session = reconcile(
        &[session(1, 2, "2024-03-19T15:00:00Z")],
        &routines,
        &normalizer,
    );
    assert_ne!(with_session, base);

    let after_delete = reconcile(&[], &routines, &normalizer);
    assert_eq!(after_delete, base);
    assert_eq!(base[0], ScheduleEntry::planned(day("2024-03-20"), 1));
    assert_eq!(base.len(), FORWARD_DAYS);
}

#[test]
fn dangling_routine_reference_is_tolerated() {
    let routines: Vec<Routine> = (1..=2).map(routine).collect();
    let history = vec![session(1, 99, "2024-03-19T15:00:00Z")];

    let schedule = reconcile(&history, &routines, &normalizer());
    assert_eq!(schedule[0], ScheduleEntry::completed(day("2024-03-19"), 99));

    // Resume offset falls back to the start of the pattern.
    assert_eq!(entry_on(&schedule, "2024-03-20").routine_id, Some(1));
    assert_eq!(entry_on(&schedule, "2024-03-21").routine_id, Some(2));
    assert_eq!(entry_on(&schedule, "2024-03-22").kind, DayKind::Rest);
}

#[test]
fn no_routines_means_no_schedule() {
    assert!(reconcile(&mixed_history(), &[], &normalizer()).is_empty());
    assert!(build_forward(day("2024-03-20"), &[], 10, 3).is_empty());
}
