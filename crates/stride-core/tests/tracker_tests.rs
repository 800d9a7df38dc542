mod common;

use common::{add_routine, create_test_tracker, day};
use stride_core::{
    models::DayKind,
    params::{
        EditSession, Id, ListSessions, LogSession, ReplaceExercise, ShowSchedule, ToggleDay,
    },
    StrideError,
};

#[tokio::test]
async fn test_list_routines_view_marks_rotation_letters() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    for name in ["Push", "Pull", "Legs", "Core", "Mobility"] {
        add_routine(&tracker, name).await;
    }

    let routines = tracker.list_routines_view().await.unwrap();
    assert_eq!(routines.len(), 5);

    let output = routines.to_string();
    assert!(output.contains("## Push (ID: 1) [A]"));
    assert!(output.contains("## Core (ID: 4) [D]"));
    assert!(output.contains("## Mobility (ID: 5) [-]"));
    assert!(output.contains("- **Exercises**: 2 (7 sets)"));
}

#[tokio::test]
async fn test_four_routines_use_the_weekly_split() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let mut ids = Vec::new();
    for name in ["A", "B", "C", "D"] {
        ids.push(add_routine(&tracker, name).await.id);
    }

    let kinds: Vec<Option<u64>> = tracker
        .schedule()
        .await
        .unwrap()
        .iter()
        .take(7)
        .map(|entry| entry.routine_id)
        .collect();
    assert_eq!(
        kinds,
        [Some(ids[0]), Some(ids[1]), None, Some(ids[2]), Some(ids[3]), None, None]
    );
}

#[tokio::test]
async fn test_log_session_result_display() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let routine = add_routine(&tracker, "Upper").await;
    let pull_up = routine.exercises[0].id;

    let result = tracker
        .log_session_result(&LogSession {
            routine_id: routine.id,
            date: Some("2024-03-09".to_string()),
            sets: vec![
                format!("{pull_up}:8").parse().unwrap(),
                format!("{pull_up}:0").parse().unwrap(),
                format!("{pull_up}:6@10").parse().unwrap(),
            ],
            notes: Some("Grip gave out".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(result.resource.session.set_count(), 2);
    let output = result.to_string();
    assert!(output.starts_with("Logged session with ID: 1"));
    assert!(output.contains("# Session 1: Upper"));
    assert!(output.contains("- Date: 2024-03-09 12:00:00"));
    assert!(output.contains("### Pull-up"));
    assert!(output.contains("- Set 2: 6 reps (+10 kg)"));
    assert!(output.contains("- Notes: Grip gave out"));
}

#[tokio::test]
async fn test_session_listing_filters() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let a = add_routine(&tracker, "A").await;
    let b = add_routine(&tracker, "B").await;

    for (routine_id, date) in [
        (a.id, "2024-03-01"),
        (b.id, "2024-03-02"),
        (a.id, "2024-03-04"),
        (b.id, "2024-03-05"),
    ] {
        tracker
            .log_session(&LogSession {
                routine_id,
                date: Some(date.to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
    }

    let only_b = tracker
        .list_sessions(&ListSessions {
            routine_id: Some(b.id),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(only_b.len(), 2);

    let ranged = tracker
        .list_sessions(&ListSessions {
            from: Some("2024-03-02".to_string()),
            to: Some("2024-03-04".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(ranged.len(), 2);

    let bad = tracker
        .list_sessions(&ListSessions {
            from: Some("March".to_string()),
            ..Default::default()
        })
        .await;
    assert!(matches!(bad, Err(StrideError::InvalidInput { .. })));

    let view = tracker
        .list_sessions_view(&ListSessions {
            limit: Some(1),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(view.len(), 1);
    assert!(view.to_string().contains("## B (ID: 4)"));
}

#[tokio::test]
async fn test_edit_session_result_lists_changes() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let a = add_routine(&tracker, "A").await;
    let b = add_routine(&tracker, "B").await;

    let session = tracker
        .log_session(&LogSession {
            routine_id: a.id,
            ..Default::default()
        })
        .await
        .unwrap();

    let result = tracker
        .edit_session_result(&EditSession {
            id: session.id,
            routine_id: Some(b.id),
            date: None,
            notes: Some("Swapped".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(result.changes.len(), 2);
    let output = result.to_string();
    assert!(output.contains("Updated session with ID: 1"));
    assert!(output.contains("- Reassigned to routine 2"));
    assert!(output.contains("# Session 1: B"));

    let unchanged = tracker
        .edit_session(&EditSession {
            id: session.id,
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(unchanged.routine_id, b.id);

    let missing = tracker
        .edit_session(&EditSession {
            id: session.id,
            routine_id: Some(42),
            ..Default::default()
        })
        .await;
    assert!(matches!(missing, Err(StrideError::RoutineNotFound { id: 42 })));
}

#[tokio::test]
async fn test_delete_session_result_display() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let a = add_routine(&tracker, "A").await;
    let session = tracker
        .log_session(&LogSession {
            routine_id: a.id,
            date: Some("2024-03-08".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    let result = tracker
        .delete_session_result(&Id { id: session.id })
        .await
        .unwrap();
    assert!(result
        .to_string()
        .starts_with("Deleted session 1 (A, 2024-03-08 12:00:00"));

    assert!(tracker.show_session(&Id { id: session.id }).await.unwrap().is_none());
}

#[tokio::test]
async fn test_replace_exercise_keeps_schedule() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let routine = add_routine(&tracker, "A").await;
    let before = tracker.schedule().await.unwrap();

    let updated = tracker
        .replace_exercise(&ReplaceExercise {
            exercise_id: routine.exercises[1].id,
            exercise: "Ring Dip:4x5".parse().unwrap(),
        })
        .await
        .unwrap();
    assert_eq!(updated.exercises[1].name, "Ring Dip");
    assert_eq!(updated.exercises[1].target_sets, 4);
    assert_eq!(tracker.schedule().await.unwrap(), before);

    let missing = tracker
        .replace_exercise(&ReplaceExercise {
            exercise_id: 999,
            exercise: "Plank:3x30".parse().unwrap(),
        })
        .await;
    assert!(matches!(missing, Err(StrideError::ExerciseNotFound { id: 999 })));
}

#[tokio::test]
async fn test_new_session_discards_toggles() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let a = add_routine(&tracker, "A").await;

    // FullBody from today: A(10) rest(11) A(12) rest(13)
    tracker
        .toggle_day(&ToggleDay {
            date: "2024-03-13".to_string(),
        })
        .await
        .unwrap();
    let toggled = tracker.schedule().await.unwrap();
    assert_eq!(
        toggled.iter().find(|e| e.date == day("2024-03-13")).unwrap().routine_id,
        Some(a.id)
    );

    tracker
        .log_session(&LogSession {
            routine_id: a.id,
            ..Default::default()
        })
        .await
        .unwrap();

    let schedule = tracker.schedule().await.unwrap();
    let entry = schedule.iter().find(|e| e.date == day("2024-03-13")).unwrap();
    assert_eq!(entry.kind, DayKind::Rest);
}

#[tokio::test]
async fn test_show_schedule_from_given_day() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    add_routine(&tracker, "A").await;

    let view = tracker
        .show_schedule(&ShowSchedule {
            from: Some("2024-03-20".to_string()),
            days: Some(5),
        })
        .await
        .unwrap();
    assert_eq!(view.len(), 5);
    assert_eq!(view.entries[0].date, day("2024-03-20"));
    assert!(!view.to_string().contains("← today"));

    let (_empty_dir, empty) = create_test_tracker().await;
    let view = empty.show_schedule(&ShowSchedule::default()).await.unwrap();
    assert!(view.is_empty());
    assert!(view.to_string().contains("Create a routine"));
}
