#[cfg(test)]
mod model_tests {
    use std::collections::BTreeMap;

    use jiff::{
        tz::{self, TimeZone},
        Timestamp,
    };

    use crate::{
        display::SessionDetail,
        models::{
            clean_logs, Exercise, Goal, Level, Overview, Profile, Routine, ScheduleEntry,
            SessionFilter, SetLog, WorkoutSession, UNKNOWN_ROUTINE,
        },
        schedule::{DateNormalizer, DayKey},
    };

    fn day(raw: &str) -> DayKey {
        raw.parse().unwrap()
    }

    fn normalizer(now: &str) -> DateNormalizer {
        DateNormalizer::new(TimeZone::fixed(tz::offset(-3))).at(now.parse().unwrap())
    }

    fn create_test_routine(id: u64, name: &str) -> Routine {
        Routine {
            id,
            name: name.to_string(),
            description: Some("Horizontal push and pull".to_string()),
            exercises: vec![
                Exercise {
                    id: id * 10 + 1,
                    name: "Push-up".to_string(),
                    muscle_group: Some("chest".to_string()),
                    target_sets: 3,
                    target_reps: "8-12".to_string(),
                    rest_seconds: 90,
                },
                Exercise {
                    id: id * 10 + 2,
                    name: "Row".to_string(),
                    muscle_group: None,
                    target_sets: 4,
                    target_reps: "Max".to_string(),
                    rest_seconds: 60,
                },
            ],
            created_at: Timestamp::from_second(1704067200).unwrap(), // 2024-01-01 00:00:00 UTC
            updated_at: Timestamp::from_second(1704153600).unwrap(), // 2024-01-02 00:00:00 UTC
        }
    }

    fn create_test_session(id: u64, routine_id: u64, timestamp: &str) -> WorkoutSession {
        let mut logs = BTreeMap::new();
        logs.insert(
            routine_id * 10 + 1,
            vec![
                SetLog {
                    reps: 10,
                    weight_added: None,
                },
                SetLog {
                    reps: 8,
                    weight_added: Some(5.0),
                },
            ],
        );
        WorkoutSession {
            id,
            routine_id,
            timestamp: timestamp.parse().unwrap(),
            duration_seconds: 2700,
            logs,
            notes: Some("Felt strong".to_string()),
        }
    }

    #[test]
    fn test_routine_display() {
        let routine = create_test_routine(1, "Upper A");
        let output = routine.to_string();

        assert!(output.contains("# 1. Upper A"));
        assert!(output.contains("- Exercises: 2"));
        assert!(output.contains("- Total sets: 7"));
        assert!(output.contains("Horizontal push and pull"));
        assert!(output.contains("## Exercises"));
        assert!(output.contains("1. **Push-up** (ID: 11): 3 × 8-12, rest 90s, chest"));
        assert!(output.contains("2. **Row** (ID: 12): 4 × Max, rest 60s"));
    }

    #[test]
    fn test_empty_routine_display() {
        let mut routine = create_test_routine(2, "Empty");
        routine.exercises.clear();
        routine.description = None;

        let output = routine.to_string();
        assert!(output.contains("No exercises in this routine."));
        assert!(!output.contains("## Exercises"));
    }

    #[test]
    fn test_session_volume_and_set_count() {
        let session = create_test_session(1, 1, "2024-03-09T15:00:00Z");
        assert_eq!(session.volume(), 18);
        assert_eq!(session.set_count(), 2);
    }

    #[test]
    fn test_session_volume_does_not_overflow() {
        let mut session = create_test_session(1, 1, "2024-03-09T15:00:00Z");
        let huge = SetLog {
            reps: 3_000_000_000,
            weight_added: None,
        };
        session.logs.insert(11, vec![huge, huge]);

        assert_eq!(session.volume(), 6_000_000_018);

        let routines = vec![create_test_routine(1, "Upper A")];
        let overview = Overview::compute(
            &routines,
            &[session],
            &[],
            &normalizer("2024-03-10T13:00:00Z"),
        );
        assert_eq!(overview.recent_volume[0].volume, 6_000_000_018);
        assert!(overview.to_string().contains("| 2024-03-09 | 6000000018 |"));
    }

    #[test]
    fn test_clean_logs_drops_zero_rep_sets() {
        let mut logs = BTreeMap::new();
        logs.insert(
            1,
            vec![
                SetLog {
                    reps: 0,
                    weight_added: None,
                },
                SetLog {
                    reps: 6,
                    weight_added: None,
                },
            ],
        );
        logs.insert(
            2,
            vec![SetLog {
                reps: 0,
                weight_added: Some(10.0),
            }],
        );

        let cleaned = clean_logs(logs);
        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[&1], vec![SetLog { reps: 6, weight_added: None }]);
    }

    #[test]
    fn test_session_detail_display() {
        let routine = create_test_routine(1, "Upper A");
        let detail = SessionDetail {
            session: create_test_session(7, 1, "2024-03-09T15:00:00Z"),
            routine: Some(routine),
            time_zone: TimeZone::fixed(tz::offset(-3)),
        };

        let output = detail.to_string();
        assert!(output.contains("# Session 7: Upper A"));
        assert!(output.contains("- Date: 2024-03-09 12:00:00"));
        assert!(output.contains("- Duration: 45m"));
        assert!(output.contains("- Volume: 18 reps in 2 sets"));
        assert!(output.contains("- Notes: Felt strong"));
        assert!(output.contains("### Push-up"));
        assert!(output.contains("- Set 2: 8 reps (+5 kg)"));
    }

    #[test]
    fn test_session_detail_for_deleted_routine() {
        let detail = SessionDetail {
            session: create_test_session(3, 9, "2024-03-09T15:00:00Z"),
            routine: None,
            time_zone: TimeZone::UTC,
        };

        assert_eq!(detail.routine_name(), UNKNOWN_ROUTINE);
        let output = detail.to_string();
        assert!(output.contains("# Session 3: Deleted routine"));
        assert!(output.contains("### Exercise #91"));
    }

    #[test]
    fn test_schedule_entry_display_and_serde() {
        let entry = ScheduleEntry::completed(day("2024-03-09"), 4);
        assert_eq!(entry.to_string(), "2024-03-09 (Sat) ✓ Completed");
        assert_eq!(
            ScheduleEntry::rest(day("2024-03-10")).to_string(),
            "2024-03-10 (Sun) ○ Rest"
        );

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["date"], "2024-03-09");
        assert_eq!(json["type"], "workout");
        assert_eq!(json["routine_id"], 4);
        assert_eq!(json["completed"], true);

        let planned = serde_json::to_value(ScheduleEntry::planned(day("2024-03-11"), 4)).unwrap();
        assert!(planned.get("completed").is_none());
    }

    #[test]
    fn test_profile_display_and_parsing() {
        let profile = Profile {
            name: "Ana".to_string(),
            level: "Intermediate".parse().unwrap(),
            goal: "strength".parse().unwrap(),
            available_equipment: vec!["pull-up bar".to_string(), "rings".to_string()],
            training_days_per_week: Some(4),
        };

        assert_eq!(profile.level, Level::Intermediate);
        assert_eq!(profile.goal, Goal::Strength);
        assert!("elite".parse::<Level>().is_err());

        let output = profile.to_string();
        assert!(output.contains("# Ana"));
        assert!(output.contains("- Level: intermediate"));
        assert!(output.contains("- Goal: strength"));
        assert!(output.contains("- Training days per week: 4"));
        assert!(output.contains("- Equipment: pull-up bar, rings"));

        assert!(Profile::default().to_string().contains("- Equipment: none"));
    }

    #[test]
    fn test_overview_picks_next_pending_workout() {
        let routines = vec![create_test_routine(1, "Upper A"), create_test_routine(2, "Lower B")];
        let history = vec![create_test_session(1, 1, "2024-03-09T15:00:00Z")];
        let schedule = vec![
            ScheduleEntry::completed(day("2024-03-09"), 1),
            ScheduleEntry::planned(day("2024-03-10"), 2),
            ScheduleEntry::rest(day("2024-03-11")),
            ScheduleEntry::planned(day("2024-03-12"), 1),
        ];

        let overview = Overview::compute(
            &routines,
            &history,
            &schedule,
            &normalizer("2024-03-10T13:00:00Z"),
        );

        assert_eq!(overview.today, day("2024-03-10"));
        let next = overview.next_workout.clone().unwrap();
        assert_eq!(next.entry.date, day("2024-03-10"));
        assert_eq!(next.routine_name.as_deref(), Some("Lower B"));
        assert_eq!(overview.total_duration_seconds, 2700);
        assert_eq!(overview.recent_volume.len(), 1);
        assert_eq!(overview.recent_volume[0].day, day("2024-03-09"));

        let output = overview.to_string();
        assert!(output.contains("# Overview (2024-03-10)"));
        assert!(output.contains("- Routines: 2"));
        assert!(output.contains("- Training time: 45m"));
        assert!(output.contains("| 2024-03-09 | 18 |"));
    }

    #[test]
    fn test_overview_skips_completed_today() {
        let routines = vec![create_test_routine(1, "Upper A")];
        let schedule = vec![
            ScheduleEntry::completed(day("2024-03-10"), 1),
            ScheduleEntry::rest(day("2024-03-11")),
            ScheduleEntry::planned(day("2024-03-12"), 1),
        ];

        let overview = Overview::compute(&routines, &[], &schedule, &normalizer("2024-03-10T13:00:00Z"));
        assert_eq!(overview.next_workout.unwrap().entry.date, day("2024-03-12"));
    }

    #[test]
    fn test_overview_without_routines() {
        let overview = Overview::compute(&[], &[], &[], &normalizer("2024-03-10T13:00:00Z"));
        assert!(overview.today_entry.is_none());
        assert!(overview.next_workout.is_none());
        assert!(overview.to_string().contains("No routines yet"));
    }

    #[test]
    fn test_session_filter_by_routine_range_and_limit() {
        let normalizer = normalizer("2024-03-20T13:00:00Z");
        let sessions = vec![
            create_test_session(1, 1, "2024-03-01T15:00:00Z"),
            create_test_session(2, 2, "2024-03-05T15:00:00Z"),
            create_test_session(3, 1, "2024-03-08T15:00:00Z"),
            // Late evening locally, still March 10th.
            create_test_session(4, 1, "2024-03-11T01:00:00Z"),
        ];

        let by_routine = SessionFilter {
            routine_id: Some(1),
            ..Default::default()
        };
        let ids: Vec<u64> = by_routine
            .apply(sessions.clone(), &normalizer)
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, [1, 3, 4]);

        let ranged = SessionFilter {
            from: Some(day("2024-03-05")),
            to: Some(day("2024-03-10")),
            ..Default::default()
        };
        let ids: Vec<u64> = ranged
            .apply(sessions.clone(), &normalizer)
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, [2, 3, 4]);

        let limited = SessionFilter {
            limit: Some(2),
            ..Default::default()
        };
        let ids: Vec<u64> = limited
            .apply(sessions, &normalizer)
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, [3, 4]);
    }
}
