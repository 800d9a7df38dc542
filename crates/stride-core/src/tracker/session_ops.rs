//! Session operations for the Tracker.

use std::collections::BTreeMap;

use jiff::Timestamp;

use super::Tracker;
use crate::{
    error::{Result, StrideError},
    models::{
        clean_logs, NewSession, Routine, SessionChanges, SessionFilter, SetLog, WorkoutSession,
    },
    params::{group_sets, EditSession, Id, ListSessions, LogSession, RecordSession},
    schedule::DayKey,
};

/// Notes attached to back-logged sessions when none are given.
pub const MANUAL_NOTES: &str = "Manual";

/// Rejects sets for exercises the routine does not contain.
fn check_exercises(routine: &Routine, logs: &BTreeMap<u64, Vec<SetLog>>) -> Result<()> {
    match logs.keys().find(|id| routine.exercise(**id).is_none()) {
        Some(id) => Err(StrideError::invalid_input("sets").with_reason(format!(
            "Exercise {id} is not part of routine '{}'",
            routine.name
        ))),
        None => Ok(()),
    }
}

fn non_blank(notes: Option<&String>) -> Option<String> {
    notes
        .map(|notes| notes.trim())
        .filter(|notes| !notes.is_empty())
        .map(String::from)
}

impl Tracker {
    /// Resolves a past-or-present day to the instant sessions on it are
    /// anchored at (local noon).
    fn anchor_for(&self, day: DayKey) -> Result<Timestamp> {
        let today = self.normalizer.today();
        if day > today {
            return Err(StrideError::invalid_input("date").with_reason(format!(
                "{day} is in the future; sessions can only be logged up to today ({today})"
            )));
        }
        self.normalizer.local_noon(day).ok_or_else(|| {
            StrideError::invalid_input("date")
                .with_reason(format!("{day} has no local noon in the configured time zone"))
        })
    }

    async fn store_session(&self, session: NewSession) -> Result<WorkoutSession> {
        self.with_db(move |db, normalizer| {
            let routine_id = session.routine_id;
            let routine = db
                .get_routine(routine_id)?
                .ok_or(StrideError::RoutineNotFound { id: routine_id })?;
            check_exercises(&routine, &session.logs)?;
            db.insert_session(&session, normalizer)
        })
        .await
    }

    /// Back-logs a session on a calendar day (today when no date is given).
    ///
    /// The session is anchored at local noon of that day so it normalizes
    /// back to the same day. Sets with zero reps are dropped, notes default
    /// to "Manual" and the duration is zero. Future days are rejected.
    pub async fn log_session(&self, params: &LogSession) -> Result<WorkoutSession> {
        let day = match &params.date {
            Some(raw) => self.parse_day("date", raw)?,
            None => self.normalizer.today(),
        };
        let timestamp = self.anchor_for(day)?;

        self.store_session(NewSession {
            routine_id: params.routine_id,
            timestamp,
            duration_seconds: 0,
            logs: clean_logs(group_sets(&params.sets)),
            notes: Some(non_blank(params.notes.as_ref()).unwrap_or_else(|| MANUAL_NOTES.to_string())),
        })
        .await
    }

    /// Records a session that finished just now.
    pub async fn record_session(&self, params: &RecordSession) -> Result<WorkoutSession> {
        self.store_session(NewSession {
            routine_id: params.routine_id,
            timestamp: self.normalizer.now(),
            duration_seconds: params.duration_seconds,
            logs: group_sets(&params.sets),
            notes: non_blank(params.notes.as_ref()),
        })
        .await
    }

    /// Retrieves a session by its ID.
    pub async fn get_session(&self, params: &Id) -> Result<Option<WorkoutSession>> {
        let id = params.id;
        self.with_db(move |db, _| db.get_session(id)).await
    }

    /// Lists sessions oldest first, filtered by routine and day range.
    pub async fn list_sessions(&self, params: &ListSessions) -> Result<Vec<WorkoutSession>> {
        let filter = SessionFilter {
            routine_id: params.routine_id,
            from: params
                .from
                .as_deref()
                .map(|raw| self.parse_day("from", raw))
                .transpose()?,
            to: params
                .to
                .as_deref()
                .map(|raw| self.parse_day("to", raw))
                .transpose()?,
            limit: params.limit,
        };

        self.with_db(move |db, normalizer| Ok(filter.apply(db.list_sessions()?, normalizer)))
            .await
    }

    /// Reassigns a session's routine or day (re-anchored at local noon) and
    /// recomputes the schedule.
    pub async fn edit_session(&self, params: &EditSession) -> Result<WorkoutSession> {
        let id = params.id;
        let timestamp = match &params.date {
            Some(raw) => Some(self.anchor_for(self.parse_day("date", raw)?)?),
            None => None,
        };
        let changes = SessionChanges {
            routine_id: params.routine_id,
            timestamp,
            notes: non_blank(params.notes.as_ref()),
        };

        self.with_db(move |db, normalizer| {
            let existing = db
                .get_session(id)?
                .ok_or(StrideError::SessionNotFound { id })?;
            if changes.is_empty() {
                return Ok(existing);
            }
            if let Some(routine_id) = changes.routine_id {
                // Set logs keep their exercise IDs when the routine changes.
                db.get_routine(routine_id)?
                    .ok_or(StrideError::RoutineNotFound { id: routine_id })?;
            }
            db.update_session(id, &changes, normalizer)?
                .ok_or(StrideError::SessionNotFound { id })
        })
        .await
    }

    /// Deletes a session and rebuilds the schedule from the remaining history.
    pub async fn delete_session(&self, params: &Id) -> Result<WorkoutSession> {
        let id = params.id;
        self.with_db(move |db, normalizer| {
            db.delete_session(id, normalizer)?
                .ok_or(StrideError::SessionNotFound { id })
        })
        .await
    }
}
