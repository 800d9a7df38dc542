//! Workout session CRUD operations.

use std::collections::BTreeMap;

use log::debug;
use rusqlite::{params, Connection, OptionalExtension};

use super::{id_at, timestamp_at};
use crate::{
    error::{DatabaseResultExt, Result, StrideError},
    models::{NewSession, SessionChanges, SetLog, WorkoutSession},
    schedule::DateNormalizer,
};

const SELECT_SESSIONS_SQL: &str =
    "SELECT id, routine_id, timestamp, duration_seconds, notes FROM sessions ORDER BY timestamp, id";
const SELECT_SESSION_SQL: &str =
    "SELECT id, routine_id, timestamp, duration_seconds, notes FROM sessions WHERE id = ?1";
const SELECT_SET_LOGS_SQL: &str = "SELECT exercise_id, reps, weight_added FROM set_logs WHERE session_id = ?1 ORDER BY exercise_id, set_index";
const INSERT_SESSION_SQL: &str = "INSERT INTO sessions (routine_id, timestamp, duration_seconds, notes) VALUES (?1, ?2, ?3, ?4)";
const INSERT_SET_LOG_SQL: &str = "INSERT INTO set_logs (session_id, exercise_id, set_index, reps, weight_added) VALUES (?1, ?2, ?3, ?4, ?5)";
const UPDATE_SESSION_SQL: &str = "UPDATE sessions SET routine_id = COALESCE(?1, routine_id), timestamp = COALESCE(?2, timestamp), notes = COALESCE(?3, notes) WHERE id = ?4";
const DELETE_SESSION_SQL: &str = "DELETE FROM sessions WHERE id = ?1";

impl super::Database {
    fn build_session_from_row(row: &rusqlite::Row) -> rusqlite::Result<WorkoutSession> {
        Ok(WorkoutSession {
            id: id_at(row, 0)?,
            routine_id: id_at(row, 1)?,
            timestamp: timestamp_at(row, 2)?,
            duration_seconds: row.get(3)?,
            logs: BTreeMap::new(),
            notes: row.get(4)?,
        })
    }

    fn set_logs_in(conn: &Connection, session_id: u64) -> Result<BTreeMap<u64, Vec<SetLog>>> {
        let mut stmt = conn
            .prepare(SELECT_SET_LOGS_SQL)
            .db_context("Failed to prepare set log query")?;

        let rows = stmt
            .query_map(params![session_id as i64], |row| {
                Ok((
                    id_at(row, 0)?,
                    SetLog {
                        reps: row.get(1)?,
                        weight_added: row.get(2)?,
                    },
                ))
            })
            .db_context("Failed to query set logs")?;

        let mut logs: BTreeMap<u64, Vec<SetLog>> = BTreeMap::new();
        for row in rows {
            let (exercise_id, set) = row.db_context("Failed to read set log row")?;
            logs.entry(exercise_id).or_default().push(set);
        }
        Ok(logs)
    }

    /// The full history, oldest first.
    pub(crate) fn sessions_in(conn: &Connection) -> Result<Vec<WorkoutSession>> {
        let mut stmt = conn
            .prepare(SELECT_SESSIONS_SQL)
            .db_context("Failed to prepare session query")?;

        let mut sessions = stmt
            .query_map([], Self::build_session_from_row)
            .db_context("Failed to query sessions")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read session row")?;

        for session in &mut sessions {
            session.logs = Self::set_logs_in(conn, session.id)?;
        }
        // Text ordering of timestamps is not chronological across precisions.
        sessions.sort_by_key(|session| session.timestamp);
        Ok(sessions)
    }

    pub(crate) fn session_in(conn: &Connection, id: u64) -> Result<Option<WorkoutSession>> {
        let session = conn
            .query_row(
                SELECT_SESSION_SQL,
                params![id as i64],
                Self::build_session_from_row,
            )
            .optional()
            .db_context("Failed to query session")?;

        match session {
            Some(mut session) => {
                session.logs = Self::set_logs_in(conn, session.id)?;
                Ok(Some(session))
            }
            None => Ok(None),
        }
    }

    pub(crate) fn insert_set_logs(
        conn: &Connection,
        session_id: u64,
        logs: &BTreeMap<u64, Vec<SetLog>>,
    ) -> Result<()> {
        let mut stmt = conn
            .prepare(INSERT_SET_LOG_SQL)
            .db_context("Failed to prepare set log insert")?;

        for (exercise_id, sets) in logs {
            for (index, set) in (0_i64..).zip(sets) {
                stmt.execute(params![
                    session_id as i64,
                    *exercise_id as i64,
                    index,
                    set.reps,
                    set.weight_added
                ])
                .db_context("Failed to insert set log")?;
            }
        }
        Ok(())
    }

    /// Lists the whole history, oldest first.
    pub fn list_sessions(&self) -> Result<Vec<WorkoutSession>> {
        Self::sessions_in(&self.connection)
    }

    /// Retrieves a session by its ID.
    pub fn get_session(&self, id: u64) -> Result<Option<WorkoutSession>> {
        Self::session_in(&self.connection, id)
    }

    /// Appends a session to the history and recomputes the schedule.
    pub fn insert_session(
        &mut self,
        session: &NewSession,
        normalizer: &DateNormalizer,
    ) -> Result<WorkoutSession> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_SESSION_SQL,
            params![
                session.routine_id as i64,
                session.timestamp.to_string(),
                session.duration_seconds,
                session.notes
            ],
        )
        .db_context("Failed to insert session")?;
        let id = tx.last_insert_rowid() as u64;

        Self::insert_set_logs(&tx, id, &session.logs)?;
        Self::rebuild_schedule_in(&tx, normalizer)?;
        Self::touch_in(&tx)?;
        let stored = Self::session_in(&tx, id)?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!(
            "Logged session {id} for routine {} on {}",
            session.routine_id,
            normalizer.day_of(session.timestamp)
        );

        stored.ok_or(StrideError::SessionNotFound { id })
    }

    /// Applies session editor changes and recomputes the schedule.
    pub fn update_session(
        &mut self,
        id: u64,
        changes: &SessionChanges,
        normalizer: &DateNormalizer,
    ) -> Result<Option<WorkoutSession>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let changed = tx
            .execute(
                UPDATE_SESSION_SQL,
                params![
                    changes.routine_id.map(|routine_id| routine_id as i64),
                    changes.timestamp.map(|timestamp| timestamp.to_string()),
                    changes.notes,
                    id as i64
                ],
            )
            .db_context("Failed to update session")?;
        if changed == 0 {
            return Ok(None);
        }

        Self::rebuild_schedule_in(&tx, normalizer)?;
        Self::touch_in(&tx)?;
        let session = Self::session_in(&tx, id)?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(session)
    }

    /// Removes a session and rebuilds the schedule from the remaining
    /// history. Manual toggles are lost.
    pub fn delete_session(
        &mut self,
        id: u64,
        normalizer: &DateNormalizer,
    ) -> Result<Option<WorkoutSession>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let Some(session) = Self::session_in(&tx, id)? else {
            return Ok(None);
        };

        tx.execute(DELETE_SESSION_SQL, params![id as i64])
            .db_context("Failed to delete session")?;
        Self::rebuild_schedule_in(&tx, normalizer)?;
        Self::touch_in(&tx)?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Deleted session {id}");
        Ok(Some(session))
    }
}
