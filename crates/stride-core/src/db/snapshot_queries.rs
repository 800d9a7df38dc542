//! Whole-store export and import, plus the last-updated marker.

use jiff::Timestamp;
use log::info;
use rusqlite::{params, Connection, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result},
    models::Snapshot,
};

const SELECT_LAST_UPDATED_SQL: &str = "SELECT value FROM metadata WHERE key = 'last_updated'";
const UPSERT_LAST_UPDATED_SQL: &str = "INSERT INTO metadata (key, value) VALUES ('last_updated', ?1) ON CONFLICT(key) DO UPDATE SET value = excluded.value";
const CLEAR_ALL_SQL: &str = "DELETE FROM set_logs; DELETE FROM sessions; DELETE FROM exercises; DELETE FROM routines; DELETE FROM schedule_entries; DELETE FROM profile; DELETE FROM metadata;";
const INSERT_ROUTINE_WITH_ID_SQL: &str = "INSERT INTO routines (id, name, description, position, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const INSERT_EXERCISE_WITH_ID_SQL: &str = "INSERT INTO exercises (id, routine_id, name, muscle_group, target_sets, target_reps, rest_seconds, exercise_order) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const INSERT_SESSION_WITH_ID_SQL: &str = "INSERT INTO sessions (id, routine_id, timestamp, duration_seconds, notes) VALUES (?1, ?2, ?3, ?4, ?5)";

impl super::Database {
    /// Records the current instant as the last mutation time.
    pub(crate) fn touch_in(conn: &Connection) -> Result<()> {
        Self::set_last_updated_in(conn, Timestamp::now())
    }

    fn set_last_updated_in(conn: &Connection, at: Timestamp) -> Result<()> {
        conn.execute(UPSERT_LAST_UPDATED_SQL, params![at.to_string()])
            .db_context("Failed to update last_updated")?;
        Ok(())
    }

    /// Instant of the last mutation, if any.
    pub fn last_updated(&self) -> Result<Option<Timestamp>> {
        let raw: Option<String> = self
            .connection
            .query_row(SELECT_LAST_UPDATED_SQL, [], |row| row.get(0))
            .optional()
            .db_context("Failed to query last_updated")?;

        // An unreadable marker is treated as absent.
        Ok(raw.and_then(|value| value.parse().ok()))
    }

    /// Reads the complete state as one document.
    pub fn export_snapshot(&self) -> Result<Snapshot> {
        Ok(Snapshot {
            profile: Self::profile_in(&self.connection)?,
            routines: Self::routines_in(&self.connection)?,
            history: Self::sessions_in(&self.connection)?,
            schedule: Self::schedule_in(&self.connection)?,
            last_updated: self.last_updated()?,
        })
    }

    /// Replaces the complete state with `snapshot`, keeping its IDs and its
    /// schedule as given.
    pub fn import_snapshot(&mut self, snapshot: &Snapshot) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute_batch(CLEAR_ALL_SQL)
            .db_context("Failed to clear existing data")?;

        Self::save_profile_in(&tx, &snapshot.profile)?;

        for (position, routine) in (0_i64..).zip(&snapshot.routines) {
            tx.execute(
                INSERT_ROUTINE_WITH_ID_SQL,
                params![
                    routine.id as i64,
                    routine.name,
                    routine.description,
                    position,
                    routine.created_at.to_string(),
                    routine.updated_at.to_string()
                ],
            )
            .db_context("Failed to import routine")?;

            for (order, exercise) in (0_i64..).zip(&routine.exercises) {
                tx.execute(
                    INSERT_EXERCISE_WITH_ID_SQL,
                    params![
                        exercise.id as i64,
                        routine.id as i64,
                        exercise.name,
                        exercise.muscle_group,
                        exercise.target_sets,
                        exercise.target_reps,
                        exercise.rest_seconds,
                        order
                    ],
                )
                .db_context("Failed to import exercise")?;
            }
        }

        for session in &snapshot.history {
            tx.execute(
                INSERT_SESSION_WITH_ID_SQL,
                params![
                    session.id as i64,
                    session.routine_id as i64,
                    session.timestamp.to_string(),
                    session.duration_seconds,
                    session.notes
                ],
            )
            .db_context("Failed to import session")?;
            Self::insert_set_logs(&tx, session.id, &session.logs)?;
        }

        Self::replace_schedule_in(&tx, &snapshot.schedule)?;
        match snapshot.last_updated {
            Some(at) => Self::set_last_updated_in(&tx, at)?,
            None => Self::touch_in(&tx)?,
        }

        tx.commit().db_context("Failed to commit transaction")?;
        info!(
            "Imported {} routines and {} sessions",
            snapshot.routines.len(),
            snapshot.history.len()
        );
        Ok(())
    }
}
