//! Routine and exercise CRUD operations.

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};

use super::{id_at, timestamp_at};
use crate::{
    error::{DatabaseResultExt, Result, StrideError},
    models::{Exercise, NewExercise, Routine},
    schedule::DateNormalizer,
};

const SELECT_ROUTINES_SQL: &str =
    "SELECT id, name, description, created_at, updated_at FROM routines ORDER BY position, id";
const SELECT_ROUTINE_SQL: &str =
    "SELECT id, name, description, created_at, updated_at FROM routines WHERE id = ?1";
const SELECT_EXERCISES_SQL: &str = "SELECT id, name, muscle_group, target_sets, target_reps, rest_seconds FROM exercises WHERE routine_id = ?1 ORDER BY exercise_order, id";
const INSERT_ROUTINE_SQL: &str = "INSERT INTO routines (name, description, position, created_at, updated_at) VALUES (?1, ?2, (SELECT COALESCE(MAX(position), -1) + 1 FROM routines), ?3, ?4)";
const INSERT_EXERCISE_SQL: &str = "INSERT INTO exercises (routine_id, name, muscle_group, target_sets, target_reps, rest_seconds, exercise_order) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const UPDATE_ROUTINE_SQL: &str = "UPDATE routines SET name = COALESCE(?1, name), description = COALESCE(?2, description), updated_at = ?3 WHERE id = ?4";
const TOUCH_ROUTINE_SQL: &str = "UPDATE routines SET updated_at = ?1 WHERE id = ?2";
const DELETE_ROUTINE_SQL: &str = "DELETE FROM routines WHERE id = ?1";
const SELECT_EXERCISE_SLOT_SQL: &str =
    "SELECT routine_id, exercise_order FROM exercises WHERE id = ?1";
const DELETE_EXERCISE_SQL: &str = "DELETE FROM exercises WHERE id = ?1";

impl super::Database {
    fn build_routine_from_row(row: &rusqlite::Row) -> rusqlite::Result<Routine> {
        Ok(Routine {
            id: id_at(row, 0)?,
            name: row.get(1)?,
            description: row.get(2)?,
            exercises: Vec::new(),
            created_at: timestamp_at(row, 3)?,
            updated_at: timestamp_at(row, 4)?,
        })
    }

    fn build_exercise_from_row(row: &rusqlite::Row) -> rusqlite::Result<Exercise> {
        Ok(Exercise {
            id: id_at(row, 0)?,
            name: row.get(1)?,
            muscle_group: row.get(2)?,
            target_sets: row.get(3)?,
            target_reps: row.get(4)?,
            rest_seconds: row.get(5)?,
        })
    }

    fn exercises_in(conn: &Connection, routine_id: u64) -> Result<Vec<Exercise>> {
        let mut stmt = conn
            .prepare(SELECT_EXERCISES_SQL)
            .db_context("Failed to prepare exercise query")?;

        let exercises = stmt
            .query_map(params![routine_id as i64], Self::build_exercise_from_row)
            .db_context("Failed to query exercises")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read exercise row")?;
        Ok(exercises)
    }

    /// All routines in rotation order, with their exercises.
    pub(crate) fn routines_in(conn: &Connection) -> Result<Vec<Routine>> {
        let mut stmt = conn
            .prepare(SELECT_ROUTINES_SQL)
            .db_context("Failed to prepare routine query")?;

        let mut routines = stmt
            .query_map([], Self::build_routine_from_row)
            .db_context("Failed to query routines")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read routine row")?;

        for routine in &mut routines {
            routine.exercises = Self::exercises_in(conn, routine.id)?;
        }
        Ok(routines)
    }

    pub(crate) fn routine_in(conn: &Connection, id: u64) -> Result<Option<Routine>> {
        let routine = conn
            .query_row(
                SELECT_ROUTINE_SQL,
                params![id as i64],
                Self::build_routine_from_row,
            )
            .optional()
            .db_context("Failed to query routine")?;

        match routine {
            Some(mut routine) => {
                routine.exercises = Self::exercises_in(conn, routine.id)?;
                Ok(Some(routine))
            }
            None => Ok(None),
        }
    }

    fn insert_exercise(
        conn: &Connection,
        routine_id: u64,
        exercise: &NewExercise,
        order: i64,
    ) -> Result<u64> {
        conn.execute(
            INSERT_EXERCISE_SQL,
            params![
                routine_id as i64,
                exercise.name,
                exercise.muscle_group,
                exercise.target_sets,
                exercise.target_reps,
                exercise.rest_seconds,
                order
            ],
        )
        .db_context("Failed to insert exercise")?;
        Ok(conn.last_insert_rowid() as u64)
    }

    /// Lists all routines in rotation order.
    pub fn list_routines(&self) -> Result<Vec<Routine>> {
        Self::routines_in(&self.connection)
    }

    /// Retrieves a routine by its ID.
    pub fn get_routine(&self, id: u64) -> Result<Option<Routine>> {
        Self::routine_in(&self.connection, id)
    }

    /// Creates a routine at the end of the rotation and recomputes the
    /// schedule, since the routine count changed.
    pub fn create_routine(
        &mut self,
        name: &str,
        description: Option<&str>,
        exercises: &[NewExercise],
        normalizer: &DateNormalizer,
    ) -> Result<Routine> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now().to_string();
        tx.execute(INSERT_ROUTINE_SQL, params![name, description, &now, &now])
            .db_context("Failed to insert routine")?;
        let id = tx.last_insert_rowid() as u64;

        for (order, exercise) in (0_i64..).zip(exercises) {
            Self::insert_exercise(&tx, id, exercise, order)?;
        }

        Self::rebuild_schedule_in(&tx, normalizer)?;
        Self::touch_in(&tx)?;
        let routine = Self::routine_in(&tx, id)?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Created routine {id} with {} exercises", exercises.len());

        routine.ok_or(StrideError::RoutineNotFound { id })
    }

    /// Renames or re-describes a routine. The routine set is unchanged, so
    /// the schedule is left alone.
    pub fn update_routine(
        &mut self,
        id: u64,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<Option<Routine>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let changed = tx
            .execute(
                UPDATE_ROUTINE_SQL,
                params![name, description, Timestamp::now().to_string(), id as i64],
            )
            .db_context("Failed to update routine")?;
        if changed == 0 {
            return Ok(None);
        }

        Self::touch_in(&tx)?;
        let routine = Self::routine_in(&tx, id)?;
        tx.commit().db_context("Failed to commit transaction")?;
        Ok(routine)
    }

    /// Deletes a routine and its exercises, then recomputes the schedule.
    /// Sessions that reference the routine are kept.
    pub fn delete_routine(
        &mut self,
        id: u64,
        normalizer: &DateNormalizer,
    ) -> Result<Option<Routine>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let Some(routine) = Self::routine_in(&tx, id)? else {
            return Ok(None);
        };

        tx.execute(DELETE_ROUTINE_SQL, params![id as i64])
            .db_context("Failed to delete routine")?;
        Self::rebuild_schedule_in(&tx, normalizer)?;
        Self::touch_in(&tx)?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Deleted routine {id}");
        Ok(Some(routine))
    }

    /// Replaces an exercise in whichever routine holds it, keeping its place
    /// in the exercise order. The replacement gets a fresh ID. Returns the
    /// updated routine, or `None` when no exercise has that ID.
    pub fn replace_exercise(
        &mut self,
        exercise_id: u64,
        replacement: &NewExercise,
    ) -> Result<Option<Routine>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let slot: Option<(i64, i64)> = tx
            .query_row(SELECT_EXERCISE_SLOT_SQL, params![exercise_id as i64], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })
            .optional()
            .db_context("Failed to locate exercise")?;
        let Some((routine_id, order)) = slot else {
            return Ok(None);
        };
        let routine_id = routine_id as u64;

        tx.execute(DELETE_EXERCISE_SQL, params![exercise_id as i64])
            .db_context("Failed to delete exercise")?;
        Self::insert_exercise(&tx, routine_id, replacement, order)?;
        tx.execute(
            TOUCH_ROUTINE_SQL,
            params![Timestamp::now().to_string(), routine_id as i64],
        )
        .db_context("Failed to update routine timestamp")?;
        Self::touch_in(&tx)?;

        let routine = Self::routine_in(&tx, routine_id)?;
        tx.commit().db_context("Failed to commit transaction")?;
        Ok(routine)
    }
}
