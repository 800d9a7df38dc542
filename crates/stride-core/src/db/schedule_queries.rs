//! Persistence of the derived schedule.

use log::debug;
use rusqlite::{params, Connection};

use super::parsed_at;
use crate::{
    error::{DatabaseResultExt, Result},
    models::{DayKind, ScheduleEntry},
    schedule::{reconcile, toggle_day, DateNormalizer, DayKey},
};

const SELECT_SCHEDULE_SQL: &str = "SELECT day, kind, routine_id, completed, previous_routine_id FROM schedule_entries ORDER BY day";
const DELETE_SCHEDULE_SQL: &str = "DELETE FROM schedule_entries";
const INSERT_SCHEDULE_ENTRY_SQL: &str = "INSERT INTO schedule_entries (day, kind, routine_id, completed, previous_routine_id) VALUES (?1, ?2, ?3, ?4, ?5)";

impl super::Database {
    fn build_entry_from_row(row: &rusqlite::Row) -> rusqlite::Result<ScheduleEntry> {
        let optional_id = |idx: usize| -> rusqlite::Result<Option<u64>> {
            Ok(row.get::<_, Option<i64>>(idx)?.map(|id| id as u64))
        };

        Ok(ScheduleEntry {
            date: parsed_at::<DayKey>(row, 0)?,
            kind: parsed_at::<DayKind>(row, 1)?,
            routine_id: optional_id(2)?,
            completed: row.get(3)?,
            previous_routine_id: optional_id(4)?,
        })
    }

    pub(crate) fn schedule_in(conn: &Connection) -> Result<Vec<ScheduleEntry>> {
        let mut stmt = conn
            .prepare(SELECT_SCHEDULE_SQL)
            .db_context("Failed to prepare schedule query")?;

        let entries = stmt
            .query_map([], Self::build_entry_from_row)
            .db_context("Failed to query schedule")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read schedule row")?;
        Ok(entries)
    }

    /// Replaces every stored entry with `entries`.
    pub(crate) fn replace_schedule_in(conn: &Connection, entries: &[ScheduleEntry]) -> Result<()> {
        conn.execute(DELETE_SCHEDULE_SQL, [])
            .db_context("Failed to clear schedule")?;

        let mut stmt = conn
            .prepare(INSERT_SCHEDULE_ENTRY_SQL)
            .db_context("Failed to prepare schedule insert")?;
        for entry in entries {
            stmt.execute(params![
                entry.date.to_string(),
                entry.kind.as_str(),
                entry.routine_id.map(|id| id as i64),
                entry.completed,
                entry.previous_routine_id.map(|id| id as i64)
            ])
            .db_context("Failed to insert schedule entry")?;
        }
        Ok(())
    }

    /// Recomputes the schedule from the routines and history visible to
    /// `conn` and stores it.
    pub(crate) fn rebuild_schedule_in(
        conn: &Connection,
        normalizer: &DateNormalizer,
    ) -> Result<Vec<ScheduleEntry>> {
        let routines = Self::routines_in(conn)?;
        let history = Self::sessions_in(conn)?;

        let schedule = reconcile(&history, &routines, normalizer);
        Self::replace_schedule_in(conn, &schedule)?;
        debug!("Stored schedule with {} entries", schedule.len());
        Ok(schedule)
    }

    /// The stored schedule, sorted by day.
    pub fn get_schedule(&self) -> Result<Vec<ScheduleEntry>> {
        Self::schedule_in(&self.connection)
    }

    /// Recomputes and stores the schedule, discarding manual toggles.
    pub fn rebuild_schedule(&mut self, normalizer: &DateNormalizer) -> Result<Vec<ScheduleEntry>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let schedule = Self::rebuild_schedule_in(&tx, normalizer)?;
        Self::touch_in(&tx)?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(schedule)
    }

    /// Flips a future day between workout and rest in the stored schedule.
    ///
    /// Returns `None` when the day is not after today or there are no
    /// routines; nothing is written in that case.
    pub fn toggle_schedule_day(
        &mut self,
        day: DayKey,
        normalizer: &DateNormalizer,
    ) -> Result<Option<Vec<ScheduleEntry>>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let routines = Self::routines_in(&tx)?;
        let schedule = Self::schedule_in(&tx)?;
        let Some(toggled) = toggle_day(&schedule, day, &routines, normalizer.today()) else {
            return Ok(None);
        };

        Self::replace_schedule_in(&tx, &toggled)?;
        Self::touch_in(&tx)?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Toggled schedule day {day}");
        Ok(Some(toggled))
    }
}
