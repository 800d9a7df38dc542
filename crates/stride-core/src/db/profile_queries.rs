//! Profile storage (a single row).

use rusqlite::{params, types::Type, Connection, OptionalExtension};

use super::parsed_at;
use crate::{
    error::{DatabaseResultExt, Result},
    models::{Goal, Level, Profile},
};

const SELECT_PROFILE_SQL: &str =
    "SELECT name, level, goal, equipment, training_days_per_week FROM profile WHERE id = 1";
const UPSERT_PROFILE_SQL: &str = "INSERT INTO profile (id, name, level, goal, equipment, training_days_per_week) VALUES (1, ?1, ?2, ?3, ?4, ?5) ON CONFLICT(id) DO UPDATE SET name = excluded.name, level = excluded.level, goal = excluded.goal, equipment = excluded.equipment, training_days_per_week = excluded.training_days_per_week";

impl super::Database {
    fn build_profile_from_row(row: &rusqlite::Row) -> rusqlite::Result<Profile> {
        let equipment: String = row.get(3)?;
        let available_equipment = serde_json::from_str(&equipment)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;

        Ok(Profile {
            name: row.get(0)?,
            level: parsed_at::<Level>(row, 1)?,
            goal: parsed_at::<Goal>(row, 2)?,
            available_equipment,
            training_days_per_week: row.get(4)?,
        })
    }

    /// The stored profile, or the default profile for a fresh database.
    pub(crate) fn profile_in(conn: &Connection) -> Result<Profile> {
        let profile = conn
            .query_row(SELECT_PROFILE_SQL, [], Self::build_profile_from_row)
            .optional()
            .db_context("Failed to query profile")?;
        Ok(profile.unwrap_or_default())
    }

    pub(crate) fn save_profile_in(conn: &Connection, profile: &Profile) -> Result<()> {
        let equipment = serde_json::to_string(&profile.available_equipment)?;
        conn.execute(
            UPSERT_PROFILE_SQL,
            params![
                profile.name,
                profile.level.as_str(),
                profile.goal.as_str(),
                equipment,
                profile.training_days_per_week
            ],
        )
        .db_context("Failed to save profile")?;
        Ok(())
    }

    /// Retrieves the profile.
    pub fn get_profile(&self) -> Result<Profile> {
        Self::profile_in(&self.connection)
    }

    /// Stores the profile, replacing the previous one.
    pub fn save_profile(&mut self, profile: &Profile) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        Self::save_profile_in(&tx, profile)?;
        Self::touch_in(&tx)?;

        tx.commit().db_context("Failed to commit transaction")
    }
}
