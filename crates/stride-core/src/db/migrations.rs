//! Database schema initialization and version tracking.

use log::info;

use crate::error::{DatabaseResultExt, Result, StrideError};

/// Schema version written to `PRAGMA user_version`.
pub const SCHEMA_VERSION: i64 = 1;

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        self.check_schema_version()?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.connection
            .pragma_update(None, "user_version", SCHEMA_VERSION)
            .db_context("Failed to record schema version")
    }

    /// Refuses databases written by a newer release.
    fn check_schema_version(&self) -> Result<()> {
        let version: i64 = self
            .connection
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .db_context("Failed to read schema version")?;

        if version > SCHEMA_VERSION {
            return Err(StrideError::Configuration {
                message: format!(
                    "Database schema version {version} is newer than supported version {SCHEMA_VERSION}"
                ),
            });
        }
        if version < SCHEMA_VERSION {
            info!("Initializing database schema version {SCHEMA_VERSION}");
        }
        Ok(())
    }
}
