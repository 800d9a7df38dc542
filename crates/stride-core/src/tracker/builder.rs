//! Builder for creating and configuring Tracker instances.

use std::path::{Path, PathBuf};

use jiff::{tz::TimeZone, Timestamp};
use log::debug;
use tokio::task;

use super::Tracker;
use crate::{
    db::Database,
    error::{Result, StrideError},
    schedule::DateNormalizer,
};

/// Builder for creating and configuring Tracker instances.
#[derive(Debug, Clone, Default)]
pub struct TrackerBuilder {
    database_path: Option<PathBuf>,
    time_zone: Option<TimeZone>,
    now: Option<Timestamp>,
}

impl TrackerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/stride/stride.db` or `~/.local/share/stride/stride.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the time zone whose local fields define calendar days. Defaults
    /// to the system time zone.
    pub fn with_time_zone(mut self, time_zone: Option<TimeZone>) -> Self {
        if let Some(time_zone) = time_zone {
            self.time_zone = Some(time_zone);
        }
        self
    }

    /// Pins "now" to a fixed instant.
    pub fn with_clock(mut self, now: Timestamp) -> Self {
        self.now = Some(now);
        self
    }

    /// Builds the configured tracker instance.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::XdgDirectory` if no default path can be placed
    /// Returns `StrideError::FileSystem` if the database directory cannot be
    /// created
    /// Returns `StrideError::Database` if database initialization fails
    pub async fn build(self) -> Result<Tracker> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StrideError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || Database::new(&db_path_clone).map(drop))
            .await
            .map_err(StrideError::join)??;

        let mut normalizer = DateNormalizer::new(self.time_zone.unwrap_or_else(TimeZone::system));
        if let Some(now) = self.now {
            normalizer = normalizer.at(now);
        }
        debug!("Using database at {}", db_path.display());

        Ok(Tracker::new(db_path, normalizer))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("stride")
            .place_data_file("stride.db")
            .map_err(|e| StrideError::XdgDirectory(e.to_string()))
    }
}
