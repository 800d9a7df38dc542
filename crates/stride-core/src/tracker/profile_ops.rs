//! Profile and snapshot operations for the Tracker.

use std::path::Path;

use log::info;

use super::Tracker;
use crate::{
    error::{Result, StrideError},
    models::{Profile, Snapshot},
    params::UpdateProfile,
};

impl Tracker {
    /// Retrieves the profile.
    pub async fn profile(&self) -> Result<Profile> {
        self.with_db(|db, _| db.get_profile()).await
    }

    /// Updates the given profile fields, returning the new profile and a
    /// description of each change.
    pub async fn update_profile(&self, params: &UpdateProfile) -> Result<(Profile, Vec<String>)> {
        let (level, goal) = params.validate()?;
        let params = params.clone();

        self.with_db(move |db, _| {
            let mut profile = db.get_profile()?;
            let mut changes = Vec::new();

            if let Some(name) = params.name.as_deref().map(str::trim) {
                if name.is_empty() {
                    return Err(StrideError::invalid_input("name").with_reason("Name is empty"));
                }
                profile.name = name.to_string();
                changes.push(format!("Name set to {name}"));
            }
            if let Some(level) = level {
                profile.level = level;
                changes.push(format!("Level set to {}", level.as_str()));
            }
            if let Some(goal) = goal {
                profile.goal = goal;
                changes.push(format!("Goal set to {}", goal.as_str()));
            }
            if let Some(equipment) = params.equipment {
                changes.push(format!("Equipment set to {} item(s)", equipment.len()));
                profile.available_equipment = equipment;
            }
            if let Some(days) = params.training_days_per_week {
                profile.training_days_per_week = Some(days);
                changes.push(format!("Training days per week set to {days}"));
            }

            if !changes.is_empty() {
                db.save_profile(&profile)?;
            }
            Ok((profile, changes))
        })
        .await
    }

    /// Reads the complete state.
    pub async fn export_snapshot(&self) -> Result<Snapshot> {
        self.with_db(|db, _| db.export_snapshot()).await
    }

    /// Replaces the complete state. Nothing is merged.
    pub async fn import_snapshot(&self, snapshot: Snapshot) -> Result<()> {
        self.with_db(move |db, _| db.import_snapshot(&snapshot)).await
    }

    /// Writes the complete state to a JSON file.
    pub async fn export_to_file(&self, path: &Path) -> Result<Snapshot> {
        let snapshot = self.export_snapshot().await?;
        let json = serde_json::to_string_pretty(&snapshot)?;
        tokio::fs::write(path, json)
            .await
            .map_err(|e| StrideError::FileSystem {
                path: path.to_path_buf(),
                source: e,
            })?;
        info!("Exported snapshot to {}", path.display());
        Ok(snapshot)
    }

    /// Replaces the complete state with a JSON file written by
    /// [`Tracker::export_to_file`].
    pub async fn import_from_file(&self, path: &Path) -> Result<Snapshot> {
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| StrideError::FileSystem {
                path: path.to_path_buf(),
                source: e,
            })?;
        let snapshot: Snapshot = serde_json::from_str(&json)?;
        self.import_snapshot(snapshot.clone()).await?;
        Ok(snapshot)
    }
}
