//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use super::{datetime::LocalDateTime, models::SessionDetail};
use crate::models::{Profile, Routine};

/// Wrapper type for displaying the result of create operations.
///
/// Prints a one-line confirmation followed by the created resource.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Routine> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created routine with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<SessionDetail> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Logged session with ID: {}", self.resource.session.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// Optionally lists the changes that were applied.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }

    fn fmt_changes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for UpdateResult<Routine> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated routine with ID: {}", self.resource.id)?;
        self.fmt_changes(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for UpdateResult<SessionDetail> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated session with ID: {}", self.resource.session.id)?;
        self.fmt_changes(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for UpdateResult<Profile> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated profile")?;
        self.fmt_changes(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Routine> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted routine '{}' (ID: {})",
            self.resource.name, self.resource.id
        )
    }
}

impl fmt::Display for DeleteResult<SessionDetail> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted session {} ({}, {})",
            self.resource.session.id,
            self.resource.routine_name(),
            LocalDateTime::in_zone(&self.resource.session.timestamp, &self.resource.time_zone)
        )
    }
}
