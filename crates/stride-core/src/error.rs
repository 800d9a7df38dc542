//! Error types for the Stride library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for every fallible tracker operation.
///
/// The scheduling functions in [`crate::schedule`] never produce these: they
/// degrade to empty schedules instead. Errors only come from the store and
/// from validating user input.
#[derive(Error, Debug)]
pub enum StrideError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Routine not found for the given ID
    #[error("Routine with ID {id} not found")]
    RoutineNotFound { id: u64 },
    /// Session not found for the given ID
    #[error("Session with ID {id} not found")]
    SessionNotFound { id: u64 },
    /// Exercise not found for the given ID
    #[error("Exercise with ID {id} not found")]
    ExerciseNotFound { id: u64 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> StrideError {
        StrideError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> StrideError {
        StrideError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl StrideError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Wraps a `spawn_blocking` join failure.
    pub(crate) fn join(error: tokio::task::JoinError) -> Self {
        Self::Configuration {
            message: format!("Task join error: {error}"),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| StrideError::database(message).with_source(e))
    }
}

/// Result type alias for tracker operations
pub type Result<T> = std::result::Result<T, StrideError>;
