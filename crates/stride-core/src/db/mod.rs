//! SQLite storage for routines, sessions and the derived schedule.
//!
//! The database is the caller-owned state container: every mutation to the
//! routine set or to the history recomputes the schedule with
//! [`crate::schedule::reconcile`] inside the same transaction, so readers
//! never observe a schedule that disagrees with the history.

use std::path::Path;

use jiff::Timestamp;
use rusqlite::{types::Type, Connection, Row};

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod profile_queries;
pub mod routine_queries;
pub mod schedule_queries;
pub mod session_queries;
pub mod snapshot_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

/// Reads an ID column.
pub(crate) fn id_at(row: &Row, idx: usize) -> rusqlite::Result<u64> {
    row.get::<_, i64>(idx).map(|id| id as u64)
}

/// Reads an RFC 3339 timestamp column.
pub(crate) fn timestamp_at(row: &Row, idx: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(idx)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Reads a text column through `FromStr`, reporting bad values as conversion
/// failures.
pub(crate) fn parsed_at<T>(row: &Row, idx: usize) -> rusqlite::Result<T>
where
    T: std::str::FromStr<Err = String>,
{
    let raw: String = row.get(idx)?;
    raw.parse::<T>()
        .map_err(|reason| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, reason.into()))
}
