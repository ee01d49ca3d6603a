//! Database operations and SQLite management for itineraries.
//!
//! An itinerary is decomposed into one `itineraries` row, one `days` row per
//! day plan and one `day_events` row per slot. Lookups may be scoped to an
//! owning user: when a user ID is supplied only rows created for that user are
//! visible, when it is `None` the query is unscoped.

use std::{path::Path, str::FromStr};

use rusqlite::{Connection, types::Type};

use crate::error::{DatabaseResultExt, Result};

pub mod event_queries;
pub mod itinerary_queries;
pub mod schema;

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

    /// Opens a private in-memory database, mainly for tests and previews.
    pub fn in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

/// Reads a text column and parses it with `FromStr`, reporting failures as a
/// column conversion error so they surface through `rusqlite::Error`.
pub(crate) fn parse_column<T>(row: &rusqlite::Row<'_>, index: usize) -> rusqlite::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw: String = row.get(index)?;
    raw.parse::<T>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}
