//! Database operations and SQLite management for projects.
//!
//! This module provides low-level database operations for the journey
//! planner. It handles SQLite connections, schema management, project
//! queries and the [`crate::store::ProjectStore`] implementation used to
//! persist generated journeys.

use std::path::Path;

use jiff::{civil::Date, Timestamp};
use rusqlite::{types::Type, Connection, Row};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{JourneyPlan, Project},
};

pub mod journey_queries;
pub mod migrations;
pub mod project_queries;

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

/// Columns selected by every project query, in the order [`project_from_row`]
/// expects them.
pub(crate) const PROJECT_COLUMNS: &str =
    "id, name, deadline, journey, journey_generated_at, created_at, updated_at";

/// Maps a row selected with [`PROJECT_COLUMNS`] onto a [`Project`].
pub(crate) fn project_from_row(row: &Row<'_>) -> rusqlite::Result<Project> {
    let deadline = row
        .get::<_, String>(2)?
        .parse::<Date>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?;

    let journey = match row.get::<_, Option<String>>(3)? {
        Some(json) => Some(
            serde_json::from_str::<JourneyPlan>(&json).map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e))
            })?,
        ),
        None => None,
    };

    let journey_generated_at = match row.get::<_, Option<String>>(4)? {
        Some(ts) => Some(parse_timestamp(4, &ts)?),
        None => None,
    };

    Ok(Project {
        id: row.get::<_, i64>(0)? as u64,
        name: row.get(1)?,
        deadline,
        journey,
        journey_generated_at,
        created_at: parse_timestamp(5, &row.get::<_, String>(5)?)?,
        updated_at: parse_timestamp(6, &row.get::<_, String>(6)?)?,
    })
}

fn parse_timestamp(column: usize, value: &str) -> rusqlite::Result<Timestamp> {
    value
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(e)))
}
