//! High-level async API for managing projects and their journeys.
//!
//! The [`Scheduler`] coordinates between interface layers and the SQLite
//! store. Every operation opens the database on a blocking task via
//! `tokio::task::spawn_blocking`, so callers on an async runtime are never
//! blocked by SQLite I/O.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Scheduler    │    │    generator    │    │    Database     │
//! │ (project_ops,   │───▶│ (generate_      │───▶│   (via db/)     │
//! │  journey_ops)   │    │  journey)       │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use jiff::civil::date;
//! use journey_core::{params::{CreateProject, GenerateJourney}, SchedulerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let scheduler = SchedulerBuilder::new()
//!     .with_database_path(Some("journey.db"))
//!     .build()
//!     .await?;
//!
//! let project = scheduler
//!     .create_project(&CreateProject {
//!         name: "Client Pitch".to_string(),
//!         deadline: date(2025, 11, 10),
//!     })
//!     .await?;
//!
//! let report = scheduler
//!     .generate_journey(&GenerateJourney {
//!         project: project.id.into(),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{}", report.outcome);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use tokio::task;

use crate::{
    db::Database,
    error::{JourneyError, Result},
    models::JourneyConfig,
};

pub mod builder;
pub mod journey_ops;
pub mod project_ops;

#[cfg(test)]
mod tests;

pub use builder::SchedulerBuilder;

/// Main interface for managing projects and generating journeys.
pub struct Scheduler {
    pub(crate) db_path: PathBuf,
    pub(crate) config: JourneyConfig,
}

impl Scheduler {
    /// Creates a new scheduler with the specified database path.
    pub(crate) fn new(db_path: PathBuf, config: JourneyConfig) -> Self {
        Self { db_path, config }
    }

    /// The generation settings used when a request does not override them.
    pub fn config(&self) -> &JourneyConfig {
        &self.config
    }

    /// Runs `f` against a freshly opened database on a blocking task.
    pub(crate) async fn with_database<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            f(&mut db)
        })
        .await
        .map_err(|e| JourneyError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
