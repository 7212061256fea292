//! Builder for creating and configuring Scheduler instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::Scheduler;
use crate::{
    db::Database,
    error::{JourneyError, Result},
    models::JourneyConfig,
};

/// Builder for creating and configuring Scheduler instances.
#[derive(Debug, Clone)]
pub struct SchedulerBuilder {
    database_path: Option<PathBuf>,
    config: JourneyConfig,
}

impl SchedulerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            config: JourneyConfig::default(),
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/journey/journey.db` or `~/.local/share/journey/journey.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the default generation settings.
    pub fn with_config(mut self, config: JourneyConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the configured scheduler instance.
    ///
    /// # Errors
    ///
    /// Returns `JourneyError::InvalidInput` if the configuration is invalid
    /// Returns `JourneyError::FileSystem` if the database path is invalid
    /// Returns `JourneyError::Database` if database initialization fails
    pub async fn build(self) -> Result<Scheduler> {
        self.config.validate()?;

        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| JourneyError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), JourneyError>(())
        })
        .await
        .map_err(|e| JourneyError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        debug!("Using database at {}", db_path.display());
        Ok(Scheduler::new(db_path, self.config))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("journey")
            .place_data_file("journey.db")
            .map_err(|e| JourneyError::XdgDirectory(e.to_string()))
    }
}

impl Default for SchedulerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
