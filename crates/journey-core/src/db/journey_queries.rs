//! Journey persistence on project rows.

use jiff::Timestamp;
use log::{debug, info};
use rusqlite::params;

use super::Database;
use crate::{
    error::{DatabaseResultExt, JourneyError, Result},
    models::{JourneyPlan, Project},
    store::{ProjectRef, ProjectStore},
};

const UPDATE_JOURNEY_SQL: &str =
    "UPDATE projects SET journey = ?1, journey_generated_at = ?2, updated_at = ?2 WHERE id = ?3";
const CLEAR_JOURNEY_SQL: &str = "UPDATE projects SET journey = NULL, journey_generated_at = NULL, updated_at = ?1 WHERE id = ?2";

impl Database {
    /// Removes the stored journey from a project, if any.
    ///
    /// # Errors
    ///
    /// Returns `JourneyError::ProjectNotFound` if the project does not exist.
    pub fn clear_journey(&mut self, project: &ProjectRef) -> Result<()> {
        let existing = self.resolve_project(project)?;
        self.connection
            .execute(
                CLEAR_JOURNEY_SQL,
                params![Timestamp::now().to_string(), existing.id as i64],
            )
            .db_context("Failed to clear journey")?;
        debug!("Cleared journey of project {}", existing.id);
        Ok(())
    }
}

impl ProjectStore for Database {
    fn fetch_project(&self, project: &ProjectRef) -> Result<Project> {
        self.resolve_project(project)
    }

    fn persist_journey_plan(
        &mut self,
        project_id: u64,
        plan: &JourneyPlan,
        generated_at: Timestamp,
    ) -> Result<()> {
        let json = serde_json::to_string(plan)?;

        let changed = self
            .connection
            .execute(
                UPDATE_JOURNEY_SQL,
                params![json, generated_at.to_string(), project_id as i64],
            )
            .map_err(|e| JourneyError::persistence(project_id, e))?;

        if changed == 0 {
            return Err(JourneyError::persistence(
                project_id,
                format!("project {project_id} no longer exists"),
            ));
        }

        info!(
            "Stored {} milestone journey for project {project_id} generated at {generated_at}",
            plan.milestones.len()
        );
        Ok(())
    }
}
