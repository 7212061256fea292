//! Project CRUD operations and queries.

use jiff::{civil::Date, Timestamp};
use log::debug;
use rusqlite::{params, OptionalExtension};

use super::{project_from_row, PROJECT_COLUMNS};
use crate::{
    error::{DatabaseResultExt, JourneyError, Result},
    models::{DeadlineChange, Project},
    store::ProjectRef,
};

const INSERT_PROJECT_SQL: &str =
    "INSERT INTO projects (name, deadline, created_at, updated_at) VALUES (?1, ?2, ?3, ?4)";
const CHECK_NAME_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM projects WHERE name = ?1)";
const UPDATE_DEADLINE_SQL: &str = "UPDATE projects SET deadline = ?1, journey = NULL, journey_generated_at = NULL, updated_at = ?2 WHERE id = ?3";
const DELETE_PROJECT_SQL: &str = "DELETE FROM projects WHERE id = ?1";

impl super::Database {
    /// Creates a new project with a unique name and a deadline.
    ///
    /// # Errors
    ///
    /// Returns `JourneyError::InvalidInput` for a blank name, a name made
    /// only of digits, or a name that is already taken.
    pub fn create_project(&mut self, name: &str, deadline: Date) -> Result<Project> {
        let name = name.trim();
        if name.is_empty() {
            return Err(JourneyError::invalid_input("name").with_reason("Project name cannot be empty"));
        }
        // Digit-only input always resolves as an ID
        if name.bytes().all(|b| b.is_ascii_digit()) {
            return Err(JourneyError::invalid_input("name").with_reason(format!(
                "Project name '{name}' would be read as a project ID; include a non-digit character"
            )));
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_NAME_EXISTS_SQL, params![name], |row| row.get(0))
            .db_context("Failed to check project name")?;
        if exists {
            return Err(JourneyError::invalid_input("name")
                .with_reason(format!("A project named '{name}' already exists")));
        }

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_PROJECT_SQL,
            params![name, deadline.to_string(), &now_str, &now_str],
        )
        .db_context("Failed to insert project")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Created project {id} '{name}' due {deadline}");

        Ok(Project {
            id,
            name: name.to_string(),
            deadline,
            journey: None,
            journey_generated_at: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a project by its ID.
    pub fn get_project(&self, id: u64) -> Result<Option<Project>> {
        let query = format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE id = ?1");
        self.connection
            .query_row(&query, params![id as i64], project_from_row)
            .optional()
            .db_context("Failed to query project")
    }

    /// Retrieves a project by its unique name.
    pub fn get_project_by_name(&self, name: &str) -> Result<Option<Project>> {
        let query = format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE name = ?1");
        self.connection
            .query_row(&query, params![name], project_from_row)
            .optional()
            .db_context("Failed to query project by name")
    }

    /// Resolves a [`ProjectRef`] to exactly one project.
    ///
    /// # Errors
    ///
    /// Returns `JourneyError::ProjectNotFound` when nothing matches.
    pub fn resolve_project(&self, project: &ProjectRef) -> Result<Project> {
        let found = match project {
            ProjectRef::Id(id) => self.get_project(*id)?,
            ProjectRef::Name(name) => self.get_project_by_name(name)?,
        };
        found.ok_or_else(|| JourneyError::ProjectNotFound {
            identifier: project.to_string(),
        })
    }

    /// Lists all projects, soonest deadline first.
    pub fn list_projects(&self) -> Result<Vec<Project>> {
        let query =
            format!("SELECT {PROJECT_COLUMNS} FROM projects ORDER BY deadline ASC, id ASC");
        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let projects = stmt
            .query_map([], project_from_row)
            .db_context("Failed to query projects")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read project row")?;

        Ok(projects)
    }

    /// Moves a project's deadline and discards its now stale journey.
    ///
    /// The previous deadline and whether a journey was dropped are read in
    /// the same transaction as the update.
    ///
    /// # Errors
    ///
    /// Returns `JourneyError::ProjectNotFound` if the project does not exist.
    pub fn set_deadline(
        &mut self,
        project: &ProjectRef,
        deadline: Date,
    ) -> Result<DeadlineChange> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let existing = match project {
            ProjectRef::Id(id) => {
                let query = format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE id = ?1");
                tx.query_row(&query, params![*id as i64], project_from_row)
            }
            ProjectRef::Name(name) => {
                let query = format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE name = ?1");
                tx.query_row(&query, params![name], project_from_row)
            }
        }
        .optional()
        .db_context("Failed to query project")?
        .ok_or_else(|| JourneyError::ProjectNotFound {
            identifier: project.to_string(),
        })?;

        let now = Timestamp::now();
        tx.execute(
            UPDATE_DEADLINE_SQL,
            params![deadline.to_string(), now.to_string(), existing.id as i64],
        )
        .db_context("Failed to update deadline")?;
        tx.commit().db_context("Failed to commit transaction")?;

        debug!(
            "Moved deadline of project {} from {} to {deadline}",
            existing.id, existing.deadline
        );

        let previous_deadline = existing.deadline;
        let discarded_journey = existing.journey.is_some();
        Ok(DeadlineChange {
            project: Project {
                deadline,
                journey: None,
                journey_generated_at: None,
                updated_at: now,
                ..existing
            },
            previous_deadline,
            discarded_journey,
        })
    }

    /// Permanently deletes a project and its stored journey.
    ///
    /// # Errors
    ///
    /// Returns `JourneyError::ProjectNotFound` if the project does not exist.
    pub fn delete_project(&mut self, project: &ProjectRef) -> Result<Project> {
        let existing = self.resolve_project(project)?;

        self.connection
            .execute(DELETE_PROJECT_SQL, params![existing.id as i64])
            .db_context("Failed to delete project")?;
        debug!("Deleted project {} '{}'", existing.id, existing.name);

        Ok(existing)
    }
}
