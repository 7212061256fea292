//! Project operations for the Scheduler.

use super::Scheduler;
use crate::{
    display::Projects,
    error::{JourneyError, Result},
    models::{DeadlineChange, Project},
    params::{CreateProject, DeleteProject, ProjectLookup, SetDeadline},
};

impl Scheduler {
    /// Creates a new project with a unique name and deadline.
    pub async fn create_project(&self, params: &CreateProject) -> Result<Project> {
        let name = params.name.clone();
        let deadline = params.deadline;
        self.with_database(move |db| db.create_project(&name, deadline))
            .await
    }

    /// Retrieves a project, including its stored journey.
    ///
    /// # Errors
    ///
    /// Returns `JourneyError::ProjectNotFound` if the project does not exist.
    pub async fn get_project(&self, params: &ProjectLookup) -> Result<Project> {
        let project = params.project.clone();
        self.with_database(move |db| db.resolve_project(&project))
            .await
    }

    /// Lists all projects, soonest deadline first.
    pub async fn list_projects(&self) -> Result<Projects> {
        self.with_database(|db| db.list_projects())
            .await
            .map(Projects)
    }

    /// Moves a project's deadline. The stored journey is discarded since it
    /// was planned against the old date.
    pub async fn set_deadline(&self, params: &SetDeadline) -> Result<DeadlineChange> {
        let project = params.project.clone();
        let deadline = params.deadline;
        self.with_database(move |db| db.set_deadline(&project, deadline))
            .await
    }

    /// Permanently deletes a project.
    ///
    /// # Errors
    ///
    /// Returns `JourneyError::InvalidInput` if `confirmed` is false and
    /// `JourneyError::ProjectNotFound` if the project does not exist.
    pub async fn delete_project(&self, params: &DeleteProject) -> Result<Project> {
        if !params.confirmed {
            return Err(JourneyError::invalid_input("confirmed").with_reason(
                "Project deletion requires explicit confirmation. Set 'confirmed' to true to proceed with permanent deletion.",
            ));
        }

        let project = params.project.clone();
        self.with_database(move |db| db.delete_project(&project))
            .await
    }
}
