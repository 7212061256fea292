//! Command handlers for the Journey CLI.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use journey_core::{
    params::GenerateJourney,
    CreateResult, DeleteResult, MilestoneTemplate, OperationStatus, Scheduler, UpdateResult,
};
use log::debug;

use crate::{
    args::{GenerateArgs, ProjectCommands},
    renderer::TerminalRenderer,
};

/// Executes parsed commands against a scheduler and renders the results.
pub struct Cli {
    scheduler: Scheduler,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(scheduler: Scheduler, renderer: TerminalRenderer) -> Self {
        Self {
            scheduler,
            renderer,
        }
    }

    pub async fn handle_project_command(&self, command: ProjectCommands) -> Result<()> {
        match command {
            ProjectCommands::Create(args) => {
                let project = self
                    .scheduler
                    .create_project(&args.into())
                    .await
                    .context("Failed to create project")?;
                self.renderer.render(&CreateResult::new(project).to_string());
            }
            ProjectCommands::List => self.list_projects().await?,
            ProjectCommands::Show(args) => {
                let project = self
                    .scheduler
                    .get_project(&args.into())
                    .await
                    .context("Failed to load project")?;
                self.renderer.render(&project.to_string());
            }
            ProjectCommands::Deadline(args) => {
                let change = self
                    .scheduler
                    .set_deadline(&args.into())
                    .await
                    .context("Failed to update deadline")?;
                self.renderer.render(&UpdateResult::from(change).to_string());
            }
            ProjectCommands::Delete(args) => {
                let project = self
                    .scheduler
                    .delete_project(&args.into())
                    .await
                    .context("Failed to delete project")?;
                self.renderer.render(&DeleteResult::new(project).to_string());
            }
        }
        Ok(())
    }

    pub async fn list_projects(&self) -> Result<()> {
        let projects = self
            .scheduler
            .list_projects()
            .await
            .context("Failed to list projects")?;
        self.renderer.render(&projects.to_string());
        Ok(())
    }

    pub async fn generate(&self, args: GenerateArgs) -> Result<()> {
        let templates = args
            .templates
            .as_deref()
            .map(load_templates)
            .transpose()?;

        let params = GenerateJourney {
            project: args.project,
            today: args.today,
            templates,
            dry_run: args.dry_run,
            allow_degenerate: args.allow_degenerate,
        };

        let report = self
            .scheduler
            .generate_journey(&params)
            .await
            .with_context(|| format!("Failed to generate journey for '{}'", params.project))?;
        self.renderer.render(&report.to_string());
        self.renderer.render(&OperationStatus::from(&report).to_string());
        Ok(())
    }
}

/// Reads milestone templates from a JSON file.
fn load_templates(path: &Path) -> Result<Vec<MilestoneTemplate>> {
    debug!("Loading milestone templates from {}", path.display());
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read templates file {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Invalid templates file {}", path.display()))
}
