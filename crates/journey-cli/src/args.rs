//! Command-line argument definitions using clap.
//!
//! Argument structs carry the clap-specific attributes; each converts into a
//! core parameter type from `journey_core::params` so the core stays free of
//! CLI framework concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Scheduler
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use jiff::civil::Date;
use journey_core::{
    params::{CreateProject, DeleteProject, ProjectLookup, SetDeadline},
    ProjectRef,
};

/// Deadline-driven milestone planning for projects
///
/// Journey turns a project's deadline into a short chain of dependent
/// milestones with weekday target dates and an overall risk status, and
/// stores the result on the project.
#[derive(Parser)]
#[command(version, about, name = "journey")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/journey/journey.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Journey CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage projects
    #[command(alias = "p")]
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },
    /// Generate a journey for a project and store it
    #[command(alias = "g")]
    Generate(GenerateArgs),
}

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Create a new project
    #[command(alias = "c")]
    Create(CreateProjectArgs),
    /// List all projects, soonest deadline first
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a project and its stored journey
    #[command(alias = "s")]
    Show(ShowProjectArgs),
    /// Move a project's deadline (discards the stored journey)
    #[command(alias = "dl")]
    Deadline(SetDeadlineArgs),
    /// Delete a project permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteProjectArgs),
}

/// Create a new project
#[derive(ClapArgs)]
pub struct CreateProjectArgs {
    /// Unique name of the project
    pub name: String,
    /// Due date of the project
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub deadline: Date,
}

impl From<CreateProjectArgs> for CreateProject {
    fn from(val: CreateProjectArgs) -> Self {
        CreateProject {
            name: val.name,
            deadline: val.deadline,
        }
    }
}

/// Show details of a specific project
#[derive(ClapArgs)]
pub struct ShowProjectArgs {
    #[arg(help = "ID or unique name of the project to show")]
    pub project: ProjectRef,
}

impl From<ShowProjectArgs> for ProjectLookup {
    fn from(val: ShowProjectArgs) -> Self {
        ProjectLookup {
            project: val.project,
        }
    }
}

/// Move a project's deadline
#[derive(ClapArgs)]
pub struct SetDeadlineArgs {
    #[arg(help = "ID or unique name of the project")]
    pub project: ProjectRef,
    #[arg(value_name = "YYYY-MM-DD", help = "New due date")]
    pub deadline: Date,
}

impl From<SetDeadlineArgs> for SetDeadline {
    fn from(val: SetDeadlineArgs) -> Self {
        SetDeadline {
            project: val.project,
            deadline: val.deadline,
        }
    }
}

/// Delete a project permanently
#[derive(ClapArgs)]
pub struct DeleteProjectArgs {
    #[arg(help = "ID or unique name of the project to permanently delete")]
    pub project: ProjectRef,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteProjectArgs> for DeleteProject {
    fn from(val: DeleteProjectArgs) -> Self {
        DeleteProject {
            project: val.project,
            confirmed: val.confirm,
        }
    }
}

/// Generate a journey for a project
///
/// Milestones are spread over the first 85% of the time left until the
/// deadline, moved off weekends, and stored on the project together with a
/// generation timestamp. A deadline that is today or already passed yields a
/// collapsed plan that is only stored with --allow-degenerate.
#[derive(ClapArgs)]
pub struct GenerateArgs {
    #[arg(help = "ID or unique name of the project")]
    pub project: ProjectRef,
    /// Plan as if today were this day (defaults to the current UTC day)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub today: Option<Date>,
    /// JSON file with an array of {"description", "fraction"} templates
    #[arg(long, value_name = "FILE")]
    pub templates: Option<PathBuf>,
    /// Compute and show the journey without storing it
    #[arg(long)]
    pub dry_run: bool,
    /// Store the journey even if the deadline is today or has passed
    #[arg(long)]
    pub allow_degenerate: bool,
}
