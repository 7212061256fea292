//! Parameter structures for journey operations.
//!
//! These structures are shared by every interface (the CLI today) and carry
//! no framework-specific derives. Interface layers define their own argument
//! types and convert into these with `From`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Scheduler
//! ```

use jiff::civil::Date;

use crate::{models::MilestoneTemplate, store::ProjectRef};

/// Parameters for operations that only need to identify a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLookup {
    /// Project ID or unique name
    pub project: ProjectRef,
}

/// Parameters for creating a new project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProject {
    /// Unique project name
    pub name: String,
    /// Calendar day the project is due
    pub deadline: Date,
}

/// Parameters for moving a project's deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetDeadline {
    /// Project ID or unique name
    pub project: ProjectRef,
    /// New due date
    pub deadline: Date,
}

/// Parameters for permanently deleting a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteProject {
    /// Project ID or unique name
    pub project: ProjectRef,
    /// Explicit confirmation; deletion is refused without it
    pub confirmed: bool,
}

/// Parameters for generating a journey.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GenerateJourney {
    /// Project ID or unique name
    pub project: ProjectRef,
    /// Day to plan from; defaults to the current UTC day
    pub today: Option<Date>,
    /// Replacement milestone templates; defaults to the configured ones
    pub templates: Option<Vec<MilestoneTemplate>>,
    /// Compute without storing
    pub dry_run: bool,
    /// Store plans even when the deadline is today or has passed
    pub allow_degenerate: bool,
}

