//! Journey generation against an injected record store.
//!
//! [`generate_journey`] is the single entry point that ties the pure
//! [`crate::schedule`] pipeline to storage: fetch the project, compute a plan
//! for `today`, write it back with a generation timestamp. Either store call
//! failing aborts the run; nothing is written before the plan is complete.

use jiff::{civil::Date, Timestamp};
use log::{info, warn};

use crate::{
    error::Result,
    models::{JourneyConfig, JourneyOutcome, Project},
    schedule::plan_journey,
    store::{ProjectRef, ProjectStore},
};

/// What to do with a plan computed over an empty or negative window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DegenerateSpanPolicy {
    /// Return the collapsed plan without storing it
    #[default]
    Skip,
    /// Store the collapsed plan like any other
    Persist,
}

/// Options controlling a single generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Handling of deadlines that are today or already passed
    pub degenerate: DegenerateSpanPolicy,
    /// Compute the plan but never write it
    pub dry_run: bool,
}

/// The result of a generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct JourneyReport {
    /// The project as fetched, before the new journey was stored
    pub project: Project,
    /// The computed outcome
    pub outcome: JourneyOutcome,
    /// Generation timestamp when the plan was stored, `None` if it was not
    pub persisted_at: Option<Timestamp>,
    /// Whether the run was a dry run
    pub dry_run: bool,
}

impl JourneyReport {
    /// Whether the plan was written back to the store.
    pub fn is_persisted(&self) -> bool {
        self.persisted_at.is_some()
    }
}

/// Generates and stores a journey for `project` as seen from `today`.
///
/// # Errors
///
/// - `JourneyError::ProjectNotFound` if the store has no such project
/// - `JourneyError::PersistenceFailure` if writing the plan back fails
/// - `JourneyError::InvalidInput` for an invalid `config`
pub fn generate_journey<S>(
    store: &mut S,
    project: &ProjectRef,
    today: Date,
    config: &JourneyConfig,
    options: GenerateOptions,
) -> Result<JourneyReport>
where
    S: ProjectStore + ?Sized,
{
    let project = store.fetch_project(project)?;
    let outcome = plan_journey(today, project.deadline, config)?;

    let should_persist = !options.dry_run
        && (!outcome.is_degenerate() || options.degenerate == DegenerateSpanPolicy::Persist);

    if let JourneyOutcome::InvalidSpan { reason, .. } = &outcome {
        warn!(
            "Project {} has a degenerate deadline window ({:?}); {}",
            project.id,
            reason,
            if should_persist { "storing anyway" } else { "not storing" }
        );
    }

    let persisted_at = if should_persist {
        let generated_at = Timestamp::now();
        store.persist_journey_plan(project.id, outcome.plan(), generated_at)?;
        Some(generated_at)
    } else {
        None
    };

    info!(
        "Generated journey for project {} '{}' ({}): {}",
        project.id,
        project.name,
        outcome.plan().status.as_str(),
        if persisted_at.is_some() { "stored" } else { "not stored" }
    );

    Ok(JourneyReport {
        project,
        outcome,
        persisted_at,
        dry_run: options.dry_run,
    })
}
