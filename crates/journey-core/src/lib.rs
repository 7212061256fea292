//! Core library for deadline-driven project journeys.
//!
//! A journey turns a project's deadline into a short chain of dependent
//! preparatory milestones with concrete, weekday-only target dates and an
//! overall risk status. This crate provides the scheduling pipeline, the
//! data models, a SQLite record store and an async facade over both.
//!
//! # Layers
//!
//! - [`schedule`]: pure Normalizer → Planner → Adjuster/Classifier pipeline
//! - [`generator`]: fetch, plan and persist against any [`ProjectStore`]
//! - [`db`]: the SQLite [`Database`] implementing [`ProjectStore`]
//! - [`scheduler`]: async [`Scheduler`] for interface layers
//! - [`display`]: markdown formatting of models and results
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::civil::date;
//! use journey_core::{
//!     generate_journey, Database, GenerateOptions, JourneyConfig, ProjectRef,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//! let mut db = Database::new(dir.path().join("journey.db"))?;
//! db.create_project("Client Pitch", date(2025, 11, 10))?;
//!
//! let report = generate_journey(
//!     &mut db,
//!     &ProjectRef::from("Client Pitch"),
//!     date(2025, 10, 27),
//!     &JourneyConfig::default(),
//!     GenerateOptions::default(),
//! )?;
//! println!("{}", report);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod generator;
pub mod models;
pub mod params;
pub mod schedule;
pub mod scheduler;
pub mod store;

// Re-export commonly used types
pub use db::Database;
pub use display::{CreateResult, DeleteResult, OperationStatus, Projects, UpdateResult};
pub use error::{JourneyError, Result};
pub use generator::{generate_journey, DegenerateSpanPolicy, GenerateOptions, JourneyReport};
pub use models::{
    DeadlineChange, JourneyConfig, JourneyOutcome, JourneyPlan, JourneyStatus, Milestone,
    MilestoneStatus, MilestoneTemplate, Project, ScheduleWarning, SpanIssue,
};
pub use params::{CreateProject, DeleteProject, GenerateJourney, ProjectLookup, SetDeadline};
pub use schedule::plan_journey;
pub use scheduler::{Scheduler, SchedulerBuilder};
pub use store::{ProjectRef, ProjectStore};
