//! Data models for projects, milestones and journeys.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so the structures here stay free of
//! presentation logic.
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use journey_core::models::{Milestone, MilestoneStatus};
//!
//! let milestone = Milestone {
//!     description: "Complete Strategic Framework & Insights".to_string(),
//!     status: MilestoneStatus::InProgress,
//!     target_date: date(2025, 10, 31),
//!     dependencies: vec![],
//! };
//! println!("{}", milestone); // Shows ➤ In Progress status icon
//! ```

pub mod journey;
pub mod milestone;
pub mod project;
pub mod status;
pub mod template;


pub use journey::{JourneyOutcome, JourneyPlan, ScheduleWarning, SpanIssue};
pub use milestone::Milestone;
pub use project::{DeadlineChange, Project};
pub use status::{JourneyStatus, MilestoneStatus};
pub use template::{
    JourneyConfig, MilestoneTemplate, DEFAULT_AT_RISK_THRESHOLD_DAYS, DEFAULT_USABLE_FRACTION,
};
