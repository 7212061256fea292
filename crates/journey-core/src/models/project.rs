//! Project model definition.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::JourneyPlan;

/// A project with a deadline and the most recently generated journey.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    /// Unique identifier for the project
    pub id: u64,

    /// Unique human-readable name
    pub name: String,

    /// Calendar day the project is due
    pub deadline: Date,

    /// Last generated journey, overwritten on every generation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journey: Option<JourneyPlan>,

    /// When the stored journey was generated (UTC)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journey_generated_at: Option<Timestamp>,

    /// Timestamp when the project was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the project was last modified (UTC)
    pub updated_at: Timestamp,
}

/// Outcome of moving a project's deadline.
#[derive(Debug, Clone, PartialEq)]
pub struct DeadlineChange {
    /// The project after the move, without a journey
    pub project: Project,

    /// Deadline before the move
    pub previous_deadline: Date,

    /// Whether a stored journey was dropped by the move
    pub discarded_journey: bool,
}
