//! Milestone model definition.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::MilestoneStatus;

/// A single preparatory step of a journey with a concrete target date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Milestone {
    /// Human-readable label taken from the milestone template
    pub description: String,

    /// Current status of the milestone
    pub status: MilestoneStatus,

    /// Calendar day the milestone should be reached by (never a weekend)
    pub target_date: Date,

    /// Descriptions of the milestones that must precede this one
    #[serde(default)]
    pub dependencies: Vec<String>,
}
