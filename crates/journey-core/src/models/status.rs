//! Status enumerations for milestones and journeys.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of milestone statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStatus {
    /// Milestone has not been started yet
    Upcoming,

    /// Milestone is currently being worked on
    InProgress,

    /// Milestone has been completed
    Completed,

    /// Milestone is in danger of missing its target date
    AtRisk,
}

impl FromStr for MilestoneStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "upcoming" => Ok(MilestoneStatus::Upcoming),
            "in_progress" | "inprogress" => Ok(MilestoneStatus::InProgress),
            "completed" => Ok(MilestoneStatus::Completed),
            "at_risk" | "atrisk" => Ok(MilestoneStatus::AtRisk),
            _ => Err(format!("Invalid milestone status: {s}")),
        }
    }
}

impl MilestoneStatus {
    /// Convert to the stored string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MilestoneStatus::Upcoming => "upcoming",
            MilestoneStatus::InProgress => "in_progress",
            MilestoneStatus::Completed => "completed",
            MilestoneStatus::AtRisk => "at_risk",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use journey_core::models::MilestoneStatus;
    ///
    /// assert_eq!(MilestoneStatus::InProgress.with_icon(), "➤ In Progress");
    /// assert_eq!(MilestoneStatus::Upcoming.with_icon(), "○ Upcoming");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            MilestoneStatus::Upcoming => "○ Upcoming",
            MilestoneStatus::InProgress => "➤ In Progress",
            MilestoneStatus::Completed => "✓ Completed",
            MilestoneStatus::AtRisk => "⚠ At Risk",
        }
    }
}

/// Overall risk status of a project's journey.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum JourneyStatus {
    /// Enough time remains before the deadline
    OnTrack,

    /// Fewer days remain than the at-risk threshold
    AtRisk,
}

impl FromStr for JourneyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "on_track" | "ontrack" => Ok(JourneyStatus::OnTrack),
            "at_risk" | "atrisk" => Ok(JourneyStatus::AtRisk),
            _ => Err(format!("Invalid journey status: {s}")),
        }
    }
}

impl JourneyStatus {
    /// Convert to the stored string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            JourneyStatus::OnTrack => "on_track",
            JourneyStatus::AtRisk => "at_risk",
        }
    }
}
