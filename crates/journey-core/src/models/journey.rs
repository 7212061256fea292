//! Journey plan, schedule warnings and generation outcomes.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{JourneyStatus, Milestone};

/// The generated milestone schedule plus overall status for a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JourneyPlan {
    /// Overall risk status derived from days remaining
    pub status: JourneyStatus,

    /// Free-text synthesis of the project's position
    pub status_summary: String,

    /// Milestones in generation order
    pub milestones: Vec<Milestone>,

    /// Problems detected after weekend adjustment
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ScheduleWarning>,
}

impl JourneyPlan {
    /// Returns the milestone currently being worked on, if any.
    pub fn current_milestone(&self) -> Option<&Milestone> {
        self.milestones
            .iter()
            .find(|m| m.status == super::MilestoneStatus::InProgress)
    }

    /// Whether weekend adjustment produced any warnings.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// A validation finding on an adjusted milestone date.
///
/// Adjusted dates are never clamped; the finding is carried alongside the
/// plan so callers can decide what to do with it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScheduleWarning {
    /// The milestone falls on or before the day the journey was planned
    NotAfterToday {
        description: String,
        target_date: Date,
        today: Date,
    },

    /// The weekend shift moved a milestone onto or past the deadline
    PastDeadline {
        description: String,
        target_date: Date,
        deadline: Date,
    },

    /// The milestone no longer falls strictly after its predecessor
    NotAfterPrevious {
        description: String,
        target_date: Date,
        previous: String,
    },
}

/// Why a deadline window cannot hold a meaningful schedule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpanIssue {
    /// The deadline is today
    DeadlineToday,

    /// The deadline was `days_overdue` days ago
    DeadlinePassed { days_overdue: i64 },
}

/// Result of running the journey pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum JourneyOutcome {
    /// A plan over a positive deadline window
    Generated(JourneyPlan),

    /// The window was empty or negative; the collapsed plan is still returned
    InvalidSpan { reason: SpanIssue, plan: JourneyPlan },
}

impl JourneyOutcome {
    /// Borrow the plan regardless of outcome.
    pub fn plan(&self) -> &JourneyPlan {
        match self {
            JourneyOutcome::Generated(plan) | JourneyOutcome::InvalidSpan { plan, .. } => plan,
        }
    }

    /// Take the plan regardless of outcome.
    pub fn into_plan(self) -> JourneyPlan {
        match self {
            JourneyOutcome::Generated(plan) | JourneyOutcome::InvalidSpan { plan, .. } => plan,
        }
    }

    /// True when the deadline window was degenerate.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, JourneyOutcome::InvalidSpan { .. })
    }
}
