//! Display implementations for domain models.
//!
//! All output is markdown so the CLI can render it richly or print it as
//! plain text.

use std::fmt;

use super::datetime::{DayOfWeek, LocalDateTime};
use crate::models::{
    JourneyOutcome, JourneyPlan, JourneyStatus, Milestone, MilestoneStatus, Project,
    ScheduleWarning, SpanIssue,
};

impl fmt::Display for MilestoneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for JourneyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Milestone {
    /// Format the milestone, optionally prefixed with its position.
    fn fmt_milestone(&self, f: &mut fmt::Formatter<'_>, position: Option<usize>) -> fmt::Result {
        match position {
            Some(n) => writeln!(
                f,
                "### {n}. {} ({})",
                self.description,
                self.status.with_icon()
            )?,
            None => writeln!(f, "### {} ({})", self.description, self.status.with_icon())?,
        }
        writeln!(f)?;
        writeln!(f, "- Target: {}", DayOfWeek(&self.target_date))?;
        if !self.dependencies.is_empty() {
            writeln!(f, "- Depends on: {}", self.dependencies.join(", "))?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_milestone(f, None)
    }
}

impl fmt::Display for ScheduleWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleWarning::NotAfterToday {
                description,
                target_date,
                today,
            } => write!(
                f,
                "'{description}' is due {target_date}, not after the {today} start"
            ),
            ScheduleWarning::PastDeadline {
                description,
                target_date,
                deadline,
            } => write!(
                f,
                "'{description}' moved to {target_date}, not before the {deadline} deadline"
            ),
            ScheduleWarning::NotAfterPrevious {
                description,
                target_date,
                previous,
            } => write!(
                f,
                "'{description}' on {target_date} does not come after '{previous}'"
            ),
        }
    }
}

impl fmt::Display for SpanIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanIssue::DeadlineToday => write!(f, "the deadline is today"),
            SpanIssue::DeadlinePassed { days_overdue } => write!(
                f,
                "the deadline passed {days_overdue} day{} ago",
                if *days_overdue == 1 { "" } else { "s" }
            ),
        }
    }
}

impl fmt::Display for JourneyPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Status: {}", self.status)?;
        writeln!(f)?;
        writeln!(f, "{}", self.status_summary)?;
        writeln!(f)?;

        for (i, milestone) in self.milestones.iter().enumerate() {
            milestone.fmt_milestone(f, Some(i + 1))?;
        }

        if !self.warnings.is_empty() {
            writeln!(f, "### Warnings")?;
            writeln!(f)?;
            for warning in &self.warnings {
                writeln!(f, "- {warning}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for JourneyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let JourneyOutcome::InvalidSpan { reason, .. } = self {
            writeln!(f, "Degenerate schedule: {reason}.")?;
            writeln!(f)?;
        }
        write!(f, "{}", self.plan())
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        writeln!(f, "- Deadline: {}", DayOfWeek(&self.deadline))?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        match &self.journey {
            Some(journey) => {
                writeln!(f, "\n## Journey")?;
                writeln!(f)?;
                if let Some(generated_at) = &self.journey_generated_at {
                    writeln!(f, "- Generated: {}", LocalDateTime(generated_at))?;
                }
                write!(f, "{journey}")?;
            }
            None => writeln!(f, "\nNo journey generated yet.")?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, Timestamp};

    use super::*;

    fn plan() -> JourneyPlan {
        JourneyPlan {
            status: JourneyStatus::OnTrack,
            status_summary: "14 days until the 2025-11-10 deadline".to_string(),
            milestones: vec![
                Milestone {
                    description: "Outline".to_string(),
                    status: MilestoneStatus::InProgress,
                    target_date: date(2025, 10, 31),
                    dependencies: vec![],
                },
                Milestone {
                    description: "Draft".to_string(),
                    status: MilestoneStatus::Upcoming,
                    target_date: date(2025, 11, 4),
                    dependencies: vec!["Outline".to_string()],
                },
            ],
            warnings: vec![],
        }
    }

    #[test]
    fn test_plan_lists_numbered_milestones() {
        let output = plan().to_string();
        assert!(output.contains("- Status: on_track"));
        assert!(output.contains("### 1. Outline (➤ In Progress)"));
        assert!(output.contains("### 2. Draft (○ Upcoming)"));
        assert!(output.contains("- Target: 2025-11-04 (Tue)"));
        assert!(output.contains("- Depends on: Outline"));
        assert!(!output.contains("Warnings"));
    }

    #[test]
    fn test_plan_shows_warnings() {
        let mut plan = plan();
        plan.warnings.push(ScheduleWarning::PastDeadline {
            description: "Draft".to_string(),
            target_date: date(2025, 11, 10),
            deadline: date(2025, 11, 10),
        });
        let output = plan.to_string();
        assert!(output.contains("### Warnings"));
        assert!(output.contains("'Draft' moved to 2025-11-10, not before the 2025-11-10 deadline"));

        plan.warnings.push(ScheduleWarning::NotAfterToday {
            description: "Outline".to_string(),
            target_date: date(2025, 10, 28),
            today: date(2025, 10, 28),
        });
        assert!(plan
            .to_string()
            .contains("- 'Outline' is due 2025-10-28, not after the 2025-10-28 start"));
    }

    #[test]
    fn test_degenerate_outcome_explains_reason() {
        let outcome = JourneyOutcome::InvalidSpan {
            reason: SpanIssue::DeadlinePassed { days_overdue: 3 },
            plan: plan(),
        };
        let output = outcome.to_string();
        assert!(output.starts_with("Degenerate schedule: the deadline passed 3 days ago."));
        assert!(output.contains("### 1. Outline"));
    }

    #[test]
    fn test_project_without_journey() {
        let project = Project {
            id: 4,
            name: "Board Review".to_string(),
            deadline: date(2025, 12, 1),
            journey: None,
            journey_generated_at: None,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        };
        let output = project.to_string();
        assert!(output.starts_with("# 4. Board Review"));
        assert!(output.contains("- Deadline: 2025-12-01 (Mon)"));
        assert!(output.contains("No journey generated yet."));
    }

    #[test]
    fn test_project_with_journey() {
        let project = Project {
            id: 4,
            name: "Board Review".to_string(),
            deadline: date(2025, 11, 10),
            journey: Some(plan()),
            journey_generated_at: Some(Timestamp::UNIX_EPOCH),
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        };
        let output = project.to_string();
        assert!(output.contains("## Journey"));
        assert!(output.contains("- Generated: "));
        assert!(output.contains("### 2. Draft"));
    }
}
