//! One-line banners summarizing what an operation did.

use std::fmt;

use crate::generator::JourneyReport;

/// How an [`OperationStatus`] should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// The operation did what was asked
    Success,
    /// Nothing was written, as requested
    Notice,
    /// The operation finished but skipped part of its work
    Warning,
}

impl StatusLevel {
    fn label(self) -> &'static str {
        match self {
            StatusLevel::Success => "Success:",
            StatusLevel::Notice => "Note:",
            StatusLevel::Warning => "Warning:",
        }
    }
}

/// Wrapper type for displaying an operation banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationStatus {
    pub level: StatusLevel,
    pub message: String,
}

impl OperationStatus {
    /// Create a success banner.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Success,
            message: message.into(),
        }
    }

    /// Create a notice banner.
    pub fn notice(message: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Notice,
            message: message.into(),
        }
    }

    /// Create a warning banner.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Warning,
            message: message.into(),
        }
    }
}

impl From<&JourneyReport> for OperationStatus {
    /// Summarizes whether a generated journey ended up in the store.
    fn from(report: &JourneyReport) -> Self {
        let name = &report.project.name;
        let count = report.outcome.plan().milestones.len();

        if report.is_persisted() {
            Self::success(format!(
                "Journey for '{name}' stored with {count} milestone{}.",
                if count == 1 { "" } else { "s" }
            ))
        } else if report.dry_run {
            Self::notice(format!("Dry run; journey for '{name}' was not stored."))
        } else {
            Self::warning(format!(
                "Journey for '{name}' was not stored because the deadline window is empty. Pass --allow-degenerate to store it anyway."
            ))
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.level.label(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use jiff::{
        civil::{date, Date},
        Timestamp,
    };

    use super::*;
    use crate::{
        models::{JourneyConfig, Project},
        schedule::plan_journey,
    };

    fn report(deadline: Date, persisted: bool, dry_run: bool) -> JourneyReport {
        JourneyReport {
            project: Project {
                id: 1,
                name: "Pitch".to_string(),
                deadline,
                journey: None,
                journey_generated_at: None,
                created_at: Timestamp::UNIX_EPOCH,
                updated_at: Timestamp::UNIX_EPOCH,
            },
            outcome: plan_journey(date(2025, 10, 27), deadline, &JourneyConfig::default())
                .unwrap(),
            persisted_at: persisted.then_some(Timestamp::UNIX_EPOCH),
            dry_run,
        }
    }

    #[test]
    fn test_stored_journey_banner() {
        let status = OperationStatus::from(&report(date(2025, 11, 10), true, false));
        assert_eq!(status.level, StatusLevel::Success);
        assert_eq!(
            status.to_string(),
            "Success: Journey for 'Pitch' stored with 3 milestones.\n"
        );
    }

    #[test]
    fn test_dry_run_banner() {
        let status = OperationStatus::from(&report(date(2025, 11, 10), false, true));
        assert_eq!(status.level, StatusLevel::Notice);
        assert!(status.to_string().starts_with("Note: Dry run"));
    }

    #[test]
    fn test_skipped_degenerate_banner() {
        let status = OperationStatus::from(&report(date(2025, 10, 20), false, false));
        assert_eq!(status.level, StatusLevel::Warning);
        let output = status.to_string();
        assert!(output.starts_with("Warning: "));
        assert!(output.contains("--allow-degenerate"));
    }
}
