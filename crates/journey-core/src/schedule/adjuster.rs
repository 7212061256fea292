//! Calendar adjustment and risk classification.

use jiff::{
    civil::{Date, Weekday},
    Span,
};
use log::warn;

use super::DeadlineWindow;
use crate::{
    error::{DateResultExt, Result},
    models::{JourneyPlan, JourneyStatus, Milestone, ScheduleWarning},
};

/// Moves a Saturday or Sunday forward to the following Monday.
///
/// ```rust
/// use jiff::civil::date;
/// use journey_core::schedule::adjust_for_weekend;
///
/// // 2025-11-08 is a Saturday
/// assert_eq!(adjust_for_weekend(date(2025, 11, 8)).unwrap(), date(2025, 11, 10));
/// ```
///
/// # Errors
///
/// Returns `JourneyError::DateArithmetic` at the very end of the supported
/// date range.
pub fn adjust_for_weekend(date: Date) -> Result<Date> {
    let days = match date.weekday() {
        Weekday::Saturday => 2,
        Weekday::Sunday => 1,
        _ => return Ok(date),
    };
    date.checked_add(Span::new().days(days))
        .date_context("moving a milestone off the weekend")
}

/// Derives the overall journey status from the unadjusted days remaining.
pub fn classify(days_until: i64, at_risk_threshold_days: i64) -> JourneyStatus {
    if days_until < at_risk_threshold_days {
        JourneyStatus::AtRisk
    } else {
        JourneyStatus::OnTrack
    }
}

/// Flags adjusted milestones outside the open `(today, deadline)` window or
/// not after their predecessor.
///
/// Dates are left untouched; each finding is returned (and logged) instead.
pub fn check_schedule(window: &DeadlineWindow, milestones: &[Milestone]) -> Vec<ScheduleWarning> {
    let mut warnings = Vec::new();
    let mut previous: Option<&Milestone> = None;

    for milestone in milestones {
        if milestone.target_date <= window.today {
            warn!(
                "Milestone '{}' lands on {} which is not after {}",
                milestone.description, milestone.target_date, window.today
            );
            warnings.push(ScheduleWarning::NotAfterToday {
                description: milestone.description.clone(),
                target_date: milestone.target_date,
                today: window.today,
            });
        }

        if milestone.target_date >= window.deadline {
            warn!(
                "Milestone '{}' lands on {} which is not before the {} deadline",
                milestone.description, milestone.target_date, window.deadline
            );
            warnings.push(ScheduleWarning::PastDeadline {
                description: milestone.description.clone(),
                target_date: milestone.target_date,
                deadline: window.deadline,
            });
        }

        if let Some(prev) = previous {
            if milestone.target_date <= prev.target_date {
                warn!(
                    "Milestone '{}' on {} does not follow '{}' on {}",
                    milestone.description,
                    milestone.target_date,
                    prev.description,
                    prev.target_date
                );
                warnings.push(ScheduleWarning::NotAfterPrevious {
                    description: milestone.description.clone(),
                    target_date: milestone.target_date,
                    previous: prev.description.clone(),
                });
            }
        }
        previous = Some(milestone);
    }

    warnings
}

/// Human-readable synthesis of days remaining and overall status.
pub fn summarize(window: &DeadlineWindow, status: JourneyStatus, milestone_count: usize) -> String {
    let outlook = match status {
        JourneyStatus::OnTrack => "on track",
        JourneyStatus::AtRisk => "at risk",
    };

    match window.days_until {
        0 => format!(
            "Deadline {} is today; project is {outlook}.",
            window.deadline
        ),
        days if days < 0 => format!(
            "Deadline {} passed {} day{} ago; project is {outlook}.",
            window.deadline,
            -days,
            plural(-days)
        ),
        days => format!(
            "{days} day{} until the {} deadline with {milestone_count} milestone{} planned; project is {outlook}.",
            plural(days),
            window.deadline,
            plural(milestone_count as i64)
        ),
    }
}

fn plural(count: i64) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Adjusts planned milestones, classifies the window and builds the plan.
///
/// # Errors
///
/// Propagates `JourneyError::DateArithmetic` from the weekend shift.
pub fn assemble(
    window: &DeadlineWindow,
    planned: Vec<Milestone>,
    at_risk_threshold_days: i64,
) -> Result<JourneyPlan> {
    let milestones = planned
        .into_iter()
        .map(|milestone| {
            Ok(Milestone {
                target_date: adjust_for_weekend(milestone.target_date)?,
                ..milestone
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let status = classify(window.days_until, at_risk_threshold_days);
    let warnings = check_schedule(window, &milestones);

    Ok(JourneyPlan {
        status,
        status_summary: summarize(window, status, milestones.len()),
        milestones,
        warnings,
    })
}
