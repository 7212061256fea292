//! Milestone planning: spreads templates across the usable span.

use jiff::{civil::Date, Span};

use super::DeadlineWindow;
use crate::{
    error::{DateResultExt, Result},
    models::{Milestone, MilestoneStatus, MilestoneTemplate},
};

/// Whole-day offset from today for a template's fraction of the usable span.
///
/// The fractional offset is rounded to the nearest day, half away from zero.
pub fn offset_days(usable_days: f64, fraction: f64) -> i64 {
    (usable_days * fraction).round() as i64
}

/// Produces one unadjusted milestone per template, in template order.
///
/// Milestone `n` depends on milestone `n - 1`; the first has no
/// dependencies and starts `in_progress`, the rest are `upcoming`. A zero or
/// negative usable span collapses every milestone onto (or before) today.
///
/// # Errors
///
/// Returns `JourneyError::DateArithmetic` when an offset leaves the
/// supported date range.
pub fn plan_milestones(
    window: &DeadlineWindow,
    templates: &[MilestoneTemplate],
) -> Result<Vec<Milestone>> {
    let mut milestones: Vec<Milestone> = Vec::with_capacity(templates.len());

    for template in templates {
        let target_date = shift(window.today, offset_days(window.usable_days, template.fraction))?;
        let (status, dependencies) = match milestones.last() {
            Some(previous) => (
                MilestoneStatus::Upcoming,
                vec![previous.description.clone()],
            ),
            None => (MilestoneStatus::InProgress, Vec::new()),
        };

        milestones.push(Milestone {
            description: template.description.clone(),
            status,
            target_date,
            dependencies,
        });
    }

    Ok(milestones)
}

fn shift(today: Date, days: i64) -> Result<Date> {
    let span = Span::new()
        .try_days(days)
        .date_context("building a milestone offset")?;
    today
        .checked_add(span)
        .date_context("offsetting a milestone from today")
}
