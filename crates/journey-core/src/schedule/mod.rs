//! Deadline-driven milestone scheduling.
//!
//! A journey is computed in three pure stages, each depending only on the
//! ones before it:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Normalizer    │    │     Planner     │    │    Adjuster &   │
//! │ (today, dead-   │───▶│ (templates over │───▶│   Classifier    │
//! │  line → window) │    │  usable span)   │    │ (weekends, risk)│
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! [`plan_journey`] runs the whole pipeline. It is deterministic for a fixed
//! `today`; nothing here reads the clock or touches storage.
//!
//! ```rust
//! use jiff::civil::date;
//! use journey_core::{
//!     models::{JourneyConfig, JourneyStatus},
//!     schedule::plan_journey,
//! };
//!
//! let outcome = plan_journey(date(2025, 10, 27), date(2025, 11, 10), &JourneyConfig::default())?;
//! let plan = outcome.plan();
//! assert_eq!(plan.status, JourneyStatus::OnTrack);
//! assert_eq!(plan.milestones[0].target_date, date(2025, 10, 31));
//! # Ok::<(), journey_core::JourneyError>(())
//! ```

use jiff::civil::Date;
use log::debug;

pub mod adjuster;
pub mod normalizer;
pub mod planner;

#[cfg(test)]
mod tests;

pub use adjuster::{adjust_for_weekend, assemble, check_schedule, classify, summarize};
pub use normalizer::{normalize_deadline, today_utc, DeadlineWindow};
pub use planner::{offset_days, plan_milestones};

use crate::{
    error::Result,
    models::{JourneyConfig, JourneyOutcome, SpanIssue},
};

/// Computes a journey for a project due on `deadline`, as seen from `today`.
///
/// A deadline of today or earlier still yields a (collapsed) plan, wrapped
/// in [`JourneyOutcome::InvalidSpan`] so the caller can decide whether to
/// keep it.
///
/// # Errors
///
/// Returns `JourneyError::InvalidInput` for an invalid configuration and
/// `JourneyError::DateArithmetic` if a date leaves the supported range.
pub fn plan_journey(today: Date, deadline: Date, config: &JourneyConfig) -> Result<JourneyOutcome> {
    config.validate()?;

    let window = normalize_deadline(today, deadline, config.usable_fraction)?;
    debug!(
        "Deadline window {} -> {}: {} days, {:.2} usable",
        window.today, window.deadline, window.days_until, window.usable_days
    );

    let planned = plan_milestones(&window, &config.templates)?;
    let plan = assemble(&window, planned, config.at_risk_threshold_days)?;

    let outcome = match window.days_until {
        0 => JourneyOutcome::InvalidSpan {
            reason: SpanIssue::DeadlineToday,
            plan,
        },
        days if days < 0 => JourneyOutcome::InvalidSpan {
            reason: SpanIssue::DeadlinePassed { days_overdue: -days },
            plan,
        },
        _ => JourneyOutcome::Generated(plan),
    };

    Ok(outcome)
}
