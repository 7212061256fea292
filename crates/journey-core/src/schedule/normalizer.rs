//! Deadline normalization: resolves "today" and a deadline into a window.

use jiff::{civil::Date, tz::TimeZone, Timestamp};

use crate::error::{DateResultExt, Result};

/// The bounded time span between today and a project deadline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeadlineWindow {
    /// Start of the window (day granularity)
    pub today: Date,
    /// End of the window
    pub deadline: Date,
    /// Whole days from `today` to `deadline`; zero or negative when overdue
    pub days_until: i64,
    /// Days of the window available for milestones
    pub usable_days: f64,
}

impl DeadlineWindow {
    /// True when there is no forward span to schedule into.
    pub fn is_degenerate(&self) -> bool {
        self.days_until <= 0
    }
}

/// Truncates an instant to its UTC calendar day.
pub fn today_utc(now: Timestamp) -> Date {
    now.to_zoned(TimeZone::UTC).date()
}

/// Computes the deadline window for `today` and `deadline`.
///
/// Both inputs are calendar days, so the whole-day distance is already the
/// ceiling of the elapsed time. `usable_fraction` reserves the tail of the
/// window as buffer before the deadline.
///
/// # Errors
///
/// Returns `JourneyError::DateArithmetic` if the day difference cannot be
/// represented.
pub fn normalize_deadline(
    today: Date,
    deadline: Date,
    usable_fraction: f64,
) -> Result<DeadlineWindow> {
    let span = today
        .until(deadline)
        .date_context("measuring days until the deadline")?;
    let days_until = i64::from(span.get_days());

    Ok(DeadlineWindow {
        today,
        deadline,
        days_until,
        usable_days: days_until as f64 * usable_fraction,
    })
}
