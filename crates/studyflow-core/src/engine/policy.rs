//! Deadline policy checks.
//!
//! These run at the caller level, before the optimizer is invoked: the
//! engine itself never reads goals. The CLI gathers the relevant deadlines
//! and asks these two questions.

use chrono::{Duration, NaiveDate};

use crate::error::ScheduleError;

/// Reject a reflow (or relocation) requested for a day on or after any of
/// the given goal deadlines.
///
/// # Errors
/// Returns [`ScheduleError::ForbiddenOnDeadline`] naming the earliest
/// violated deadline.
pub fn check_reflow_allowed(
    date: NaiveDate,
    deadlines: &[NaiveDate],
) -> Result<(), ScheduleError> {
    if let Some(deadline) = deadlines.iter().filter(|d| date >= **d).min() {
        return Err(ScheduleError::ForbiddenOnDeadline {
            deadline: *deadline,
        });
    }
    Ok(())
}

/// True when `date` is the day immediately preceding one of the deadlines.
pub fn is_revision_day(date: NaiveDate, deadlines: &[NaiveDate]) -> bool {
    deadlines
        .iter()
        .any(|deadline| *deadline == date + Duration::days(1))
}
