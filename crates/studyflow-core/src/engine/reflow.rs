//! Peak-window reflow of one day's tasks.
//!
//! Repacks every task scheduled on a single day so the user's peak-energy
//! window is filled first; whatever does not fit overflows immediately after
//! the window, packed sequentially with buffers.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::energy::EnergyPreference;
use crate::error::ScheduleError;
use crate::task::{Task, TaskType};

use super::EngineConfig;

/// One task's new placement, produced by [`reflow`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskUpdate {
    pub task_id: i64,
    pub new_start: chrono::DateTime<chrono::Utc>,
    pub new_task_type: TaskType,
    /// Whether the task landed inside the peak window. Presentational accent
    /// only; correctness never depends on it.
    pub in_window: bool,
}

/// The full batch of placements for one reflowed day.
///
/// Must be applied atomically: the day is never observed half-reflowed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReflowPlan {
    pub updates: Vec<TaskUpdate>,
}

impl ReflowPlan {
    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }
}

/// Recompute start times for every task on `date` so that as many as
/// possible land inside the preference's peak window, with the remainder
/// overflowing immediately after it.
///
/// Tasks keep their relative order (stable sort by current start time) and
/// their durations; consecutive placements are separated by the buffer. When
/// `is_revision_day` is set, every touched task is retagged to
/// [`TaskType::Revision`].
///
/// # Errors
/// Returns [`ScheduleError::CapacityExceeded`] without producing any update
/// when the total load, buffers included, cannot fit in a day even
/// unconstrained.
pub fn reflow(
    day_tasks: &[Task],
    preference: EnergyPreference,
    date: NaiveDate,
    is_revision_day: bool,
    config: &EngineConfig,
) -> Result<ReflowPlan, ScheduleError> {
    if day_tasks.is_empty() {
        // Nothing to reflow
        return Ok(ReflowPlan::default());
    }

    let total_duration: i64 = day_tasks.iter().map(|t| t.duration_minutes).sum();
    let required = total_duration + config.buffer_minutes * (day_tasks.len() as i64 - 1);
    if required > config.max_day_minutes {
        return Err(ScheduleError::CapacityExceeded {
            required_minutes: required,
            max_minutes: config.max_day_minutes,
        });
    }

    let mut ordered: Vec<&Task> = day_tasks.iter().collect();
    ordered.sort_by_key(|t| t.start_time);

    let (window_start, window_end) = preference.window_on(date);
    let buffer = config.buffer();

    let mut cursor = window_start;
    let mut overflow = false;
    let mut updates = Vec::with_capacity(ordered.len());

    for task in ordered {
        let duration = Duration::minutes(task.duration_minutes);

        if !overflow && cursor + duration > window_end {
            // The task that triggers overflow starts at the window end (or
            // at the cursor, if the last in-window task already ran past
            // it); everything after packs behind it, however late that runs.
            overflow = true;
            cursor = cursor.max(window_end);
        }

        updates.push(TaskUpdate {
            task_id: task.id,
            new_start: cursor,
            new_task_type: if is_revision_day {
                TaskType::Revision
            } else {
                task.task_type
            },
            in_window: !overflow,
        });

        cursor = cursor + duration + buffer;
    }

    Ok(ReflowPlan { updates })
}
