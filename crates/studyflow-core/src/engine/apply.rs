//! Placement applier: the engine's sole mutation point.
//!
//! Applies a chosen placement (a single slot, or a full day's reflow batch)
//! by producing a new snapshot. Every untouched field and task carries over
//! unchanged. Validation of the placement itself happens upstream; the only
//! check here is that every referenced id exists, performed for the whole
//! batch before anything changes.

use chrono::{DateTime, Utc};

use crate::error::ScheduleError;
use crate::snapshot::TaskSnapshot;

use super::reflow::ReflowPlan;

/// Move one task to a new start time, returning the updated snapshot.
///
/// # Errors
/// Returns [`ScheduleError::UnknownTaskId`] if the id is not in the snapshot.
pub fn apply_single(
    snapshot: &TaskSnapshot,
    task_id: i64,
    new_start: DateTime<Utc>,
) -> Result<TaskSnapshot, ScheduleError> {
    if !snapshot.contains(task_id) {
        return Err(ScheduleError::UnknownTaskId(task_id));
    }

    let mut tasks = snapshot.tasks().to_vec();
    for task in &mut tasks {
        if task.id == task_id {
            task.start_time = new_start;
        }
    }
    Ok(TaskSnapshot::new(tasks))
}

/// Apply a full reflow batch, returning the updated snapshot.
///
/// All-or-nothing: if any update references an id not in the snapshot, no
/// change is applied.
pub fn apply_batch(
    snapshot: &TaskSnapshot,
    plan: &ReflowPlan,
) -> Result<TaskSnapshot, ScheduleError> {
    for update in &plan.updates {
        if !snapshot.contains(update.task_id) {
            return Err(ScheduleError::UnknownTaskId(update.task_id));
        }
    }

    let mut tasks = snapshot.tasks().to_vec();
    for update in &plan.updates {
        for task in &mut tasks {
            if task.id == update.task_id {
                task.start_time = update.new_start;
                task.task_type = update.new_task_type;
            }
        }
    }
    Ok(TaskSnapshot::new(tasks))
}
