//! Free-slot search for relocating a single task.
//!
//! Given one task and a snapshot of everything else on the calendar, finds
//! the candidate slots that can hold the task on each remaining day of its
//! ISO week.

use chrono::{Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::energy::day_bounds;
use crate::snapshot::TaskSnapshot;
use crate::task::Task;

use super::EngineConfig;

/// A candidate placement, exactly as long as the task being placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub start: chrono::DateTime<chrono::Utc>,
    pub end: chrono::DateTime<chrono::Utc>,
}

impl Slot {
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Candidate slots for one calendar day, ascending by start time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySlots {
    pub date: NaiveDate,
    pub slots: Vec<Slot>,
}

/// Find free slots for `task` across the ISO week (Monday-Sunday) containing
/// its current date.
///
/// Days strictly before `today` are skipped; no retroactive placement. Each
/// eligible day is swept with a cursor starting at the day boundary: a slot
/// is emitted wherever the task fits before the next existing task, and the
/// cursor always advances past that task's end plus the buffer. Days that
/// produce no candidate are omitted.
///
/// An empty result means "no placement possible this week". That is a valid
/// negative outcome, not an error; the caller decides whether to widen the
/// search.
pub fn find_slots(
    task: &Task,
    snapshot: &TaskSnapshot,
    today: NaiveDate,
    config: &EngineConfig,
) -> Vec<DaySlots> {
    let monday = task.date().week(Weekday::Mon).first_day();
    let need = Duration::minutes(task.duration_minutes);
    let buffer = config.buffer();

    let mut result = Vec::new();

    for offset in 0..7 {
        let date = monday + Duration::days(offset);
        if date < today {
            continue;
        }

        let (bound_start, bound_end) = day_bounds(date, config);
        let mut cursor = bound_start;
        let mut slots = Vec::new();

        // The snapshot's date index is built once per invocation, so this
        // scan stays linear in the number of tasks.
        for other in snapshot.tasks_on(date) {
            if other.id == task.id {
                continue;
            }
            if cursor + need <= other.start_time {
                slots.push(Slot {
                    start: cursor,
                    end: cursor + need,
                });
            }
            cursor = cursor.max(other.end_time()) + buffer;
        }

        if cursor + need <= bound_end {
            slots.push(Slot {
                start: cursor,
                end: cursor + need,
            });
        }

        if !slots.is_empty() {
            result.push(DaySlots { date, slots });
        }
    }

    result
}
