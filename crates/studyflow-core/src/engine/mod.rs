//! Scheduling engine: slot search, peak-window reflow, placement.
//!
//! This module provides the placement core of the planner:
//! - Free-slot search across a task's week ([`find_slots`])
//! - Peak-window repacking of one day's tasks ([`reflow`])
//! - The single mutation point that produces updated snapshots
//!   ([`apply_single`], [`apply_batch`])
//! - Caller-level deadline policy ([`check_reflow_allowed`])
//!
//! Every function here is pure: deterministic in its inputs, no internal
//! state between calls, no I/O.

mod apply;
mod gap;
mod policy;
mod reflow;

pub use apply::{apply_batch, apply_single};
pub use gap::{find_slots, DaySlots, Slot};
pub use policy::{check_reflow_allowed, is_revision_day};
pub use reflow::{reflow, ReflowPlan, TaskUpdate};

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Engine tunables. Defaults are the planner's fixed contract; the config
/// file may adjust them, the algorithms never hardcode them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Mandatory minimum gap between any two placed tasks (minutes).
    #[serde(default = "default_buffer_minutes")]
    pub buffer_minutes: i64,
    /// Start of the daily search boundary (hour of day).
    #[serde(default = "default_day_start_hour")]
    pub day_start_hour: u32,
    /// End of the daily search boundary (hour of day, exclusive).
    #[serde(default = "default_day_end_hour")]
    pub day_end_hour: u32,
    /// Hard ceiling on one day's total load including buffers (minutes).
    #[serde(default = "default_max_day_minutes")]
    pub max_day_minutes: i64,
}

fn default_buffer_minutes() -> i64 {
    15
}
fn default_day_start_hour() -> u32 {
    8
}
fn default_day_end_hour() -> u32 {
    22
}
fn default_max_day_minutes() -> i64 {
    1140
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            buffer_minutes: default_buffer_minutes(),
            day_start_hour: default_day_start_hour(),
            day_end_hour: default_day_end_hour(),
            max_day_minutes: default_max_day_minutes(),
        }
    }
}

impl EngineConfig {
    pub fn buffer(&self) -> Duration {
        Duration::minutes(self.buffer_minutes)
    }
}
