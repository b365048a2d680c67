//! # Studyflow Core Library
//!
//! This library provides the core business logic for the Studyflow study
//! planner. It implements a CLI-first philosophy where all operations are
//! available via a standalone CLI binary built on top of the same core
//! library.
//!
//! ## Architecture
//!
//! - **Engine**: Pure, synchronous scheduling functions. Both algorithms are
//!   deterministic functions of their inputs with no retained state and no
//!   I/O; the caller supplies an immutable [`TaskSnapshot`] and receives a
//!   new value back.
//! - **Storage**: SQLite-based task/goal store and TOML-based configuration.
//! - **Energy windows**: Mapping from a user's declared peak-energy
//!   preference to a concrete time window.
//!
//! ## Key Components
//!
//! - [`find_slots`]: Free-slot search for relocating a single task
//! - [`reflow`]: Peak-window repacking of one day's tasks
//! - [`TaskSnapshot`]: Immutable view of all tasks for one invocation
//! - [`PlannerDb`]: Task and goal persistence

pub mod energy;
pub mod engine;
pub mod error;
pub mod snapshot;
pub mod storage;
pub mod task;

pub use energy::EnergyPreference;
pub use engine::{
    apply_batch, apply_single, check_reflow_allowed, find_slots, is_revision_day, reflow,
    DaySlots, EngineConfig, ReflowPlan, Slot, TaskUpdate,
};
pub use error::{CoreError, ScheduleError, StoreError};
pub use snapshot::TaskSnapshot;
pub use storage::{Config, PlannerDb};
pub use task::{Goal, Task, TaskSource, TaskStatus, TaskType};
