//! Immutable task snapshot with per-date indexing.
//!
//! A snapshot is the read-only view of every task the engine operates over
//! for one invocation. The date index is built once at construction so the
//! weekly gap search stays linear in the number of tasks; there is no
//! cross-call caching.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::task::Task;

/// Immutable view of all tasks known to the caller at invocation time.
#[derive(Debug, Clone, Default)]
pub struct TaskSnapshot {
    tasks: Vec<Task>,
    by_id: HashMap<i64, usize>,
    /// Indices into `tasks`, per calendar day, sorted ascending by start time.
    by_date: HashMap<NaiveDate, Vec<usize>>,
}

impl TaskSnapshot {
    /// Build a snapshot from a list of tasks, indexing by id and by date.
    pub fn new(tasks: Vec<Task>) -> Self {
        let mut by_id = HashMap::with_capacity(tasks.len());
        let mut by_date: HashMap<NaiveDate, Vec<usize>> = HashMap::new();

        for (idx, task) in tasks.iter().enumerate() {
            by_id.insert(task.id, idx);
            by_date.entry(task.date()).or_default().push(idx);
        }

        for indices in by_date.values_mut() {
            indices.sort_by_key(|&i| tasks[i].start_time);
        }

        Self {
            tasks,
            by_id,
            by_date,
        }
    }

    /// Look up a task by id.
    pub fn get(&self, id: i64) -> Option<&Task> {
        self.by_id.get(&id).map(|&idx| &self.tasks[idx])
    }

    pub fn contains(&self, id: i64) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Tasks scheduled on a given calendar day, ascending by start time.
    pub fn tasks_on(&self, date: NaiveDate) -> Vec<&Task> {
        self.by_date
            .get(&date)
            .map(|indices| indices.iter().map(|&i| &self.tasks[i]).collect())
            .unwrap_or_default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Consume the snapshot, returning the underlying tasks.
    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{TaskSource, TaskStatus, TaskType};
    use chrono::{TimeZone, Utc};

    fn task(id: i64, day: u32, hour: u32) -> Task {
        Task {
            id,
            title: format!("Task {id}"),
            task_type: TaskType::Study,
            start_time: Utc.with_ymd_and_hms(2025, 3, day, hour, 0, 0).unwrap(),
            duration_minutes: 60,
            goal_id: None,
            status: TaskStatus::Pending,
            source: TaskSource::Manual,
            accent: None,
        }
    }

    #[test]
    fn groups_by_date_sorted_by_start() {
        // Deliberately out of order
        let snapshot = TaskSnapshot::new(vec![task(1, 10, 14), task(2, 10, 9), task(3, 11, 8)]);

        let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let on_day: Vec<i64> = snapshot.tasks_on(day).iter().map(|t| t.id).collect();
        assert_eq!(on_day, vec![2, 1]);

        let other = NaiveDate::from_ymd_opt(2025, 3, 11).unwrap();
        assert_eq!(snapshot.tasks_on(other).len(), 1);

        let empty = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
        assert!(snapshot.tasks_on(empty).is_empty());
    }

    #[test]
    fn lookup_by_id() {
        let snapshot = TaskSnapshot::new(vec![task(7, 10, 9)]);
        assert!(snapshot.contains(7));
        assert!(!snapshot.contains(8));
        assert_eq!(snapshot.get(7).map(|t| t.id), Some(7));
    }
}
