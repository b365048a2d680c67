//! SQLite-based storage for tasks and goals.
//!
//! This is the planner's system of record. The engine never touches it
//! directly: callers read a snapshot out of it, run the engine, and write
//! the engine's output back through [`PlannerDb::apply_updates`], which is
//! transactional so a half-reflowed day is never persisted.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use super::data_dir;
use crate::engine::TaskUpdate;
use crate::error::StoreError;
use crate::task::{Goal, Task, TaskSource, TaskStatus, TaskType};

/// Parse an RFC 3339 instant from the database, falling back to now.
fn parse_datetime_fallback(dt_str: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(dt_str)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

/// Parse an ISO date from the database, falling back to today.
fn parse_date_fallback(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .unwrap_or_else(|_| Utc::now().date_naive())
}

/// Build a Task from a row of the canonical column order.
fn row_to_task(row: &rusqlite::Row) -> Result<Task, rusqlite::Error> {
    let start_str: String = row.get(3)?;
    let type_str: String = row.get(2)?;
    let status_str: String = row.get(6)?;
    let source_str: String = row.get(7)?;
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        task_type: TaskType::parse(&type_str),
        start_time: parse_datetime_fallback(&start_str),
        duration_minutes: row.get(4)?,
        goal_id: row.get(5)?,
        status: TaskStatus::parse(&status_str),
        source: TaskSource::parse(&source_str),
        accent: row.get(8)?,
    })
}

const TASK_COLUMNS: &str =
    "id, title, task_type, start_time, duration_minutes, goal_id, status, source, accent";

/// SQLite database for tasks and goals.
pub struct PlannerDb {
    conn: Connection,
}

impl PlannerDb {
    /// Get a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Open the database at `~/.config/studyflow/studyflow.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, StoreError> {
        let path = data_dir()?.join("studyflow.db");
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS tasks (
                id               INTEGER PRIMARY KEY AUTOINCREMENT,
                title            TEXT NOT NULL,
                task_type        TEXT NOT NULL DEFAULT 'study',
                start_time       TEXT NOT NULL,
                duration_minutes INTEGER NOT NULL,
                goal_id          INTEGER,
                status           TEXT NOT NULL DEFAULT 'pending',
                source           TEXT NOT NULL DEFAULT 'manual',
                accent           TEXT
            );

            CREATE TABLE IF NOT EXISTS goals (
                id         INTEGER PRIMARY KEY AUTOINCREMENT,
                title      TEXT NOT NULL,
                deadline   TEXT NOT NULL,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_tasks_start_time ON tasks(start_time);
            CREATE INDEX IF NOT EXISTS idx_tasks_goal_id ON tasks(goal_id);",
        )?;
        Ok(())
    }

    // === Tasks ===

    /// Insert a task, returning it with its assigned id.
    pub fn insert_task(
        &self,
        title: &str,
        task_type: TaskType,
        start_time: DateTime<Utc>,
        duration_minutes: i64,
        goal_id: Option<i64>,
        source: TaskSource,
    ) -> Result<Task, StoreError> {
        self.conn.execute(
            "INSERT INTO tasks (title, task_type, start_time, duration_minutes, goal_id, status, source)
             VALUES (?1, ?2, ?3, ?4, ?5, 'pending', ?6)",
            params![
                title,
                task_type.as_str(),
                start_time.to_rfc3339(),
                duration_minutes,
                goal_id,
                source.as_str(),
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        Ok(Task {
            id,
            title: title.to_string(),
            task_type,
            start_time,
            duration_minutes,
            goal_id,
            status: TaskStatus::Pending,
            source,
            accent: None,
        })
    }

    /// All tasks, ascending by start time.
    pub fn list_tasks(&self) -> Result<Vec<Task>, StoreError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks ORDER BY start_time"
        ))?;
        let tasks = stmt
            .query_map([], row_to_task)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tasks)
    }

    /// Tasks whose start time falls within `[start, end)`.
    pub fn tasks_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Task>, StoreError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks
             WHERE start_time >= ?1 AND start_time < ?2
             ORDER BY start_time"
        ))?;
        let tasks = stmt
            .query_map(params![start.to_rfc3339(), end.to_rfc3339()], row_to_task)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tasks)
    }

    /// Tasks scheduled on one calendar day.
    pub fn tasks_on(&self, date: NaiveDate) -> Result<Vec<Task>, StoreError> {
        let day_start = date.and_time(chrono::NaiveTime::MIN).and_utc();
        self.tasks_between(day_start, day_start + Duration::days(1))
    }

    pub fn get_task(&self, id: i64) -> Result<Option<Task>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1"))?;
        let task = stmt.query_row(params![id], row_to_task).optional()?;
        Ok(task)
    }

    pub fn set_task_status(&self, id: i64, status: TaskStatus) -> Result<(), StoreError> {
        let changed = self.conn.execute(
            "UPDATE tasks SET status = ?1 WHERE id = ?2",
            params![status.as_str(), id],
        )?;
        if changed == 0 {
            return Err(StoreError::MissingTask(id));
        }
        Ok(())
    }

    pub fn delete_task(&self, id: i64) -> Result<(), StoreError> {
        let changed = self
            .conn
            .execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(StoreError::MissingTask(id));
        }
        Ok(())
    }

    /// Persist a single placement produced by the engine.
    pub fn update_task_schedule(
        &self,
        id: i64,
        new_start: DateTime<Utc>,
        new_task_type: TaskType,
    ) -> Result<(), StoreError> {
        let changed = self.conn.execute(
            "UPDATE tasks SET start_time = ?1, task_type = ?2 WHERE id = ?3",
            params![new_start.to_rfc3339(), new_task_type.as_str(), id],
        )?;
        if changed == 0 {
            return Err(StoreError::MissingTask(id));
        }
        Ok(())
    }

    /// Persist a whole reflow batch inside one transaction.
    ///
    /// All-or-nothing: any missing task id rolls the entire batch back.
    pub fn apply_updates(&mut self, updates: &[TaskUpdate]) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;
        for update in updates {
            let changed = tx.execute(
                "UPDATE tasks SET start_time = ?1, task_type = ?2 WHERE id = ?3",
                params![
                    update.new_start.to_rfc3339(),
                    update.new_task_type.as_str(),
                    update.task_id,
                ],
            )?;
            if changed == 0 {
                // Dropping the transaction rolls everything back
                return Err(StoreError::MissingTask(update.task_id));
            }
        }
        tx.commit()?;
        Ok(())
    }

    // === Goals ===

    pub fn insert_goal(&self, title: &str, deadline: NaiveDate) -> Result<Goal, StoreError> {
        let created_at = Utc::now();
        self.conn.execute(
            "INSERT INTO goals (title, deadline, created_at) VALUES (?1, ?2, ?3)",
            params![
                title,
                deadline.format("%Y-%m-%d").to_string(),
                created_at.to_rfc3339(),
            ],
        )?;
        Ok(Goal {
            id: self.conn.last_insert_rowid(),
            title: title.to_string(),
            deadline,
            created_at,
        })
    }

    pub fn list_goals(&self) -> Result<Vec<Goal>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title, deadline, created_at FROM goals ORDER BY deadline")?;
        let goals = stmt
            .query_map([], |row| {
                let deadline_str: String = row.get(2)?;
                let created_str: String = row.get(3)?;
                Ok(Goal {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    deadline: parse_date_fallback(&deadline_str),
                    created_at: parse_datetime_fallback(&created_str),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(goals)
    }

    pub fn get_deadline(&self, goal_id: i64) -> Result<Option<NaiveDate>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT deadline FROM goals WHERE id = ?1")?;
        let deadline = stmt
            .query_row(params![goal_id], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(deadline.map(|s| parse_date_fallback(&s)))
    }

    pub fn delete_goal(&self, id: i64) -> Result<(), StoreError> {
        let changed = self
            .conn
            .execute("DELETE FROM goals WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(StoreError::MissingGoal(id));
        }
        Ok(())
    }
}
