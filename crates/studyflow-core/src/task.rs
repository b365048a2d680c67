//! Task and goal data model.
//!
//! Tasks are the scheduled units of work the engine places; goals carry the
//! exam/deadline dates that drive Revision-Day behavior. Both are created and
//! destroyed by the storage layer -- the engine only ever rewrites a task's
//! `start_time` and `task_type`.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Category of a study task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskType {
    Revision,
    Practice,
    Study,
    VideoLecture,
    Assignment,
    Quiz,
}

impl TaskType {
    /// Format for database storage and CLI display.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Revision => "revision",
            TaskType::Practice => "practice",
            TaskType::Study => "study",
            TaskType::VideoLecture => "video_lecture",
            TaskType::Assignment => "assignment",
            TaskType::Quiz => "quiz",
        }
    }

    /// Parse from a stored or user-supplied string. Unknown values map to
    /// `Study` so a task with a legacy tag still schedules normally.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "revision" => TaskType::Revision,
            "practice" => TaskType::Practice,
            "video_lecture" | "video lecture" | "video" => TaskType::VideoLecture,
            "assignment" => TaskType::Assignment,
            "quiz" => TaskType::Quiz,
            _ => TaskType::Study,
        }
    }
}

/// Completion status. Irrelevant to placement; the engine preserves it
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "completed" => TaskStatus::Completed,
            _ => TaskStatus::Pending,
        }
    }
}

/// How the task came to exist. This is the single canonical discriminant;
/// legacy `is_manual`-style flags are folded into it at import time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskSource {
    Manual,
    Generated,
}

impl TaskSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskSource::Manual => "manual",
            TaskSource::Generated => "generated",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "generated" => TaskSource::Generated,
            _ => TaskSource::Manual,
        }
    }
}

/// A scheduled unit of work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub task_type: TaskType,
    pub start_time: DateTime<Utc>,
    /// Always positive; the engine never changes it.
    pub duration_minutes: i64,
    /// Optional back-reference to a deadline goal. Not owned by the engine.
    pub goal_id: Option<i64>,
    pub status: TaskStatus,
    pub source: TaskSource,
    /// Presentational tag (e.g. a highlight color). Carried through storage
    /// and display; never read by any scheduling code.
    pub accent: Option<String>,
}

impl Task {
    pub fn end_time(&self) -> DateTime<Utc> {
        self.start_time + Duration::minutes(self.duration_minutes)
    }

    /// Calendar day this task falls on.
    pub fn date(&self) -> NaiveDate {
        self.start_time.date_naive()
    }

    /// Check if this task overlaps with a time range.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start_time < end && self.end_time() > start
    }
}

/// An exam or study goal with a hard deadline date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: i64,
    pub title: String,
    pub deadline: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Goal {
    /// The calendar day immediately preceding the deadline; tasks reflowed on
    /// this day are forcibly retagged to revision.
    pub fn revision_day(&self) -> NaiveDate {
        self.deadline - Duration::days(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task_at(start: DateTime<Utc>, minutes: i64) -> Task {
        Task {
            id: 1,
            title: "Integrals".to_string(),
            task_type: TaskType::Practice,
            start_time: start,
            duration_minutes: minutes,
            goal_id: None,
            status: TaskStatus::Pending,
            source: TaskSource::Manual,
            accent: None,
        }
    }

    #[test]
    fn end_time_adds_duration() {
        let start = Utc::now();
        let task = task_at(start, 45);
        assert_eq!(task.end_time(), start + Duration::minutes(45));
    }

    #[test]
    fn overlap_detection() {
        let start = Utc::now();
        let task = task_at(start, 60);

        assert!(task.overlaps(start + Duration::minutes(30), start + Duration::minutes(90)));
        // Touching ranges do not overlap
        assert!(!task.overlaps(start + Duration::minutes(60), start + Duration::minutes(90)));
        assert!(!task.overlaps(start - Duration::minutes(30), start));
    }

    #[test]
    fn task_type_round_trip() {
        for t in [
            TaskType::Revision,
            TaskType::Practice,
            TaskType::Study,
            TaskType::VideoLecture,
            TaskType::Assignment,
            TaskType::Quiz,
        ] {
            assert_eq!(TaskType::parse(t.as_str()), t);
        }
        // Unknown tags fall back to Study
        assert_eq!(TaskType::parse("brainstorm"), TaskType::Study);
        assert_eq!(TaskType::parse("Video Lecture"), TaskType::VideoLecture);
    }

    #[test]
    fn revision_day_precedes_deadline() {
        let goal = Goal {
            id: 1,
            title: "Chemistry final".to_string(),
            deadline: NaiveDate::from_ymd_opt(2025, 11, 2).unwrap(),
            created_at: Utc::now(),
        };
        assert_eq!(goal.revision_day(), NaiveDate::from_ymd_opt(2025, 11, 1).unwrap());
    }
}
