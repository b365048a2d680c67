//! Task management commands for CLI.

use clap::Subcommand;
use studyflow_core::{PlannerDb, TaskSource, TaskStatus, TaskType};

use super::{parse_date, parse_instant};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a new task
    Add {
        /// Task title
        title: String,
        /// Start instant (RFC 3339, e.g. 2025-09-01T09:00:00Z)
        #[arg(long)]
        at: String,
        /// Duration in minutes
        #[arg(long)]
        duration: i64,
        /// Task type: revision, practice, study, video_lecture, assignment, quiz
        #[arg(long = "type", default_value = "study")]
        task_type: String,
        /// Goal ID this task works toward
        #[arg(long)]
        goal: Option<i64>,
    },
    /// List tasks
    List {
        /// Only tasks on this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Mark a task completed
    Complete {
        /// Task ID
        id: i64,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: i64,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = PlannerDb::open()?;

    match action {
        TaskAction::Add {
            title,
            at,
            duration,
            task_type,
            goal,
        } => {
            if duration <= 0 {
                return Err("duration must be a positive number of minutes".into());
            }
            let start = parse_instant(&at)?;
            let task = db.insert_task(
                &title,
                TaskType::parse(&task_type),
                start,
                duration,
                goal,
                TaskSource::Manual,
            )?;
            println!("Task created: {}", task.id);
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::List { date, json } => {
            let tasks = match date {
                Some(d) => db.tasks_on(parse_date(&d)?)?,
                None => db.list_tasks()?,
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else if tasks.is_empty() {
                println!("no tasks");
            } else {
                for task in tasks {
                    println!(
                        "#{} {} [{}] {} ({} min, {})",
                        task.id,
                        task.start_time.format("%Y-%m-%d %H:%M"),
                        task.task_type.as_str(),
                        task.title,
                        task.duration_minutes,
                        task.status.as_str(),
                    );
                }
            }
        }
        TaskAction::Complete { id } => {
            db.set_task_status(id, TaskStatus::Completed)?;
            println!("Task completed: {id}");
        }
        TaskAction::Delete { id } => {
            db.delete_task(id)?;
            println!("Task deleted: {id}");
        }
    }
    Ok(())
}
