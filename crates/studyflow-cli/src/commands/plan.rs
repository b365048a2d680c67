//! Scheduling commands: slot search, relocation, peak-window reflow.
//!
//! This is the "surrounding system" side of the engine contract: build a
//! fresh snapshot from the store, run the pure engine, then persist its
//! output transactionally. If persistence fails nothing is half-applied;
//! the caller re-fetches and retries.

use clap::Subcommand;
use studyflow_core::{
    apply_single, check_reflow_allowed, find_slots, is_revision_day, reflow, Config,
    EnergyPreference, PlannerDb, TaskSnapshot,
};

use super::{parse_date, parse_instant};

#[derive(Subcommand)]
pub enum PlanAction {
    /// Find free slots for a task across its week
    Slots {
        /// Task ID to relocate
        task_id: i64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Move a task to a chosen start time
    Move {
        /// Task ID
        task_id: i64,
        /// New start instant (RFC 3339)
        #[arg(long)]
        to: String,
    },
    /// Repack one day's tasks into the peak-energy window
    Reflow {
        /// Day to reflow (YYYY-MM-DD)
        date: String,
        /// Energy preference: morning, afternoon or night
        /// (defaults to the saved preference)
        #[arg(long)]
        preference: Option<String>,
        /// Output the applied updates as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: PlanAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();

    match action {
        PlanAction::Slots { task_id, json } => {
            let db = PlannerDb::open()?;
            let snapshot = TaskSnapshot::new(db.list_tasks()?);
            let task = snapshot
                .get(task_id)
                .ok_or_else(|| format!("Task not found: {task_id}"))?;

            let today = chrono::Utc::now().date_naive();
            let days = find_slots(task, &snapshot, today, &config.engine);

            if json {
                println!("{}", serde_json::to_string_pretty(&days)?);
            } else if days.is_empty() {
                println!("no slots available this week; try a different week or duration");
            } else {
                for day in days {
                    println!("{}:", day.date);
                    for slot in day.slots {
                        println!(
                            "  {} - {}",
                            slot.start.format("%H:%M"),
                            slot.end.format("%H:%M")
                        );
                    }
                }
            }
        }
        PlanAction::Move { task_id, to } => {
            let db = PlannerDb::open()?;
            let new_start = parse_instant(&to)?;
            let snapshot = TaskSnapshot::new(db.list_tasks()?);

            // Validate against the snapshot first; the store write mirrors
            // exactly what the applier produced.
            let updated = apply_single(&snapshot, task_id, new_start)?;
            let task = updated
                .get(task_id)
                .ok_or_else(|| format!("Task not found: {task_id}"))?;
            db.update_task_schedule(task_id, task.start_time, task.task_type)?;
            println!(
                "Task {} moved to {}",
                task_id,
                new_start.format("%Y-%m-%d %H:%M")
            );
        }
        PlanAction::Reflow {
            date,
            preference,
            json,
        } => {
            let mut db = PlannerDb::open()?;
            let day = parse_date(&date)?;
            let day_tasks = db.tasks_on(day)?;

            // Deadline gate: a day at or after a referenced goal's deadline
            // must not be reshuffled.
            let mut referenced: Vec<chrono::NaiveDate> = Vec::new();
            for task in &day_tasks {
                if let Some(goal_id) = task.goal_id {
                    if let Some(deadline) = db.get_deadline(goal_id)? {
                        referenced.push(deadline);
                    }
                }
            }
            check_reflow_allowed(day, &referenced)?;

            let all_deadlines: Vec<chrono::NaiveDate> =
                db.list_goals()?.iter().map(|g| g.deadline).collect();
            let revision_day = is_revision_day(day, &all_deadlines);

            let pref = preference
                .map(|p| EnergyPreference::parse(&p))
                .or(config.energy_preference)
                .unwrap_or_default();

            let plan = reflow(&day_tasks, pref, day, revision_day, &config.engine)?;
            if plan.is_empty() {
                println!("nothing to reflow on {day}");
                return Ok(());
            }

            db.apply_updates(&plan.updates)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&plan.updates)?);
            } else {
                println!(
                    "Reflowed {} task(s) on {} for {} energy{}",
                    plan.updates.len(),
                    day,
                    pref,
                    if revision_day { " (revision day)" } else { "" },
                );
                for update in &plan.updates {
                    println!(
                        "  #{} -> {}{}",
                        update.task_id,
                        update.new_start.format("%H:%M"),
                        if update.in_window { "" } else { " (overflow)" },
                    );
                }
            }
        }
    }
    Ok(())
}
