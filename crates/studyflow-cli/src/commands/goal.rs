//! Goal and deadline management commands for CLI.

use clap::Subcommand;
use studyflow_core::PlannerDb;

use super::parse_date;

#[derive(Subcommand)]
pub enum GoalAction {
    /// Create a new goal with a deadline
    Add {
        /// Goal title
        title: String,
        /// Deadline date (YYYY-MM-DD)
        #[arg(long)]
        deadline: String,
    },
    /// List goals
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete a goal
    Delete {
        /// Goal ID
        id: i64,
    },
}

pub fn run(action: GoalAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = PlannerDb::open()?;

    match action {
        GoalAction::Add { title, deadline } => {
            let goal = db.insert_goal(&title, parse_date(&deadline)?)?;
            println!("Goal created: {}", goal.id);
            println!("{}", serde_json::to_string_pretty(&goal)?);
        }
        GoalAction::List { json } => {
            let goals = db.list_goals()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&goals)?);
            } else if goals.is_empty() {
                println!("no goals");
            } else {
                for goal in goals {
                    println!("#{} {} (deadline {})", goal.id, goal.title, goal.deadline);
                }
            }
        }
        GoalAction::Delete { id } => {
            db.delete_goal(id)?;
            println!("Goal deleted: {id}");
        }
    }
    Ok(())
}
