//! Configuration management commands for CLI.

use clap::Subcommand;
use studyflow_core::{Config, EnergyPreference};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Save the default peak-energy preference
    SetPreference {
        /// morning, afternoon or night
        preference: String,
    },
    /// Set the buffer enforced between placed tasks (minutes)
    SetBuffer {
        minutes: i64,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load_or_default();
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::SetPreference { preference } => {
            let mut config = Config::load_or_default();
            let pref = EnergyPreference::parse(&preference);
            config.energy_preference = Some(pref);
            config.save()?;
            println!("energy preference set to {pref}");
        }
        ConfigAction::SetBuffer { minutes } => {
            if minutes < 0 {
                return Err("buffer must be zero or more minutes".into());
            }
            let mut config = Config::load_or_default();
            config.engine.buffer_minutes = minutes;
            config.save()?;
            println!("buffer set to {minutes} minutes");
        }
    }
    Ok(())
}
