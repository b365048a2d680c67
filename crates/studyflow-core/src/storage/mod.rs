mod config;
pub mod db;

pub use config::Config;
pub use db::PlannerDb;

use std::path::PathBuf;

use crate::error::StoreError;

/// Returns `~/.config/studyflow[-dev]/` based on STUDYFLOW_ENV.
///
/// Set STUDYFLOW_ENV=dev to use the development data directory, or
/// STUDYFLOW_CONFIG_DIR to point at an explicit directory (tests use this
/// for isolation).
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StoreError> {
    let dir = if let Ok(explicit) = std::env::var("STUDYFLOW_CONFIG_DIR") {
        PathBuf::from(explicit)
    } else {
        let base_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config");

        let env = std::env::var("STUDYFLOW_ENV").unwrap_or_else(|_| "production".to_string());
        if env == "dev" {
            base_dir.join("studyflow-dev")
        } else {
            base_dir.join("studyflow")
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
