//! TOML-based application configuration.
//!
//! Stores user preferences:
//! - The saved peak-energy preference used as the reflow default
//! - Engine tunables (day boundary, buffer, day capacity)
//!
//! Configuration is stored at `~/.config/studyflow/config.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::energy::EnergyPreference;
use crate::engine::EngineConfig;
use crate::error::StoreError;

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/studyflow/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Saved peak-energy preference; `plan reflow` falls back to this when
    /// no `--preference` flag is given.
    #[serde(default, deserialize_with = "de_energy_preference")]
    pub energy_preference: Option<EnergyPreference>,
    #[serde(default)]
    pub engine: EngineConfig,
}

/// Accepts any string for the preference, routing through
/// [`EnergyPreference::parse`] so an unrecognized value degrades to morning
/// instead of failing the whole file and dropping the engine tunables.
fn de_energy_preference<'de, D>(deserializer: D) -> Result<Option<EnergyPreference>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.map(|s| EnergyPreference::parse(&s)))
}

impl Config {
    fn path() -> Result<PathBuf, StoreError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, writing defaults on first run.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be parsed, or
    /// if the default config cannot be written to disk.
    pub fn load() -> Result<Self, StoreError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| StoreError::ConfigLoad {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Load from disk, falling back to defaults on any failure.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<(), StoreError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| StoreError::ConfigSave {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DirGuard(tempfile::TempDir);

    fn isolated_dir() -> DirGuard {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("STUDYFLOW_CONFIG_DIR", dir.path());
        DirGuard(dir)
    }

    #[test]
    fn round_trip_through_disk() {
        let _guard = isolated_dir();

        let mut cfg = Config::default();
        cfg.energy_preference = Some(EnergyPreference::Night);
        cfg.engine.buffer_minutes = 20;
        cfg.save().unwrap();

        let loaded = Config::load().unwrap();
        assert_eq!(loaded.energy_preference, Some(EnergyPreference::Night));
        assert_eq!(loaded.engine.buffer_minutes, 20);
        assert_eq!(loaded.engine.day_end_hour, 22);

        std::env::remove_var("STUDYFLOW_CONFIG_DIR");
    }

    #[test]
    fn defaults_match_engine_contract() {
        let cfg = Config::default();
        assert_eq!(cfg.energy_preference, None);
        assert_eq!(cfg.engine.buffer_minutes, 15);
        assert_eq!(cfg.engine.day_start_hour, 8);
        assert_eq!(cfg.engine.max_day_minutes, 1140);
    }

    #[test]
    fn unknown_preference_degrades_without_losing_tunables() {
        let cfg: Config = toml::from_str(
            "energy_preference = \"dusk\"\n\n[engine]\nbuffer_minutes = 30\n",
        )
        .unwrap();
        assert_eq!(cfg.energy_preference, Some(EnergyPreference::Morning));
        assert_eq!(cfg.engine.buffer_minutes, 30);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let cfg: Config = toml::from_str("energy_preference = \"afternoon\"").unwrap();
        assert_eq!(cfg.energy_preference, Some(EnergyPreference::Afternoon));
        assert_eq!(cfg.engine.day_end_hour, 22);
    }
}
