//! Peak-energy preference and its time window mapping.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::EngineConfig;

/// A user's declared peak-energy period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyPreference {
    #[default]
    Morning,
    Afternoon,
    Night,
}

impl EnergyPreference {
    /// Parse from a user-supplied string. Anything unrecognized is treated
    /// as `Morning`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "afternoon" => EnergyPreference::Afternoon,
            "night" | "evening" => EnergyPreference::Night,
            _ => EnergyPreference::Morning,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EnergyPreference::Morning => "morning",
            EnergyPreference::Afternoon => "afternoon",
            EnergyPreference::Night => "night",
        }
    }

    /// Peak window boundaries as hours of the day.
    pub fn window_hours(&self) -> (u32, u32) {
        match self {
            EnergyPreference::Morning => (6, 10),
            EnergyPreference::Afternoon => (12, 16),
            EnergyPreference::Night => (19, 23),
        }
    }

    /// Concrete window boundaries on a given day.
    pub fn window_on(&self, date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
        let (start_hour, end_hour) = self.window_hours();
        (
            at_hour(date, start_hour),
            at_hour(date, end_hour),
        )
    }

}

impl std::fmt::Display for EnergyPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Instant at `hour:00` on `date`. Out-of-range hours clamp to midnight.
pub(crate) fn at_hour(date: NaiveDate, hour: u32) -> DateTime<Utc> {
    let time = NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN);
    date.and_time(time).and_utc()
}

/// Day search boundary `[day_start, day_end)` for the gap finder.
pub(crate) fn day_bounds(date: NaiveDate, config: &EngineConfig) -> (DateTime<Utc>, DateTime<Utc>) {
    (
        at_hour(date, config.day_start_hour),
        at_hour(date, config.day_end_hour),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn preference_parsing_defaults_to_morning() {
        assert_eq!(EnergyPreference::parse("morning"), EnergyPreference::Morning);
        assert_eq!(EnergyPreference::parse("Afternoon"), EnergyPreference::Afternoon);
        assert_eq!(EnergyPreference::parse("night"), EnergyPreference::Night);
        assert_eq!(EnergyPreference::parse("dawn"), EnergyPreference::Morning);
        assert_eq!(EnergyPreference::parse(""), EnergyPreference::Morning);
    }

    #[test]
    fn window_mapping() {
        assert_eq!(EnergyPreference::Morning.window_hours(), (6, 10));
        assert_eq!(EnergyPreference::Afternoon.window_hours(), (12, 16));
        assert_eq!(EnergyPreference::Night.window_hours(), (19, 23));
    }

    #[test]
    fn window_on_day() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let (start, end) = EnergyPreference::Night.window_on(date);
        assert_eq!(start.hour(), 19);
        assert_eq!(end.hour(), 23);
        assert_eq!(start.date_naive(), date);
    }
}
