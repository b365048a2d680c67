pub mod config;
pub mod goal;
pub mod plan;
pub mod task;

use chrono::{DateTime, NaiveDate, Utc};

/// Parse an RFC 3339 instant from a CLI argument.
pub fn parse_instant(s: &str) -> Result<DateTime<Utc>, Box<dyn std::error::Error>> {
    Ok(DateTime::parse_from_rfc3339(s)
        .map_err(|e| format!("invalid time '{s}' (expected RFC 3339): {e}"))?
        .with_timezone(&Utc))
}

/// Parse an ISO date (YYYY-MM-DD) from a CLI argument.
pub fn parse_date(s: &str) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{s}' (expected YYYY-MM-DD): {e}"))?)
}
