use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::output;

const HOURS_PER_YEAR: i64 = 24 * 365;
const HOURS_PER_MONTH: i64 = 24 * 30;
const HOURS_PER_WEEK: i64 = 24 * 7;
const HOURS_PER_DAY: i64 = 24;

/// An elapsed duration split into calendar-like units.
///
/// Years and months use fixed lengths (365 and 30 days), so the split is
/// approximate rather than calendar-accurate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    pub years: i64,
    pub months: i64,
    pub weeks: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Breakdown {
    /// Split a duration into units, largest first.
    ///
    /// Each step divides the whole hours left over by the previous one.
    /// Minutes and seconds wrap the raw totals modulo 60 instead of
    /// continuing the hour chain.
    pub fn from_duration(duration: Duration) -> Self {
        let total_hours = duration.num_hours();

        let years = total_hours / HOURS_PER_YEAR;
        let rem = total_hours % HOURS_PER_YEAR;

        let months = rem / HOURS_PER_MONTH;
        let rem = rem % HOURS_PER_MONTH;

        let weeks = rem / HOURS_PER_WEEK;
        let rem = rem % HOURS_PER_WEEK;

        let days = rem / HOURS_PER_DAY;
        let hours = rem % HOURS_PER_DAY;

        let minutes = duration.num_minutes() % 60;
        let seconds = duration.num_seconds() % 60;

        Breakdown {
            years,
            months,
            weeks,
            days,
            hours,
            minutes,
            seconds,
        }
    }
}

/// Parse an RFC3339 timestamp and normalize it to UTC.
pub fn parse_event_time(input: &str) -> Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(input)?;
    Ok(parsed.with_timezone(&Utc))
}

/// Elapsed time between `event_time` and `now`, rendered as an "ago" string.
///
/// `now` is a parameter so callers control the clock;
/// [`calculate_elapsed_time`] binds it to the system clock.
pub fn elapsed_since(event_time: &str, now: DateTime<Utc>) -> Result<String> {
    let parsed = parse_event_time(event_time)?;
    let breakdown = Breakdown::from_duration(now.signed_duration_since(parsed));
    Ok(output::format_ago(&breakdown))
}

/// Elapsed time between `event_time` and the current UTC wall clock.
pub fn calculate_elapsed_time(event_time: &str) -> Result<String> {
    elapsed_since(event_time, Utc::now())
}
