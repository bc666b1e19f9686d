use chrono::{DateTime, TimeZone, Utc};

/// The hard-coded anniversary the greeting counts from.
fn wedding_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 8, 23, 0, 0, 0).unwrap()
}

/// Greeting with the time since the wedding, addressed to `name`.
///
/// Uses chrono's stock `Duration` rendering (ISO 8601, e.g. "P366D") rather
/// than the unit split in [`crate::elapsed`].
pub fn wedding_at(name: &str, now: DateTime<Utc>) -> String {
    let since = now.signed_duration_since(wedding_date());
    format!("It's been {} since {}", since, name)
}

/// [`wedding_at`] bound to the system clock.
pub fn wedding(name: &str) -> String {
    wedding_at(name, Utc::now())
}
