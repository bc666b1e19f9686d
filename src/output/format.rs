use crate::elapsed::Breakdown;

/// Render a breakdown as a compact relative-time string.
/// Examples: "0s ago", "45s ago", "1y 2mo 3d ago"
///
/// Units with a zero value are skipped. Seconds are kept whenever every
/// larger unit was skipped, so a near-zero duration still renders as
/// "0s ago" rather than a bare "ago".
pub fn format_ago(breakdown: &Breakdown) -> String {
    let mut result = String::new();

    if breakdown.years > 0 {
        result += &format!("{}y ", breakdown.years);
    }
    if breakdown.months > 0 {
        result += &format!("{}mo ", breakdown.months);
    }
    if breakdown.weeks > 0 {
        result += &format!("{}w ", breakdown.weeks);
    }
    if breakdown.days > 0 {
        result += &format!("{}d ", breakdown.days);
    }
    if breakdown.hours > 0 {
        result += &format!("{}h ", breakdown.hours);
    }
    if breakdown.minutes > 0 {
        result += &format!("{}m ", breakdown.minutes);
    }
    if breakdown.seconds > 0 || result.is_empty() {
        result += &format!("{}s ", breakdown.seconds);
    }

    result + "ago"
}
