use chrono::{DateTime, Utc};

/// Formats a number of elapsed seconds as a comma-joined phrase of days,
/// hours, minutes and seconds, largest unit first. Zero-valued units are
/// omitted, except that an all-zero duration still renders as "0 seconds".
pub fn format_duration(total_secs: u64) -> String {
    let days = total_secs / 86_400;
    let mut remainder = total_secs % 86_400;
    let hours = remainder / 3_600;
    remainder %= 3_600;
    let minutes = remainder / 60;
    let seconds = remainder % 60;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(unit(days, "day"));
    }
    if hours > 0 {
        parts.push(unit(hours, "hour"));
    }
    if minutes > 0 {
        parts.push(unit(minutes, "minute"));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(unit(seconds, "second"));
    }
    parts.join(", ")
}

fn unit(value: u64, name: &str) -> String {
    if value == 1 {
        format!("1 {}", name)
    } else {
        format!("{} {}s", value, name)
    }
}

/// Wall-clock time elapsed since `started_at`, formatted for replies.
pub fn since(started_at: DateTime<Utc>) -> String {
    let elapsed = Utc::now().signed_duration_since(started_at);
    format_duration(elapsed.num_seconds().max(0) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_duration_still_shows_seconds() {
        assert_eq!(format_duration(0), "0 seconds");
    }

    #[test]
    fn test_singular_units() {
        assert_eq!(format_duration(1), "1 second");
        assert_eq!(format_duration(60), "1 minute");
        assert_eq!(format_duration(3_600), "1 hour");
        assert_eq!(format_duration(86_400), "1 day");
    }

    #[test]
    fn test_plural_units() {
        assert_eq!(format_duration(2), "2 seconds");
        assert_eq!(
            format_duration(2 * 86_400 + 3 * 3_600 + 4 * 60 + 5),
            "2 days, 3 hours, 4 minutes, 5 seconds"
        );
    }

    #[test]
    fn test_zero_units_are_omitted() {
        // A unit disappears exactly when its value is zero
        assert_eq!(format_duration(86_401), "1 day, 1 second");
        assert_eq!(format_duration(3_660), "1 hour, 1 minute");
        assert_eq!(format_duration(86_400 + 59), "1 day, 59 seconds");
    }

    #[test]
    fn test_full_breakdown() {
        assert_eq!(
            format_duration(90_061),
            "1 day, 1 hour, 1 minute, 1 second"
        );
    }
}
