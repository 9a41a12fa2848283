//! Duration parsing and formatting for the timer display.

use chrono::Duration;

/// Format seconds as a `MM:SS` clock face.
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Format a duration as a human-readable string ("25 minutes", "1 hour").
#[must_use]
pub fn format_duration(d: Duration) -> String {
    fn plural(n: i64, unit: &str) -> String {
        if n == 1 {
            format!("1 {unit}")
        } else {
            format!("{n} {unit}s")
        }
    }

    let minutes = d.num_minutes();
    if minutes < 1 {
        return plural(d.num_seconds(), "second");
    }

    match (minutes / 60, minutes % 60) {
        (0, m) => plural(m, "minute"),
        (h, 0) => plural(h, "hour"),
        (h, m) => format!("{}, {}", plural(h, "hour"), plural(m, "minute")),
    }
}

/// Parse a duration such as `25m`, `1h`, `1m30s` or a bare number of
/// minutes.
///
/// Totals beyond `u32::MAX` seconds saturate there so callers can clamp
/// them like any other out-of-range value.
#[must_use]
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim().to_lowercase();

    let mut total = 0u64;
    let mut digits = String::new();
    for c in s.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }
        let scale = match c {
            'h' => 3600,
            'm' => 60,
            's' => 1,
            _ => return None,
        };
        total = total.saturating_add(parse_count(&digits)?.saturating_mul(scale));
        digits.clear();
    }

    // A trailing bare number counts as minutes.
    if !digits.is_empty() {
        total = total.saturating_add(parse_count(&digits)?.saturating_mul(60));
    }

    let seconds = u32::try_from(total).unwrap_or(u32::MAX);
    (seconds > 0)
        .then(|| Duration::try_seconds(i64::from(seconds)))
        .flatten()
}

/// Parse a run of ASCII digits, saturating instead of overflowing.
fn parse_count(digits: &str) -> Option<u64> {
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse().unwrap_or(u64::MAX))
}

/// Parse a duration and return it in whole seconds.
#[must_use]
pub fn parse_duration_seconds(s: &str) -> Option<u32> {
    parse_duration(s).and_then(|d| u32::try_from(d.num_seconds()).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(1200), "20:00");
        assert_eq!(format_clock(90), "01:30");
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(3600), "60:00");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::minutes(25)), "25 minutes");
        assert_eq!(format_duration(Duration::minutes(1)), "1 minute");
        assert_eq!(format_duration(Duration::hours(1)), "1 hour");
        assert_eq!(format_duration(Duration::minutes(90)), "1 hour, 30 minutes");
        assert_eq!(format_duration(Duration::seconds(45)), "45 seconds");
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("25"), Some(Duration::minutes(25)));
        assert_eq!(parse_duration("25m"), Some(Duration::minutes(25)));
        assert_eq!(parse_duration("1h"), Some(Duration::hours(1)));
        assert_eq!(parse_duration("1h30m"), Some(Duration::minutes(90)));
        assert_eq!(parse_duration("90s"), Some(Duration::seconds(90)));
        assert_eq!(parse_duration("1m30s"), Some(Duration::seconds(90)));
        assert_eq!(parse_duration(" 10M "), Some(Duration::minutes(10)));
    }

    #[test]
    fn test_parse_duration_invalid() {
        assert!(parse_duration("").is_none());
        assert!(parse_duration("abc").is_none());
        assert!(parse_duration("0").is_none());
        assert!(parse_duration("5x").is_none());
        assert!(parse_duration("m").is_none());
    }

    #[test]
    fn test_parse_duration_seconds() {
        assert_eq!(parse_duration_seconds("20m"), Some(1200));
        assert_eq!(parse_duration_seconds("1h"), Some(3600));
        assert_eq!(parse_duration_seconds("nope"), None);
    }

    #[test]
    fn test_parse_duration_saturates_huge_values() {
        assert_eq!(parse_duration_seconds("999999999999999999"), Some(u32::MAX));
        assert_eq!(parse_duration_seconds("9999999999999999h"), Some(u32::MAX));
        assert_eq!(
            parse_duration_seconds("99999999999999999999999999m30s"),
            Some(u32::MAX)
        );
        assert_eq!(parse_duration_seconds("-5"), None);
    }
}
