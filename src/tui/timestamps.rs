use chrono::{DateTime, Datelike, Utc};

/// Format a comment timestamp relative to now:
/// - "Just now", "5 minutes ago", "1 hour ago", "3 days ago" within a week
/// - "Jan 15" or "Dec 3, 2024" after that
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    format_timestamp_at(timestamp, &Utc::now())
}

pub fn format_timestamp_at(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(*timestamp);

    if duration.num_days() < 7 {
        format_relative(duration.num_seconds())
    } else {
        format_absolute(timestamp, now)
    }
}

fn format_relative(seconds: i64) -> String {
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        plural(minutes, "minute")
    } else if hours < 24 {
        plural(hours, "hour")
    } else {
        plural(days, "day")
    }
}

fn plural(n: i64, unit: &str) -> String {
    format!("{} {}{} ago", n, unit, if n > 1 { "s" } else { "" })
}

fn format_absolute(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    if timestamp.year() == now.year() {
        timestamp.format("%b %-d").to_string()
    } else {
        timestamp.format("%b %-d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_just_now() {
        let now = now();
        assert_eq!(format_timestamp_at(&(now - Duration::seconds(30)), &now), "Just now");
        // Clock skew: future timestamps are "Just now" too
        assert_eq!(format_timestamp_at(&(now + Duration::seconds(5)), &now), "Just now");
    }

    #[test]
    fn test_minutes() {
        let now = now();
        assert_eq!(format_timestamp_at(&(now - Duration::minutes(1)), &now), "1 minute ago");
        assert_eq!(format_timestamp_at(&(now - Duration::minutes(45)), &now), "45 minutes ago");
    }

    #[test]
    fn test_hours() {
        let now = now();
        assert_eq!(format_timestamp_at(&(now - Duration::hours(1)), &now), "1 hour ago");
        assert_eq!(format_timestamp_at(&(now - Duration::hours(3)), &now), "3 hours ago");
    }

    #[test]
    fn test_days() {
        let now = now();
        assert_eq!(format_timestamp_at(&(now - Duration::days(1)), &now), "1 day ago");
        assert_eq!(format_timestamp_at(&(now - Duration::days(5)), &now), "5 days ago");
    }

    #[test]
    fn test_absolute_same_year() {
        let now = now();
        let timestamp = Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap();
        assert_eq!(format_timestamp_at(&timestamp, &now), "Jan 15");
    }

    #[test]
    fn test_absolute_different_year() {
        let now = now();
        let timestamp = Utc.with_ymd_and_hms(2024, 12, 3, 9, 0, 0).unwrap();
        assert_eq!(format_timestamp_at(&timestamp, &now), "Dec 3, 2024");
    }

    #[test]
    fn test_format_timestamp_uses_current_time() {
        assert_eq!(format_timestamp(&Utc::now()), "Just now");
    }
}
