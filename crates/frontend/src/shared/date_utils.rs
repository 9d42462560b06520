/// Utilities for date and time formatting
///
/// Provides consistent date/time display across the application.
use chrono::{DateTime, NaiveDate, Utc};

/// Format an ISO date (or datetime) string for display.
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15 Mar 2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d %b %Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Relative label for activity feeds: "Just now", "N hours ago", or the date.
/// Pure in `now` so it can be tested with a fixed clock.
pub fn relative_time(date_str: &str, now: DateTime<Utc>) -> String {
    let parsed = DateTime::parse_from_rfc3339(date_str)
        .map(|d| d.with_timezone(&Utc))
        .or_else(|_| {
            // Some records carry a bare date.
            NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
                .map(|d| d.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc())
        });

    let Ok(timestamp) = parsed else {
        return date_str.to_string();
    };

    let elapsed = now.signed_duration_since(timestamp);
    let hours = elapsed.num_hours();
    if hours < 1 {
        "Just now".to_string()
    } else if hours < 24 {
        format!("{} hours ago", hours)
    } else {
        format_date(date_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15 Mar 2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15 Mar 2024");
    }

    #[test]
    fn test_invalid_format_passes_through() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(relative_time("invalid", Utc::now()), "invalid");
    }

    #[test]
    fn test_relative_time_buckets() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        assert_eq!(relative_time("2024-06-15T11:30:00Z", now), "Just now");
        assert_eq!(relative_time("2024-06-15T08:00:00Z", now), "4 hours ago");
        assert_eq!(relative_time("2024-06-10T08:00:00Z", now), "10 Jun 2024");
    }
}
