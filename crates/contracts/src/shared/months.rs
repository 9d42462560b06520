//! Rolling month window for forecast and actual-value entry.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One selectable month: ISO key plus a human label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthOption {
    /// "YYYY-MM"
    pub value: String,
    /// "June 2024"
    pub display: String,
}

impl MonthOption {
    fn from_month(year: i32, month: u32) -> Self {
        MonthOption {
            value: format!("{:04}-{:02}", year, month),
            display: format!("{} {}", month_name(month), year),
        }
    }
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    // First of any month always exists.
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Months available for data entry on a project, newest first.
///
/// The window is the current month plus up to four prior months, never
/// reaching before the project's start month. A project starting in the
/// future collapses the window to the current month only (forward planning).
/// Pure in `today`; callers inject the clock.
pub fn available_months(today: NaiveDate, project_start: Option<NaiveDate>) -> Vec<MonthOption> {
    let current = first_of_month(today);

    if let Some(start) = project_start {
        if start > today {
            return vec![MonthOption::from_month(current.year(), current.month())];
        }
    }

    // Four months before the current one.
    let mut floor = (current.year(), current.month());
    for _ in 0..4 {
        floor = previous_month(floor.0, floor.1);
    }

    let earliest = match project_start {
        Some(start) => {
            let start_month = (start.year(), start.month());
            floor.max(start_month)
        }
        None => floor,
    };

    let mut months = Vec::with_capacity(5);
    let mut cursor = (current.year(), current.month());
    while months.len() < 5 && cursor >= earliest {
        months.push(MonthOption::from_month(cursor.0, cursor.1));
        cursor = previous_month(cursor.0, cursor.1);
    }
    months
}

/// The "YYYY-MM" key of the month containing `today`.
pub fn current_month_key(today: NaiveDate) -> String {
    format!("{:04}-{:02}", today.year(), today.month())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn values(months: &[MonthOption]) -> Vec<&str> {
        months.iter().map(|m| m.value.as_str()).collect()
    }

    #[test]
    fn window_caps_at_five_months() {
        let months = available_months(d(2024, 6, 15), Some(d(2024, 1, 1)));
        assert_eq!(
            values(&months),
            vec!["2024-06", "2024-05", "2024-04", "2024-03", "2024-02"]
        );
    }

    #[test]
    fn window_stops_at_project_start_month() {
        let months = available_months(d(2024, 6, 15), Some(d(2024, 5, 20)));
        assert_eq!(values(&months), vec!["2024-06", "2024-05"]);
    }

    #[test]
    fn future_project_gets_current_month_only() {
        let months = available_months(d(2024, 6, 15), Some(d(2025, 1, 1)));
        assert_eq!(values(&months), vec!["2024-06"]);
        assert_eq!(months[0].display, "June 2024");
    }

    #[test]
    fn no_start_date_gives_full_window() {
        let months = available_months(d(2024, 2, 1), None);
        assert_eq!(
            values(&months),
            vec!["2024-02", "2024-01", "2023-12", "2023-11", "2023-10"]
        );
    }

    #[test]
    fn start_mid_month_includes_that_month() {
        // Project started on the 20th; its start month is still eligible.
        let months = available_months(d(2024, 6, 1), Some(d(2024, 6, 20)));
        // Start is later in the same month, thus "future" relative to today.
        assert_eq!(values(&months), vec!["2024-06"]);

        let months = available_months(d(2024, 6, 25), Some(d(2024, 6, 20)));
        assert_eq!(values(&months), vec!["2024-06"]);
    }

    #[test]
    fn labels_are_month_year() {
        let months = available_months(d(2024, 1, 10), Some(d(2023, 12, 1)));
        assert_eq!(months[0].display, "January 2024");
        assert_eq!(months[1].display, "December 2023");
    }

    #[test]
    fn current_month_key_is_zero_padded() {
        assert_eq!(current_month_key(d(2024, 6, 15)), "2024-06");
        assert_eq!(current_month_key(d(2024, 11, 1)), "2024-11");
    }
}
