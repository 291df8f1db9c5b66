//! Date formatting and default periods.
//!
//! The backend speaks ISO (`YYYY-MM-DD`); screens show the local
//! MM/DD/YYYY convention.

use chrono::{Datelike, Local, NaiveDate};

/// Format an ISO date string as MM/DD/YYYY.
/// Example: "2026-02-17" or "2026-02-17T08:30:00Z" -> "02/17/2026"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", month, day, year);
        }
    }
    date_str.to_string()
}

/// Format an ISO datetime string as MM/DD/YYYY HH:MM:SS.
/// Example: "2026-02-17T14:02:26.123Z" -> "02/17/2026 14:02:26"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        if let Some((year, rest)) = date_part.split_once('-') {
            if let Some((month, day)) = rest.split_once('-') {
                let time = time_part.split('.').next().unwrap_or(time_part);
                let time = time.trim_end_matches('Z');
                return format!("{}/{}/{} {}", month, day, year, time);
            }
        }
    }
    datetime_str.to_string()
}

pub fn today_iso() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Default report period: first of the current month through today,
/// both as ISO strings.
pub fn current_month_range() -> (String, String) {
    let today = Local::now().date_naive();
    let first = NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today);
    (
        first.format("%Y-%m-%d").to_string(),
        today.format("%Y-%m-%d").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-02-17"), "02/17/2026");
        assert_eq!(format_date("2026-02-17T14:02:26.123Z"), "02/17/2026");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2026-02-17T14:02:26.123Z"),
            "02/17/2026 14:02:26"
        );
        assert_eq!(
            format_datetime("2026-12-31T23:59:59Z"),
            "12/31/2026 23:59:59"
        );
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_datetime("invalid"), "invalid");
    }
}
