//! Date helper functions

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Display format used on the page and in the post index ("Sep 15, 2025")
const DISPLAY_FORMAT: &str = "%b %-d, %Y";

/// Date-only formats accepted from user input
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%B %d, %Y", "%b %d, %Y"];

/// Date-time formats accepted from user input
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Format a date for display on the page
///
/// Falls back to today when no date is given. Input that cannot be parsed
/// is returned unchanged.
///
/// # Examples
/// ```ignore
/// format_display_date(Some("2025-09-15")) // -> "Sep 15, 2025"
/// format_display_date(Some("soon"))       // -> "soon"
/// ```
pub fn format_display_date(input: Option<&str>) -> String {
    let input = match input.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return Local::now().date_naive().format(DISPLAY_FORMAT).to_string(),
    };

    match parse_date(input) {
        Some(date) => date.format(DISPLAY_FORMAT).to_string(),
        None => input.to_string(),
    }
}

/// Today's date as an ISO date-only string ("2025-09-15")
pub fn today_iso() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Parse the loosely formatted dates users type into the CMS
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
        return Some(dt.date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
        })
}
