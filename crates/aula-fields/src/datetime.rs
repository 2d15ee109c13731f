// File: src/datetime.rs
// Purpose: Date display and time-slot helpers for the pickers

use std::fmt::Write;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Long Spanish date: `15 de marzo de 2024`
pub fn format_date(date: NaiveDate) -> String {
    use chrono::Datelike;
    format!(
        "{} de {} de {}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

/// Format with a chrono pattern, falling back to the long date when the
/// pattern is invalid
pub fn format_date_with(date: NaiveDate, pattern: Option<&str>) -> String {
    let Some(pattern) = pattern else {
        return format_date(date);
    };

    let mut out = String::new();
    match write!(out, "{}", date.format(pattern)) {
        Ok(()) => out,
        Err(_) => format_date(date),
    }
}

/// Date from a bound value: `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM[:SS]` or RFC 3339
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_local_datetime(s).map(|dt| dt.date()))
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

/// Local date-time as submitted by `<input type="datetime-local">`
pub fn parse_local_datetime(s: &str) -> Option<NaiveDateTime> {
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Normalize a picker submission: a date, or a local date-time when the
/// picker also selects the time
pub fn normalize_date(s: &str, with_time: bool) -> Option<String> {
    if with_time {
        if let Some(dt) = parse_local_datetime(s.trim()) {
            return Some(dt.format("%Y-%m-%dT%H:%M:%S").to_string());
        }
    }
    parse_date(s).map(|d| d.format("%Y-%m-%d").to_string())
}

/// Time of day: `HH:MM`, `HH:MM:SS`, `h:mm AM/PM` or RFC 3339
pub fn parse_time(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    ["%H:%M:%S", "%H:%M", "%I:%M %p", "%I:%M%p"]
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(s, fmt).ok())
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.time()))
}

/// 12-hour display used by the time picker: `9:45 AM`
pub fn format_time(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Selectable times from midnight, `interval` minutes apart
pub fn time_slots(interval: u32) -> Vec<NaiveTime> {
    let step = interval.clamp(1, 24 * 60);
    (0..24 * 60)
        .step_by(step as usize)
        .filter_map(|minutes| NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0))
        .collect()
}

/// Slot value submitted by the picker: `HH:MM`
pub fn slot_value(time: NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}
