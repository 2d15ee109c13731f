// File: src/validators.rs
// Purpose: Primitive checks and parsers shared by the field rules

use chrono::{DateTime, NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9-]+(\.[a-zA-Z0-9-]+)*\.[a-zA-Z]{2,}$")
        .expect("email pattern is valid")
});

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    !email.contains("..") && EMAIL_REGEX.is_match(email)
}

/// Length in characters, not bytes ("contraseña" is 10)
pub fn char_count(s: &str) -> usize {
    s.chars().count()
}

pub fn has_min_length(s: &str, min: usize) -> bool {
    char_count(s) >= min
}

pub fn has_max_length(s: &str, max: usize) -> bool {
    char_count(s) <= max
}

/// Parse a calendar date.
///
/// Accepts `YYYY-MM-DD` (what `<input type="date">` submits) or a full
/// RFC 3339 timestamp, in which case the date component is kept.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

/// Parse a time of day.
///
/// Accepts `HH:MM`, `HH:MM:SS`, the 12-hour picker format (`9:45 AM`) and
/// RFC 3339 timestamps.
pub fn parse_time(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    ["%H:%M:%S", "%H:%M", "%I:%M %p", "%I:%M%p"]
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(s, fmt).ok())
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.time()))
}

/// Number coercion for text input. Blank input is not a number.
pub fn parse_number(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("test.user@example.co.uk"));
        assert!(is_valid_email("user+tag@example.com"));
        assert!(is_valid_email("user_name@example-domain.com"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example..com"));
    }

    #[test]
    fn test_length_counts_chars() {
        assert_eq!(char_count("contraseña"), 10);
        assert!(has_min_length("añoañoañ", 8));
        assert!(!has_min_length("1234567", 8));
        assert!(has_max_length("", 100));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-03-15"), NaiveDate::from_ymd_opt(2024, 3, 15));
        assert_eq!(
            parse_date("2024-03-15T10:30:00Z"),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert_eq!(parse_date("15/03/2024"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_parse_time() {
        let expected = NaiveTime::from_hms_opt(14, 15, 0);
        assert_eq!(parse_time("14:15"), expected);
        assert_eq!(parse_time("14:15:00"), expected);
        assert_eq!(parse_time("2:15 PM"), expected);
        assert_eq!(parse_time("2024-03-15T14:15:00-04:00"), expected);
        assert_eq!(parse_time("25:00"), None);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("3"), Some(3.0));
        assert_eq!(parse_number(" 2.5 "), Some(2.5));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("tres"), None);
        assert_eq!(parse_number("NaN"), None);
    }
}
