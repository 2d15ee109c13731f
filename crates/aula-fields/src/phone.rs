// File: src/phone.rs
// Purpose: Single-country phone numbers (E.164 storage, grouped display)

use crate::config::PhoneConfig;

/// Normalize user input to E.164 (`+18095551234`).
///
/// Accepts the national number with any punctuation, or the full number with
/// the country calling code. Returns `None` for other countries, wrong
/// lengths and unknown area codes.
pub fn to_e164(input: &str, config: &PhoneConfig) -> Option<String> {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    let code = config.calling_code.as_str();

    let national = if digits.len() == config.national_length && !input.trim_start().starts_with('+') {
        digits.as_str()
    } else if digits.len() == code.len() + config.national_length && digits.starts_with(code) {
        &digits[code.len()..]
    } else {
        return None;
    };

    let known_area = config.area_codes.is_empty()
        || config.area_codes.iter().any(|area| national.starts_with(area.as_str()));
    if !known_area {
        return None;
    }

    Some(format!("+{}{}", code, national))
}

/// Display form with the calling code shown: `+1 809 555 1234`.
///
/// Values that are not E.164 numbers of the configured country are shown as-is.
pub fn display(value: &str, config: &PhoneConfig) -> String {
    let prefix = format!("+{}", config.calling_code);
    match value.strip_prefix(&prefix) {
        Some(national) if national.chars().all(|c| c.is_ascii_digit()) => {
            if national.len() == config.national_length {
                format!("{} {}", prefix, group_digits(national))
            } else {
                format!("{} {}", prefix, national)
            }
        }
        _ => value.to_string(),
    }
}

/// Groups of three, a trailing single digit joins the last group:
/// `8095551234` → `809 555 1234`, `612345678` → `612 345 678`
fn group_digits(digits: &str) -> String {
    let mut groups = Vec::new();
    let mut rest = digits;
    while rest.len() > 4 || (rest.len() == 4 && digits.len() % 3 != 1) {
        let (head, tail) = rest.split_at(3);
        groups.push(head);
        rest = tail;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_national_numbers() {
        let config = PhoneConfig::default();
        assert_eq!(to_e164("809-555-1234", &config).as_deref(), Some("+18095551234"));
        assert_eq!(to_e164("(829) 555 0000", &config).as_deref(), Some("+18295550000"));
        assert_eq!(to_e164("+1 849 555 0000", &config).as_deref(), Some("+18495550000"));
        assert_eq!(to_e164("18095551234", &config).as_deref(), Some("+18095551234"));
    }

    #[test]
    fn test_rejects_other_numbers() {
        let config = PhoneConfig::default();
        // a US area code is outside the fixed country
        assert_eq!(to_e164("212-555-1234", &config), None);
        assert_eq!(to_e164("+34 612 345 678", &config), None);
        assert_eq!(to_e164("555-1234", &config), None);
    }

    #[test]
    fn test_any_area_code_when_unrestricted() {
        let config = PhoneConfig {
            area_codes: Vec::new(),
            ..PhoneConfig::default()
        };
        assert_eq!(to_e164("212-555-1234", &config).as_deref(), Some("+12125551234"));
    }

    #[test]
    fn test_display() {
        let config = PhoneConfig::default();
        assert_eq!(display("+18095551234", &config), "+1 809 555 1234");
        assert_eq!(display("809", &config), "809");
    }

    #[test]
    fn test_display_groups_by_configured_length() {
        let config = PhoneConfig {
            country: "ES".to_string(),
            calling_code: "34".to_string(),
            national_length: 9,
            area_codes: Vec::new(),
        };
        assert_eq!(display("+34612345678", &config), "+34 612 345 678");
        assert_eq!(display("+3461234", &config), "+34 61234");
        assert_eq!(group_digits("8095551234"), "809 555 1234");
        assert_eq!(group_digits("12345678"), "123 456 78");
    }
}
