// File: src/change.rs
// Purpose: Convert a control's native change payload into the bound value

use serde_json::Value;
use tracing::warn;

use crate::config::PhoneConfig;
use crate::datetime;
use crate::kind::{FieldConfig, FieldKind};
use crate::phone;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChangeError {
    #[error("{input:?} is not a {country} phone number")]
    InvalidPhone { country: String, input: String },

    #[error("{0:?} is not a date")]
    InvalidDate(String),

    #[error("{0:?} is not a time of day")]
    InvalidTime(String),

    #[error("field {0} has an unknown kind and does not accept changes")]
    UnsupportedKind(String),
}

/// Values a control submitted for its field, in submission order.
///
/// Unchecked checkboxes and empty multi selects submit nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangePayload {
    values: Vec<String>,
}

impl ChangePayload {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn single(value: impl Into<String>) -> Self {
        Self {
            values: vec![value.into()],
        }
    }

    pub fn many<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Values submitted for `name` (or `name[]`) in a urlencoded body
    pub fn from_form(body: &str, name: &str) -> Self {
        let list_key = format!("{}[]", name);
        let values = body
            .split('&')
            .filter_map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                let key = decode(key);
                (key == name || key == list_key).then(|| decode(value))
            })
            .collect();

        Self { values }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    fn last(&self) -> Option<&str> {
        self.values.last().map(String::as_str)
    }

    /// Bound value for `field`. Only phone, date, time and multi-select
    /// payloads are reshaped; everything else is forwarded as submitted.
    pub fn to_value(&self, field: &FieldConfig, phone: &PhoneConfig) -> Result<Value, ChangeError> {
        let value = match &field.kind {
            FieldKind::PlainInput { .. } | FieldKind::MultilineInput { .. } => {
                Value::String(self.last().unwrap_or_default().to_string())
            }
            FieldKind::PhoneInput { .. } => self.phone_value(phone)?,
            FieldKind::Checkbox { .. } => {
                Value::Bool(matches!(self.last(), Some("true" | "on")))
            }
            FieldKind::DatePicker {
                show_time_select, ..
            } => match self.last().map(str::trim) {
                None | Some("") => Value::Null,
                Some(raw) => datetime::normalize_date(raw, *show_time_select)
                    .map(Value::String)
                    .ok_or_else(|| ChangeError::InvalidDate(raw.to_string()))?,
            },
            FieldKind::TimePicker { .. } => match self.last().map(str::trim) {
                None | Some("") => Value::Null,
                Some(raw) => datetime::parse_time(raw)
                    .map(|t| Value::String(t.format("%H:%M:%S").to_string()))
                    .ok_or_else(|| ChangeError::InvalidTime(raw.to_string()))?,
            },
            FieldKind::SingleSelect { .. } => match self.last() {
                None | Some("") => Value::Null,
                Some(selected) => Value::String(selected.to_string()),
            },
            FieldKind::MultiSelect { options, .. } => Value::Array(
                options
                    .iter()
                    .filter(|option| self.values.contains(&option.value))
                    .map(|option| Value::String(option.value.clone()))
                    .collect(),
            ),
            FieldKind::CustomRender { .. } => match self.values.as_slice() {
                [] => Value::Null,
                [single] => Value::String(single.clone()),
                many => Value::Array(many.iter().cloned().map(Value::String).collect()),
            },
            FieldKind::Unknown => {
                warn!("Rejected change for field {} of unknown kind", field.name);
                return Err(ChangeError::UnsupportedKind(field.name.clone()));
            }
        };

        Ok(value)
    }

    fn phone_value(&self, config: &PhoneConfig) -> Result<Value, ChangeError> {
        let input = self.last().unwrap_or_default().trim();
        if input.is_empty() {
            return Ok(Value::Null);
        }

        phone::to_e164(input, config)
            .map(Value::String)
            .ok_or_else(|| ChangeError::InvalidPhone {
                country: config.country.clone(),
                input: input.to_string(),
            })
    }
}

fn decode(component: &str) -> String {
    let spaced = component.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| spaced.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::MultiSelectOption;
    use serde_json::json;

    fn convert(payload: ChangePayload, field: &FieldConfig) -> Result<Value, ChangeError> {
        payload.to_value(field, &PhoneConfig::default())
    }

    #[test]
    fn test_text_is_forwarded_verbatim() {
        let field = FieldConfig::input("name");
        assert_eq!(
            convert(ChangePayload::single("  Ana "), &field),
            Ok(json!("  Ana "))
        );
        assert_eq!(convert(ChangePayload::none(), &field), Ok(json!("")));
    }

    #[test]
    fn test_phone_becomes_e164() {
        let field = FieldConfig::phone("fatherPhone");
        assert_eq!(
            convert(ChangePayload::single("(809) 555-1234"), &field),
            Ok(json!("+18095551234"))
        );
        assert_eq!(convert(ChangePayload::single(""), &field), Ok(Value::Null));
        assert_eq!(
            convert(ChangePayload::single("555-1234"), &field),
            Err(ChangeError::InvalidPhone {
                country: "DO".to_string(),
                input: "555-1234".to_string()
            })
        );
    }

    #[test]
    fn test_checkbox() {
        let field = FieldConfig::checkbox("accept");
        assert_eq!(convert(ChangePayload::single("true"), &field), Ok(json!(true)));
        assert_eq!(convert(ChangePayload::none(), &field), Ok(json!(false)));
    }

    #[test]
    fn test_date_and_time() {
        let date = FieldConfig::date("dob");
        assert_eq!(
            convert(ChangePayload::single("2012-09-10"), &date),
            Ok(json!("2012-09-10"))
        );
        assert_eq!(convert(ChangePayload::single(""), &date), Ok(Value::Null));
        assert_eq!(
            convert(ChangePayload::single("10/09/2012"), &date),
            Err(ChangeError::InvalidDate("10/09/2012".to_string()))
        );

        let time = FieldConfig::time("time");
        assert_eq!(convert(ChangePayload::single("13:30"), &time), Ok(json!("13:30:00")));
    }

    #[test]
    fn test_multi_select_keeps_option_order() {
        let field = FieldConfig::multi_select(
            "knownSubjects",
            vec![
                MultiSelectOption::new("mat", "Matemática"),
                MultiSelectOption::new("fis", "Física"),
                MultiSelectOption::new("qui", "Química"),
            ],
        );
        assert_eq!(
            convert(ChangePayload::many(["qui", "mat", "bogus"]), &field),
            Ok(json!(["mat", "qui"]))
        );
        assert_eq!(convert(ChangePayload::none(), &field), Ok(json!([])));
    }

    #[test]
    fn test_from_form_collects_field_values() {
        let payload = ChangePayload::from_form("knownSubjects%5B%5D=mat&other=x&knownSubjects[]=fis", "knownSubjects");
        assert_eq!(payload.values(), ["mat".to_string(), "fis".to_string()]);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let field = FieldConfig::new("x", FieldKind::Unknown);
        assert_eq!(
            convert(ChangePayload::single("1"), &field),
            Err(ChangeError::UnsupportedKind("x".to_string()))
        );
    }
}
