// File: src/field.rs
// Purpose: Per-field rules: presence, type coercion, ordered checks, normalization

use serde_json::{Number, Value};

use crate::validators;

/// Message used when a required field declares no message of its own
pub const DEFAULT_REQUIRED: &str = "Requerido";

pub const EXPECTED_TEXT: &str = "Se esperaba texto";
pub const EXPECTED_NUMBER: &str = "Se esperaba un número";
pub const EXPECTED_LIST: &str = "Se esperaba una lista";
pub const INVALID_DATE: &str = "Fecha inválida";
pub const INVALID_TIME: &str = "Hora inválida";
pub const INVALID_EMAIL: &str = "Correo invalido";

/// Raw value type a field accepts and how it is coerced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Strings only
    Text,
    /// Strings, numbers and booleans, rendered as text
    CoercedText,
    /// JSON numbers only
    Number,
    /// Numbers or numeric strings; a blank string counts as missing
    CoercedNumber,
    /// Calendar date, normalized to `YYYY-MM-DD`
    Date,
    /// Time of day, normalized to `HH:MM:SS`
    Time,
    /// List of strings
    TextList,
}

/// What happens when the key is absent or `null`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Missing value is an error carrying the field's required message
    Required,
    /// Missing value is dropped from the normalized map
    Optional,
    /// Missing value is kept as an explicit `null`
    Nullable,
}

/// A constraint with the message reported when it fails
#[derive(Debug, Clone, PartialEq)]
pub enum Check {
    MinLength(usize, &'static str),
    MaxLength(usize, &'static str),
    Email(&'static str),
    Min(f64, &'static str),
}

impl Check {
    /// Checks only look at values of the type they apply to
    fn apply(&self, value: &Value) -> Result<(), &'static str> {
        let passed = match (self, value) {
            (Check::MinLength(min, _), Value::String(s)) => validators::has_min_length(s, *min),
            (Check::MaxLength(max, _), Value::String(s)) => validators::has_max_length(s, *max),
            (Check::Email(_), Value::String(s)) => validators::is_valid_email(s),
            (Check::Min(min, _), Value::Number(n)) => n.as_f64().is_some_and(|n| n >= *min),
            _ => true,
        };

        if passed {
            Ok(())
        } else {
            Err(self.message())
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Check::MinLength(_, msg) | Check::MaxLength(_, msg) | Check::Email(msg) | Check::Min(_, msg) => *msg,
        }
    }
}

/// Result of evaluating one field
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Outcome {
    Value(Value),
    Omit,
}

/// Declarative rule for one field of a schema.
///
/// Evaluation order: presence, type coercion, trim, the `or_empty` shortcut,
/// checks in declaration order (the first failure wins), then the
/// empty-string-to-null transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    name: &'static str,
    ty: FieldType,
    presence: Presence,
    required_message: &'static str,
    trim: bool,
    or_empty: bool,
    checks: Vec<Check>,
    empty_to_null: bool,
}

impl Field {
    fn new(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            ty,
            presence: Presence::Required,
            required_message: DEFAULT_REQUIRED,
            trim: false,
            or_empty: false,
            checks: Vec::new(),
            empty_to_null: false,
        }
    }

    pub fn text(name: &'static str) -> Self {
        Self::new(name, FieldType::Text)
    }

    pub fn coerced_text(name: &'static str) -> Self {
        Self::new(name, FieldType::CoercedText)
    }

    pub fn number(name: &'static str) -> Self {
        Self::new(name, FieldType::Number)
    }

    pub fn coerced_number(name: &'static str) -> Self {
        Self::new(name, FieldType::CoercedNumber)
    }

    pub fn date(name: &'static str) -> Self {
        Self::new(name, FieldType::Date)
    }

    pub fn time(name: &'static str) -> Self {
        Self::new(name, FieldType::Time)
    }

    pub fn text_list(name: &'static str) -> Self {
        Self::new(name, FieldType::TextList)
    }

    /// Optional contact email: `""` is accepted and normalized to `null`,
    /// anything else must be a well-formed address.
    pub fn optional_email(name: &'static str) -> Self {
        Self::text(name)
            .optional()
            .or_empty()
            .email(INVALID_EMAIL)
            .empty_to_null()
    }

    /// Missing value reports `message`
    pub fn required(mut self, message: &'static str) -> Self {
        self.presence = Presence::Required;
        self.required_message = message;
        self
    }

    /// Missing or empty value reports `message`
    pub fn non_empty(self, message: &'static str) -> Self {
        self.required(message).min_len(1, message)
    }

    pub fn optional(mut self) -> Self {
        self.presence = Presence::Optional;
        self
    }

    pub fn nullable(mut self) -> Self {
        self.presence = Presence::Nullable;
        self
    }

    pub fn trim(mut self) -> Self {
        self.trim = true;
        self
    }

    /// Accept `""` as-is without running the checks
    pub fn or_empty(mut self) -> Self {
        self.or_empty = true;
        self
    }

    pub fn min_len(mut self, min: usize, message: &'static str) -> Self {
        self.checks.push(Check::MinLength(min, message));
        self
    }

    pub fn max_len(mut self, max: usize, message: &'static str) -> Self {
        self.checks.push(Check::MaxLength(max, message));
        self
    }

    pub fn email(mut self, message: &'static str) -> Self {
        self.checks.push(Check::Email(message));
        self
    }

    pub fn min(mut self, min: f64, message: &'static str) -> Self {
        self.checks.push(Check::Min(min, message));
        self
    }

    pub fn empty_to_null(mut self) -> Self {
        self.empty_to_null = true;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn field_type(&self) -> FieldType {
        self.ty
    }

    pub fn presence(&self) -> Presence {
        self.presence
    }

    pub fn required_message(&self) -> &'static str {
        self.required_message
    }

    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    pub(crate) fn evaluate(&self, raw: Option<&Value>) -> Result<Outcome, &'static str> {
        let raw = match raw {
            None | Some(Value::Null) => return self.missing(),
            Some(raw) => raw,
        };

        let mut value = match self.coerce(raw)? {
            Some(value) => value,
            None => return self.missing(),
        };

        if self.trim {
            if let Value::String(s) = &mut value {
                *s = s.trim().to_string();
            }
        }

        if !(self.or_empty && is_empty_string(&value)) {
            for check in &self.checks {
                check.apply(&value)?;
            }
        }

        if self.empty_to_null && is_empty_string(&value) {
            value = Value::Null;
        }

        Ok(Outcome::Value(value))
    }

    fn missing(&self) -> Result<Outcome, &'static str> {
        match self.presence {
            Presence::Required => Err(self.required_message),
            Presence::Optional => Ok(Outcome::Omit),
            Presence::Nullable => Ok(Outcome::Value(Value::Null)),
        }
    }

    /// `Ok(None)` means the raw value counts as missing
    fn coerce(&self, raw: &Value) -> Result<Option<Value>, &'static str> {
        match self.ty {
            FieldType::Text => match raw {
                Value::String(_) => Ok(Some(raw.clone())),
                _ => Err(EXPECTED_TEXT),
            },
            FieldType::CoercedText => match raw {
                Value::String(_) => Ok(Some(raw.clone())),
                Value::Number(n) => Ok(Some(Value::String(n.to_string()))),
                Value::Bool(b) => Ok(Some(Value::String(b.to_string()))),
                _ => Err(EXPECTED_TEXT),
            },
            FieldType::Number => match raw {
                Value::Number(_) => Ok(Some(raw.clone())),
                _ => Err(EXPECTED_NUMBER),
            },
            FieldType::CoercedNumber => match raw {
                Value::Number(_) => Ok(Some(raw.clone())),
                Value::String(s) if s.trim().is_empty() => Ok(None),
                Value::String(s) => validators::parse_number(s)
                    .map(|n| Some(number_value(n)))
                    .ok_or(EXPECTED_NUMBER),
                Value::Bool(b) => Ok(Some(Value::from(u8::from(*b)))),
                _ => Err(EXPECTED_NUMBER),
            },
            FieldType::Date => raw
                .as_str()
                .and_then(validators::parse_date)
                .map(|d| Some(Value::String(d.format("%Y-%m-%d").to_string())))
                .ok_or(INVALID_DATE),
            FieldType::Time => raw
                .as_str()
                .and_then(validators::parse_time)
                .map(|t| Some(Value::String(t.format("%H:%M:%S").to_string())))
                .ok_or(INVALID_TIME),
            FieldType::TextList => match raw {
                Value::Array(items) if items.iter().all(Value::is_string) => Ok(Some(raw.clone())),
                _ => Err(EXPECTED_LIST),
            },
        }
    }
}

fn is_empty_string(value: &Value) -> bool {
    matches!(value, Value::String(s) if s.is_empty())
}

/// Integral values stay integers so typed forms can read them as `i64`
fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        Value::from(n as i64)
    } else {
        Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
    }
}
