// File: src/state.rs
// Purpose: Host form state and the per-field binding controls read from

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::change::{ChangeError, ChangePayload};
use crate::config::FieldsConfig;
use crate::kind::FieldConfig;

/// Where control edits are posted (rendered as HTMX attributes)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeTarget {
    pub url: String,
    /// `hx-target` selector for the response
    pub target: Option<String>,
}

impl ChangeTarget {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            target: None,
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }
}

/// Values, validation messages and change endpoint of one mounted form
#[derive(Debug, Clone, Default)]
pub struct FormState {
    values: Map<String, Value>,
    /// Field names to the message shown under the control
    errors: HashMap<String, String>,
    change: Option<ChangeTarget>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values(values: Map<String, Value>) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    /// Create from a JSON object; other JSON values give an empty form
    pub fn from_json(json: Value) -> Self {
        match json {
            Value::Object(values) => Self::from_values(values),
            _ => Self::default(),
        }
    }

    pub fn with_change_target(mut self, target: ChangeTarget) -> Self {
        self.change = Some(target);
        self
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn set_value(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    pub fn into_values(self) -> Map<String, Value> {
        self.values
    }

    /// Replace the messages with the first one reported per field
    pub fn set_errors<I, E>(&mut self, errors: I)
    where
        I: IntoIterator<Item = E>,
        E: Into<(String, String)>,
    {
        self.errors.clear();
        for error in errors {
            let (path, message) = error.into();
            self.errors.entry(path).or_insert(message);
        }
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn change_target(&self) -> Option<&ChangeTarget> {
        self.change.as_ref()
    }

    /// Binding for one field
    pub fn binding<'a>(&'a self, name: &'a str) -> FieldBinding<'a> {
        FieldBinding {
            name,
            value: self.values.get(name),
            error: self.error(name),
            change: self.change.as_ref(),
        }
    }

    /// Store a control's native change payload as the bound value.
    ///
    /// The field's message is cleared once its value changes.
    pub fn apply_change(
        &mut self,
        field: &FieldConfig,
        payload: &ChangePayload,
        config: &FieldsConfig,
    ) -> Result<(), ChangeError> {
        let value = payload.to_value(field, &config.phone)?;
        self.errors.remove(&field.name);
        self.values.insert(field.name.clone(), value);
        Ok(())
    }
}

/// Read side of one field inside a FormState
#[derive(Debug, Clone, Copy)]
pub struct FieldBinding<'a> {
    pub name: &'a str,
    pub value: Option<&'a Value>,
    pub error: Option<&'a str>,
    pub change: Option<&'a ChangeTarget>,
}

impl<'a> FieldBinding<'a> {
    /// Unbound field with no value
    pub fn detached(name: &'a str) -> Self {
        Self {
            name,
            value: None,
            error: None,
            change: None,
        }
    }

    /// Scalar value as text; `None` for missing, `null`, lists and objects
    pub fn text(&self) -> Option<String> {
        match self.value? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub fn is_checked(&self) -> bool {
        match self.value {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => matches!(s.as_str(), "true" | "on"),
            _ => false,
        }
    }

    /// List value; a lone string counts as a one-element list
    pub fn list(&self) -> Vec<&'a str> {
        match self.value {
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            Some(Value::String(s)) if !s.is_empty() => vec![s.as_str()],
            _ => Vec::new(),
        }
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}
