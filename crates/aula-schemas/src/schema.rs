// File: src/schema.rs
// Purpose: Schema definition and the two-phase validation pipeline

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{ValidationErrors, GENERAL_PATH};
use crate::field::{Field, FieldType, Outcome};
use crate::input;

/// Raw or normalized field values keyed by field name
pub type ValueMap = Map<String, Value>;

/// Check over the whole normalized map, run after every field passed
pub type CrossFieldRule = fn(&ValueMap, &mut ValidationErrors);

/// Named, immutable validator for one form.
///
/// Validation runs in two phases:
/// 1. every declared field is evaluated in order; a failing field records its
///    first failing constraint and validation moves on to the next field
/// 2. if no field failed, the cross-field rules run against the normalized
///    map and may add errors on any path
///
/// Keys the schema does not declare are dropped from the normalized map.
#[derive(Debug, Clone)]
pub struct Schema {
    name: &'static str,
    fields: Vec<Field>,
    rules: Vec<CrossFieldRule>,
}

impl Schema {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
            rules: Vec::new(),
        }
    }

    /// Append a field rule
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Append a cross-field rule
    pub fn refine(mut self, rule: CrossFieldRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Replace the rule for `field.name()` in place, or append it if the
    /// schema has no such field. Cross-field rules are kept.
    pub fn with_field(mut self, field: Field) -> Self {
        match self.fields.iter_mut().find(|f| f.name() == field.name()) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
        self
    }

    /// Same rules under another registry name
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(Field::name).collect()
    }

    pub fn has_cross_field_rules(&self) -> bool {
        !self.rules.is_empty()
    }

    /// Validate a raw value map
    pub fn validate(&self, raw: &ValueMap) -> Result<ValueMap, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let mut normalized = ValueMap::new();

        for field in &self.fields {
            match field.evaluate(raw.get(field.name())) {
                Ok(Outcome::Value(value)) => {
                    normalized.insert(field.name().to_string(), value);
                }
                Ok(Outcome::Omit) => {}
                Err(message) => errors.push(field.name(), message),
            }
        }

        if errors.is_empty() {
            for rule in &self.rules {
                rule(&normalized, &mut errors);
            }
        }

        debug!(
            schema = self.name,
            fields = self.fields.len(),
            errors = errors.len(),
            "validated form input"
        );

        if errors.is_empty() {
            Ok(normalized)
        } else {
            Err(errors)
        }
    }

    /// Validate a JSON document; anything but an object is rejected outright
    pub fn validate_json(&self, raw: &Value) -> Result<ValueMap, ValidationErrors> {
        match raw {
            Value::Object(map) => self.validate(map),
            _ => Err(ValidationErrors::single("", "Se esperaba un objeto")),
        }
    }

    /// Validate an `application/x-www-form-urlencoded` body. Number fields
    /// accept numeric text; blank text counts as missing.
    pub fn validate_form(&self, body: &str) -> Result<ValueMap, ValidationErrors> {
        let list_fields: Vec<&str> = self
            .fields
            .iter()
            .filter(|f| f.field_type() == FieldType::TextList)
            .map(Field::name)
            .collect();

        let number_fields: Vec<&str> = self
            .fields
            .iter()
            .filter(|f| f.field_type() == FieldType::Number)
            .map(Field::name)
            .collect();

        let mut raw = input::pairs_to_map(input::parse_urlencoded(body), &list_fields);
        input::parse_number_fields(&mut raw, &number_fields);
        self.validate(&raw)
    }

    /// Validate and deserialize the normalized map into a typed form
    pub fn parse<T: DeserializeOwned>(&self, raw: &ValueMap) -> Result<T, ValidationErrors> {
        let normalized = self.validate(raw)?;
        serde_json::from_value(Value::Object(normalized))
            .map_err(|e| ValidationErrors::single(GENERAL_PATH, e.to_string()))
    }
}

/// Falsy for cross-field purposes: absent, `null` or `""`
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Bool(b)) => !b,
        Some(_) => false,
    }
}
