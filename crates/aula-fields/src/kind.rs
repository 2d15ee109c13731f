// File: src/kind.rs
// Purpose: Field configuration, one variant per kind of control

use std::fmt;
use std::sync::Arc;

use maud::Markup;
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::state::FieldBinding;

/// Caller-supplied renderer for custom fields
#[derive(Clone)]
pub struct RenderFn(Arc<dyn Fn(&FieldBinding<'_>) -> Markup + Send + Sync>);

impl RenderFn {
    pub fn new(f: impl Fn(&FieldBinding<'_>) -> Markup + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn call(&self, binding: &FieldBinding<'_>) -> Markup {
        (self.0)(binding)
    }
}

impl fmt::Debug for RenderFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RenderFn(..)")
    }
}

/// `min` / `max` of a plain input: `0`, `"2024-01-01"`, ...
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Bound {
    Number(f64),
    Text(String),
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Number(n) => write!(f, "{}", n),
            Bound::Text(s) => f.write_str(s),
        }
    }
}

/// One `<option>` of a single select
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectItem {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub disabled: bool,
}

impl SelectItem {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }
}

/// One choice of a multi select
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiSelectOption {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub icon: Option<String>,
}

impl MultiSelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            icon: None,
        }
    }
}

/// Badge style of a multi select
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MultiSelectVariant {
    #[default]
    Default,
    Secondary,
    Destructive,
    Inverted,
}

impl MultiSelectVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            MultiSelectVariant::Default => "default",
            MultiSelectVariant::Secondary => "secondary",
            MultiSelectVariant::Destructive => "destructive",
            MultiSelectVariant::Inverted => "inverted",
        }
    }
}

/// Which control a field renders as, with the attributes only that control reads
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "fieldKind", rename_all = "kebab-case")]
pub enum FieldKind {
    #[serde(rename_all = "camelCase")]
    PlainInput {
        /// HTML input type, `text` when unset
        #[serde(default, rename = "type")]
        input_type: Option<String>,
        #[serde(default)]
        placeholder: Option<String>,
        #[serde(default)]
        min: Option<Bound>,
        #[serde(default)]
        max: Option<Bound>,
        #[serde(default)]
        readonly: bool,
    },
    MultilineInput {
        #[serde(default)]
        placeholder: Option<String>,
    },
    PhoneInput {
        #[serde(default)]
        placeholder: Option<String>,
    },
    Checkbox {
        #[serde(default)]
        description: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    DatePicker {
        /// chrono pattern for the trigger text
        #[serde(default)]
        date_format: Option<String>,
        #[serde(default)]
        show_time_select: bool,
    },
    TimePicker {
        /// Minutes between slots
        #[serde(default)]
        interval: Option<u32>,
    },
    SingleSelect {
        #[serde(default)]
        placeholder: Option<String>,
        #[serde(default)]
        options: Vec<SelectItem>,
    },
    #[serde(rename_all = "camelCase")]
    MultiSelect {
        #[serde(default)]
        placeholder: Option<String>,
        #[serde(default)]
        options: Vec<MultiSelectOption>,
        #[serde(default)]
        max_count: Option<usize>,
        /// Badge animation duration in seconds
        #[serde(default)]
        animation: Option<f32>,
        #[serde(default)]
        variant: Option<MultiSelectVariant>,
    },
    CustomRender {
        #[serde(skip)]
        render: Option<RenderFn>,
    },
    /// A `fieldKind` this version does not know; renders nothing
    #[serde(other)]
    Unknown,
}

impl FieldKind {
    pub fn tag(&self) -> &'static str {
        match self {
            FieldKind::PlainInput { .. } => "plain-input",
            FieldKind::MultilineInput { .. } => "multiline-input",
            FieldKind::PhoneInput { .. } => "phone-input",
            FieldKind::Checkbox { .. } => "checkbox",
            FieldKind::DatePicker { .. } => "date-picker",
            FieldKind::TimePicker { .. } => "time-picker",
            FieldKind::SingleSelect { .. } => "single-select",
            FieldKind::MultiSelect { .. } => "multi-select",
            FieldKind::CustomRender { .. } => "custom-render",
            FieldKind::Unknown => "unknown",
        }
    }

    pub fn is_checkbox(&self) -> bool {
        matches!(self, FieldKind::Checkbox { .. })
    }
}

/// Everything needed to render one form field
#[derive(Debug, Clone, Deserialize)]
#[serde(remote = "Self", rename_all = "camelCase")]
pub struct FieldConfig {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, rename = "className")]
    pub class: Option<String>,
    #[serde(flatten)]
    pub kind: FieldKind,
}

/// Kind tag read from JSON configs
const KIND_TAG: &str = "fieldKind";

impl<'de> Deserialize<'de> for FieldConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut raw = Value::deserialize(deserializer)?;

        // A config without a kind renders nothing, like an unrecognized one
        if let Value::Object(map) = &mut raw {
            map.entry(KIND_TAG)
                .or_insert_with(|| Value::from(FieldKind::Unknown.tag()));
        }

        FieldConfig::deserialize(raw).map_err(de::Error::custom)
    }
}

impl FieldConfig {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: None,
            disabled: false,
            class: None,
            kind,
        }
    }

    pub fn input(name: impl Into<String>) -> Self {
        Self::new(
            name,
            FieldKind::PlainInput {
                input_type: None,
                placeholder: None,
                min: None,
                max: None,
                readonly: false,
            },
        )
    }

    pub fn textarea(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::MultilineInput { placeholder: None })
    }

    pub fn phone(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::PhoneInput { placeholder: None })
    }

    pub fn checkbox(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Checkbox { description: None })
    }

    pub fn date(name: impl Into<String>) -> Self {
        Self::new(
            name,
            FieldKind::DatePicker {
                date_format: None,
                show_time_select: false,
            },
        )
    }

    pub fn time(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::TimePicker { interval: None })
    }

    pub fn select(name: impl Into<String>, options: Vec<SelectItem>) -> Self {
        Self::new(
            name,
            FieldKind::SingleSelect {
                placeholder: None,
                options,
            },
        )
    }

    pub fn multi_select(name: impl Into<String>, options: Vec<MultiSelectOption>) -> Self {
        Self::new(
            name,
            FieldKind::MultiSelect {
                placeholder: None,
                options,
                max_count: None,
                animation: None,
                variant: None,
            },
        )
    }

    pub fn custom(
        name: impl Into<String>,
        render: impl Fn(&FieldBinding<'_>) -> Markup + Send + Sync + 'static,
    ) -> Self {
        Self::new(
            name,
            FieldKind::CustomRender {
                render: Some(RenderFn::new(render)),
            },
        )
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Set the placeholder on kinds that show one; ignored elsewhere
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        match &mut self.kind {
            FieldKind::PlainInput { placeholder, .. }
            | FieldKind::MultilineInput { placeholder }
            | FieldKind::PhoneInput { placeholder }
            | FieldKind::SingleSelect { placeholder, .. }
            | FieldKind::MultiSelect { placeholder, .. } => *placeholder = Some(text.into()),
            _ => {}
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_tagged_config() {
        let config: FieldConfig = serde_json::from_value(json!({
            "fieldKind": "multi-select",
            "name": "knownSubjects",
            "label": "Materias",
            "options": [{ "label": "Matemática", "value": "mat" }],
            "maxCount": 2,
            "variant": "inverted"
        }))
        .unwrap();

        assert_eq!(config.name, "knownSubjects");
        assert_eq!(config.kind.tag(), "multi-select");
        match config.kind {
            FieldKind::MultiSelect {
                options,
                max_count,
                variant,
                ..
            } => {
                assert_eq!(options, vec![MultiSelectOption::new("mat", "Matemática")]);
                assert_eq!(max_count, Some(2));
                assert_eq!(variant, Some(MultiSelectVariant::Inverted));
            }
            other => panic!("unexpected kind {:?}", other),
        }
    }

    #[test]
    fn test_unknown_kind_deserializes() {
        let config: FieldConfig =
            serde_json::from_value(json!({ "fieldKind": "color-picker", "name": "c" })).unwrap();
        assert!(matches!(config.kind, FieldKind::Unknown));
    }

    #[test]
    fn test_missing_kind_deserializes_as_unknown() {
        let config: FieldConfig =
            serde_json::from_value(json!({ "name": "x", "label": "X" })).unwrap();
        assert!(matches!(config.kind, FieldKind::Unknown));
        assert_eq!(config.label.as_deref(), Some("X"));

        let configs: Vec<FieldConfig> = serde_json::from_value(json!([
            { "fieldKind": "checkbox", "name": "accept" },
            { "name": "notes" }
        ]))
        .unwrap();
        assert_eq!(configs[0].kind.tag(), "checkbox");
        assert_eq!(configs[1].kind.tag(), "unknown");
    }

    #[test]
    fn test_missing_name_is_still_an_error() {
        let result = serde_json::from_value::<FieldConfig>(json!({ "fieldKind": "checkbox" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_plain_input_bounds() {
        let config: FieldConfig = serde_json::from_value(json!({
            "fieldKind": "plain-input",
            "name": "gradeMax",
            "type": "number",
            "min": 1,
            "max": "12",
            "readonly": true
        }))
        .unwrap();
        match config.kind {
            FieldKind::PlainInput {
                input_type,
                min,
                max,
                readonly,
                ..
            } => {
                assert_eq!(input_type.as_deref(), Some("number"));
                assert_eq!(min.map(|b| b.to_string()).as_deref(), Some("1"));
                assert_eq!(max, Some(Bound::Text("12".to_string())));
                assert!(readonly);
            }
            other => panic!("unexpected kind {:?}", other),
        }
    }

    #[test]
    fn test_placeholder_only_touches_kinds_with_one() {
        let config = FieldConfig::checkbox("accept").placeholder("ignored");
        assert!(matches!(config.kind, FieldKind::Checkbox { description: None }));

        let config = FieldConfig::textarea("description").placeholder("Escribe...");
        assert!(matches!(
            config.kind,
            FieldKind::MultilineInput { placeholder: Some(ref p) } if p == "Escribe..."
        ));
    }
}
