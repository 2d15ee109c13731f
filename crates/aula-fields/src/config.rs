// File: src/config.rs
// Purpose: Widget defaults loaded from aula.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::kind::MultiSelectVariant;

/// Renderer configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FieldsConfig {
    #[serde(default)]
    pub phone: PhoneConfig,

    #[serde(default)]
    pub date_picker: DatePickerConfig,

    #[serde(default)]
    pub time_picker: TimePickerConfig,

    #[serde(default)]
    pub multi_select: MultiSelectConfig,
}

/// The single country phone inputs accept
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhoneConfig {
    #[serde(default = "default_country")]
    pub country: String,

    #[serde(default = "default_calling_code")]
    pub calling_code: String,

    /// Digits in a national number, without the calling code
    #[serde(default = "default_national_length")]
    pub national_length: usize,

    /// Accepted area codes; empty accepts any
    #[serde(default = "default_area_codes")]
    pub area_codes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatePickerConfig {
    #[serde(default = "default_date_placeholder")]
    pub placeholder: String,

    /// chrono format pattern; the long Spanish date when unset
    #[serde(default)]
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimePickerConfig {
    /// Minutes between selectable slots
    #[serde(default = "default_interval")]
    pub interval: u32,

    #[serde(default = "default_caption")]
    pub caption: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiSelectConfig {
    /// Selected badges shown before the rest collapse into "+ N más"
    #[serde(default = "default_max_count")]
    pub max_count: usize,

    #[serde(default = "default_multi_placeholder")]
    pub placeholder: String,

    #[serde(default)]
    pub variant: MultiSelectVariant,
}

// Default values
fn default_country() -> String {
    "DO".to_string()
}

fn default_calling_code() -> String {
    "1".to_string()
}

fn default_national_length() -> usize {
    10
}

fn default_area_codes() -> Vec<String> {
    vec!["809".to_string(), "829".to_string(), "849".to_string()]
}

fn default_date_placeholder() -> String {
    "Selecciona una fecha".to_string()
}

fn default_interval() -> u32 {
    45
}

fn default_caption() -> String {
    "Time".to_string()
}

fn default_max_count() -> usize {
    3
}

fn default_multi_placeholder() -> String {
    "Selecciona opciones".to_string()
}

impl Default for PhoneConfig {
    fn default() -> Self {
        Self {
            country: default_country(),
            calling_code: default_calling_code(),
            national_length: default_national_length(),
            area_codes: default_area_codes(),
        }
    }
}

impl Default for DatePickerConfig {
    fn default() -> Self {
        Self {
            placeholder: default_date_placeholder(),
            format: None,
        }
    }
}

impl Default for TimePickerConfig {
    fn default() -> Self {
        Self {
            interval: default_interval(),
            caption: default_caption(),
        }
    }
}

impl Default for MultiSelectConfig {
    fn default() -> Self {
        Self {
            max_count: default_max_count(),
            placeholder: default_multi_placeholder(),
            variant: MultiSelectVariant::default(),
        }
    }
}

impl FieldsConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FieldsConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./aula.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("aula.toml")
    }
}
