use std::path::Path;

use anyhow::{Context, Result};
use aula_fields::{ChangeTarget, FieldConfig, FieldRenderer, FieldsConfig, FormState};
use tracing::debug;

use crate::input::{lookup_schema, read_json};

pub struct RenderArgs<'a> {
    pub fields: &'a Path,
    pub state: Option<&'a Path>,
    pub schema: Option<&'a str>,
    pub change_url: Option<&'a str>,
    pub config: Option<&'a Path>,
}

/// Print the rendered fields. Validation errors, when a schema is given,
/// are shown in the markup rather than failing the command.
pub fn execute(args: RenderArgs<'_>) -> Result<bool> {
    let config = match args.config {
        Some(path) => FieldsConfig::load(path)?,
        None => FieldsConfig::load_default()?,
    };
    let fields: Vec<FieldConfig> = serde_json::from_value(read_json(args.fields)?)
        .with_context(|| format!("Invalid field configs in {:?}", args.fields))?;

    let mut state = match args.state {
        Some(path) => FormState::from_json(read_json(path)?),
        None => FormState::new(),
    };
    if let Some(url) = args.change_url {
        state = state.with_change_target(ChangeTarget::new(url));
    }
    if let Some(name) = args.schema {
        if let Err(errors) = lookup_schema(name)?.validate(state.values()) {
            debug!(schema = name, count = errors.len(), "showing validation errors");
            state.set_errors(errors);
        }
    }

    let renderer = FieldRenderer::new(config);
    println!("{}", renderer.form_fields(&state, &fields).into_string());

    Ok(true)
}
