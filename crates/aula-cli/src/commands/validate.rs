use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use tracing::debug;

use crate::input::{lookup_schema, read_json, read_text};

/// Print the normalized values, or the errors one per line.
/// Returns `false` when the submission is rejected.
pub fn execute(schema: &str, input: &Path, form: bool) -> Result<bool> {
    let schema = lookup_schema(schema)?;

    let result = if form {
        schema.validate_form(read_text(input)?.trim_end())
    } else {
        schema.validate_json(&read_json(input)?)
    };

    match result {
        Ok(values) => {
            debug!(schema = schema.name(), "submission accepted");
            println!("{}", serde_json::to_string_pretty(&values)?);
            Ok(true)
        }
        Err(errors) => {
            eprintln!(
                "{} {}",
                "✗".red().bold(),
                format!("{} rejected the submission:", schema.name()).red()
            );
            for error in &errors {
                eprintln!("  {}: {}", error.path.yellow(), error.message);
            }
            Ok(false)
        }
    }
}
