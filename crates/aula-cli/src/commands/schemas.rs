use anyhow::Result;
use aula_schemas::{registry, FieldType, Presence};
use colored::Colorize;

use crate::input::lookup_schema;

pub fn execute(name: Option<&str>) -> Result<bool> {
    match name {
        Some(name) => describe(name)?,
        None => {
            println!("{}", "Registered schemas".green().bold());
            println!();
            for schema in registry::all() {
                println!("  {:<16} {}", schema.name().cyan(), schema.field_names().join(", "));
            }
        }
    }

    Ok(true)
}

fn describe(name: &str) -> Result<()> {
    let schema = lookup_schema(name)?;

    println!("{} {}", "Schema".green().bold(), schema.name().cyan().bold());
    println!();
    for field in schema.fields() {
        let presence = match field.presence() {
            Presence::Required => "required",
            Presence::Optional => "optional",
            Presence::Nullable => "nullable",
        };
        println!(
            "  {:<18} {:<14} {}",
            field.name(),
            type_name(field.field_type()),
            presence.dimmed()
        );
    }
    if schema.has_cross_field_rules() {
        println!();
        println!("  {}", "+ cross-field rules".yellow());
    }

    Ok(())
}

fn type_name(field_type: FieldType) -> &'static str {
    match field_type {
        FieldType::Text => "text",
        FieldType::CoercedText => "coerced text",
        FieldType::Number => "number",
        FieldType::CoercedNumber => "coerced number",
        FieldType::Date => "date",
        FieldType::Time => "time",
        FieldType::TextList => "text list",
    }
}
