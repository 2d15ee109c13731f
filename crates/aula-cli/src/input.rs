use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value;

/// Read a file, or stdin when the path is `-`
pub fn read_text(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }

    fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))
}

pub fn read_json(path: &Path) -> Result<Value> {
    let text = read_text(path)?;
    serde_json::from_str(&text).with_context(|| format!("Invalid JSON in {:?}", path))
}

pub fn lookup_schema(name: &str) -> Result<&'static aula_schemas::Schema> {
    match aula_schemas::registry::get(name) {
        Some(schema) => Ok(schema),
        None => {
            let known: Vec<_> = aula_schemas::registry::names().collect();
            bail!("Unknown schema '{}' (known: {})", name, known.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lookup_known_schema() {
        let schema = lookup_schema("teacher-create").unwrap();
        assert_eq!(schema.name(), "teacher-create");
    }

    #[test]
    fn test_lookup_unknown_schema_lists_names() {
        let err = lookup_schema("students").unwrap_err().to_string();
        assert!(err.starts_with("Unknown schema 'students'"));
        assert!(err.contains("sign-in"));
        assert!(err.contains("calification"));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_text(Path::new("does-not-exist.json")).unwrap_err();
        assert!(err.to_string().contains("does-not-exist.json"));
    }
}
