// File: src/error.rs
// Purpose: Field-scoped validation errors

use serde::Serialize;

/// Path used for errors that do not belong to a single field
pub const GENERAL_PATH: &str = "_general";

/// One failed constraint, attached to the field it should be shown next to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

/// Ordered list of field errors produced by a schema.
///
/// Order is declaration order of the fields, followed by any cross-field
/// errors in the order their rules ran.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(transparent)]
#[error("invalid form input ({} error(s))", .0.len())]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// A single error on one path
    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(path, message);
        errors
    }

    pub fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError {
            path: path.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// First message recorded for a field
    pub fn first(&self, path: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.path == path)
            .map(|e| e.message.as_str())
    }

    /// All messages recorded for a field, in order
    pub fn for_field<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(move |e| e.path == path)
            .map(|e| e.message.as_str())
    }

    /// Check if a field has an error
    pub fn has_error(&self, path: &str) -> bool {
        self.0.iter().any(|e| e.path == path)
    }

    /// Paths in error order, without repeats
    pub fn paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = Vec::new();
        for error in &self.0 {
            if !paths.contains(&error.path.as_str()) {
                paths.push(&error.path);
            }
        }
        paths
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<FieldError> for (String, String) {
    fn from(error: FieldError) -> Self {
        (error.path, error.message)
    }
}
