// File: src/registry.rs
// Purpose: Name-based lookup over the module-scope schemas

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::schema::Schema;
use crate::schemas::*;

/// Built once, never mutated afterwards
static REGISTRY: Lazy<BTreeMap<&'static str, Schema>> = Lazy::new(|| {
    [
        sign_in_schema(),
        grade_schema(),
        subject_schema(),
        parent_edit_schema(),
        parent_create_schema(),
        teacher_edit_schema(),
        teacher_create_schema(),
        config_schema(),
        course_schema(),
        add_student_schema(),
        attendance_schema(),
        calification_schema(),
        report_schema(),
        post_schema(),
        comment_schema(),
    ]
    .into_iter()
    .map(|schema| (schema.name(), schema))
    .collect()
});

/// Look up a schema by its registry name (e.g. `"parent-create"`)
pub fn get(name: &str) -> Option<&'static Schema> {
    REGISTRY.get(name)
}

/// Registered names, sorted
pub fn names() -> impl Iterator<Item = &'static str> {
    REGISTRY.keys().copied()
}

pub fn all() -> impl Iterator<Item = &'static Schema> {
    REGISTRY.values()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_schema_is_registered_once() {
        assert_eq!(names().count(), 15);
        for name in names() {
            assert_eq!(get(name).map(Schema::name), Some(name));
        }
    }

    #[test]
    fn test_unknown_name() {
        assert!(get("parent").is_none());
    }
}
