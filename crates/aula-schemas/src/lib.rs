// aula-schemas - declarative validation for the school-management forms
// Each schema is an ordered list of field rules plus optional cross-field rules.

pub mod error;
pub mod field;
pub mod forms;
pub mod input;
pub mod registry;
pub mod schema;
pub mod schemas;
pub mod validators;

pub use error::{FieldError, ValidationErrors, GENERAL_PATH};
pub use field::{Check, Field, FieldType, Presence};
pub use schema::{is_blank, CrossFieldRule, Schema, ValueMap};

// Re-export the schema builders so hosts can compose their own variants
pub use schemas::*;
