// aula-fields - form controls for the school-management app
// One dispatcher renders every field kind as Maud markup bound to a FormState.

pub mod change;
pub mod config;
pub mod datetime;
pub mod kind;
pub mod phone;
pub mod renderer;
pub mod state;

pub use change::{ChangeError, ChangePayload};
pub use config::FieldsConfig;
pub use kind::{Bound, FieldConfig, FieldKind, MultiSelectOption, MultiSelectVariant, RenderFn, SelectItem};
pub use renderer::FieldRenderer;
pub use state::{ChangeTarget, FieldBinding, FormState};

// Re-export Maud for custom render callbacks
pub use maud::{html, Markup, PreEscaped};
