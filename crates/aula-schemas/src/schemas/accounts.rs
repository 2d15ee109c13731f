// File: src/schemas/accounts.rs
// Purpose: Sign-in and parent/teacher account schemas

use crate::error::ValidationErrors;
use crate::field::{Field, DEFAULT_REQUIRED};
use crate::schema::{is_blank, Schema, ValueMap};

pub const PASSWORD_REQUIRED: &str = "La contraseña es requerida";
pub const PASSWORD_MIN_LENGTH: &str = "La contraseña debe de tener 8 caracteres como minimo";
pub const PARENT_REQUIRED: &str = "Se requiere un padre o una madre";

pub fn sign_in_schema() -> Schema {
    Schema::new("sign-in")
        .field(Field::text("email").non_empty("El usuario es requerido"))
        .field(
            Field::text("password")
                .non_empty(PASSWORD_REQUIRED)
                .min_len(8, PASSWORD_MIN_LENGTH),
        )
}

/// Edit forms leave the password unchanged when it is missing or `""`
fn optional_password() -> Field {
    Field::text("password")
        .optional()
        .or_empty()
        .min_len(8, PASSWORD_MIN_LENGTH)
        .empty_to_null()
}

/// Create forms must set a password
fn required_password() -> Field {
    Field::text("password")
        .required(PASSWORD_REQUIRED)
        .min_len(8, PASSWORD_MIN_LENGTH)
        .empty_to_null()
}

/// Optional text that comes back as `null` when left blank
fn blank_as_null(name: &'static str) -> Field {
    Field::text(name).nullable().empty_to_null()
}

pub fn parent_edit_schema() -> Schema {
    Schema::new("parent-edit")
        .field(Field::text("fatherName").trim().nullable())
        .field(blank_as_null("fatherLastname").trim())
        .field(Field::optional_email("fatherEmail"))
        .field(blank_as_null("fatherPhone"))
        .field(Field::text("motherName").optional().empty_to_null())
        .field(blank_as_null("motherLastname"))
        .field(Field::optional_email("motherEmail"))
        .field(blank_as_null("motherPhone"))
        .field(
            Field::text("username")
                .required("Usuario es requerido")
                .min_len(4, "El usuario debe de tener 4 caracteres como minimo")
                .empty_to_null(),
        )
        .field(optional_password())
        .refine(require_a_parent)
        .refine(require_father_contact)
        .refine(require_mother_contact)
}

pub fn parent_create_schema() -> Schema {
    parent_edit_schema()
        .named("parent-create")
        .with_field(required_password())
}

fn require_a_parent(values: &ValueMap, errors: &mut ValidationErrors) {
    if is_blank(values.get("fatherName")) && is_blank(values.get("motherName")) {
        errors.push("fatherName", PARENT_REQUIRED);
    }
}

fn require_father_contact(values: &ValueMap, errors: &mut ValidationErrors) {
    require_contact(
        values,
        errors,
        "fatherName",
        &["fatherLastname", "fatherEmail", "fatherPhone"],
    );
}

fn require_mother_contact(values: &ValueMap, errors: &mut ValidationErrors) {
    require_contact(
        values,
        errors,
        "motherName",
        &["motherLastname", "motherEmail", "motherPhone"],
    );
}

/// A named parent needs every contact attribute; one error per gap
fn require_contact(
    values: &ValueMap,
    errors: &mut ValidationErrors,
    name: &str,
    contact: &[&'static str],
) {
    if is_blank(values.get(name)) {
        return;
    }
    for field in contact {
        if is_blank(values.get(*field)) {
            errors.push(*field, DEFAULT_REQUIRED);
        }
    }
}

pub fn teacher_edit_schema() -> Schema {
    Schema::new("teacher-edit")
        .field(Field::text("name").non_empty("El nombre es requerido."))
        .field(Field::text("lastname").non_empty("El apellido es requerido."))
        .field(Field::text("phone").non_empty("El numero de celular es requerido."))
        .field(
            Field::text("email")
                .non_empty("El correo es requerido.")
                .email(crate::field::INVALID_EMAIL),
        )
        .field(Field::text("username").non_empty("El nombre de usuario es requerido."))
        .field(Field::date("dob"))
        .field(Field::text("grade").optional())
        .field(Field::text_list("knownSubjects").optional())
        .field(optional_password())
}

pub fn teacher_create_schema() -> Schema {
    teacher_edit_schema()
        .named("teacher-create")
        .with_field(required_password())
}
