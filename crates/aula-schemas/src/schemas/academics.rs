// File: src/schemas/academics.rs
// Purpose: Grades, subjects, school year, courses, students, attendance and marks

use crate::field::Field;
use crate::schema::Schema;

/// Mark columns of the calification sheet, in sheet order
pub const CALIFICATION_FIELDS: [&str; 12] = [
    "note1", "note2", "note3", "note4", "exam1", "note5", "note6", "note7", "note8", "exam2",
    "average1", "average2",
];

pub fn grade_schema() -> Schema {
    Schema::new("grade")
        .field(
            Field::text("grade")
                .non_empty("El grado es requerido.")
                .min_len(2, "Minimo 2 caracteres."),
        )
        .field(Field::coerced_number("teacher").optional())
}

pub fn subject_schema() -> Schema {
    Schema::new("subject")
        .field(Field::text("subject").non_empty("El nombre de la materia es requerido."))
}

pub fn config_schema() -> Schema {
    Schema::new("config")
        .field(Field::text("year").non_empty("El año es requerido."))
        .field(Field::text("name").non_empty("El nombre es requerido."))
        .field(
            Field::number("gradeMax")
                .required("El máximo de grados es requerido.")
                .min(1.0, "El máximo de grados es requerido."),
        )
}

pub fn course_schema() -> Schema {
    Schema::new("course")
        .field(Field::text("teacher").required("El profesor es requerido."))
        .field(Field::text("subject").required("La materia es requerida."))
        .field(Field::text("grade").required("El grado es requerido."))
        .field(Field::text("day").required("El día es requerido."))
        .field(Field::time("time").required("La hora es requerido."))
}

pub fn add_student_schema() -> Schema {
    Schema::new("add-student")
        .field(Field::text("name").non_empty("El nombre es requerido."))
        .field(Field::text("lastname").non_empty("El apellido es requerido."))
        .field(Field::text("phone").non_empty("El numero de celular es requerido."))
        .field(
            Field::text("email")
                .required("El correo es requerido.")
                .email(crate::field::INVALID_EMAIL)
                .min_len(1, "El correo es requerido."),
        )
        .field(Field::date("dob"))
        .field(Field::text("grade"))
}

pub fn attendance_schema() -> Schema {
    Schema::new("attendance").field(Field::text("attendanceOption"))
}

fn calification(name: &'static str) -> Field {
    Field::coerced_text(name)
        .nullable()
        .max_len(100, "Máximo 100 caracteres.")
        .empty_to_null()
}

pub fn calification_schema() -> Schema {
    CALIFICATION_FIELDS
        .into_iter()
        .fold(Schema::new("calification"), |schema, name| {
            schema.field(calification(name))
        })
}
