// File: src/schemas/mod.rs
// Purpose: The school-management form schemas
//
// All messages are fixed Spanish strings shown next to the offending control.

mod academics;
mod accounts;
mod community;

pub use academics::{
    add_student_schema, attendance_schema, calification_schema, config_schema, course_schema,
    grade_schema, subject_schema, CALIFICATION_FIELDS,
};
pub use accounts::{
    parent_create_schema, parent_edit_schema, sign_in_schema, teacher_create_schema,
    teacher_edit_schema, PARENT_REQUIRED, PASSWORD_MIN_LENGTH, PASSWORD_REQUIRED,
};
pub use community::{comment_schema, post_schema, report_schema};
