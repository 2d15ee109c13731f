// File: src/forms.rs
// Purpose: Typed views of normalized form values
//
// Use with `Schema::parse`, e.g. `parent_create_schema().parse::<ParentForm>(&raw)`.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeForm {
    pub grade: String,
    #[serde(default)]
    pub teacher: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectForm {
    pub subject: String,
}

/// Parent account; `password: None` on edit means "leave unchanged"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentForm {
    #[serde(default)]
    pub father_name: Option<String>,
    #[serde(default)]
    pub father_lastname: Option<String>,
    #[serde(default)]
    pub father_email: Option<String>,
    #[serde(default)]
    pub father_phone: Option<String>,
    #[serde(default)]
    pub mother_name: Option<String>,
    #[serde(default)]
    pub mother_lastname: Option<String>,
    #[serde(default)]
    pub mother_email: Option<String>,
    #[serde(default)]
    pub mother_phone: Option<String>,
    pub username: String,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherForm {
    pub name: String,
    pub lastname: String,
    pub phone: String,
    pub email: String,
    pub username: String,
    pub dob: NaiveDate,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub known_subjects: Option<Vec<String>>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolConfigForm {
    pub year: String,
    pub name: String,
    pub grade_max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseForm {
    pub teacher: String,
    pub subject: String,
    pub grade: String,
    pub day: String,
    pub time: NaiveTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentForm {
    pub name: String,
    pub lastname: String,
    pub phone: String,
    pub email: String,
    pub dob: NaiveDate,
    pub grade: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceForm {
    pub attendance_option: String,
}

/// One student's row on the calification sheet; blank cells are `None`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalificationForm {
    pub note1: Option<String>,
    pub note2: Option<String>,
    pub note3: Option<String>,
    pub note4: Option<String>,
    pub exam1: Option<String>,
    pub note5: Option<String>,
    pub note6: Option<String>,
    pub note7: Option<String>,
    pub note8: Option<String>,
    pub exam2: Option<String>,
    pub average1: Option<String>,
    pub average2: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportForm {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostForm {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentForm {
    pub comment: String,
}
