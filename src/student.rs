use serde::{Deserialize, Serialize};

/// A stored student record. `id` is assigned by the database and never reused.
#[derive(sqlx::FromRow, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    pub full_name: String,
    pub registration_number: String,
    pub course: String,
    pub year_of_study: i64,
}

/// Raw form input for create and edit, before validation.
///
/// `year_of_study` is `None` when the field was left empty or did not parse;
/// validation reports that as a missing value.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentForm {
    pub full_name: String,
    pub registration_number: String,
    pub course: String,
    pub year_of_study: Option<i64>,
}

impl StudentForm {
    pub fn new(
        full_name: impl Into<String>,
        registration_number: impl Into<String>,
        course: impl Into<String>,
        year_of_study: Option<i64>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            registration_number: registration_number.into(),
            course: course.into(),
            year_of_study,
        }
    }
}

impl From<Student> for StudentForm {
    /// Pre-fills the edit form from a stored record.
    fn from(student: Student) -> Self {
        Self {
            full_name: student.full_name,
            registration_number: student.registration_number,
            course: student.course,
            year_of_study: Some(student.year_of_study),
        }
    }
}
