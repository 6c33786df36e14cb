use serde::{Deserialize, Serialize};

use crate::domain::{CourseValue, Semester};

/// Body of `POST /students` and `PUT /students/{id}`.
///
/// `course` carries the free-text course when the form has no multi-select,
/// otherwise the selected courses as an array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentPayload {
    pub name: String,
    pub roll_no: String,
    pub email: String,
    pub course: CourseValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semester: Option<Semester>,
}
