//! Form model: mode, tracked fields, optional controls and the course cascade.

use std::{fmt, str::FromStr};

use shared::{
    catalog::courses_for,
    domain::{CourseValue, Semester, Student, StudentId},
    protocol::StudentPayload,
};

pub const ADD_LABEL: &str = "Add Student";
pub const UPDATE_LABEL: &str = "Update Student";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit(StudentId),
}

impl FormMode {
    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Create => ADD_LABEL,
            Self::Edit(_) => UPDATE_LABEL,
        }
    }

    pub fn cancel_visible(&self) -> bool {
        matches!(self, Self::Edit(_))
    }

    pub fn editing_id(&self) -> Option<&StudentId> {
        match self {
            Self::Create => None,
            Self::Edit(id) => Some(id),
        }
    }
}

/// Inputs whose values always go into the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackedField {
    Name,
    RollNo,
    Email,
    Course,
}

impl TrackedField {
    pub const ALL: [TrackedField; 4] = [Self::Name, Self::RollNo, Self::Email, Self::Course];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::RollNo => "roll_no",
            Self::Email => "email",
            Self::Course => "course",
        }
    }
}

impl fmt::Display for TrackedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrackedField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown field '{s}' (expected name, roll_no, email or course)"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CourseControl {
    /// Single free-text course input.
    Text,
    #[default]
    MultiSelect,
}

/// Which optional controls the page offers, fixed at start-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormCapabilities {
    pub semester_select: bool,
    pub course_control: CourseControl,
}

impl Default for FormCapabilities {
    fn default() -> Self {
        Self {
            semester_select: true,
            course_control: CourseControl::MultiSelect,
        }
    }
}

impl FormCapabilities {
    /// Plain form: no semester selector, free-text course.
    pub fn legacy() -> Self {
        Self {
            semester_select: false,
            course_control: CourseControl::Text,
        }
    }

    pub fn has_course_select(&self) -> bool {
        self.course_control == CourseControl::MultiSelect
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseOption {
    pub name: String,
    pub selected: bool,
}

/// Multi-select course control. Disabled selectors hold no options.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CourseSelector {
    options: Vec<CourseOption>,
    enabled: bool,
}

impl CourseSelector {
    pub const PLACEHOLDER: &'static str = "Select course";

    pub fn options(&self) -> &[CourseOption] {
        &self.options
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn clear(&mut self) {
        self.options.clear();
        self.enabled = false;
    }

    /// Offers the catalog of `semester`, keeping only `preselected` entries
    /// selected. No semester disables the selector.
    pub fn populate(&mut self, semester: Option<Semester>, preselected: &[String]) {
        let Some(semester) = semester else {
            self.clear();
            return;
        };

        self.options = courses_for(semester)
            .iter()
            .map(|course| CourseOption {
                name: (*course).to_string(),
                selected: preselected.iter().any(|pre| pre.as_str() == *course),
            })
            .collect();
        self.enabled = true;
    }

    /// Offers exactly `courses`, all selected, without consulting the catalog.
    pub fn populate_ungated(&mut self, courses: &[String]) {
        if courses.is_empty() {
            self.clear();
            return;
        }

        self.options = courses
            .iter()
            .map(|course| CourseOption {
                name: course.clone(),
                selected: true,
            })
            .collect();
        self.enabled = true;
    }

    /// Replaces the selection with `names`. Returns names that are not offered.
    pub fn select_only(&mut self, names: &[String]) -> Vec<String> {
        for option in &mut self.options {
            option.selected = names.contains(&option.name);
        }

        names
            .iter()
            .filter(|name| !self.options.iter().any(|option| &option.name == *name))
            .cloned()
            .collect()
    }

    /// Selected values, trimmed, blanks dropped.
    pub fn selected(&self) -> Vec<String> {
        self.options
            .iter()
            .filter(|option| option.selected)
            .map(|option| option.name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect()
    }
}

/// Transient copy of the record being created or edited.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub mode: FormMode,
    pub name: String,
    pub roll_no: String,
    pub email: String,
    pub course_text: String,
    pub semester: Option<Semester>,
    pub courses: CourseSelector,
}

impl FormState {
    pub fn field(&self, field: TrackedField) -> &str {
        match field {
            TrackedField::Name => &self.name,
            TrackedField::RollNo => &self.roll_no,
            TrackedField::Email => &self.email,
            TrackedField::Course => &self.course_text,
        }
    }

    pub fn set_field(&mut self, field: TrackedField, value: impl Into<String>) {
        let value = value.into();
        match field {
            TrackedField::Name => self.name = value,
            TrackedField::RollNo => self.roll_no = value,
            TrackedField::Email => self.email = value,
            TrackedField::Course => self.course_text = value,
        }
    }

    /// Back to create-mode defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn prefill(&mut self, student: &Student, capabilities: &FormCapabilities) {
        self.name = student.name.clone();
        self.roll_no = student.roll_no.clone();
        self.email = student.email.clone();
        self.course_text = student.course.display();

        let preselected = student.course.to_list();
        if capabilities.semester_select {
            self.semester = student.semester;
            if capabilities.has_course_select() {
                self.courses.populate(self.semester, &preselected);
            }
        } else if capabilities.has_course_select() {
            self.semester = None;
            self.courses.populate_ungated(&preselected);
        }

        self.mode = FormMode::Edit(student.id.clone());
    }

    pub fn payload(&self, capabilities: &FormCapabilities) -> StudentPayload {
        let course = if capabilities.has_course_select() {
            CourseValue::Many(self.courses.selected())
        } else {
            CourseValue::One(self.course_text.clone())
        };

        StudentPayload {
            name: self.name.clone(),
            roll_no: self.roll_no.clone(),
            email: self.email.clone(),
            course,
            semester: if capabilities.semester_select {
                self.semester
            } else {
                None
            },
        }
    }
}

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRow {
    pub id: StudentId,
    pub name: String,
    pub roll_no: String,
    pub email: String,
    pub courses: String,
}

impl From<&Student> for StudentRow {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id.clone(),
            name: student.name.clone(),
            roll_no: student.roll_no.clone(),
            email: student.email.clone(),
            courses: student.course.display(),
        }
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
