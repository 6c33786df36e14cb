use std::collections::HashSet;

use thiserror::Error;

use crate::form::{FormCapabilities, FormState};

pub const MAX_EMAIL_LEN: usize = 40;

/// Rejection reasons; `Display` is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name should contain only letters and spaces")]
    InvalidName,
    #[error("Roll number should contain only digits")]
    InvalidRollNo,
    #[error("Email should not exceed 40 characters")]
    EmailTooLong,
    #[error("Please select a semester")]
    MissingSemester,
    #[error("Please select at least one course")]
    MissingCourse,
    #[error("You selected the same course more than once.")]
    DuplicateCourse,
}

/// Checks the rules in order and reports the first one that fails.
pub fn validate(form: &FormState, capabilities: &FormCapabilities) -> Result<(), ValidationError> {
    let name = form.name.trim();
    if name.is_empty()
        || !name
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
    {
        return Err(ValidationError::InvalidName);
    }

    let roll_no = form.roll_no.trim();
    if roll_no.is_empty() || !roll_no.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidRollNo);
    }

    // Measured in UTF-16 code units, like a browser input's length.
    if form.email.trim().encode_utf16().count() > MAX_EMAIL_LEN {
        return Err(ValidationError::EmailTooLong);
    }

    if capabilities.semester_select && form.semester.is_none() {
        return Err(ValidationError::MissingSemester);
    }

    if capabilities.has_course_select() {
        let selected = form.courses.selected();
        if selected.is_empty() {
            return Err(ValidationError::MissingCourse);
        }
        let unique: HashSet<String> = selected.iter().map(|c| c.to_lowercase()).collect();
        if unique.len() != selected.len() {
            return Err(ValidationError::DuplicateCourse);
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod tests;
