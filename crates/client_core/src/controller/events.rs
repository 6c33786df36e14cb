//! User events fed to the form-table controller and the errors they end in.

use shared::domain::{Semester, StudentId};
use thiserror::Error;

use crate::{error::ClientError, form::TrackedField, validation::ValidationError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Load,
    FieldChanged { field: TrackedField, value: String },
    SemesterChanged(Option<Semester>),
    CoursesSelected(Vec<String>),
    Submit,
    Edit(StudentId),
    Delete(StudentId),
    Cancel,
}

impl FormEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::FieldChanged { .. } => "field_changed",
            Self::SemesterChanged(_) => "semester_changed",
            Self::CoursesSelected(_) => "courses_selected",
            Self::Submit => "submit",
            Self::Edit(_) => "edit",
            Self::Delete(_) => "delete",
            Self::Cancel => "cancel",
        }
    }
}

/// Why a user action stopped. The user has already been told.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("no student with id {0}")]
    NotFound(StudentId),
}
