//! Form-table controller: wires form and row events to the student API.

pub mod events;

use shared::domain::{Semester, StudentId};
use tracing::{debug, error, info, warn};

use crate::{
    error::ClientError,
    form::{FormCapabilities, FormState, StudentRow, TrackedField},
    validation::validate,
    StudentApi,
};

use self::events::{ActionError, FormEvent};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this student?";

/// Page surface the controller renders to.
pub trait FormView {
    /// Replaces the whole table body.
    fn render_table(&mut self, rows: &[StudentRow]);
    fn render_form(&mut self, form: &FormState);
    fn alert(&mut self, message: &str);
    fn confirm(&mut self, message: &str) -> bool;
}

pub struct FormTableController<A, V> {
    api: A,
    view: V,
    capabilities: FormCapabilities,
    form: FormState,
    rows: Vec<StudentRow>,
}

impl<A: StudentApi, V: FormView> FormTableController<A, V> {
    pub fn new(api: A, view: V, capabilities: FormCapabilities) -> Self {
        Self {
            api,
            view,
            capabilities,
            form: FormState::default(),
            rows: Vec::new(),
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn rows(&self) -> &[StudentRow] {
        &self.rows
    }

    pub fn capabilities(&self) -> FormCapabilities {
        self.capabilities
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub async fn dispatch(&mut self, event: FormEvent) -> Result<(), ActionError> {
        debug!(event = event.name(), "dispatching form event");
        match event {
            FormEvent::Load => {
                self.load().await;
                Ok(())
            }
            FormEvent::FieldChanged { field, value } => {
                self.set_field(field, value);
                Ok(())
            }
            FormEvent::SemesterChanged(semester) => {
                self.change_semester(semester);
                Ok(())
            }
            FormEvent::CoursesSelected(courses) => {
                self.select_courses(&courses);
                Ok(())
            }
            FormEvent::Submit => self.submit().await,
            FormEvent::Edit(id) => self.edit(&id).await,
            FormEvent::Delete(id) => self.delete(&id).await,
            FormEvent::Cancel => {
                self.cancel();
                Ok(())
            }
        }
    }

    pub async fn load(&mut self) {
        self.form.reset();
        self.view.render_form(&self.form);
        self.refresh_list().await;
    }

    /// Re-renders the table from a fresh fetch. Failures only log; the
    /// previous rows stay on screen.
    pub async fn refresh_list(&mut self) {
        match self.api.list().await {
            Ok(students) => {
                self.rows = students.iter().map(StudentRow::from).collect();
                self.view.render_table(&self.rows);
            }
            Err(err) => error!("failed to fetch students: {err}"),
        }
    }

    pub fn set_field(&mut self, field: TrackedField, value: impl Into<String>) {
        self.form.set_field(field, value);
        self.view.render_form(&self.form);
    }

    pub fn change_semester(&mut self, semester: Option<Semester>) {
        if !self.capabilities.semester_select {
            warn!("semester change ignored: form has no semester selector");
            return;
        }
        self.form.semester = semester;
        if self.capabilities.has_course_select() {
            self.form.courses.populate(semester, &[]);
        }
        self.view.render_form(&self.form);
    }

    pub fn select_courses(&mut self, courses: &[String]) {
        if !self.capabilities.has_course_select() {
            warn!("course selection ignored: form has no course selector");
            return;
        }
        if !self.form.courses.is_enabled() {
            warn!("course selection ignored: course selector is disabled");
            return;
        }
        for unknown in self.form.courses.select_only(courses) {
            warn!(course = %unknown, "course is not offered; ignoring");
        }
        self.view.render_form(&self.form);
    }

    pub async fn submit(&mut self) -> Result<(), ActionError> {
        if let Err(err) = validate(&self.form, &self.capabilities) {
            self.view.alert(&err.to_string());
            return Err(err.into());
        }

        let payload = self.form.payload(&self.capabilities);
        debug!(?payload, "sending student payload");

        let result = match self.form.mode.editing_id() {
            None => self.api.create(&payload).await,
            Some(id) => self.api.update(id, &payload).await,
        };

        match result {
            Ok(()) => {
                info!(mode = ?self.form.mode, "student saved");
                self.form.reset();
                self.view.render_form(&self.form);
                self.refresh_list().await;
                Ok(())
            }
            Err(err) => {
                self.report_failure("Server error", &err);
                Err(err.into())
            }
        }
    }

    pub async fn edit(&mut self, id: &StudentId) -> Result<(), ActionError> {
        let students = match self.api.list().await {
            Ok(students) => students,
            Err(err) => {
                self.report_failure("Server error", &err);
                return Err(err.into());
            }
        };

        let Some(student) = students.iter().find(|student| &student.id == id) else {
            warn!(student_id = %id, "student to edit is no longer listed");
            return Err(ActionError::NotFound(id.clone()));
        };

        self.form.prefill(student, &self.capabilities);
        info!(student_id = %id, "editing student");
        self.view.render_form(&self.form);
        Ok(())
    }

    pub async fn delete(&mut self, id: &StudentId) -> Result<(), ActionError> {
        if !self.view.confirm(DELETE_PROMPT) {
            debug!(student_id = %id, "delete declined");
            return Ok(());
        }

        match self.api.delete(id).await {
            Ok(()) => {
                info!(student_id = %id, "student deleted");
                self.refresh_list().await;
                Ok(())
            }
            Err(err) => {
                self.report_failure("Delete failed", &err);
                Err(err.into())
            }
        }
    }

    pub fn cancel(&mut self) {
        self.form.reset();
        self.view.render_form(&self.form);
    }

    fn report_failure(&mut self, status_prefix: &str, err: &ClientError) {
        let message = match err.status_body() {
            Some(body) => format!("{status_prefix}: {body}"),
            None => format!("Request failed: {err}"),
        };
        error!("{message}");
        self.view.alert(&message);
    }
}

#[cfg(test)]
#[path = "../tests/controller_tests.rs"]
mod tests;
