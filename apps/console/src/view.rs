//! Terminal rendering of the student table and form.

use std::io::{self, BufRead, Write};

use client_core::{CourseSelector, FormState, FormView, StudentRow};

const HEADERS: [&str; 5] = ["ID", "Name", "Roll No", "Email", "Courses"];

pub struct TerminalView<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> TerminalView<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Prints `prompt` and reads one line. `None` on end of input.
    pub fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn print(&mut self, text: &str) {
        if let Err(err) = writeln!(self.out, "{text}") {
            tracing::warn!("failed to write to terminal: {err}");
        }
    }

    #[cfg(test)]
    fn output(&self) -> &W {
        &self.out
    }
}

fn table_text(rows: &[StudentRow]) -> String {
    if rows.is_empty() {
        return "(no students)".to_string();
    }

    let cells: Vec<[&str; 5]> = rows
        .iter()
        .map(|row| {
            [
                row.id.as_str(),
                row.name.as_str(),
                row.roll_no.as_str(),
                row.email.as_str(),
                row.courses.as_str(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |values: &[&str; 5]| {
        values
            .iter()
            .zip(widths)
            .map(|(value, width)| format!("{value:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![format_line(&HEADERS)];
    lines.extend(cells.iter().map(format_line));
    lines.push("actions: edit <id> | delete <id>".to_string());
    lines.join("\n")
}

fn course_selector_text(selector: &CourseSelector) -> String {
    if !selector.is_enabled() {
        return format!("[{}] (disabled)", CourseSelector::PLACEHOLDER);
    }
    selector
        .options()
        .iter()
        .map(|option| {
            let mark = if option.selected { 'x' } else { ' ' };
            format!("[{mark}] {}", option.name)
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn form_text(form: &FormState) -> String {
    let mut lines = vec![
        format!("name:     {}", form.name),
        format!("roll_no:  {}", form.roll_no),
        format!("email:    {}", form.email),
        format!("course:   {}", form.course_text),
        format!(
            "semester: {}",
            form.semester
                .map(|semester| semester.to_string())
                .unwrap_or_else(|| "-".to_string())
        ),
        format!("courses:  {}", course_selector_text(&form.courses)),
    ];
    let mut actions = format!("[{}]", form.mode.submit_label());
    if form.mode.cancel_visible() {
        actions.push_str(" [Cancel]");
    }
    lines.push(actions);
    lines.join("\n")
}

impl<R: BufRead, W: Write> FormView for TerminalView<R, W> {
    fn render_table(&mut self, rows: &[StudentRow]) {
        self.print(&table_text(rows));
    }

    fn render_form(&mut self, form: &FormState) {
        self.print(&form_text(form));
    }

    fn alert(&mut self, message: &str) {
        self.print(&format!("! {message}"));
    }

    fn confirm(&mut self, message: &str) -> bool {
        match self.prompt_line(&format!("{message} [y/N] ")) {
            Ok(Some(answer)) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Ok(None) => false,
            Err(err) => {
                tracing::warn!("failed to read confirmation: {err}");
                false
            }
        }
    }
}
