//! Line commands typed at the console prompt.

use client_core::{FormEvent, TrackedField};
use shared::domain::{Semester, StudentId};

pub const HELP: &str = "\
commands:
  list                         re-fetch and show the student table
  show                         show the form
  set <field> <value>          field is name, roll_no, email or course
  semester <1-8|none>          choose a semester (refreshes the course list)
  courses <a, b, ...>          select courses from the offered list
  submit                       add or update the student
  edit <id>                    load a student into the form
  delete <id>                  delete a student (asks for confirmation)
  cancel                       discard the edit and return to add mode
  help                         this text
  quit                         exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Form(FormEvent),
    Refresh,
    Show,
    Help,
    Quit,
}

/// `Ok(None)` for a blank line.
pub fn parse_command(line: &str) -> Result<Option<ConsoleCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "list" => ConsoleCommand::Refresh,
        "show" => ConsoleCommand::Show,
        "help" | "?" => ConsoleCommand::Help,
        "quit" | "exit" => ConsoleCommand::Quit,
        "submit" => ConsoleCommand::Form(FormEvent::Submit),
        "cancel" => ConsoleCommand::Form(FormEvent::Cancel),
        "set" => {
            let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            if field.is_empty() {
                return Err("usage: set <field> <value>".to_string());
            }
            ConsoleCommand::Form(FormEvent::FieldChanged {
                field: field.parse::<TrackedField>()?,
                value: value.trim().to_string(),
            })
        }
        "semester" => {
            let semester = match rest {
                "" | "none" | "-" => None,
                raw => Some(raw.parse::<Semester>().map_err(|err| err.to_string())?),
            };
            ConsoleCommand::Form(FormEvent::SemesterChanged(semester))
        }
        "courses" => ConsoleCommand::Form(FormEvent::CoursesSelected(
            rest.split(',')
                .map(str::trim)
                .filter(|course| !course.is_empty())
                .map(str::to_string)
                .collect(),
        )),
        "edit" => ConsoleCommand::Form(FormEvent::Edit(required_id(rest, "edit")?)),
        "delete" => ConsoleCommand::Form(FormEvent::Delete(required_id(rest, "delete")?)),
        other => return Err(format!("unknown command '{other}'; type 'help'")),
    };

    Ok(Some(command))
}

fn required_id(raw: &str, verb: &str) -> Result<StudentId, String> {
    if raw.is_empty() {
        Err(format!("usage: {verb} <id>"))
    } else {
        Ok(StudentId::new(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(line: &str) -> ConsoleCommand {
        parse_command(line).expect("parse").expect("command")
    }

    #[test]
    fn set_keeps_spaces_in_value() {
        assert_eq!(
            parsed("set name  Ada  Lovelace"),
            ConsoleCommand::Form(FormEvent::FieldChanged {
                field: TrackedField::Name,
                value: "Ada  Lovelace".to_string(),
            })
        );
        assert_eq!(
            parsed("set email"),
            ConsoleCommand::Form(FormEvent::FieldChanged {
                field: TrackedField::Email,
                value: String::new(),
            })
        );
    }

    #[test]
    fn courses_split_on_commas() {
        assert_eq!(
            parsed("courses Data Structures, Linear Algebra ,"),
            ConsoleCommand::Form(FormEvent::CoursesSelected(vec![
                "Data Structures".to_string(),
                "Linear Algebra".to_string(),
            ]))
        );
    }

    #[test]
    fn semester_accepts_number_or_none() {
        assert_eq!(
            parsed("semester 3"),
            ConsoleCommand::Form(FormEvent::SemesterChanged(Some(
                Semester::new(3).expect("semester")
            )))
        );
        assert_eq!(
            parsed("semester none"),
            ConsoleCommand::Form(FormEvent::SemesterChanged(None))
        );
        assert!(parse_command("semester 9").is_err());
    }

    #[test]
    fn row_actions_need_an_id() {
        assert_eq!(
            parsed("delete 64f1c2"),
            ConsoleCommand::Form(FormEvent::Delete(StudentId::new("64f1c2")))
        );
        assert_eq!(parse_command("edit"), Err("usage: edit <id>".to_string()));
    }

    #[test]
    fn blank_and_unknown_lines() {
        assert_eq!(parse_command("   "), Ok(None));
        assert_eq!(parsed("LIST"), ConsoleCommand::Refresh);
        assert!(parse_command("frobnicate").is_err());
        assert!(parse_command("set semester 3").is_err());
    }
}
