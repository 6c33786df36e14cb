use super::*;
use crate::form::CourseControl;
use shared::domain::Semester;

fn valid_form() -> FormState {
    let mut form = FormState {
        name: "Ada Lovelace".to_string(),
        roll_no: "1815".to_string(),
        email: "ada@example.com".to_string(),
        semester: Some(Semester::new(3).expect("semester")),
        ..FormState::default()
    };
    form.courses.populate(form.semester, &["Data Structures".to_string()]);
    form
}

#[test]
fn accepts_well_formed_form() {
    assert_eq!(validate(&valid_form(), &FormCapabilities::default()), Ok(()));
    assert_eq!(validate(&valid_form(), &FormCapabilities::legacy()), Ok(()));
}

#[test]
fn names_with_digits_or_punctuation_are_rejected() {
    for name in ["R2D2", "O'Brien", "Ada-Lovelace", "Ada.", "Jo3", "", "   "] {
        let mut form = valid_form();
        form.name = name.to_string();
        let err = validate(&form, &FormCapabilities::default()).expect_err(name);
        assert_eq!(err, ValidationError::InvalidName, "name {name:?}");
        assert_eq!(err.to_string(), "Name should contain only letters and spaces");
    }
}

#[test]
fn surrounding_whitespace_is_ignored_for_name_and_roll_no() {
    let mut form = valid_form();
    form.name = "  Grace  Hopper ".to_string();
    form.roll_no = " 42 ".to_string();
    assert_eq!(validate(&form, &FormCapabilities::default()), Ok(()));
}

#[test]
fn roll_numbers_with_non_digits_are_rejected() {
    for roll_no in ["12a", "-5", "1.0", "4 2", "", "١٢"] {
        let mut form = valid_form();
        form.roll_no = roll_no.to_string();
        assert_eq!(
            validate(&form, &FormCapabilities::default()),
            Err(ValidationError::InvalidRollNo),
            "roll_no {roll_no:?}"
        );
    }
    assert_eq!(
        ValidationError::InvalidRollNo.to_string(),
        "Roll number should contain only digits"
    );
}

#[test]
fn emails_longer_than_forty_characters_are_rejected_regardless_of_content() {
    let mut form = valid_form();
    form.email = "a".repeat(MAX_EMAIL_LEN);
    assert_eq!(validate(&form, &FormCapabilities::default()), Ok(()));

    for email in ["a".repeat(41), format!("{}@example.com", "x".repeat(30)), "!".repeat(64)] {
        form.email = email;
        assert_eq!(
            validate(&form, &FormCapabilities::default()),
            Err(ValidationError::EmailTooLong)
        );
    }
}

#[test]
fn astral_characters_count_twice_toward_email_length() {
    let mut form = valid_form();
    form.email = "😀".repeat(MAX_EMAIL_LEN / 2);
    assert_eq!(validate(&form, &FormCapabilities::default()), Ok(()));

    form.email = "😀".repeat(MAX_EMAIL_LEN / 2 + 1);
    assert_eq!(
        validate(&form, &FormCapabilities::default()),
        Err(ValidationError::EmailTooLong)
    );

    form.email = "é".repeat(MAX_EMAIL_LEN);
    assert_eq!(validate(&form, &FormCapabilities::default()), Ok(()));
}

#[test]
fn semester_is_required_only_when_selector_exists() {
    let mut form = valid_form();
    form.semester = None;

    assert_eq!(
        validate(&form, &FormCapabilities::default()),
        Err(ValidationError::MissingSemester)
    );

    let no_semester = FormCapabilities {
        semester_select: false,
        course_control: CourseControl::MultiSelect,
    };
    assert_eq!(validate(&form, &no_semester), Ok(()));
}

#[test]
fn at_least_one_course_must_be_selected() {
    let mut form = valid_form();
    form.courses.select_only(&[]);

    let err = validate(&form, &FormCapabilities::default()).expect_err("no course");
    assert_eq!(err, ValidationError::MissingCourse);
    assert_eq!(err.to_string(), "Please select at least one course");
    assert_eq!(validate(&form, &FormCapabilities::legacy()), Ok(()));
}

#[test]
fn same_course_twice_in_any_case_is_rejected() {
    let capabilities = FormCapabilities {
        semester_select: false,
        course_control: CourseControl::MultiSelect,
    };
    let mut form = valid_form();
    form.courses
        .populate_ungated(&["AI".to_string(), "ai".to_string()]);

    let err = validate(&form, &capabilities).expect_err("duplicate");
    assert_eq!(err, ValidationError::DuplicateCourse);
    assert_eq!(err.to_string(), "You selected the same course more than once.");
}

#[test]
fn first_failing_rule_wins() {
    let form = FormState {
        name: "R2D2".to_string(),
        roll_no: "abc".to_string(),
        email: "e".repeat(80),
        ..FormState::default()
    };
    assert_eq!(
        validate(&form, &FormCapabilities::default()),
        Err(ValidationError::InvalidName)
    );
}
