//! Submission validation
//!
//! Field-level checks on raw form input. A failed check is an expected outcome
//! and is reported as [`FormErrors`], never as an error type.

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::entities::{
    Field, FormErrors, FormVariant, NewQuestion, SubmissionInput, DEFAULT_PRIORITY,
};

pub const QUESTION_MIN_CHARS: usize = 10;
pub const QUESTION_MAX_CHARS: usize = 1000;
pub const NAME_MAX_CHARS: usize = 100;

/// Exactly one `@`, neither first nor last
fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^@]+@[^@]+$").expect("email pattern is valid"))
}

/// Whether `email` is a syntactically acceptable address
///
/// Only the `@` placement is checked, so `user@localhost` and `a@b` pass.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Check `input` against the constraints of `variant`
///
/// On success returns the data to persist. Name, category and priority are
/// only carried for the extended variant.
pub fn validate(input: &SubmissionInput, variant: FormVariant) -> Result<NewQuestion, FormErrors> {
    let mut errors = FormErrors::new();

    if is_blank(&input.email) {
        errors.add_field(Field::Email, "Email is required");
    } else if !is_valid_email(&input.email) {
        errors.add_field(Field::Email, "Invalid email address");
    }

    if is_blank(&input.question_text) {
        errors.add_field(Field::QuestionText, "Question is required");
    } else {
        let len = input.question_text.chars().count();
        if !(QUESTION_MIN_CHARS..=QUESTION_MAX_CHARS).contains(&len) {
            errors.add_field(
                Field::QuestionText,
                format!(
                    "Question must be between {} and {} characters",
                    QUESTION_MIN_CHARS, QUESTION_MAX_CHARS
                ),
            );
        }
    }

    if variant.is_extended() {
        if is_blank(&input.name) {
            errors.add_field(Field::Name, "Name is required");
        } else if input.name.chars().count() > NAME_MAX_CHARS {
            errors.add_field(
                Field::Name,
                format!("Name must be {} characters or fewer", NAME_MAX_CHARS),
            );
        }

        if is_blank(&input.category) {
            errors.add_field(Field::Category, "Please select a category");
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let extended = variant.is_extended();
    Ok(NewQuestion {
        email: input.email.clone(),
        question_text: input.question_text.clone(),
        name: extended.then(|| input.name.trim().to_string()),
        category: extended.then(|| input.category.trim().to_string()),
        priority: extended.then(|| effective_priority(&input.priority)),
    })
}

/// Submitted priority, or the default when left blank
pub fn effective_priority(priority: &str) -> String {
    let priority = priority.trim();
    if priority.is_empty() {
        DEFAULT_PRIORITY.to_string()
    } else {
        priority.to_string()
    }
}
