//! Submission domain types
//!
//! Raw form input and the errors attached to it when a submission is rejected.
//! Nothing here is persisted.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Priority used when the visitor leaves the field blank
pub const DEFAULT_PRIORITY: &str = "Normal";

/// Categories offered by the extended form
pub const CATEGORIES: &[&str] = &["General", "Technical", "Account", "Billing", "Other"];

/// Priorities offered by the extended form
pub const PRIORITIES: &[&str] = &["Low", "Normal", "High"];

/// Raw form fields as submitted, before validation
///
/// Fields absent from the request body bind as empty strings so that a
/// missing field is reported as a validation error instead of a bad request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SubmissionInput {
    pub name: String,
    pub email: String,
    pub category: String,
    #[serde(rename = "questionText")]
    pub question_text: String,
    pub priority: String,
}

/// Which shape of the ask form is in use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormVariant {
    /// Email and question text only
    #[default]
    Basic,
    /// Adds name, category and priority
    Extended,
}

impl FormVariant {
    pub fn is_extended(self) -> bool {
        matches!(self, FormVariant::Extended)
    }
}

impl std::fmt::Display for FormVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormVariant::Basic => write!(f, "basic"),
            FormVariant::Extended => write!(f, "extended"),
        }
    }
}

impl std::str::FromStr for FormVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "basic" => Ok(FormVariant::Basic),
            "extended" => Ok(FormVariant::Extended),
            _ => Err(format!("Unknown form variant: {}", s)),
        }
    }
}

/// A form field that can carry validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Category,
    QuestionText,
    Priority,
}

impl Field {
    /// Name of the field in the form body
    pub fn form_name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Category => "category",
            Field::QuestionText => "questionText",
            Field::Priority => "priority",
        }
    }
}

/// Errors attached to a rejected submission
///
/// Field errors are shown next to the offending input; form errors are shown
/// once above the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<Field, Vec<String>>,
    form: Vec<String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_field(&mut self, field: Field, message: impl Into<String>) {
        self.fields.entry(field).or_default().push(message.into());
    }

    pub fn add_form(&mut self, message: impl Into<String>) {
        self.form.push(message.into());
    }

    pub fn field(&self, field: Field) -> &[String] {
        self.fields.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn form(&self) -> &[String] {
        &self.form
    }

    pub fn has_field(&self, field: Field) -> bool {
        self.fields.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.form.is_empty()
    }

    /// Total number of messages, field and form level
    pub fn len(&self) -> usize {
        self.fields.values().map(Vec::len).sum::<usize>() + self.form.len()
    }
}
