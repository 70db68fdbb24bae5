//! Question domain entity
//!
//! A durable record of one visitor submission.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Unique identifier for a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuestionId(pub Uuid);

impl QuestionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for QuestionId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for QuestionId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored question
///
/// `id` and `created_at` are assigned once in [`Question::new`] and never change.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub id: QuestionId,
    pub email: String,
    pub question_text: String,
    /// Submitter name (extended form only)
    pub name: Option<String>,
    /// Selected category (extended form only)
    pub category: Option<String>,
    /// Requested priority (extended form only)
    pub priority: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Question {
    /// Build a new record with a fresh id and creation time
    pub fn new(new_question: NewQuestion) -> Self {
        Self {
            id: QuestionId::new(),
            email: new_question.email,
            question_text: new_question.question_text,
            name: new_question.name,
            category: new_question.category,
            priority: new_question.priority,
            created_at: Utc::now(),
        }
    }
}

/// Validated data needed to create a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub email: String,
    pub question_text: String,
    pub name: Option<String>,
    pub category: Option<String>,
    pub priority: Option<String>,
}
