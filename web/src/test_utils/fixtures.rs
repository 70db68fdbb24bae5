//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::adapters::sql::ensure_schema;
use crate::domain::entities::{NewQuestion, Question, SubmissionInput};

/// Create a stored-question value with default basic-form values
pub fn test_question() -> Question {
    Question::new(NewQuestion {
        email: "test@example.com".to_string(),
        question_text: "This is a test question".to_string(),
        name: None,
        category: None,
        priority: None,
    })
}

/// Create a stored-question value carrying the extended-form fields
pub fn test_question_extended() -> Question {
    Question::new(NewQuestion {
        email: "test@example.com".to_string(),
        question_text: "This is a test question".to_string(),
        name: Some("Test User".to_string()),
        category: Some("Technical".to_string()),
        priority: Some("High".to_string()),
    })
}

/// Basic-form input with just email and question text
pub fn basic_input(email: &str, question_text: &str) -> SubmissionInput {
    SubmissionInput {
        email: email.to_string(),
        question_text: question_text.to_string(),
        ..Default::default()
    }
}

/// A fully valid extended-form input
pub fn extended_input() -> SubmissionInput {
    SubmissionInput {
        name: "Test User".to_string(),
        email: "tester@example.com".to_string(),
        category: "Technical".to_string(),
        question_text: "How do I reset my password on the portal?".to_string(),
        priority: "High".to_string(),
    }
}

/// Fresh in-memory SQLite database with the schema applied
///
/// A single pooled connection keeps the in-memory database alive for the
/// duration of the test.
pub async fn sqlite_test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to open in-memory SQLite");
    ensure_schema(&db).await.expect("Failed to create schema");
    db
}
