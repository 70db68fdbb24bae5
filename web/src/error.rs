//! Unified error types for the Askbox web app
//!
//! This module defines error types for each layer:
//! - `StoreError`: Persistence failures from a question store
//! - `AppError`: Presentation layer errors (rendered as HTML error pages)
//!
//! Store failures during a submission never become an `AppError`: the workflow
//! recovers them and re-renders the form.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::views;

/// Store errors - the persistence medium failed or refused a write
#[derive(Debug, Error)]
pub enum StoreError {
    /// Connectivity loss or pool exhaustion; worth retrying
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The write violated a constraint
    #[error("Write rejected: {0}")]
    Rejected(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl StoreError {
    /// Whether repeating the same operation may succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, StoreError::Unavailable(_))
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, title, details) = match &self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.as_str()))
            }
            AppError::Forbidden(msg) => {
                tracing::warn!(reason = %msg, "Request refused");
                (
                    StatusCode::FORBIDDEN,
                    "Request refused",
                    Some("Your form session has expired. Please reload the page and try again."),
                )
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", Some(msg.as_str())),
        };

        (status, Html(views::render_error_page(title, details))).into_response()
    }
}
