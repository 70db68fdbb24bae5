//! HTTP handlers
//!
//! Axum request handlers for the site's pages.

pub mod questions;

pub use questions::{show_ask_form, show_success, submit_question};

use axum::response::Redirect;

use crate::error::AppError;

/// GET /
pub async fn home() -> Redirect {
    Redirect::to("/Questions/Ask")
}

/// Fallback for unknown routes
pub async fn not_found() -> AppError {
    AppError::NotFound("There is no page at this address.".to_string())
}
