//! Request protection
//!
//! Anti-forgery tokens for form posts.

pub mod csrf;

pub use csrf::{CsrfGuard, CsrfToken, CSRF_FIELD};
