//! HTML views
//!
//! Renders pages as strings. Every value that came from a request passes
//! through [`layout::escape_html`] before it is written.

pub mod layout;
pub mod questions;

pub use layout::render_error_page;
pub use questions::{render_ask_form, render_success, AskFormView};
