//! Domain entities
//!
//! Pure domain models. These are separate from the SeaORM models in the
//! `entity` module.

pub mod question;
pub mod submission;

pub use question::{NewQuestion, Question, QuestionId};
pub use submission::{
    Field, FormErrors, FormVariant, SubmissionInput, CATEGORIES, DEFAULT_PRIORITY, PRIORITIES,
};
