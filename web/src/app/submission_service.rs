//! Submission service
//!
//! Turns a raw form submission into a stored question or a rejected attempt.
//!
//! ```text
//! Received -> Validating -> Rejected(invalid)
//!                        -> Persisting -> Accepted
//!                                      -> Rejected(store failure)
//! ```
//!
//! Store failures are recovered here: they are logged and replaced by a generic
//! form-level message, so the presentation layer only ever re-renders the form.

use std::sync::Arc;

use crate::app::validation::validate;
use crate::domain::entities::{
    FormErrors, FormVariant, Question, SubmissionInput, DEFAULT_PRIORITY,
};
use crate::domain::ports::QuestionRepository;

/// Notice shown once on the confirmation page
pub const SUBMITTED_NOTICE: &str = "Thank you! Your question has been submitted successfully.";

/// Form-level message shown when the store could not save a valid submission
pub const SAVE_FAILED_MESSAGE: &str =
    "We couldn't save your question right now. Please try again later.";

/// Terminal state of one submission
#[derive(Debug)]
pub enum SubmissionOutcome {
    Accepted(Question),
    Rejected(Rejection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    /// One or more fields failed validation
    Invalid,
    /// Input was valid but the store failed
    StoreFailure,
}

/// A rejected submission, carrying what is needed to redisplay the form
#[derive(Debug)]
pub struct Rejection {
    pub reason: RejectionReason,
    pub input: SubmissionInput,
    pub errors: FormErrors,
}

/// Service for accepting visitor questions
pub struct SubmissionService<QR>
where
    QR: QuestionRepository + ?Sized,
{
    questions: Arc<QR>,
    variant: FormVariant,
}

impl<QR> SubmissionService<QR>
where
    QR: QuestionRepository + ?Sized,
{
    pub fn new(questions: Arc<QR>, variant: FormVariant) -> Self {
        Self { questions, variant }
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    /// Input for a freshly displayed form
    pub fn blank_form(&self) -> SubmissionInput {
        let mut input = SubmissionInput::default();
        if self.variant.is_extended() {
            input.priority = DEFAULT_PRIORITY.to_string();
        }
        input
    }

    /// Validate and persist a submission
    ///
    /// Invalid input never reaches the store. At most one write is attempted.
    pub async fn submit(&self, input: SubmissionInput) -> SubmissionOutcome {
        let new_question = match validate(&input, self.variant) {
            Ok(q) => q,
            Err(errors) => {
                tracing::debug!(error_count = errors.len(), "Submission failed validation");
                return SubmissionOutcome::Rejected(Rejection {
                    reason: RejectionReason::Invalid,
                    input,
                    errors,
                });
            }
        };

        let question = Question::new(new_question);

        match self.questions.add(&question).await {
            Ok(()) => {
                tracing::info!(
                    question_id = %question.id,
                    email = %question.email,
                    question_text = %question.question_text,
                    "Question received"
                );
                SubmissionOutcome::Accepted(question)
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    email = %input.email,
                    question_text = %input.question_text,
                    "Failed to save question"
                );
                let mut errors = FormErrors::new();
                errors.add_form(SAVE_FAILED_MESSAGE);
                SubmissionOutcome::Rejected(Rejection {
                    reason: RejectionReason::StoreFailure,
                    input,
                    errors,
                })
            }
        }
    }
}
