//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod submission_service;
pub mod validation;

pub use submission_service::{SubmissionOutcome, SubmissionService, SUBMITTED_NOTICE};
