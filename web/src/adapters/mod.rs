//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod memory;
pub mod retry;
pub mod sql;

pub use memory::InMemoryQuestionRepository;
pub use retry::{RetryPolicy, RetryingQuestionRepository};
pub use sql::SqlQuestionRepository;
