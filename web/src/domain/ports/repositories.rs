//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (SQL, in-memory).

use async_trait::async_trait;

use crate::domain::entities::{Question, QuestionId};
use crate::error::StoreError;

/// Repository for Question entities
///
/// Append-only: there is no update or delete.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Persist a fully populated question
    async fn add(&self, question: &Question) -> Result<(), StoreError>;

    /// Find a question by ID, `None` if no record has that ID
    async fn find_by_id(&self, id: &QuestionId) -> Result<Option<Question>, StoreError>;
}
