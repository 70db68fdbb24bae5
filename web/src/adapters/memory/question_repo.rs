//! In-memory adapter for QuestionRepository

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{Question, QuestionId};
use crate::domain::ports::QuestionRepository;
use crate::error::StoreError;

#[derive(Default)]
pub struct InMemoryQuestionRepository {
    questions: RwLock<HashMap<QuestionId, Question>>,
}

impl InMemoryQuestionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored questions
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.questions.read().await.len()
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn add(&self, question: &Question) -> Result<(), StoreError> {
        let mut questions = self.questions.write().await;
        if questions.contains_key(&question.id) {
            return Err(StoreError::Rejected(format!(
                "Question {} already exists",
                question.id
            )));
        }
        questions.insert(question.id, question.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &QuestionId) -> Result<Option<Question>, StoreError> {
        let questions = self.questions.read().await;
        Ok(questions.get(id).cloned())
    }
}
