//! SQL adapter for QuestionRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{sqlx, DatabaseConnection, DbErr, EntityTrait, RuntimeErr, Set, SqlErr};

use crate::domain::entities::{Question, QuestionId};
use crate::domain::ports::QuestionRepository;
use crate::entity::questions;
use crate::error::StoreError;

/// SeaORM implementation of QuestionRepository
pub struct SqlQuestionRepository {
    db: DatabaseConnection,
}

impl SqlQuestionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl QuestionRepository for SqlQuestionRepository {
    async fn add(&self, question: &Question) -> Result<(), StoreError> {
        let model = questions::ActiveModel {
            id: Set(question.id.0),
            email: Set(question.email.clone()),
            question_text: Set(question.question_text.clone()),
            name: Set(question.name.clone()),
            category: Set(question.category.clone()),
            priority: Set(question.priority.clone()),
            created_at: Set(question.created_at.fixed_offset()),
        };

        questions::Entity::insert(model)
            .exec_without_returning(&self.db)
            .await
            .map_err(store_error)?;

        Ok(())
    }

    async fn find_by_id(&self, id: &QuestionId) -> Result<Option<Question>, StoreError> {
        let result = questions::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(store_error)?;

        Ok(result.map(|m| m.into()))
    }
}

/// Classify a SeaORM error for the workflow and the retry decorator
fn store_error(e: DbErr) -> StoreError {
    if let Some(SqlErr::UniqueConstraintViolation(msg) | SqlErr::ForeignKeyConstraintViolation(msg)) =
        e.sql_err()
    {
        return StoreError::Rejected(msg);
    }

    match &e {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => StoreError::Unavailable(e.to_string()),
        DbErr::Exec(RuntimeErr::SqlxError(err)) | DbErr::Query(RuntimeErr::SqlxError(err))
            if is_connection_error(err) =>
        {
            StoreError::Unavailable(e.to_string())
        }
        _ => StoreError::Database(e.to_string()),
    }
}

fn is_connection_error(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Io(_) | sqlx::Error::Tls(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed
    )
}

/// Convert SeaORM model to domain entity
impl From<questions::Model> for Question {
    fn from(model: questions::Model) -> Self {
        Question {
            id: QuestionId(model.id),
            email: model.email,
            question_text: model.question_text,
            name: model.name,
            category: model.category,
            priority: model.priority,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
