//! Retry decorator for QuestionRepository
//!
//! Repeats an operation that failed with a transient store error, backing off
//! exponentially between attempts. Any other error is returned immediately.
//!
//! A write can commit even though its acknowledgement was lost. When a retried
//! `add` is then rejected, the stored record is read back and the write counts
//! as done if it is the same question.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::entities::{Question, QuestionId};
use crate::domain::ports::QuestionRepository;
use crate::error::StoreError;

/// How often and how patiently to retry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub max_retries: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl RetryPolicy {
    /// Delay before retry number `retry` (0-based)
    pub fn delay_for(&self, retry: u32) -> Duration {
        let factor = 2u32.saturating_pow(retry);
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 6,
            base_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(30),
        }
    }
}

pub struct RetryingQuestionRepository<R> {
    inner: R,
    policy: RetryPolicy,
}

impl<R> RetryingQuestionRepository<R>
where
    R: QuestionRepository,
{
    pub fn new(inner: R, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    async fn with_retry<T, F, Fut>(&self, operation: &'static str, mut f: F) -> Result<T, StoreError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, StoreError>>,
    {
        let mut retry = 0;
        loop {
            match f().await {
                Err(e) if e.is_transient() && retry < self.policy.max_retries => {
                    let delay = self.policy.delay_for(retry);
                    tracing::warn!(
                        error = %e,
                        operation,
                        retry = retry + 1,
                        delay = ?delay,
                        "Transient store failure, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    retry += 1;
                }
                result => return result,
            }
        }
    }
}

#[async_trait]
impl<R> QuestionRepository for RetryingQuestionRepository<R>
where
    R: QuestionRepository,
{
    async fn add(&self, question: &Question) -> Result<(), StoreError> {
        let mut attempts = 0u32;
        let result = self
            .with_retry("add", || {
                attempts += 1;
                self.inner.add(question)
            })
            .await;

        match result {
            Err(StoreError::Rejected(reason)) if attempts > 1 => {
                match self.inner.find_by_id(&question.id).await {
                    Ok(Some(stored)) if is_same_question(&stored, question) => {
                        tracing::info!(
                            question_id = %question.id,
                            attempts,
                            "Earlier attempt had already stored the question"
                        );
                        Ok(())
                    }
                    _ => Err(StoreError::Rejected(reason)),
                }
            }
            other => other,
        }
    }

    async fn find_by_id(&self, id: &QuestionId) -> Result<Option<Question>, StoreError> {
        self.with_retry("find_by_id", || self.inner.find_by_id(id))
            .await
    }
}

/// Field-wise match, ignoring `created_at` which the database may round
fn is_same_question(stored: &Question, question: &Question) -> bool {
    stored.id == question.id
        && stored.email == question.email
        && stored.question_text == question.question_text
        && stored.name == question.name
        && stored.category == question.category
        && stored.priority == question.priority
}
