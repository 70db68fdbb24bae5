//! Test doubles for the repository port
//!
//! In-memory implementations that can be configured to fail and that count
//! calls so tests can verify whether the store was consulted.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::adapters::InMemoryQuestionRepository;
use crate::domain::entities::{Question, QuestionId};
use crate::domain::ports::QuestionRepository;
use crate::error::StoreError;

/// Cause reported by [`FailingQuestionRepository`]
pub const TEST_STORE_FAILURE: &str = "Database error";

/// Shared call counter, readable after the double moved into a service
#[derive(Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn bump(&self) -> usize {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }
}

// ============================================================================
// Recording Question Repository
// ============================================================================

/// Working in-memory store that counts `add` calls
#[derive(Default)]
pub struct RecordingQuestionRepository {
    inner: InMemoryQuestionRepository,
    adds: CallCounter,
}

impl RecordingQuestionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn adds(&self) -> CallCounter {
        self.adds.clone()
    }
}

#[async_trait]
impl QuestionRepository for RecordingQuestionRepository {
    async fn add(&self, question: &Question) -> Result<(), StoreError> {
        self.adds.bump();
        self.inner.add(question).await
    }

    async fn find_by_id(&self, id: &QuestionId) -> Result<Option<Question>, StoreError> {
        self.inner.find_by_id(id).await
    }
}

// ============================================================================
// Failing Question Repository
// ============================================================================

/// Store whose writes always fail with a permanent error
#[derive(Default)]
pub struct FailingQuestionRepository {
    calls: CallCounter,
}

impl FailingQuestionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> CallCounter {
        self.calls.clone()
    }
}

#[async_trait]
impl QuestionRepository for FailingQuestionRepository {
    async fn add(&self, _question: &Question) -> Result<(), StoreError> {
        self.calls.bump();
        Err(StoreError::Database(TEST_STORE_FAILURE.to_string()))
    }

    async fn find_by_id(&self, _id: &QuestionId) -> Result<Option<Question>, StoreError> {
        self.calls.bump();
        Err(StoreError::Database(TEST_STORE_FAILURE.to_string()))
    }
}

// ============================================================================
// Flaky Question Repository
// ============================================================================

/// Store that is unavailable for the first `failures` calls, then works
pub struct FlakyQuestionRepository {
    inner: InMemoryQuestionRepository,
    failures: usize,
    calls: CallCounter,
}

impl FlakyQuestionRepository {
    pub fn new(failures: usize) -> Self {
        Self {
            inner: InMemoryQuestionRepository::new(),
            failures,
            calls: CallCounter::default(),
        }
    }

    pub fn calls(&self) -> CallCounter {
        self.calls.clone()
    }
}

#[async_trait]
impl QuestionRepository for FlakyQuestionRepository {
    async fn add(&self, question: &Question) -> Result<(), StoreError> {
        if self.calls.bump() <= self.failures {
            return Err(StoreError::Unavailable("connection reset".to_string()));
        }
        self.inner.add(question).await
    }

    async fn find_by_id(&self, id: &QuestionId) -> Result<Option<Question>, StoreError> {
        self.inner.find_by_id(id).await
    }
}

// ============================================================================
// Lost-Acknowledgement Question Repository
// ============================================================================

/// Store whose first `add` commits but reports the connection as lost
#[derive(Default)]
pub struct LostAckQuestionRepository {
    inner: InMemoryQuestionRepository,
    calls: CallCounter,
}

impl LostAckQuestionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> CallCounter {
        self.calls.clone()
    }
}

#[async_trait]
impl QuestionRepository for LostAckQuestionRepository {
    async fn add(&self, question: &Question) -> Result<(), StoreError> {
        let call = self.calls.bump();
        self.inner.add(question).await?;
        if call == 1 {
            return Err(StoreError::Unavailable("connection lost after commit".to_string()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &QuestionId) -> Result<Option<Question>, StoreError> {
        self.inner.find_by_id(id).await
    }
}
