//! In-memory adapters
//!
//! Process-local stores for development runs. Data is lost on restart.

pub mod question_repo;

pub use question_repo::InMemoryQuestionRepository;
