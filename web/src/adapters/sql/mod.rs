//! SQL adapters
//!
//! Implementations of repository traits using SeaORM. PostgreSQL in
//! production; the tests run the same code against in-memory SQLite.

pub mod question_repo;
pub mod schema;

pub use question_repo::SqlQuestionRepository;
pub use schema::{connect, ensure_schema};
