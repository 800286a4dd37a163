//! Storage collaborator
//!
//! Handlers talk to storage only through [`TriviaStore`]. Two backends:
//! - [`PgStore`]: PostgreSQL via the repositories in [`crate::db`]
//! - [`MemoryStore`]: process-local maps, for development and tests

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use trivia_core::{Category, CategoryFilter, NewQuestion, Paginated, Pagination, Question};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Storage error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    /// Storage refused the write (constraint violation)
    #[error("rejected: {reason}")]
    Rejected { reason: String },
}

impl StoreError {
    pub fn question_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "question",
            id: id.to_string(),
        }
    }
}

/// Everything the HTTP layer needs from storage
#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// All categories ordered by id.
    async fn categories(&self) -> Result<Vec<Category>, StoreError>;

    /// One page of all questions ordered by id.
    async fn questions(&self, page: Pagination) -> Result<Paginated<Question>, StoreError>;

    /// One page of a category's questions ordered by id.
    async fn questions_in_category(
        &self,
        category: i64,
        page: Pagination,
    ) -> Result<Paginated<Question>, StoreError>;

    /// One page of questions whose text contains `term`, ignoring case.
    async fn search_questions(
        &self,
        term: &str,
        page: Pagination,
    ) -> Result<Paginated<Question>, StoreError>;

    /// Every question passing `filter`; the quiz selector draws from these.
    async fn quiz_candidates(&self, filter: CategoryFilter) -> Result<Vec<Question>, StoreError>;

    /// A single question, or `NotFound`.
    async fn question(&self, id: i64) -> Result<Question, StoreError>;

    /// Store a question and return it with its assigned id.
    async fn insert_question(&self, new: NewQuestion) -> Result<Question, StoreError>;

    /// Remove a question, or `NotFound` if it does not exist.
    async fn delete_question(&self, id: i64) -> Result<(), StoreError>;

    /// Number of stored questions.
    async fn count_questions(&self) -> Result<i64, StoreError>;
}
