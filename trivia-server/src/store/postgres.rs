//! Postgres-backed store

use async_trait::async_trait;
use sqlx::PgPool;
use trivia_core::{Category, CategoryFilter, NewQuestion, Paginated, Pagination, Question};

use super::{StoreError, TriviaStore};
use crate::db::{CategoryRepo, QuestionRepo};

/// Store backed by a PostgreSQL pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn categories(&self) -> Result<Vec<Category>, StoreError> {
        CategoryRepo::new(&self.pool).list().await
    }

    async fn questions(&self, page: Pagination) -> Result<Paginated<Question>, StoreError> {
        QuestionRepo::new(&self.pool).list(page).await
    }

    async fn questions_in_category(
        &self,
        category: i64,
        page: Pagination,
    ) -> Result<Paginated<Question>, StoreError> {
        QuestionRepo::new(&self.pool)
            .list_for_category(category, page)
            .await
    }

    async fn search_questions(
        &self,
        term: &str,
        page: Pagination,
    ) -> Result<Paginated<Question>, StoreError> {
        QuestionRepo::new(&self.pool).search(term, page).await
    }

    async fn quiz_candidates(&self, filter: CategoryFilter) -> Result<Vec<Question>, StoreError> {
        QuestionRepo::new(&self.pool).all_matching(filter).await
    }

    async fn question(&self, id: i64) -> Result<Question, StoreError> {
        QuestionRepo::new(&self.pool).get(id).await
    }

    async fn insert_question(&self, new: NewQuestion) -> Result<Question, StoreError> {
        QuestionRepo::new(&self.pool).create(new).await
    }

    async fn delete_question(&self, id: i64) -> Result<(), StoreError> {
        QuestionRepo::new(&self.pool).delete(id).await
    }

    async fn count_questions(&self) -> Result<i64, StoreError> {
        QuestionRepo::new(&self.pool).count_all().await
    }
}
