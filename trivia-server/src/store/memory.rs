//! In-memory store
//!
//! Same contract as the Postgres store, including the category foreign key.
//! Writes are serialised by a single `RwLock`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use trivia_core::{
    paginate, Category, CategoryFilter, NewQuestion, Paginated, Pagination, Question,
};

use super::{StoreError, TriviaStore};
use crate::db::seed;

struct Inner {
    categories: BTreeMap<i64, Category>,
    questions: BTreeMap<i64, Question>,
    next_id: i64,
}

/// Process-local trivia store
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Empty store with no categories.
    pub fn new() -> Self {
        Self::from_parts(Vec::new(), Vec::new())
    }

    /// Store pre-populated with the given records.
    ///
    /// New questions get ids after the highest existing one.
    pub fn from_parts(categories: Vec<Category>, questions: Vec<Question>) -> Self {
        let next_id = questions.iter().map(|q| q.id).max().unwrap_or(0) + 1;
        Self {
            inner: RwLock::new(Inner {
                categories: categories.into_iter().map(|c| (c.id, c)).collect(),
                questions: questions.into_iter().map(|q| (q.id, q)).collect(),
                next_id,
            }),
        }
    }

    /// Store holding the bundled seed categories and questions.
    pub fn seeded() -> Self {
        Self::from_parts(seed::categories(), seed::questions())
    }

    async fn page_where<F>(&self, page: Pagination, keep: F) -> Paginated<Question>
    where
        F: Fn(&Question) -> bool,
    {
        let inner = self.inner.read().await;
        let matching: Vec<Question> = inner
            .questions
            .values()
            .filter(|q| keep(q))
            .cloned()
            .collect();

        page.wrap(paginate(page, &matching).to_vec(), matching.len() as i64)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.inner.read().await.categories.values().cloned().collect())
    }

    async fn questions(&self, page: Pagination) -> Result<Paginated<Question>, StoreError> {
        Ok(self.page_where(page, |_| true).await)
    }

    async fn questions_in_category(
        &self,
        category: i64,
        page: Pagination,
    ) -> Result<Paginated<Question>, StoreError> {
        Ok(self.page_where(page, |q| q.category == category).await)
    }

    async fn search_questions(
        &self,
        term: &str,
        page: Pagination,
    ) -> Result<Paginated<Question>, StoreError> {
        let needle = term.to_lowercase();
        Ok(self
            .page_where(page, |q| q.question.to_lowercase().contains(&needle))
            .await)
    }

    async fn quiz_candidates(&self, filter: CategoryFilter) -> Result<Vec<Question>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .questions
            .values()
            .filter(|q| filter.matches(q.category))
            .cloned()
            .collect())
    }

    async fn question(&self, id: i64) -> Result<Question, StoreError> {
        self.inner
            .read()
            .await
            .questions
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::question_not_found(id))
    }

    async fn insert_question(&self, new: NewQuestion) -> Result<Question, StoreError> {
        let mut inner = self.inner.write().await;

        if !inner.categories.contains_key(&new.category()) {
            return Err(StoreError::Rejected {
                reason: format!("category {} does not exist", new.category()),
            });
        }

        let id = inner.next_id;
        inner.next_id += 1;

        let question = new.into_question(id);
        inner.questions.insert(id, question.clone());
        Ok(question)
    }

    async fn delete_question(&self, id: i64) -> Result<(), StoreError> {
        self.inner
            .write()
            .await
            .questions
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::question_not_found(id))
    }

    async fn count_questions(&self) -> Result<i64, StoreError> {
        Ok(self.inner.read().await.questions.len() as i64)
    }
}
