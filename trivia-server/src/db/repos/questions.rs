//! Question repository
//!
//! - Paged lists: one query with `COUNT(*) OVER()` for the total
//! - Search: `ILIKE` with wildcards in the term escaped
//! - Inserts lean on the category foreign key instead of check-then-insert

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};
use trivia_core::{CategoryFilter, NewQuestion, Paginated, Pagination, Question};

use crate::store::StoreError;

const COLUMNS: &str = "id, question, answer, category, difficulty";

/// Which questions a paged query covers
#[derive(Debug, Clone)]
enum Scope {
    All,
    Category(i64),
    Search(String),
}

impl Scope {
    fn push_where(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        match self {
            Self::All => {}
            Self::Category(id) => {
                qb.push(" WHERE category = ").push_bind(*id);
            }
            Self::Search(pattern) => {
                qb.push(" WHERE question ILIKE ")
                    .push_bind(pattern.clone())
                    .push(r" ESCAPE '\'");
            }
        }
    }
}

/// Build an `ILIKE` pattern matching `term` anywhere, with `%`, `_` and `\`
/// in the term taken literally.
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn question_from_row(r: &PgRow) -> Question {
    Question {
        id: r.get("id"),
        question: r.get("question"),
        answer: r.get("answer"),
        category: r.get("category"),
        difficulty: r.get("difficulty"),
    }
}

fn map_write_error(e: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_foreign_key_violation() || db.is_check_violation() {
            return StoreError::Rejected {
                reason: db.message().to_owned(),
            };
        }
    }
    StoreError::Sqlx(e)
}

/// Question repository
pub struct QuestionRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> QuestionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// One page of all questions ordered by id.
    pub async fn list(&self, page: Pagination) -> Result<Paginated<Question>, StoreError> {
        self.page(Scope::All, page).await
    }

    /// One page of a category's questions ordered by id.
    pub async fn list_for_category(
        &self,
        category: i64,
        page: Pagination,
    ) -> Result<Paginated<Question>, StoreError> {
        self.page(Scope::Category(category), page).await
    }

    /// One page of questions containing `term`, ignoring case.
    pub async fn search(
        &self,
        term: &str,
        page: Pagination,
    ) -> Result<Paginated<Question>, StoreError> {
        self.page(Scope::Search(like_pattern(term)), page).await
    }

    async fn page(&self, scope: Scope, page: Pagination) -> Result<Paginated<Question>, StoreError> {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT ");
        qb.push(COLUMNS).push(", COUNT(*) OVER() AS total FROM questions");
        scope.push_where(&mut qb);
        qb.push(" ORDER BY id LIMIT ")
            .push_bind(page.limit() as i64)
            .push(" OFFSET ")
            .push_bind(page.offset() as i64);

        let rows = qb.build().fetch_all(self.pool).await?;

        let total = match rows.first() {
            Some(r) => r.get::<i64, _>("total"),
            // Past the last page the window count is gone with the rows
            None if page.offset() > 0 => self.count(&scope).await?,
            None => 0,
        };
        let items = rows.iter().map(question_from_row).collect();

        Ok(page.wrap(items, total))
    }

    async fn count(&self, scope: &Scope) -> Result<i64, StoreError> {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM questions");
        scope.push_where(&mut qb);
        Ok(qb.build_query_scalar::<i64>().fetch_one(self.pool).await?)
    }

    /// Every question passing `filter`, ordered by id.
    pub async fn all_matching(&self, filter: CategoryFilter) -> Result<Vec<Question>, StoreError> {
        let category = match filter {
            CategoryFilter::Any => None,
            CategoryFilter::Only(id) => Some(id),
        };

        let rows = sqlx::query(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE ($1::BIGINT IS NULL OR category = $1)
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.iter().map(question_from_row).collect())
    }

    /// Get a single question by id.
    pub async fn get(&self, id: i64) -> Result<Question, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| StoreError::question_not_found(id))?;

        Ok(question_from_row(&row))
    }

    /// Insert a question, returning the stored row.
    ///
    /// An unknown category surfaces as `Rejected` via the foreign key.
    pub async fn create(&self, new: NewQuestion) -> Result<Question, StoreError> {
        let row = sqlx::query(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(new.question())
        .bind(new.answer())
        .bind(new.category())
        .bind(new.difficulty())
        .fetch_one(self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(question_from_row(&row))
    }

    /// Delete a question by id.
    pub async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::question_not_found(id));
        }
        Ok(())
    }

    /// Total number of questions.
    pub async fn count_all(&self) -> Result<i64, StoreError> {
        self.count(&Scope::All).await
    }
}
