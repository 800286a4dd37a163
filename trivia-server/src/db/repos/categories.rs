//! Category repository (read-only; categories are seed data)

use sqlx::{PgPool, Row};
use trivia_core::Category;

use crate::store::StoreError;

/// Category repository
pub struct CategoryRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All categories ordered by id.
    pub async fn list(&self) -> Result<Vec<Category>, StoreError> {
        let rows = sqlx::query("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|r| Category::new(r.get("id"), r.get::<String, _>("type")))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, schema, seed};

    #[tokio::test]
    #[ignore = "requires database"]
    async fn lists_seeded_categories() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        schema::ensure(&pool).await.expect("schema");
        seed::seed_database(&pool).await.expect("seed");

        let categories = CategoryRepo::new(&pool).list().await.expect("list");
        assert!(categories.iter().any(|c| c.id == 1 && c.kind == "Science"));
    }
}
