//! Database connection pool management

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::schema;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// How long a request waits for a free connection before its query fails.
pub const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost:5432/trivia").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a PostgreSQL connection pool with a custom connection limit.
///
/// A limit of 0 is raised to 1.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    let max_connections = max_connections.max(1);
    tracing::debug!(max_connections, "connecting to database");
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(database_url)
        .await
}

/// Open a pool and make sure the trivia tables exist.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let pool = create_pool_with_options(database_url, max_connections).await?;
    schema::ensure(&pool).await?;
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::QuestionRepo;
    use trivia_core::CategoryFilter;

    #[tokio::test]
    async fn unparsable_url_fails_before_connecting() {
        let err = create_pool("not a database url").await.unwrap_err();
        assert!(matches!(err, sqlx::Error::Configuration(_)), "got {:?}", err);
    }

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p trivia-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn connect_creates_trivia_tables() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = connect(&url, 0).await.expect("connect failed");

        for table in ["categories", "questions"] {
            let (exists,): (bool,) =
                sqlx::query_as("SELECT to_regclass($1) IS NOT NULL")
                    .bind(table)
                    .fetch_one(&pool)
                    .await
                    .expect("query failed");
            assert!(exists, "{} missing", table);
        }

        // second run is a no-op
        schema::ensure(&pool).await.expect("schema is not idempotent");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn quiz_reads_queue_on_a_small_pool() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = connect(&url, 2).await.expect("connect failed");
        let expected = QuestionRepo::new(&pool)
            .count_all()
            .await
            .expect("count failed");

        // more concurrent quiz requests than connections
        let handles: Vec<_> = (0..10)
            .map(|_| {
                let pool = pool.clone();
                tokio::spawn(async move {
                    QuestionRepo::new(&pool)
                        .all_matching(CategoryFilter::Any)
                        .await
                        .expect("concurrent read failed")
                        .len()
                })
            })
            .collect();

        for handle in handles {
            let found = handle.await.expect("task panicked");
            assert_eq!(found as i64, expected);
        }
    }
}
