//! Table bootstrap
//!
//! Idempotent `CREATE ... IF NOT EXISTS`; safe to run on every start.

use sqlx::PgPool;

/// Create the categories and questions tables if they are missing.
pub async fn ensure(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring trivia schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id BIGSERIAL PRIMARY KEY,
            type TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id BIGSERIAL PRIMARY KEY,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            category BIGINT NOT NULL REFERENCES categories(id) ON DELETE CASCADE,
            difficulty INTEGER NOT NULL CHECK (difficulty BETWEEN 1 AND 5)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category)")
        .execute(pool)
        .await?;

    tracing::info!("Trivia schema ready");
    Ok(())
}
