pub mod seed;
pub mod serve;

use anyhow::{Context, Result};

/// Resolve the database URL from the flag or `DATABASE_URL`.
pub(crate) fn database_url(arg: Option<String>) -> Result<String> {
    arg.or_else(|| std::env::var("DATABASE_URL").ok())
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")
}
