//! `trivia seed`

use anyhow::{Context, Result};
use clap::Parser;

use trivia_server::db::{self, pool::DEFAULT_MAX_CONNECTIONS, seed};

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Create tables and load the starter data
pub async fn run_seed(args: SeedArgs) -> Result<()> {
    let database_url = super::database_url(args.database_url)?;
    let pool = db::connect(&database_url, DEFAULT_MAX_CONNECTIONS)
        .await
        .context("Failed to connect to database and create tables")?;

    let report = seed::seed_database(&pool)
        .await
        .context("Failed to seed database")?;

    tracing::info!(
        categories = report.categories,
        questions = report.questions,
        "Seed complete"
    );
    Ok(())
}
