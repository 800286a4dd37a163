//! `trivia serve`

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use trivia_server::db::{self, pool::DEFAULT_MAX_CONNECTIONS, seed};
use trivia_server::{
    run_server, MemoryStore, PgStore, QuizConfig, ServerConfig, TriviaStore,
};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "TRIVIA_BIND", default_value = trivia_server::config::DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Keep data in process memory, preloaded with the starter questions
    #[arg(long)]
    pub in_memory: bool,

    /// Load starter data into an empty database before serving
    #[arg(long)]
    pub seed: bool,

    /// Maximum database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Quiz category id that means "all categories"
    #[arg(long, env = "TRIVIA_ALL_CATEGORY_ID", default_value_t = 0, allow_negative_numbers = true)]
    pub all_category_id: i64,

    /// Leave answers out of quiz prompts; clients reveal via /questions/{id}/answer
    #[arg(long)]
    pub hide_quiz_answers: bool,
}

impl ServeArgs {
    fn quiz_config(&self) -> QuizConfig {
        QuizConfig {
            all_category_id: self.all_category_id,
            reveal_answer_with_prompt: !self.hide_quiz_answers,
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = ServerConfig {
        bind_addr: args.bind,
        quiz: args.quiz_config(),
    };

    let store: Arc<dyn TriviaStore> = if args.in_memory {
        tracing::warn!("Using in-memory storage; changes are lost on exit");
        Arc::new(MemoryStore::seeded())
    } else {
        let database_url = super::database_url(args.database_url)?;
        let pool = db::connect(&database_url, args.max_connections)
            .await
            .context("Failed to connect to database and create tables")?;

        if args.seed {
            let report = seed::seed_database(&pool)
                .await
                .context("Failed to seed database")?;
            tracing::info!(
                categories = report.categories,
                questions = report.questions,
                "Seed data loaded"
            );
        }

        Arc::new(PgStore::new(pool))
    };

    tracing::info!("Starting trivia server on {}", args.bind);

    run_server(store, config).await.context("Server error")?;

    Ok(())
}
