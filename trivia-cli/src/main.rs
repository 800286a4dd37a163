//! trivia - serve the trivia quiz API
//!
//! - `serve`: run the HTTP API (Postgres or in-memory storage)
//! - `seed`: create tables and load the bundled starter questions

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use commands::seed::SeedArgs;
use commands::serve::ServeArgs;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(name = "trivia", version, about = "Trivia quiz API server")]
struct Cli {
    /// Debug logging (RUST_LOG still wins when set)
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (needs the `telemetry` feature)
    #[arg(long, global = true)]
    otel: bool,

    /// Append INFO and above to this file as well as the console
    #[arg(long, global = true, env = "TRIVIA_LOG_FILE")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API
    Serve(ServeArgs),
    /// Create tables and insert starter categories and questions
    Seed(SeedArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
        log_file: cli.log_file,
    })?;

    let result = match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await,
        Commands::Seed(args) => commands::seed::run_seed(args).await,
    };

    tracing_setup::shutdown_otel();
    result
}
