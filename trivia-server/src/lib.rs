//! trivia-server: HTTP API for trivia categories, questions and quizzes
//!
//! Handlers reach storage only through the [`store::TriviaStore`] trait held
//! in [`http::AppState`]; there is no process-wide database handle.

pub mod config;
pub mod db;
pub mod http;
pub mod store;

pub use config::{QuizConfig, ServerConfig};
pub use http::{build_router, run_server, ApiError, AppState};
pub use store::{MemoryStore, PgStore, StoreError, TriviaStore};
