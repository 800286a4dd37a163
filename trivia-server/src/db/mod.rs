//! Database layer - connection pool, schema bootstrap and repositories
//!
//! - Connection pool with an explicit limit
//! - Paged lists use `COUNT(*) OVER()` so one query yields rows and total
//! - Rely on DB constraints (foreign key, difficulty check) and map violations

pub mod pool;
pub mod repos;
pub mod schema;
pub mod seed;

pub use pool::{connect, create_pool, create_pool_with_options};
pub use repos::{CategoryRepo, QuestionRepo};
