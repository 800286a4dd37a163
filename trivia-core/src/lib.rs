//! trivia-core: domain types and decision logic for the trivia API
//!
//! Everything here is pure: no storage, no HTTP. The server crate feeds
//! request-scoped snapshots of questions into these functions.

pub mod models;
pub mod quiz;

pub use models::{
    paginate, Category, CategoryFilter, NewQuestion, Paginated, Pagination, Question,
    ValidationError, QUESTIONS_PER_PAGE,
};
pub use quiz::{select_next, QuizQuestion};
