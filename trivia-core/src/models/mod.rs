//! Domain models with validation at construction
//!
//! User input is validated when building a [`NewQuestion`].
//! Invalid input returns [`ValidationError`], not panic.

pub mod validation;
pub mod category;
pub mod question;
pub mod pagination;

pub use validation::ValidationError;
pub use category::{Category, CategoryFilter};
pub use question::{NewQuestion, Question, MAX_DIFFICULTY, MIN_DIFFICULTY};
pub use pagination::{paginate, Paginated, Pagination, QUESTIONS_PER_PAGE};
