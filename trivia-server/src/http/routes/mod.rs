//! Route handlers organized by resource

pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;

/// Distinct category ids of `questions`, in first-seen order.
pub(crate) fn referenced_categories(questions: &[trivia_core::Question]) -> Vec<i64> {
    let mut seen = Vec::new();
    for q in questions {
        if !seen.contains(&q.category) {
            seen.push(q.category);
        }
    }
    seen
}
