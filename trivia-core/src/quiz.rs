//! Quiz question selection
//!
//! A quiz round asks for one question at a time. The client remembers which
//! ids it has already seen and sends them back; the selector draws uniformly
//! from whatever is left in the chosen category.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{CategoryFilter, Question};

/// Question payload handed to a quiz player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: i64,
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    pub category: i64,
    pub difficulty: i32,
}

impl QuizQuestion {
    /// Prompt only; the answer is fetched separately once the player commits.
    pub fn prompt(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: None,
            category: q.category,
            difficulty: q.difficulty,
        }
    }

    /// Prompt together with its answer.
    pub fn with_answer(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: Some(q.answer),
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

/// Pick the next quiz question.
///
/// The eligible set is every candidate that passes `filter` and whose id is
/// not in `previously_seen`. Returns `None` when that set is empty, which
/// means the quiz is exhausted. Each eligible question is equally likely.
pub fn select_next<R>(
    candidates: Vec<Question>,
    filter: CategoryFilter,
    previously_seen: &HashSet<i64>,
    rng: &mut R,
) -> Option<Question>
where
    R: Rng + ?Sized,
{
    let eligible: Vec<Question> = candidates
        .into_iter()
        .filter(|q| filter.matches(q.category) && !previously_seen.contains(&q.id))
        .collect();

    tracing::debug!(
        eligible = eligible.len(),
        seen = previously_seen.len(),
        ?filter,
        "selecting quiz question"
    );

    eligible.choose(rng).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn question(id: i64, category: i64) -> Question {
        Question {
            id,
            question: format!("question {}", id),
            answer: format!("answer {}", id),
            category,
            difficulty: 1,
        }
    }

    #[test]
    fn single_candidate_then_exhausted() {
        let mut rng = StdRng::seed_from_u64(7);
        let pool = vec![question(7, 1), question(8, 2)];

        let picked = select_next(pool.clone(), CategoryFilter::Only(1), &HashSet::new(), &mut rng);
        assert_eq!(picked.map(|q| q.id), Some(7));

        let seen: HashSet<i64> = [7].into_iter().collect();
        let picked = select_next(pool, CategoryFilter::Only(1), &seen, &mut rng);
        assert!(picked.is_none());
    }

    #[test]
    fn unknown_category_is_exhaustion() {
        let mut rng = StdRng::seed_from_u64(1);
        let pool = vec![question(1, 1), question(2, 1)];
        let picked = select_next(pool, CategoryFilter::Only(99), &HashSet::new(), &mut rng);
        assert!(picked.is_none());
    }

    #[test]
    fn any_filter_spans_categories() {
        let mut rng = StdRng::seed_from_u64(3);
        let pool = vec![question(1, 1), question(2, 2), question(3, 3)];
        let seen: HashSet<i64> = [1, 3].into_iter().collect();
        let picked = select_next(pool, CategoryFilter::Any, &seen, &mut rng);
        assert_eq!(picked.map(|q| q.id), Some(2));
    }

    #[test]
    fn draw_is_not_biased_to_first_match() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool: Vec<Question> = (1..=4).map(|id| question(id, 1)).collect();
        let mut counts = [0u32; 4];

        for _ in 0..4000 {
            let picked = select_next(pool.clone(), CategoryFilter::Any, &HashSet::new(), &mut rng)
                .unwrap();
            counts[(picked.id - 1) as usize] += 1;
        }

        // Expected 1000 each; allow generous slack for a fixed seed
        for count in counts {
            assert!((800..=1200).contains(&count), "skewed draw: {:?}", counts);
        }
    }

    #[test]
    fn prompt_hides_answer() {
        let prompt = QuizQuestion::prompt(question(5, 1));
        assert_eq!(prompt.answer, None);
        let json = serde_json::to_value(&prompt).unwrap();
        assert!(json.get("answer").is_none());

        let reveal = QuizQuestion::with_answer(question(5, 1));
        assert_eq!(reveal.answer.as_deref(), Some("answer 5"));
    }
}
