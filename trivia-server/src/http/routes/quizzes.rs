//! Quiz endpoint
//!
//! Always answers 200. Exhaustion, an unreadable body, an unknown category
//! and a storage failure all come back as a `null` question.

use std::collections::HashSet;
use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use trivia_core::{select_next, CategoryFilter, QuizQuestion};

use crate::config::QuizConfig;
use crate::http::extractors::LenientJson;
use crate::http::params::lenient_i64;
use crate::http::server::AppState;

/// Quiz request
///
/// Fields stay raw JSON so one bad value never discards the rest of the body.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct QuizRequest {
    /// Ids already asked this round; non-integer entries are skipped
    pub previous_questions: Value,
    /// `{id, type}`; `type` is display-only
    pub quiz_category: Value,
}

impl QuizRequest {
    /// Resolve the requested category against the configured "All" sentinel.
    ///
    /// `None` means an id was sent but is not an integer, so nothing is eligible.
    pub fn filter(&self, config: &QuizConfig) -> Option<CategoryFilter> {
        match self.quiz_category.get("id") {
            None | Some(Value::Null) => Some(CategoryFilter::Any),
            Some(raw) => lenient_i64(raw)
                .map(|id| CategoryFilter::from_requested(Some(id), config.all_category_id)),
        }
    }

    pub fn seen(&self) -> HashSet<i64> {
        self.previous_questions
            .as_array()
            .into_iter()
            .flatten()
            .filter_map(lenient_i64)
            .collect()
    }
}

/// Quiz response
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<QuizQuestion>,
}

/// POST /quizzes - a random question not yet seen in this round
async fn next_question(
    State(state): State<Arc<AppState>>,
    LenientJson(req): LenientJson<QuizRequest>,
) -> Json<QuizResponse> {
    let seen = req.seen();

    let picked = match req.filter(&state.quiz) {
        Some(filter) => match state.store.quiz_candidates(filter).await {
            Ok(candidates) => {
                let mut rng = rand::thread_rng();
                let picked = select_next(candidates, filter, &seen, &mut rng);
                match &picked {
                    Some(q) => tracing::debug!(id = q.id, ?filter, "quiz question picked"),
                    None => tracing::info!(?filter, seen = seen.len(), "quiz exhausted"),
                }
                picked
            }
            Err(e) => {
                tracing::error!("quiz candidates unavailable: {}", e);
                None
            }
        },
        None => {
            tracing::info!(category = %req.quiz_category, "quiz category id is not an integer");
            None
        }
    };

    let question = picked.map(|q| {
        if state.quiz.reveal_answer_with_prompt {
            QuizQuestion::with_answer(q)
        } else {
            QuizQuestion::prompt(q)
        }
    });

    Json(QuizResponse {
        success: true,
        question,
    })
}

/// Quiz routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quizzes", post(next_question))
}
