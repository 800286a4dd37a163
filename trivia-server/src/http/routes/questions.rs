//! Question endpoints
//!
//! Create and search are separate routes; the handler never guesses intent
//! from which keys a body happens to contain.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use trivia_core::{NewQuestion, Pagination, Question};

use super::categories::{category_map, CategoryMap};
use super::referenced_categories;
use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, PageQuery, PathId};
use crate::http::params::{optional_i64, NumberOrString};
use crate::http::server::AppState;

/// Create question request
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<NumberOrString>,
    pub difficulty: Option<NumberOrString>,
}

impl CreateQuestionRequest {
    /// Validate into a storable question.
    pub fn validate(self) -> Result<NewQuestion, ApiError> {
        let category = optional_i64("category", self.category.as_ref())?;
        let difficulty = optional_i64("difficulty", self.difficulty.as_ref())?;
        Ok(NewQuestion::new(self.question, self.answer, category, difficulty)?)
    }
}

/// Search request
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm", alias = "search_term")]
    pub search_term: String,
}

/// GET /questions response
#[derive(Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub categories: CategoryMap,
    pub current_category: Vec<i64>,
}

/// POST /questions response
#[derive(Serialize)]
pub struct CreateQuestionResponse {
    pub success: bool,
    pub created: i64,
    pub questions: Vec<Question>,
    pub total_questions: i64,
}

/// POST /questions/search response
#[derive(Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub current_category: Vec<i64>,
}

/// DELETE /questions/{id} response
#[derive(Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub deleted: i64,
    pub total_questions: i64,
}

/// GET /questions/{id}/answer response
#[derive(Serialize)]
pub struct AnswerResponse {
    pub success: bool,
    pub id: i64,
    pub answer: String,
}

/// GET /questions - one page of all questions, with the category map
async fn list_questions(
    State(state): State<Arc<AppState>>,
    PageQuery(page): PageQuery,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let result = state.store.questions(page).await?;
    if result.is_empty() {
        tracing::info!(page = page.page, "/questions - no questions found");
        return Err(ApiError::not_found("questions page", page.page));
    }

    let categories = category_map(state.store.categories().await?);

    Ok(Json(QuestionListResponse {
        success: true,
        current_category: referenced_categories(&result.items),
        questions: result.items,
        total_questions: result.total,
        categories,
    }))
}

/// POST /questions - validate and store a new question
async fn create_question(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreateQuestionRequest>,
) -> Result<Json<CreateQuestionResponse>, ApiError> {
    let new = req.validate()?;
    let created = state.store.insert_question(new).await?;
    tracing::info!(id = created.id, category = created.category, "question created");

    let first_page = state.store.questions(Pagination::default()).await?;

    Ok(Json(CreateQuestionResponse {
        success: true,
        created: created.id,
        questions: first_page.items,
        total_questions: first_page.total,
    }))
}

/// POST /questions/search - case-insensitive substring match on question text
async fn search_questions(
    State(state): State<Arc<AppState>>,
    PageQuery(page): PageQuery,
    ApiJson(req): ApiJson<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let result = state.store.search_questions(&req.search_term, page).await?;
    tracing::debug!(term = %req.search_term, matches = result.total, "search");

    Ok(Json(SearchResponse {
        success: true,
        current_category: referenced_categories(&result.items),
        questions: result.items,
        total_questions: result.total,
    }))
}

/// DELETE /questions/{id}
async fn delete_question(
    State(state): State<Arc<AppState>>,
    PathId(id): PathId,
) -> Result<Json<DeleteResponse>, ApiError> {
    state.store.delete_question(id).await?;
    tracing::info!(id, "question deleted");

    let total_questions = state.store.count_questions().await?;

    Ok(Json(DeleteResponse {
        success: true,
        deleted: id,
        total_questions,
    }))
}

/// GET /questions/{id}/answer - reveal an answer after the player commits
async fn reveal_answer(
    State(state): State<Arc<AppState>>,
    PathId(id): PathId,
) -> Result<Json<AnswerResponse>, ApiError> {
    let question = state.store.question(id).await?;

    Ok(Json(AnswerResponse {
        success: true,
        id: question.id,
        answer: question.answer,
    }))
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{id}", delete(delete_question))
        .route("/questions/{id}/answer", get(reveal_answer))
}
