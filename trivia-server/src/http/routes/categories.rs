//! Category endpoints

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use trivia_core::{Category, Question};

use crate::http::error::ApiError;
use crate::http::extractors::{PageQuery, PathId};
use crate::http::server::AppState;

/// Category id to type label; serialises as a JSON object keyed by id
pub type CategoryMap = BTreeMap<i64, String>;

pub(crate) fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

/// GET /categories response
#[derive(Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
    pub total_categories: usize,
}

/// GET /categories/{id}/questions response
#[derive(Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub current_category: i64,
}

/// GET /categories - every category as an id -> type map
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state.store.categories().await?;
    if categories.is_empty() {
        tracing::info!("/categories - no categories found");
        return Err(ApiError::not_found("categories", "all"));
    }

    let categories = category_map(categories);
    Ok(Json(CategoriesResponse {
        success: true,
        total_categories: categories.len(),
        categories,
    }))
}

/// GET /categories/{id}/questions - one page of a category's questions
async fn list_category_questions(
    State(state): State<Arc<AppState>>,
    PathId(category): PathId,
    PageQuery(page): PageQuery,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let result = state.store.questions_in_category(category, page).await?;
    if result.is_empty() {
        return Err(ApiError::not_found(
            "category page",
            format!("{}?page={}", category, page.page),
        ));
    }

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: result.items,
        total_questions: result.total,
        current_category: category,
    }))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(list_category_questions))
}
