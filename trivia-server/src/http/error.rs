//! API error types with IntoResponse
//!
//! Only two statuses reach clients: 404 and 422. Storage detail is logged,
//! never returned.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use trivia_core::ValidationError;

use crate::store::StoreError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Resource or page does not exist (404)
    NotFound { resource: &'static str, id: String },

    /// Request field failed validation (422, field named in `detail`)
    Validation(ValidationError),

    /// Malformed body or a write storage refused (422)
    Unprocessable { reason: String },

    /// Unexpected storage failure (422, logged)
    Storage(StoreError),
}

impl ApiError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation(_) | Self::Unprocessable { .. } | Self::Storage(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::NotFound { resource, id } => {
                tracing::debug!(resource, id = %id, "not found");
                json!({
                    "success": false,
                    "error": status.as_u16(),
                    "message": "resource not found"
                })
            }
            Self::Validation(e) => {
                tracing::debug!(field = e.field(), "validation failed: {}", e);
                json!({
                    "success": false,
                    "error": status.as_u16(),
                    "message": "unprocessable",
                    "detail": e.to_string()
                })
            }
            Self::Unprocessable { reason } => {
                tracing::info!("Unprocessable request: {}", reason);
                json!({
                    "success": false,
                    "error": status.as_u16(),
                    "message": "unprocessable"
                })
            }
            Self::Storage(e) => {
                // Log the actual error, return generic message
                tracing::error!("Storage error: {}", e);
                json!({
                    "success": false,
                    "error": status.as_u16(),
                    "message": "unprocessable"
                })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { resource, id } => Self::NotFound { resource, id },
            StoreError::Rejected { reason } => Self::Unprocessable { reason },
            _ => Self::Storage(e),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Unprocessable {
            reason: rejection.body_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let response = ApiError::not_found("question", 5).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 404);
        assert_eq!(body["message"], "resource not found");
    }

    #[tokio::test]
    async fn validation_error_is_422_with_detail() {
        let err = ApiError::from(ValidationError::Missing { field: "answer" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert_eq!(body["message"], "unprocessable");
        assert_eq!(body["detail"], "answer is required");
    }

    #[tokio::test]
    async fn storage_error_hides_detail() {
        let err = ApiError::from(StoreError::Sqlx(sqlx::Error::PoolTimedOut));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert!(body.get("detail").is_none());
        assert_eq!(body["message"], "unprocessable");
    }

    #[test]
    fn store_errors_map_to_kinds() {
        let err = ApiError::from(StoreError::question_not_found(3));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let err = ApiError::from(StoreError::Rejected {
            reason: "fk".into(),
        });
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
