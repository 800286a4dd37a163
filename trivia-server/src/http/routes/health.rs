//! Health check endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Whether storage answered a count query
    pub storage: bool,
}

/// GET /health
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let storage = match state.store.count_questions().await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!("health check storage probe failed: {}", e);
            false
        }
    };

    Json(HealthResponse {
        status: if storage { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        storage,
    })
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QuizConfig;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn health_returns_ok() {
        let state = Arc::new(AppState::new(
            Arc::new(MemoryStore::new()),
            QuizConfig::default(),
        ));
        let Json(body) = health(State(state)).await;
        assert_eq!(body.status, "ok");
        assert!(body.storage);
    }
}
