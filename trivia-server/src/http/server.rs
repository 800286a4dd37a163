//! Axum server setup
//!
//! - Permissive CORS (any origin, fixed method/header lists) on every response
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method, Uri};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use super::error::ApiError;
use super::routes;
use crate::config::{QuizConfig, ServerConfig};
use crate::store::TriviaStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Storage collaborator; the only way handlers reach data
    pub store: Arc<dyn TriviaStore>,
    pub quiz: QuizConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn TriviaStore>, quiz: QuizConfig) -> Self {
        Self { store, quiz }
    }
}

const ALLOWED_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PATCH,
    Method::DELETE,
    Method::OPTIONS,
];
const ALLOWED_HEADERS: [header::HeaderName; 2] = [header::CONTENT_TYPE, header::AUTHORIZATION];

/// CORS for the quiz frontend: any origin, the methods and headers it uses.
///
/// Only answers preflights with the allow lists; see [`build_router`] for
/// the copies added to every other response.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers(ALLOWED_HEADERS)
}

fn allow_methods_value() -> HeaderValue {
    HeaderValue::from_static("GET, POST, PATCH, DELETE, OPTIONS")
}

fn allow_headers_value() -> HeaderValue {
    HeaderValue::from_static("Content-Type, Authorization")
}

/// Build the application router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::categories::router())
        .merge(routes::questions::router())
        .merge(routes::quizzes::router())
        .fallback(route_not_found)
        .layer(cors_layer())
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            allow_methods_value(),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            allow_headers_value(),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::not_found("route", uri.path())
}

/// Run the HTTP server.
///
/// # Example
///
/// ```ignore
/// let store = Arc::new(PgStore::new(create_pool(&database_url).await?));
/// run_server(store, ServerConfig::default()).await?;
/// ```
pub async fn run_server(
    store: Arc<dyn TriviaStore>,
    config: ServerConfig,
) -> Result<(), ServerError> {
    tracing::info!(
        all_category_id = config.quiz.all_category_id,
        reveal_answer_with_prompt = config.quiz.reveal_answer_with_prompt,
        "Quiz config loaded"
    );
    let app = build_router(AppState::new(store, config.quiz));

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
