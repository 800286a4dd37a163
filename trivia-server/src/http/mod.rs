//! HTTP server layer
//!
//! Axum server with:
//! - Permissive CORS
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses (404 / 422 only)

pub mod error;
pub mod extractors;
pub mod params;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, cors_layer, run_server, AppState, ServerError};
