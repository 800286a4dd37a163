//! Server configuration

use std::net::SocketAddr;

/// Default bind address
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:5000)
    pub bind_addr: SocketAddr,

    /// Quiz behaviour
    pub quiz: QuizConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            quiz: QuizConfig::default(),
        }
    }
}

/// Quiz endpoint behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizConfig {
    /// Category id the frontend sends for "All" (matches any category)
    pub all_category_id: i64,

    /// Include the answer in the quiz prompt payload.
    ///
    /// When false the player fetches it from `GET /questions/{id}/answer`.
    pub reveal_answer_with_prompt: bool,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            all_category_id: 0,
            reveal_answer_with_prompt: true,
        }
    }
}
