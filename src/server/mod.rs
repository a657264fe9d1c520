//! HTTP server setup and routing.

mod routes;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::detector::EmotionDetector;

/// Shared application state passed to all handlers.
///
/// Constructed once at startup; handlers hold no mutable state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub detector: Arc<EmotionDetector>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let detector = EmotionDetector::new(&config.watson);
        Self {
            config: Arc::new(config),
            detector: Arc::new(detector),
        }
    }
}

/// Build the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/emotionDetector", get(routes::detect_emotion))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
