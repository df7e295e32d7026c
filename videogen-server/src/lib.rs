pub mod config;
pub mod device;
pub mod engine;
pub mod routes;
pub mod state;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the service router. CORS and tracing layers are applied by the
/// binary so tests can drive the bare router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/generate-video", post(routes::generate_video))
        .route("/video-models", get(routes::video_models))
        .route("/generate-video-preview", post(routes::generate_video_preview))
        .route("/health", get(routes::health))
        .with_state(state)
}
