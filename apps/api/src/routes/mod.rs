pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::pipeline::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/predict/resume_text", post(handlers::handle_predict_text))
        .route(
            "/pipeline/analyze_resume",
            post(handlers::handle_analyze_resume),
        )
        .with_state(state)
}
