pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers::handle_generate_resume;
use crate::render::handlers::handle_render_resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/generate-resume", post(handle_generate_resume))
        .route("/api/render-resume", post(handle_render_resume))
        .with_state(state)
}
