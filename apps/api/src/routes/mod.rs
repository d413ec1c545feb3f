pub mod health;

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::form::handlers as form;
use crate::generation::handlers as generation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Draft API
        .route("/api/v1/draft", get(form::handle_get_draft))
        .route("/api/v1/draft/fields", put(form::handle_update_field))
        .route("/api/v1/draft/prompt", get(generation::handle_preview_prompt))
        .route("/api/v1/draft/experience", post(form::handle_add_experience))
        .route(
            "/api/v1/draft/experience/:id",
            patch(form::handle_update_experience).delete(form::handle_remove_experience),
        )
        .route("/api/v1/draft/education", post(form::handle_add_education))
        .route(
            "/api/v1/draft/education/:id",
            patch(form::handle_update_education).delete(form::handle_remove_education),
        )
        // Resume API
        .route("/api/v1/resume/generate", post(generation::handle_generate))
        .route("/api/v1/resume/display", get(generation::handle_get_display))
        .with_state(state)
}
