//! Axum route handlers for the generation API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::display::DisplayView;
use crate::errors::AppError;
use crate::generation::prompt_builder::build_prompt;
use crate::generation::trigger::trigger_generation;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PromptPreview {
    pub prompt: String,
}

/// POST /api/v1/resume/generate
///
/// Runs one generation attempt against the current draft and returns the
/// settled display view. Provider and configuration failures come back as an
/// error pane with status 200; only an overlapping trigger is rejected (409).
pub async fn handle_generate(State(state): State<AppState>) -> Result<Json<DisplayView>, AppError> {
    let view = trigger_generation(&state.form, state.display.clone(), state.generator.clone()).await?;
    Ok(Json(view))
}

/// GET /api/v1/resume/display
pub async fn handle_get_display(State(state): State<AppState>) -> Json<DisplayView> {
    Json(state.display.read().await.view())
}

/// GET /api/v1/draft/prompt
///
/// Returns the exact prompt the next generation would send.
pub async fn handle_preview_prompt(State(state): State<AppState>) -> Json<PromptPreview> {
    let draft = state.form.read().await.snapshot();
    Json(PromptPreview {
        prompt: build_prompt(&draft),
    })
}
