//! Axum route handlers for the draft (form) API.
//!
//! Each mutation answers with the draft snapshot that results from it, so the
//! form can re-render without a second round trip.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{EducationField, ExperienceField, ResumeDraft, ScalarField};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct FieldUpdate<F> {
    pub field: F,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct EntryCreated {
    pub id: Uuid,
    pub draft: Arc<ResumeDraft>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/draft
pub async fn handle_get_draft(State(state): State<AppState>) -> Json<Arc<ResumeDraft>> {
    Json(state.form.read().await.snapshot())
}

/// PUT /api/v1/draft/fields
pub async fn handle_update_field(
    State(state): State<AppState>,
    payload: Result<Json<FieldUpdate<ScalarField>>, JsonRejection>,
) -> Result<Json<Arc<ResumeDraft>>, AppError> {
    let Json(req) = payload?;
    let mut form = state.form.write().await;
    form.update_field(req.field, req.value);
    Ok(Json(form.snapshot()))
}

/// POST /api/v1/draft/experience
pub async fn handle_add_experience(State(state): State<AppState>) -> Json<EntryCreated> {
    let mut form = state.form.write().await;
    let id = form.add_experience();
    Json(EntryCreated {
        id,
        draft: form.snapshot(),
    })
}

/// PATCH /api/v1/draft/experience/:id
///
/// An unknown id leaves the draft unchanged and still answers 200.
pub async fn handle_update_experience(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<FieldUpdate<ExperienceField>>, JsonRejection>,
) -> Result<Json<Arc<ResumeDraft>>, AppError> {
    let Path(id) = id?;
    let Json(req) = payload?;
    let mut form = state.form.write().await;
    form.update_experience_field(id, req.field, req.value);
    Ok(Json(form.snapshot()))
}

/// DELETE /api/v1/draft/experience/:id
pub async fn handle_remove_experience(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Arc<ResumeDraft>>, AppError> {
    let Path(id) = id?;
    let mut form = state.form.write().await;
    form.remove_experience(id);
    Ok(Json(form.snapshot()))
}

/// POST /api/v1/draft/education
pub async fn handle_add_education(State(state): State<AppState>) -> Json<EntryCreated> {
    let mut form = state.form.write().await;
    let id = form.add_education();
    Json(EntryCreated {
        id,
        draft: form.snapshot(),
    })
}

/// PATCH /api/v1/draft/education/:id
pub async fn handle_update_education(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<FieldUpdate<EducationField>>, JsonRejection>,
) -> Result<Json<Arc<ResumeDraft>>, AppError> {
    let Path(id) = id?;
    let Json(req) = payload?;
    let mut form = state.form.write().await;
    form.update_education_field(id, req.field, req.value);
    Ok(Json(form.snapshot()))
}

/// DELETE /api/v1/draft/education/:id
pub async fn handle_remove_education(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Arc<ResumeDraft>>, AppError> {
    let Path(id) = id?;
    let mut form = state.form.write().await;
    form.remove_education(id);
    Ok(Json(form.snapshot()))
}
