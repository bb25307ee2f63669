//! Axum route handlers for the posting wizard.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::JobPosting;
use crate::state::AppState;
use crate::wizard::machine::{AnalyzeInput, DetailsForm};
use crate::wizard::registry::WizardHandle;
use crate::wizard::{self, WizardView};

#[derive(Debug, Deserialize)]
pub struct SkillRequest {
    pub skill: String,
}

#[derive(Debug, Serialize)]
pub struct PublishResponse {
    pub posting: JobPosting,
    pub wizard: WizardView,
}

async fn find(state: &AppState, id: Uuid) -> Result<WizardHandle, AppError> {
    state
        .wizards
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Wizard {id} not found")))
}

async fn view(state: &AppState, id: Uuid, handle: &WizardHandle) -> Json<WizardView> {
    let wizard = handle.lock().await;
    Json(WizardView::of(id, &wizard, state.config.surface_degraded_ai))
}

/// POST /api/v1/wizards
pub async fn handle_create(State(state): State<AppState>) -> (StatusCode, Json<WizardView>) {
    let (id, handle) = state.wizards.create().await;
    (StatusCode::CREATED, view(&state, id, &handle).await)
}

/// GET /api/v1/wizards/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WizardView>, AppError> {
    let handle = find(&state, id).await?;
    Ok(view(&state, id, &handle).await)
}

/// DELETE /api/v1/wizards/:id
///
/// Closes the screen's session; later calls with this id are 404.
pub async fn handle_close(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.wizards.close(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Wizard {id} not found")))
    }
}

/// POST /api/v1/wizards/:id/analyze
///
/// Blank input leaves the wizard where it is.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<AnalyzeInput>,
) -> Result<Json<WizardView>, AppError> {
    let handle = find(&state, id).await?;
    wizard::analyze(handle.clone(), state.gateway.clone(), input).await?;
    Ok(view(&state, id, &handle).await)
}

/// POST /api/v1/wizards/:id/confirm
pub async fn handle_confirm(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WizardView>, AppError> {
    let handle = find(&state, id).await?;
    wizard::confirm(&handle).await?;
    Ok(view(&state, id, &handle).await)
}

/// POST /api/v1/wizards/:id/generate
pub async fn handle_generate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(details): Json<DetailsForm>,
) -> Result<Json<WizardView>, AppError> {
    let handle = find(&state, id).await?;
    wizard::generate(handle.clone(), state.gateway.clone(), details).await?;
    Ok(view(&state, id, &handle).await)
}

/// POST /api/v1/wizards/:id/skills
pub async fn handle_add_skill(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SkillRequest>,
) -> Result<Json<WizardView>, AppError> {
    let handle = find(&state, id).await?;
    handle.lock().await.add_skill(&req.skill)?;
    Ok(view(&state, id, &handle).await)
}

/// DELETE /api/v1/wizards/:id/skills/:skill
pub async fn handle_remove_skill(
    State(state): State<AppState>,
    Path((id, skill)): Path<(Uuid, String)>,
) -> Result<Json<WizardView>, AppError> {
    let handle = find(&state, id).await?;
    handle.lock().await.remove_skill(&skill)?;
    Ok(view(&state, id, &handle).await)
}

/// POST /api/v1/wizards/:id/publish
pub async fn handle_publish(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<PublishResponse>), AppError> {
    let handle = find(&state, id).await?;
    let posting = wizard::publish(&handle, &state.store).await?;
    let Json(wizard) = view(&state, id, &handle).await;
    Ok((StatusCode::CREATED, Json(PublishResponse { posting, wizard })))
}

/// POST /api/v1/wizards/:id/abandon
pub async fn handle_abandon(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WizardView>, AppError> {
    let handle = find(&state, id).await?;
    handle.lock().await.abandon();
    Ok(view(&state, id, &handle).await)
}
