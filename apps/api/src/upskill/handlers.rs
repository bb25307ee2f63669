use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{ChatMessage, LearningModule};
use crate::state::AppState;
use crate::upskill::{chat, recommend_module};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub module_id: String,
    pub question: String,
}

/// GET /api/v1/upskill/modules
pub async fn handle_list_modules(State(state): State<AppState>) -> Json<Vec<LearningModule>> {
    Json(state.store.modules().to_vec())
}

/// GET /api/v1/jobs/:id/upskill
pub async fn handle_recommend(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<LearningModule>, AppError> {
    let job = state
        .store
        .job(&job_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;

    recommend_module(&state.store, &job)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No learning module available".to_string()))
}

/// GET /api/v1/upskill/chat
pub async fn handle_get_transcript(State(state): State<AppState>) -> Json<Vec<ChatMessage>> {
    Json(state.store.transcript().await)
}

/// POST /api/v1/upskill/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<Vec<ChatMessage>>, AppError> {
    let transcript = chat(&state.store, &state.gateway, &req.module_id, &req.question).await?;
    Ok(Json(transcript))
}
