use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::intake::{run_intake, IntakeOutcome};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct IntakeRequest {
    pub handle: String,
}

/// POST /api/v1/intake
///
/// Analyzes a GitHub-style handle and signs the candidate in.
pub async fn handle_intake(
    State(state): State<AppState>,
    Json(req): Json<IntakeRequest>,
) -> Result<Json<IntakeOutcome>, AppError> {
    let _permit = state
        .intake_gate
        .try_acquire()
        .ok_or_else(|| AppError::Busy("a profile analysis is already running".to_string()))?;

    let outcome = run_intake(
        &state.store,
        &state.gateway,
        &req.handle,
        state.config.intake_overwrites_session,
        state.config.surface_degraded_ai,
    )
    .await;

    Ok(Json(outcome))
}
