use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::applications::apply;
use crate::errors::AppError;
use crate::models::{Application, CandidateProfile, JobPosting};
use crate::state::AppState;

/// GET /api/v1/jobs
///
/// Newest postings first.
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<Vec<JobPosting>> {
    Json(state.store.jobs().await)
}

/// GET /api/v1/candidates
pub async fn handle_list_candidates(State(state): State<AppState>) -> Json<Vec<CandidateProfile>> {
    Json(state.store.candidates().await)
}

/// GET /api/v1/applications
pub async fn handle_list_applications(State(state): State<AppState>) -> Json<Vec<Application>> {
    Json(state.store.applications().await)
}

/// POST /api/v1/jobs/:id/apply
///
/// 401 without a candidate identity, 428 before onboarding.
pub async fn handle_apply(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<(StatusCode, Json<Application>), AppError> {
    let application = apply(&state.store, &job_id).await.into_result()?;
    Ok((StatusCode::CREATED, Json(application)))
}
