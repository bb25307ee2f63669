use axum::{extract::State, Json};
use serde::Deserialize;

use crate::models::Role;
use crate::state::AppState;
use crate::store::Session;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub role: Role,
}

/// GET /api/v1/session
pub async fn handle_get_session(State(state): State<AppState>) -> Json<Session> {
    Json(state.store.session().await)
}

/// POST /api/v1/session/login
///
/// Replaces whatever identity was live. An intake profile already on the
/// session is kept.
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Json<Session> {
    let user = state.identity.login(req.role);
    state.store.set_identity(user).await;
    Json(state.store.session().await)
}

/// POST /api/v1/session/logout
pub async fn handle_logout(State(state): State<AppState>) -> Json<Session> {
    state.store.clear_session().await;
    Json(state.store.session().await)
}
