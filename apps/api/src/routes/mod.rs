pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::applications::handlers as applications;
use crate::auth::handlers as auth;
use crate::intake::handlers as intake;
use crate::state::AppState;
use crate::upskill::handlers as upskill;
use crate::wizard::handlers as wizard;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Board
        .route("/api/v1/jobs", get(applications::handle_list_jobs))
        .route("/api/v1/candidates", get(applications::handle_list_candidates))
        .route(
            "/api/v1/applications",
            get(applications::handle_list_applications),
        )
        .route("/api/v1/jobs/:id/apply", post(applications::handle_apply))
        // Session
        .route("/api/v1/session", get(auth::handle_get_session))
        .route("/api/v1/session/login", post(auth::handle_login))
        .route("/api/v1/session/logout", post(auth::handle_logout))
        // Posting wizard
        .route("/api/v1/wizards", post(wizard::handle_create))
        .route(
            "/api/v1/wizards/:id",
            get(wizard::handle_get).delete(wizard::handle_close),
        )
        .route("/api/v1/wizards/:id/analyze", post(wizard::handle_analyze))
        .route("/api/v1/wizards/:id/confirm", post(wizard::handle_confirm))
        .route("/api/v1/wizards/:id/generate", post(wizard::handle_generate))
        .route("/api/v1/wizards/:id/skills", post(wizard::handle_add_skill))
        .route(
            "/api/v1/wizards/:id/skills/:skill",
            delete(wizard::handle_remove_skill),
        )
        .route("/api/v1/wizards/:id/publish", post(wizard::handle_publish))
        .route("/api/v1/wizards/:id/abandon", post(wizard::handle_abandon))
        // Candidate intake
        .route("/api/v1/intake", post(intake::handle_intake))
        // Upskill
        .route("/api/v1/upskill/modules", get(upskill::handle_list_modules))
        .route("/api/v1/jobs/:id/upskill", get(upskill::handle_recommend))
        .route(
            "/api/v1/upskill/chat",
            get(upskill::handle_get_transcript).post(upskill::handle_chat),
        )
        .with_state(state)
}
