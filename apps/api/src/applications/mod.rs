//! The apply action and its identity/profile preconditions.

use chrono::Utc;
use tracing::info;

use crate::errors::AppError;
use crate::intake::INTAKE_CANDIDATE_ID;
use crate::models::{Application, ApplicationStatus, Role};
use crate::store::{next_application_id, seed::DEMO_CANDIDATE_ID, AppStore};

pub mod handlers;

#[derive(Debug, Clone, PartialEq)]
pub enum ApplyOutcome {
    Submitted(Application),
    /// No identity, or one that is not a candidate.
    LoginRequired,
    /// Candidate identity without an analyzed profile.
    ProfileRequired,
    UnknownJob,
}

impl ApplyOutcome {
    pub fn into_result(self) -> Result<Application, AppError> {
        match self {
            ApplyOutcome::Submitted(application) => Ok(application),
            ApplyOutcome::LoginRequired => Err(AppError::LoginRequired),
            ApplyOutcome::ProfileRequired => Err(AppError::ProfileRequired),
            ApplyOutcome::UnknownJob => Err(AppError::NotFound("Job not found".to_string())),
        }
    }
}

/// Applies the signed-in candidate to `job_id`.
///
/// An intake identity applies as its own profile, which joins the candidate
/// pool on first use. Demo identities apply as the seeded demo candidate.
pub async fn apply(store: &AppStore, job_id: &str) -> ApplyOutcome {
    let session = store.session().await;

    let Some(user) = session.user.filter(|u| u.role == Role::Candidate) else {
        return ApplyOutcome::LoginRequired;
    };
    let Some(profile) = session.own_profile else {
        return ApplyOutcome::ProfileRequired;
    };
    if store.job(job_id).await.is_none() {
        return ApplyOutcome::UnknownJob;
    }

    let candidate_id = if user.id == INTAKE_CANDIDATE_ID {
        let id = profile.id.clone();
        store.add_candidate_if_absent(profile).await;
        id
    } else {
        DEMO_CANDIDATE_ID.to_string()
    };

    let application = Application {
        id: next_application_id(),
        job_id: job_id.to_string(),
        candidate_id,
        status: ApplicationStatus::Applied,
        applied_at: Utc::now(),
    };
    store.append_application(application.clone()).await;
    info!(user_id = %user.id, job_id, "Apply completed");

    ApplyOutcome::Submitted(application)
}
