use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of an application. Only `Applied` is ever assigned here; the
/// other states exist for recruiter tooling that moves applications along.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    #[default]
    Applied,
    Reviewing,
    Interview,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub job_id: String,
    pub candidate_id: String,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}
