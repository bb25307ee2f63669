//! Process-wide in-memory state: postings, candidates, applications, the
//! current session and the tutor transcript. Nothing here survives a restart.
//!
//! Every mutation goes through an `AppStore` method; each collection sits
//! behind its own async `RwLock`, so concurrent gateway completions cannot
//! race on append.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::info;

use crate::models::{Application, CandidateProfile, ChatMessage, JobPosting, LearningModule, User};

pub mod seed;

pub const TUTOR_GREETING: &str = "Hi! I'm ChatPye. Ask me anything about this video.";

static ID_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_id(prefix: &str) -> String {
    let seq = ID_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{}-{seq}", Utc::now().timestamp_millis())
}

pub fn next_posting_id() -> String {
    next_id("job")
}

pub fn next_application_id() -> String {
    next_id("app")
}

/// The single signed-in identity plus the profile its intake produced.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Session {
    pub user: Option<User>,
    pub own_profile: Option<CandidateProfile>,
}

pub struct AppStore {
    jobs: RwLock<Vec<JobPosting>>,
    candidates: RwLock<Vec<CandidateProfile>>,
    applications: RwLock<Vec<Application>>,
    session: RwLock<Session>,
    transcript: RwLock<Vec<ChatMessage>>,
    modules: Vec<LearningModule>,
}

impl AppStore {
    pub fn new(
        jobs: Vec<JobPosting>,
        candidates: Vec<CandidateProfile>,
        modules: Vec<LearningModule>,
    ) -> Self {
        Self {
            jobs: RwLock::new(jobs),
            candidates: RwLock::new(candidates),
            applications: RwLock::new(Vec::new()),
            session: RwLock::new(Session::default()),
            transcript: RwLock::new(vec![ChatMessage::bot(TUTOR_GREETING)]),
            modules,
        }
    }

    /// Store preloaded with the demo board.
    pub fn seeded() -> Self {
        Self::new(seed::jobs(), seed::candidates(), seed::learning_modules())
    }

    // ── postings ───────────────────────────────────────────────────────────

    pub async fn jobs(&self) -> Vec<JobPosting> {
        self.jobs.read().await.clone()
    }

    pub async fn job(&self, id: &str) -> Option<JobPosting> {
        self.jobs.read().await.iter().find(|j| j.id == id).cloned()
    }

    /// Newest postings are listed first.
    pub async fn publish_job(&self, posting: JobPosting) {
        info!(job_id = %posting.id, title = %posting.title, "Posting published");
        self.jobs.write().await.insert(0, posting);
    }

    // ── candidates & applications ──────────────────────────────────────────

    pub async fn candidates(&self) -> Vec<CandidateProfile> {
        self.candidates.read().await.clone()
    }

    /// Prepends `profile` unless a candidate with the same id exists.
    /// Returns whether it was inserted.
    pub async fn add_candidate_if_absent(&self, profile: CandidateProfile) -> bool {
        let mut candidates = self.candidates.write().await;
        if candidates.iter().any(|c| c.id == profile.id) {
            return false;
        }
        info!(candidate_id = %profile.id, "Candidate added to pool");
        candidates.insert(0, profile);
        true
    }

    pub async fn applications(&self) -> Vec<Application> {
        self.applications.read().await.clone()
    }

    pub async fn append_application(&self, application: Application) {
        info!(
            application_id = %application.id,
            job_id = %application.job_id,
            candidate_id = %application.candidate_id,
            "Application submitted"
        );
        self.applications.write().await.push(application);
    }

    // ── session ────────────────────────────────────────────────────────────

    pub async fn session(&self) -> Session {
        self.session.read().await.clone()
    }

    /// Replaces the current identity wholesale.
    pub async fn set_identity(&self, user: User) {
        info!(user_id = %user.id, role = ?user.role, "Identity established");
        self.session.write().await.user = Some(user);
    }

    /// Records an intake profile and signs its candidate in. An existing
    /// identity is replaced only when `overwrite` is set. Returns whether the
    /// candidate identity is now the live one.
    pub async fn establish_candidate(
        &self,
        profile: CandidateProfile,
        user: User,
        overwrite: bool,
    ) -> bool {
        let mut session = self.session.write().await;
        session.own_profile = Some(profile);
        if session.user.is_some() && !overwrite {
            info!("Existing identity kept after intake");
            return false;
        }
        info!(user_id = %user.id, "Candidate identity established from intake");
        session.user = Some(user);
        true
    }

    pub async fn clear_session(&self) {
        *self.session.write().await = Session::default();
        info!("Session cleared");
    }

    // ── upskill ────────────────────────────────────────────────────────────

    pub fn modules(&self) -> &[LearningModule] {
        &self.modules
    }

    pub fn module(&self, id: &str) -> Option<&LearningModule> {
        self.modules.iter().find(|m| m.id == id)
    }

    pub async fn transcript(&self) -> Vec<ChatMessage> {
        self.transcript.read().await.clone()
    }

    /// Appends a question and its answer as one adjacent pair.
    pub async fn push_exchange(&self, question: ChatMessage, answer: ChatMessage) {
        let mut transcript = self.transcript.write().await;
        transcript.push(question);
        transcript.push(answer);
    }
}
