//! Candidate intake — handle → AI assessment → profile → signed-in candidate.
//!
//! The raw profile text is a fixed template around the handle; fetching a
//! real public profile is not part of this service.

use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use tracing::info;

use crate::gateway::FailOpen;
use crate::models::{CandidateAssessment, CandidateProfile, CandidateStatus, Role, User};
use crate::store::AppStore;

pub mod handlers;

/// Id given to the profile (and identity) that intake produces.
pub const INTAKE_CANDIDATE_ID: &str = "cand-new";

pub fn raw_profile_context(handle: &str) -> String {
    format!(
        "User: {handle}. Name: John Developer. Public Repos: 50. Top languages: TypeScript, \
         Solidity. Recent commits in 'defi-aggregator'. Resume text: Senior Engineer at FinTech \
         startup."
    )
}

pub fn avatar_url(handle: &str) -> String {
    format!("https://github.com/{handle}.png")
}

pub fn build_profile(handle: &str, assessment: CandidateAssessment) -> CandidateProfile {
    let name = assessment
        .name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| handle.to_string());

    CandidateProfile {
        id: INTAKE_CANDIDATE_ID.to_string(),
        name,
        handle: handle.to_string(),
        avatar_url: avatar_url(handle),
        summary: assessment.summary,
        match_score: assessment.match_score,
        domain_expertise: assessment.domain_expertise,
        technical_expertise: assessment.technical_expertise,
        behavioral_patterns: assessment.behavioral_patterns,
        projects: assessment.projects,
        recent_activity: String::new(),
        radar: assessment.radar,
        status: CandidateStatus::Pretraining,
        is_upskilling: None,
        learning_progress: None,
    }
}

pub fn identity_for(profile: &CandidateProfile) -> User {
    User {
        id: profile.id.clone(),
        name: profile.name.clone(),
        email: format!("{}@github.com", profile.handle),
        avatar_url: profile.avatar_url.clone(),
        role: Role::Candidate,
    }
}

/// Result of one intake run. `profile` is `None` when the handle was blank.
#[derive(Debug, Serialize)]
pub struct IntakeOutcome {
    pub profile: Option<CandidateProfile>,
    pub signed_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degraded: Option<bool>,
}

impl IntakeOutcome {
    fn skipped() -> Self {
        Self {
            profile: None,
            signed_in: false,
            degraded: None,
        }
    }
}

/// Busy flag for the intake action. At most one intake runs at a time.
#[derive(Debug, Default)]
pub struct IntakeGate {
    in_flight: AtomicBool,
}

/// Releases the gate when dropped, including when the request is cancelled.
pub struct IntakePermit<'a> {
    gate: &'a IntakeGate,
}

impl IntakeGate {
    pub fn try_acquire(&self) -> Option<IntakePermit<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| IntakePermit { gate: self })
    }
}

impl Drop for IntakePermit<'_> {
    fn drop(&mut self) {
        self.gate.in_flight.store(false, Ordering::Release);
    }
}

/// Runs the intake for `handle`. Blank handles are a no-op.
///
/// The profile becomes the session's own profile; it joins the candidate
/// pool only on its first application.
pub async fn run_intake(
    store: &AppStore,
    gateway: &FailOpen,
    handle: &str,
    overwrite_session: bool,
    surface_degraded: bool,
) -> IntakeOutcome {
    let handle = handle.trim();
    if handle.is_empty() {
        return IntakeOutcome::skipped();
    }

    let assessment = gateway
        .analyze_candidate(handle, &raw_profile_context(handle))
        .await;
    let degraded = assessment.is_fallback();
    let profile = build_profile(handle, assessment.value);
    info!(handle, name = %profile.name, match_score = profile.match_score, "Candidate profile analyzed");

    let signed_in = store
        .establish_candidate(profile.clone(), identity_for(&profile), overwrite_session)
        .await;

    IntakeOutcome {
        profile: Some(profile),
        signed_in,
        degraded: surface_degraded.then_some(degraded),
    }
}
