//! Upskill — learning catalog, partner-based recommendation and the tutor chat.

use tracing::info;

use crate::errors::AppError;
use crate::gateway::FailOpen;
use crate::models::{ChatMessage, JobPosting, LearningModule, TechPartner};
use crate::store::AppStore;

pub mod handlers;

fn recommended_module_id(partner: Option<TechPartner>) -> &'static str {
    match partner {
        Some(TechPartner::Circle) => "2",
        Some(TechPartner::Autodesk) => "3",
        _ => "1",
    }
}

/// The module a candidate should watch before applying to `job`.
pub fn recommend_module<'a>(store: &'a AppStore, job: &JobPosting) -> Option<&'a LearningModule> {
    store.module(recommended_module_id(job.tech_partner))
}

/// Asks the tutor about `module_id` and records both sides in the transcript.
/// Blank questions are ignored. Returns the transcript afterwards.
///
/// The question is recorded together with its answer, so concurrent chats
/// never interleave.
pub async fn chat(
    store: &AppStore,
    gateway: &FailOpen,
    module_id: &str,
    question: &str,
) -> Result<Vec<ChatMessage>, AppError> {
    let module = store
        .module(module_id)
        .ok_or_else(|| AppError::NotFound(format!("Learning module {module_id} not found")))?;

    let question = question.trim();
    if question.is_empty() {
        return Ok(store.transcript().await);
    }

    let answer = gateway.ask_tutor(question, &module.tutor_context()).await;
    info!(module_id, fallback = answer.is_fallback(), "Tutor answered");
    store
        .push_exchange(ChatMessage::user(question), ChatMessage::bot(answer.value))
        .await;

    Ok(store.transcript().await)
}
