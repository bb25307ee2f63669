//! AI Gateway — the four structured operations the product asks of the AI service.
//!
//! `AiGateway` implementations return `Result` and never hide a failure.
//! `FailOpen` is the thin adapter the flows actually call: it substitutes the
//! fixed fallback value on any error and tags the answer with its `Source`,
//! so the substitution stays visible to tests and (optionally) to clients.
//!
//! `AppState` holds a `FailOpen` over an `Arc<dyn AiGateway>`.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::llm_client::LlmError;
use crate::models::{AnalysisResult, CandidateAssessment, PostingDraft};

pub mod fallback;
pub mod llm;
pub mod prompts;
pub mod schema;

#[cfg(test)]
pub mod testing;

pub use llm::LlmGateway;

// ────────────────────────────────────────────────────────────────────────────
// Errors
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum GatewayError {
    /// The AI service could not be reached or refused the call.
    #[error("AI service call failed: {0}")]
    Service(LlmError),

    /// The service answered, but not with the JSON the operation expects.
    #[error("AI reply could not be parsed: {0}")]
    Parse(String),
}

impl From<LlmError> for GatewayError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::Parse(err) => GatewayError::Parse(err.to_string()),
            LlmError::EmptyContent => GatewayError::Parse("empty reply".to_string()),
            other => GatewayError::Service(other),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The AI operations. Each call is stateless and independently retryable by
/// the caller; implementations do not retry at this layer.
///
/// Malformed replies are `GatewayError::Parse` and take the same fallback
/// path as transport failures.
#[async_trait]
pub trait AiGateway: Send + Sync {
    /// Video reference / notes → topic summary.
    async fn analyze_context(&self, raw_input: &str) -> Result<AnalysisResult, GatewayError>;

    /// Topic summary + recruiter notes → structured posting draft.
    async fn draft_posting(
        &self,
        analysis: &AnalysisResult,
        extra_notes: &str,
    ) -> Result<PostingDraft, GatewayError>;

    /// Handle + raw profile text → candidate assessment.
    async fn analyze_candidate(
        &self,
        handle: &str,
        raw_profile_data: &str,
    ) -> Result<CandidateAssessment, GatewayError>;

    /// Single-turn tutoring answer about the video being watched.
    async fn ask_tutor(&self, question: &str, video_context: &str) -> Result<String, GatewayError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Fail-open adapter
// ────────────────────────────────────────────────────────────────────────────

/// Where an answer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Generated,
    Fallback,
}

/// A gateway answer tagged with its source.
#[derive(Debug, Clone, PartialEq)]
pub struct Assisted<T> {
    pub value: T,
    pub source: Source,
}

impl<T> Assisted<T> {
    pub fn generated(value: T) -> Self {
        Self {
            value,
            source: Source::Generated,
        }
    }

    pub fn fallback(value: T) -> Self {
        Self {
            value,
            source: Source::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == Source::Fallback
    }
}

/// Substitutes fixed fallback values for gateway failures. Never errors.
#[derive(Clone)]
pub struct FailOpen {
    inner: Arc<dyn AiGateway>,
}

impl FailOpen {
    pub fn new(inner: Arc<dyn AiGateway>) -> Self {
        Self { inner }
    }

    pub async fn analyze_context(&self, raw_input: &str) -> Assisted<AnalysisResult> {
        match self.inner.analyze_context(raw_input).await {
            Ok(analysis) => Assisted::generated(analysis),
            Err(e) => {
                warn!("Context analysis failed, using fallback: {e}");
                Assisted::fallback(fallback::analysis())
            }
        }
    }

    pub async fn draft_posting(
        &self,
        analysis: &AnalysisResult,
        extra_notes: &str,
    ) -> Assisted<PostingDraft> {
        match self.inner.draft_posting(analysis, extra_notes).await {
            Ok(draft) => Assisted::generated(draft),
            Err(e) => {
                warn!("Posting draft failed, using fallback: {e}");
                Assisted::fallback(fallback::posting_draft())
            }
        }
    }

    pub async fn analyze_candidate(
        &self,
        handle: &str,
        raw_profile_data: &str,
    ) -> Assisted<CandidateAssessment> {
        match self.inner.analyze_candidate(handle, raw_profile_data).await {
            Ok(assessment) => Assisted::generated(assessment),
            Err(e) => {
                warn!(handle, "Candidate analysis failed, using fallback: {e}");
                Assisted::fallback(fallback::candidate_assessment(handle))
            }
        }
    }

    pub async fn ask_tutor(&self, question: &str, video_context: &str) -> Assisted<String> {
        match self.inner.ask_tutor(question, video_context).await {
            Ok(answer) => Assisted::generated(answer),
            Err(e) => {
                warn!("Tutor call failed, using fallback: {e}");
                Assisted::fallback(fallback::TUTOR_UNAVAILABLE.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ScriptedGateway;
    use super::*;

    #[tokio::test]
    async fn test_failing_gateway_yields_fixed_analysis_every_time() {
        let gateway = FailOpen::new(Arc::new(ScriptedGateway::failing()));

        let first = gateway.analyze_context("anything").await;
        let second = gateway.analyze_context("something else").await;

        assert!(first.is_fallback());
        assert_eq!(first.value, fallback::analysis());
        assert_eq!(first, second);
        assert_eq!(first.value.category, "General Software");
    }

    #[tokio::test]
    async fn test_failing_gateway_yields_fixed_draft() {
        let gateway = FailOpen::new(Arc::new(ScriptedGateway::failing()));
        let draft = gateway
            .draft_posting(&fallback::analysis(), "notes")
            .await;
        assert!(draft.is_fallback());
        assert_eq!(draft.value.title, "Senior Engineer");
        assert_eq!(draft.value.skills, vec!["React", "TypeScript"]);
    }

    #[tokio::test]
    async fn test_failing_gateway_yields_handle_named_assessment() {
        let gateway = FailOpen::new(Arc::new(ScriptedGateway::failing()));
        let assessment = gateway.analyze_candidate("octocat", "raw").await;
        assert!(assessment.is_fallback());
        assert_eq!(assessment.value.name.as_deref(), Some("octocat"));
        assert_eq!(assessment.value.match_score, 88);
        assert_eq!(assessment.value, fallback::candidate_assessment("octocat"));
    }

    #[tokio::test]
    async fn test_failing_gateway_yields_apology() {
        let gateway = FailOpen::new(Arc::new(ScriptedGateway::failing()));
        let answer = gateway.ask_tutor("what is a lifetime?", "Rust").await;
        assert!(answer.is_fallback());
        assert_eq!(answer.value, fallback::TUTOR_UNAVAILABLE);
    }

    #[test]
    fn test_reply_decoding_errors_map_to_parse() {
        let bad_json = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        assert!(matches!(
            GatewayError::from(LlmError::Parse(bad_json)),
            GatewayError::Parse(_)
        ));
        assert!(matches!(
            GatewayError::from(LlmError::EmptyContent),
            GatewayError::Parse(_)
        ));
    }

    #[test]
    fn test_transport_errors_map_to_service() {
        let err = GatewayError::from(LlmError::Api {
            status: 503,
            message: "overloaded".to_string(),
        });
        assert!(matches!(
            err,
            GatewayError::Service(LlmError::Api { status: 503, .. })
        ));
        assert!(matches!(
            GatewayError::from(LlmError::MissingApiKey),
            GatewayError::Service(LlmError::MissingApiKey)
        ));
    }

    #[tokio::test]
    async fn test_successful_gateway_is_tagged_generated() {
        let gateway = FailOpen::new(Arc::new(ScriptedGateway::default()));
        let analysis = gateway.analyze_context("crypto wallet demo").await;
        assert_eq!(analysis.source, Source::Generated);
        assert_eq!(analysis.value.category, "DeFi");
    }
}
