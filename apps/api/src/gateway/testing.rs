//! Scripted in-process gateway for flow tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::gateway::{AiGateway, GatewayError};
use crate::llm_client::LlmError;
use crate::models::{
    AnalysisResult, CandidateAssessment, EmploymentType, PostingDraft, RadarScores, SubScore,
};

/// Returns canned answers, or fails every call when `fail` is set.
/// With a `hold`, calls park until the test notifies.
pub struct ScriptedGateway {
    pub fail: bool,
    pub hold: Option<Arc<Notify>>,
    pub calls: AtomicUsize,
    pub assessment_name: Option<String>,
}

impl Default for ScriptedGateway {
    fn default() -> Self {
        Self {
            fail: false,
            hold: None,
            calls: AtomicUsize::new(0),
            assessment_name: Some("Jane Developer".to_string()),
        }
    }
}

impl ScriptedGateway {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn held(hold: Arc<Notify>) -> Self {
        Self {
            hold: Some(hold),
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn enter(&self) -> Result<(), GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(hold) = &self.hold {
            hold.notified().await;
        }
        if self.fail {
            return Err(LlmError::EmptyContent.into());
        }
        Ok(())
    }
}

pub fn sample_analysis() -> AnalysisResult {
    AnalysisResult {
        category: "DeFi".to_string(),
        inferred_tech_stack: vec!["Rust".to_string(), "Solana".to_string()],
        suggested_partners: vec!["Solana".to_string()],
        summary: "A cross-chain wallet demo.".to_string(),
    }
}

pub fn sample_draft() -> PostingDraft {
    PostingDraft {
        title: "Protocol Engineer".to_string(),
        description: "Think building Stripe, but for on-chain payroll.".to_string(),
        company_description: "We ship wallets people enjoy.".to_string(),
        requirements: vec!["Shipped a production Solana program".to_string()],
        skills: vec!["Rust".to_string(), "Anchor".to_string()],
        employment_type: EmploymentType::FullTime,
    }
}

#[async_trait]
impl AiGateway for ScriptedGateway {
    async fn analyze_context(&self, _raw_input: &str) -> Result<AnalysisResult, GatewayError> {
        self.enter().await?;
        Ok(sample_analysis())
    }

    async fn draft_posting(
        &self,
        _analysis: &AnalysisResult,
        _extra_notes: &str,
    ) -> Result<PostingDraft, GatewayError> {
        self.enter().await?;
        Ok(sample_draft())
    }

    async fn analyze_candidate(
        &self,
        _handle: &str,
        _raw_profile_data: &str,
    ) -> Result<CandidateAssessment, GatewayError> {
        self.enter().await?;
        Ok(CandidateAssessment {
            name: self.assessment_name.clone(),
            summary: "Builds trading infrastructure.".to_string(),
            match_score: 91,
            domain_expertise: SubScore::new(4, "Market microstructure"),
            technical_expertise: SubScore::new(5, "Rust, Kafka"),
            behavioral_patterns: SubScore::new(4, "Builder"),
            projects: vec![],
            radar: RadarScores::new(80, 90, 70, 85, 60),
        })
    }

    async fn ask_tutor(
        &self,
        question: &str,
        _video_context: &str,
    ) -> Result<String, GatewayError> {
        self.enter().await?;
        Ok(format!("Answer to: {question}"))
    }
}
