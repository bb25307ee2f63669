use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::gateway::fallback::TUTOR_NO_ANSWER;
use crate::gateway::prompts::{
    CANDIDATE_PERSONA, CANDIDATE_PROMPT, CONTEXT_ANALYSIS_PERSONA, CONTEXT_ANALYSIS_PROMPT,
    POSTING_DRAFT_PERSONA, POSTING_DRAFT_PROMPT, TUTOR_PROMPT, TUTOR_SYSTEM,
};
use crate::gateway::schema::{analysis_from_reply, assessment_from_reply, draft_from_reply};
use crate::gateway::{AiGateway, GatewayError};
use crate::llm_client::prompts::{fill, json_system};
use crate::llm_client::LlmClient;
use crate::models::{AnalysisResult, CandidateAssessment, PostingDraft};

/// `AiGateway` backed by the hosted model through `LlmClient`.
pub struct LlmGateway {
    llm: LlmClient,
}

impl LlmGateway {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl AiGateway for LlmGateway {
    async fn analyze_context(&self, raw_input: &str) -> Result<AnalysisResult, GatewayError> {
        let prompt = fill(CONTEXT_ANALYSIS_PROMPT, &[("input", raw_input)]);
        let reply: Value = self
            .llm
            .call_json(&prompt, &json_system(CONTEXT_ANALYSIS_PERSONA))
            .await?;
        let analysis = analysis_from_reply(&reply)?;
        debug!(category = %analysis.category, "Context analyzed");
        Ok(analysis)
    }

    async fn draft_posting(
        &self,
        analysis: &AnalysisResult,
        extra_notes: &str,
    ) -> Result<PostingDraft, GatewayError> {
        let tech_stack = analysis.inferred_tech_stack.join(", ");
        let prompt = fill(
            POSTING_DRAFT_PROMPT,
            &[
                ("category", analysis.category.as_str()),
                ("tech_stack", tech_stack.as_str()),
                ("summary", analysis.summary.as_str()),
                ("notes", extra_notes),
            ],
        );
        let reply: Value = self
            .llm
            .call_json(&prompt, &json_system(POSTING_DRAFT_PERSONA))
            .await?;
        let draft = draft_from_reply(&reply)?;
        debug!(title = %draft.title, "Posting drafted");
        Ok(draft)
    }

    async fn analyze_candidate(
        &self,
        handle: &str,
        raw_profile_data: &str,
    ) -> Result<CandidateAssessment, GatewayError> {
        let prompt = fill(
            CANDIDATE_PROMPT,
            &[("handle", handle), ("raw_data", raw_profile_data)],
        );
        let reply: Value = self
            .llm
            .call_json(&prompt, &json_system(CANDIDATE_PERSONA))
            .await?;
        let assessment = assessment_from_reply(&reply)?;
        debug!(handle, match_score = assessment.match_score, "Candidate assessed");
        Ok(assessment)
    }

    async fn ask_tutor(&self, question: &str, video_context: &str) -> Result<String, GatewayError> {
        let prompt = fill(
            TUTOR_PROMPT,
            &[("context", video_context), ("question", question)],
        );
        let answer = self.llm.call_text(&prompt, TUTOR_SYSTEM).await?;
        Ok(answer.unwrap_or_else(|| TUTOR_NO_ANSWER.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::FailOpen;
    use serde_json::json;
    use std::sync::Arc;
    use wiremock::matchers::{body_string_contains, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn reply_with(text: &str) -> Value {
        json!({
            "content": [{"type": "text", "text": text}],
            "usage": {"input_tokens": 1, "output_tokens": 1}
        })
    }

    async fn gateway_for(server: &MockServer) -> LlmGateway {
        let llm = LlmClient::new(Some("test-key".to_string()))
            .unwrap()
            .with_api_url(format!("{}/v1/messages", server.uri()));
        LlmGateway::new(llm)
    }

    #[tokio::test]
    async fn test_analyze_context_sends_input_and_decodes_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_string_contains("USDC payouts for creators"))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply_with(
                r#"{"category": "Fintech", "inferred_tech_stack": ["TypeScript"], "summary": "Creator payouts."}"#,
            )))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = gateway_for(&server).await;
        let analysis = gateway
            .analyze_context("USDC payouts for creators")
            .await
            .unwrap();
        assert_eq!(analysis.category, "Fintech");
        assert!(analysis.suggested_partners.is_empty());
    }

    #[tokio::test]
    async fn test_draft_posting_includes_analysis_in_prompt() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_string_contains("Rust, Kafka"))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply_with(
                r#"{"title": "Streaming Engineer", "skills": ["Rust"], "type": "Remote"}"#,
            )))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server).await;
        let analysis = AnalysisResult {
            category: "Fintech".to_string(),
            inferred_tech_stack: vec!["Rust".to_string(), "Kafka".to_string()],
            suggested_partners: vec![],
            summary: "Market data feed.".to_string(),
        };
        let draft = gateway.draft_posting(&analysis, "small team").await.unwrap();
        assert_eq!(draft.title, "Streaming Engineer");
        assert_eq!(draft.skills, vec!["Rust"]);
    }

    #[tokio::test]
    async fn test_blank_tutor_reply_becomes_no_answer_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply_with("")))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server).await;
        let answer = gateway.ask_tutor("why?", "Rust").await.unwrap();
        assert_eq!(answer, TUTOR_NO_ANSWER);
    }

    #[tokio::test]
    async fn test_prose_reply_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply_with("not json")))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server).await;
        let err = gateway.analyze_context("anything").await.unwrap_err();
        assert!(matches!(err, GatewayError::Parse(_)));
    }

    #[tokio::test]
    async fn test_array_reply_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply_with("[1, 2]")))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server).await;
        let err = gateway.analyze_candidate("octocat", "raw").await.unwrap_err();
        assert!(matches!(err, GatewayError::Parse(_)));
    }

    #[tokio::test]
    async fn test_malformed_reply_takes_fallback_path() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply_with("not json")))
            .mount(&server)
            .await;

        let gateway = FailOpen::new(Arc::new(gateway_for(&server).await));
        let analysis = gateway.analyze_context("anything").await;
        assert!(analysis.is_fallback());
        assert_eq!(analysis.value.category, "General Software");
    }
}
