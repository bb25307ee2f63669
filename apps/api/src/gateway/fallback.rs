//! Fixed answers used whenever the AI service fails. These are product copy:
//! clients cannot tell them apart from real answers, so keep them stable.

use crate::models::{
    AnalysisResult, CandidateAssessment, EmploymentType, PostingDraft, RadarScores, SubScore,
};

pub const TUTOR_UNAVAILABLE: &str = "I'm having trouble connecting to the AI. Please try again.";

/// Used when the tutor call succeeds but returns no text.
pub const TUTOR_NO_ANSWER: &str = "I couldn't generate an answer right now.";

/// Per-axis radar defaults when a real assessment leaves an axis out.
pub const RADAR_AXIS_DEFAULTS: RadarScores = RadarScores::new(70, 80, 60, 75, 65);

const FALLBACK_RADAR: RadarScores = RadarScores::new(85, 90, 60, 80, 75);

pub fn analysis() -> AnalysisResult {
    AnalysisResult {
        category: "General Software".to_string(),
        inferred_tech_stack: vec!["React".to_string(), "Node.js".to_string()],
        suggested_partners: vec![],
        summary: "A software product walkthrough.".to_string(),
    }
}

pub fn posting_draft() -> PostingDraft {
    PostingDraft {
        title: "Senior Engineer".to_string(),
        description: "Join us to build the future.".to_string(),
        company_description: "We are an innovative startup.".to_string(),
        requirements: vec!["5+ years experience".to_string()],
        skills: vec!["React".to_string(), "TypeScript".to_string()],
        employment_type: EmploymentType::FullTime,
    }
}

pub fn candidate_assessment(handle: &str) -> CandidateAssessment {
    CandidateAssessment {
        name: Some(handle.to_string()),
        summary: "Senior Engineer with strong focus on scalable backend systems.".to_string(),
        match_score: 88,
        domain_expertise: SubScore::new(4, "FinTech & Healthcare data systems."),
        technical_expertise: SubScore::new(5, "Mastery of TypeScript, Rust, and Solidity."),
        behavioral_patterns: SubScore::new(3, "High consistency, documentation-first approach."),
        projects: vec![],
        radar: FALLBACK_RADAR,
    }
}
