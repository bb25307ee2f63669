use serde::{Deserialize, Serialize};

/// A 1–5 rating with a short justification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubScore {
    pub score: u8,
    pub description: String,
}

impl SubScore {
    pub fn new(score: u8, description: impl Into<String>) -> Self {
        Self {
            score,
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub tech_stack: Vec<String>,
}

/// The fixed five-axis radar chart. Every axis is scored 0–100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarScores {
    pub clarity: u8,
    pub builder: u8,
    pub fast_follower: u8,
    pub early_adopter: u8,
    pub peer_recognition: u8,
}

impl RadarScores {
    pub const FULL_MARK: u8 = 100;

    pub const fn new(
        clarity: u8,
        builder: u8,
        fast_follower: u8,
        early_adopter: u8,
        peer_recognition: u8,
    ) -> Self {
        Self {
            clarity,
            builder,
            fast_follower,
            early_adopter,
            peer_recognition,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateStatus {
    #[default]
    Pretraining,
    Inference,
    Interview,
    Hired,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: String,
    pub name: String,
    pub handle: String,
    pub avatar_url: String,
    pub summary: String,
    /// 0–100
    pub match_score: u8,
    pub domain_expertise: SubScore,
    pub technical_expertise: SubScore,
    pub behavioral_patterns: SubScore,
    pub projects: Vec<Project>,
    pub recent_activity: String,
    pub radar: RadarScores,
    pub status: CandidateStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_upskilling: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_progress: Option<u8>,
}

/// What the AI service reports about a candidate. `name` is `None` when the
/// service could not extract one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateAssessment {
    pub name: Option<String>,
    pub summary: String,
    pub match_score: u8,
    pub domain_expertise: SubScore,
    pub technical_expertise: SubScore,
    pub behavioral_patterns: SubScore,
    pub projects: Vec<Project>,
    pub radar: RadarScores,
}
