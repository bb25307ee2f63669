use serde::{Deserialize, Serialize};

/// Employment arrangement offered by a posting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentType {
    #[default]
    #[serde(rename = "Full-time")]
    FullTime,
    Contract,
    Remote,
}

impl EmploymentType {
    /// Lenient parse for AI-supplied values. Unknown labels map to the default.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "contract" => EmploymentType::Contract,
            "remote" => EmploymentType::Remote,
            _ => EmploymentType::FullTime,
        }
    }
}

/// Ecosystem partner attached to a posting. `NoPartner` serializes as `"None"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TechPartner {
    #[default]
    #[serde(rename = "None")]
    NoPartner,
    Circle,
    Autodesk,
    Solana,
    Stripe,
}

impl TechPartner {
    pub fn label(&self) -> &'static str {
        match self {
            TechPartner::NoPartner => "None",
            TechPartner::Circle => "Circle",
            TechPartner::Autodesk => "Autodesk",
            TechPartner::Solana => "Solana",
            TechPartner::Stripe => "Stripe",
        }
    }
}

/// A job posting, either seeded, published by the wizard, or held as the
/// wizard's Review-stage draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_description: Option<String>,
    pub location: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub skills: Vec<String>,
    pub employment_type: EmploymentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_partner: Option<TechPartner>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sponsored_learning: Option<bool>,
    /// Ids of learning modules attached to the posting.
    #[serde(default)]
    pub learning_tracks: Vec<String>,
}

/// The AI-drafted subset of a posting, before recruiter details are merged in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostingDraft {
    pub title: String,
    pub description: String,
    pub company_description: String,
    pub requirements: Vec<String>,
    pub skills: Vec<String>,
    pub employment_type: EmploymentType,
}
