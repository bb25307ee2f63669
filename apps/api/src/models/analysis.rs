use serde::{Deserialize, Serialize};

/// Topic summary inferred from a video reference and/or free-text notes.
/// Lives only between the Input and Review stages of the posting wizard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub category: String,
    pub inferred_tech_stack: Vec<String>,
    pub suggested_partners: Vec<String>,
    pub summary: String,
}
