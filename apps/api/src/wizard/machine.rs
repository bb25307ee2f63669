//! The posting wizard as a tagged state machine.
//!
//! Each stage owns exactly the data valid at that stage, so a Details stage
//! without an analysis, or a Review stage without a draft, cannot be built.
//! Gateway calls are split into `begin_*` (validate, mark busy, hand out a
//! ticket) and `finish_*` (apply the answer if the ticket is still current),
//! so no lock is held while the AI service is working.

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::gateway::Assisted;
use crate::models::{AnalysisResult, EmploymentType, JobPosting, PostingDraft, TechPartner};
use crate::store::next_posting_id;

/// Placeholder logo given to every published posting.
pub const PUBLISHED_LOGO_URL: &str =
    "https://images.unsplash.com/photo-1611162617474-5b21e879e113?w=100&h=100&fit=crop";

/// Id carried by the Review-stage draft until publish assigns a real one.
pub const DRAFT_ID: &str = "draft";

const DEFAULT_LOCATION: &str = "Global";
const DEFAULT_SALARY: &str = "Competitive";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("wizard is waiting on the AI service")]
    Busy,

    #[error("'{action}' is not available at the {stage} stage")]
    WrongStage {
        action: &'static str,
        stage: &'static str,
    },
}

// ────────────────────────────────────────────────────────────────────────────
// Stage inputs
// ────────────────────────────────────────────────────────────────────────────

/// Stage-1 input: a video reference, free-text context, or both.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AnalyzeInput {
    pub video_url: String,
    pub context_text: String,
}

impl AnalyzeInput {
    pub fn is_blank(&self) -> bool {
        self.video_url.trim().is_empty() && self.context_text.trim().is_empty()
    }

    fn raw_input(&self) -> String {
        format!("{}\n{}", self.video_url, self.context_text)
    }
}

/// Recruiter-entered fields collected at the Details stage.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DetailsForm {
    pub company: String,
    pub region: String,
    pub employment_type: EmploymentType,
    pub salary: String,
    pub partner: TechPartner,
    pub sponsored_learning: bool,
}

impl Default for DetailsForm {
    fn default() -> Self {
        Self {
            company: String::new(),
            region: String::new(),
            employment_type: EmploymentType::Remote,
            salary: String::new(),
            partner: TechPartner::NoPartner,
            sponsored_learning: false,
        }
    }
}

/// What stage 1 captured and later stages still need.
#[derive(Debug, Clone, PartialEq)]
pub struct Brief {
    pub video_url: String,
    pub notes: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Stages
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum WizardStage {
    Input,
    Analysis {
        analysis: AnalysisResult,
        brief: Brief,
    },
    Details {
        analysis: AnalysisResult,
        brief: Brief,
    },
    Review {
        draft: JobPosting,
    },
}

impl WizardStage {
    pub fn number(&self) -> u8 {
        match self {
            WizardStage::Input => 1,
            WizardStage::Analysis { .. } => 2,
            WizardStage::Details { .. } => 3,
            WizardStage::Review { .. } => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WizardStage::Input => "Input",
            WizardStage::Analysis { .. } => "Analysis",
            WizardStage::Details { .. } => "Details",
            WizardStage::Review { .. } => "Review",
        }
    }
}

/// Handed out by `begin_analysis`; return it to `finish_analysis`.
#[derive(Debug)]
pub struct AnalysisTicket {
    epoch: u64,
    pub raw_input: String,
    brief: Brief,
}

/// Handed out by `begin_draft`; return it to `finish_draft`.
#[derive(Debug)]
pub struct DraftTicket {
    epoch: u64,
    pub analysis: AnalysisResult,
    pub notes: String,
    video_url: String,
    details: DetailsForm,
}

// ────────────────────────────────────────────────────────────────────────────
// Wizard
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct Wizard {
    stage: WizardStage,
    busy: bool,
    /// Bumped on every reset; tickets from an older epoch are discarded.
    epoch: u64,
    /// Whether the answer behind the current stage was a fallback.
    degraded: bool,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            stage: WizardStage::Input,
            busy: false,
            epoch: 0,
            degraded: false,
        }
    }

    pub fn stage(&self) -> &WizardStage {
        &self.stage
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    pub fn analysis(&self) -> Option<&AnalysisResult> {
        match &self.stage {
            WizardStage::Analysis { analysis, .. } | WizardStage::Details { analysis, .. } => {
                Some(analysis)
            }
            _ => None,
        }
    }

    pub fn draft(&self) -> Option<&JobPosting> {
        match &self.stage {
            WizardStage::Review { draft } => Some(draft),
            _ => None,
        }
    }

    fn ensure_idle(&self) -> Result<(), WizardError> {
        if self.busy {
            return Err(WizardError::Busy);
        }
        Ok(())
    }

    fn wrong_stage(&self, action: &'static str) -> WizardError {
        WizardError::WrongStage {
            action,
            stage: self.stage.label(),
        }
    }

    fn reset(&mut self) {
        self.stage = WizardStage::Input;
        self.busy = false;
        self.degraded = false;
        self.epoch += 1;
    }

    fn draft_mut(&mut self, action: &'static str) -> Result<&mut JobPosting, WizardError> {
        self.ensure_idle()?;
        let stage = self.stage.label();
        match &mut self.stage {
            WizardStage::Review { draft } => Ok(draft),
            _ => Err(WizardError::WrongStage { action, stage }),
        }
    }

    /// Input → (busy). Blank input is a no-op and yields no ticket.
    pub fn begin_analysis(
        &mut self,
        input: AnalyzeInput,
    ) -> Result<Option<AnalysisTicket>, WizardError> {
        self.ensure_idle()?;
        if self.stage != WizardStage::Input {
            return Err(self.wrong_stage("analyze"));
        }
        if input.is_blank() {
            debug!("Analyze ignored: no video reference or context text");
            return Ok(None);
        }

        self.busy = true;
        Ok(Some(AnalysisTicket {
            epoch: self.epoch,
            raw_input: input.raw_input(),
            brief: Brief {
                video_url: input.video_url.trim().to_string(),
                notes: input.context_text,
            },
        }))
    }

    /// (busy) → Analysis. Returns false when the ticket is stale.
    pub fn finish_analysis(
        &mut self,
        ticket: AnalysisTicket,
        analysis: Assisted<AnalysisResult>,
    ) -> bool {
        if ticket.epoch != self.epoch {
            debug!("Discarding analysis for an abandoned wizard run");
            return false;
        }
        self.busy = false;
        self.degraded = analysis.is_fallback();
        info!(category = %analysis.value.category, "Wizard advanced to Analysis");
        self.stage = WizardStage::Analysis {
            analysis: analysis.value,
            brief: ticket.brief,
        };
        true
    }

    /// Analysis → Details.
    pub fn confirm(&mut self) -> Result<(), WizardError> {
        self.ensure_idle()?;
        match std::mem::replace(&mut self.stage, WizardStage::Input) {
            WizardStage::Analysis { analysis, brief } => {
                self.stage = WizardStage::Details { analysis, brief };
                Ok(())
            }
            other => {
                self.stage = other;
                Err(self.wrong_stage("confirm"))
            }
        }
    }

    /// Details → (busy).
    pub fn begin_draft(&mut self, details: DetailsForm) -> Result<DraftTicket, WizardError> {
        self.ensure_idle()?;
        let WizardStage::Details { analysis, brief } = &self.stage else {
            return Err(self.wrong_stage("generate"));
        };

        let ticket = DraftTicket {
            epoch: self.epoch,
            analysis: analysis.clone(),
            notes: brief.notes.clone(),
            video_url: brief.video_url.clone(),
            details,
        };
        self.busy = true;
        Ok(ticket)
    }

    /// (busy) → Review. Returns false when the ticket is stale.
    pub fn finish_draft(&mut self, ticket: DraftTicket, draft: Assisted<PostingDraft>) -> bool {
        if ticket.epoch != self.epoch {
            debug!("Discarding draft for an abandoned wizard run");
            return false;
        }
        self.busy = false;
        self.degraded = draft.is_fallback();
        let draft = merge_draft(draft.value, &ticket.details, &ticket.video_url);
        info!(
            title = %draft.title,
            partner = draft.tech_partner.unwrap_or_default().label(),
            "Wizard advanced to Review"
        );
        self.stage = WizardStage::Review { draft };
        true
    }

    /// Appends a trimmed skill to the draft. Blank input is a no-op.
    pub fn add_skill(&mut self, skill: &str) -> Result<(), WizardError> {
        let draft = self.draft_mut("add skill")?;
        let skill = skill.trim();
        if !skill.is_empty() {
            draft.skills.push(skill.to_string());
        }
        Ok(())
    }

    /// Removes every exact match from the draft's skills.
    pub fn remove_skill(&mut self, skill: &str) -> Result<(), WizardError> {
        let draft = self.draft_mut("remove skill")?;
        draft.skills.retain(|s| s != skill);
        Ok(())
    }

    /// Review → Input. Returns the finished posting for the caller to list.
    pub fn publish(&mut self) -> Result<JobPosting, WizardError> {
        self.ensure_idle()?;
        let mut draft = match std::mem::replace(&mut self.stage, WizardStage::Input) {
            WizardStage::Review { draft } => draft,
            other => {
                self.stage = other;
                return Err(self.wrong_stage("publish"));
            }
        };

        draft.id = next_posting_id();
        draft.match_rating = Some(0.0);
        draft.logo_url = Some(PUBLISHED_LOGO_URL.to_string());
        self.reset();
        Ok(draft)
    }

    /// Back-to-home exit: any stage → Input. An in-flight call's answer is dropped.
    pub fn abandon(&mut self) {
        if self.stage.number() > 1 || self.busy {
            info!(stage = self.stage.label(), "Wizard abandoned");
        }
        self.reset();
    }
}

/// Combines the AI draft with the recruiter's Details-stage fields.
pub fn merge_draft(draft: PostingDraft, details: &DetailsForm, video_url: &str) -> JobPosting {
    let or_default = |value: &str, default: &str| {
        let value = value.trim();
        if value.is_empty() {
            default.to_string()
        } else {
            value.to_string()
        }
    };
    let company_description = Some(draft.company_description).filter(|d| !d.is_empty());

    JobPosting {
        id: DRAFT_ID.to_string(),
        title: draft.title,
        company: details.company.trim().to_string(),
        company_description,
        location: or_default(&details.region, DEFAULT_LOCATION),
        description: draft.description,
        requirements: draft.requirements,
        skills: draft.skills,
        employment_type: details.employment_type,
        salary_range: Some(or_default(&details.salary, DEFAULT_SALARY)),
        video_url: Some(video_url.to_string()).filter(|u| !u.is_empty()),
        logo_url: None,
        match_rating: None,
        tech_partner: Some(details.partner),
        sponsored_learning: Some(details.sponsored_learning),
        learning_tracks: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::testing::{sample_analysis, sample_draft};

    fn text_only(text: &str) -> AnalyzeInput {
        AnalyzeInput {
            video_url: String::new(),
            context_text: text.to_string(),
        }
    }

    fn wizard_at_details() -> Wizard {
        let mut wizard = Wizard::new();
        let ticket = wizard.begin_analysis(text_only("wallet demo")).unwrap().unwrap();
        wizard.finish_analysis(ticket, Assisted::generated(sample_analysis()));
        wizard.confirm().unwrap();
        wizard
    }

    fn wizard_at_review() -> Wizard {
        let mut wizard = wizard_at_details();
        let ticket = wizard.begin_draft(DetailsForm::default()).unwrap();
        wizard.finish_draft(ticket, Assisted::generated(sample_draft()));
        wizard
    }

    fn skills(wizard: &Wizard) -> Vec<String> {
        wizard.draft().unwrap().skills.clone()
    }

    #[test]
    fn test_new_wizard_starts_at_input_without_draft() {
        let wizard = Wizard::new();
        assert_eq!(wizard.stage().number(), 1);
        assert!(wizard.draft().is_none());
        assert!(wizard.analysis().is_none());
    }

    #[test]
    fn test_blank_input_is_noop() {
        let mut wizard = Wizard::new();
        let ticket = wizard
            .begin_analysis(AnalyzeInput {
                video_url: "  ".to_string(),
                context_text: "\n".to_string(),
            })
            .unwrap();
        assert!(ticket.is_none());
        assert!(!wizard.is_busy());
        assert_eq!(wizard.stage().number(), 1);
    }

    #[test]
    fn test_analysis_input_joins_video_and_text() {
        let mut wizard = Wizard::new();
        let ticket = wizard
            .begin_analysis(AnalyzeInput {
                video_url: "https://youtu.be/demo".to_string(),
                context_text: "3D configurator".to_string(),
            })
            .unwrap()
            .unwrap();
        assert_eq!(ticket.raw_input, "https://youtu.be/demo\n3D configurator");
        assert!(wizard.is_busy());
    }

    #[test]
    fn test_stage_numbers_only_increase_until_publish() {
        let mut wizard = Wizard::new();
        let mut seen = vec![wizard.stage().number()];

        let ticket = wizard.begin_analysis(text_only("demo")).unwrap().unwrap();
        wizard.finish_analysis(ticket, Assisted::generated(sample_analysis()));
        seen.push(wizard.stage().number());
        wizard.confirm().unwrap();
        seen.push(wizard.stage().number());
        let ticket = wizard.begin_draft(DetailsForm::default()).unwrap();
        wizard.finish_draft(ticket, Assisted::generated(sample_draft()));
        seen.push(wizard.stage().number());

        assert_eq!(seen, vec![1, 2, 3, 4]);
        wizard.publish().unwrap();
        assert_eq!(wizard.stage().number(), 1);
    }

    #[test]
    fn test_busy_wizard_rejects_second_analysis() {
        let mut wizard = Wizard::new();
        let _ticket = wizard.begin_analysis(text_only("demo")).unwrap().unwrap();
        let err = wizard.begin_analysis(text_only("demo")).unwrap_err();
        assert_eq!(err, WizardError::Busy);
    }

    #[test]
    fn test_wrong_stage_is_reported() {
        let mut wizard = Wizard::new();
        let err = wizard.confirm().unwrap_err();
        assert_eq!(
            err,
            WizardError::WrongStage {
                action: "confirm",
                stage: "Input"
            }
        );
        assert!(wizard.publish().is_err());
        assert!(wizard.add_skill("Rust").is_err());
    }

    #[test]
    fn test_draft_absent_before_review() {
        let wizard = wizard_at_details();
        assert!(wizard.draft().is_none());
        assert_eq!(wizard.analysis().unwrap(), &sample_analysis());
    }

    #[test]
    fn test_merge_applies_details_and_defaults() {
        let details = DetailsForm {
            region: "Remote".to_string(),
            partner: TechPartner::NoPartner,
            ..DetailsForm::default()
        };
        let posting = merge_draft(sample_draft(), &details, "");
        assert_eq!(posting.title, "Protocol Engineer");
        assert_eq!(posting.location, "Remote");
        assert_eq!(posting.salary_range.as_deref(), Some("Competitive"));
        assert_eq!(posting.employment_type, EmploymentType::Remote);
        assert_eq!(posting.tech_partner, Some(TechPartner::NoPartner));
        assert_eq!(posting.sponsored_learning, Some(false));
        assert_eq!(posting.video_url, None);
        assert!(posting.learning_tracks.is_empty());
    }

    #[test]
    fn test_merge_blank_region_becomes_global() {
        let details = DetailsForm {
            region: "   ".to_string(),
            salary: "$150k".to_string(),
            partner: TechPartner::Circle,
            sponsored_learning: true,
            ..DetailsForm::default()
        };
        let posting = merge_draft(sample_draft(), &details, "https://youtu.be/x");
        assert_eq!(posting.location, "Global");
        assert_eq!(posting.salary_range.as_deref(), Some("$150k"));
        assert_eq!(posting.tech_partner, Some(TechPartner::Circle));
        assert_eq!(posting.video_url.as_deref(), Some("https://youtu.be/x"));
    }

    #[test]
    fn test_add_skill_appends_trimmed() {
        let mut wizard = wizard_at_review();
        assert_eq!(skills(&wizard), vec!["Rust", "Anchor"]);
        wizard.add_skill("  Solana  ").unwrap();
        assert_eq!(skills(&wizard), vec!["Rust", "Anchor", "Solana"]);
    }

    #[test]
    fn test_add_blank_skill_is_noop() {
        let mut wizard = wizard_at_review();
        wizard.add_skill("   ").unwrap();
        assert_eq!(skills(&wizard), vec!["Rust", "Anchor"]);
    }

    #[test]
    fn test_remove_skill_filters_exact_match() {
        let mut wizard = wizard_at_review();
        wizard.add_skill("Solana").unwrap();
        wizard.remove_skill("Anchor").unwrap();
        assert_eq!(skills(&wizard), vec!["Rust", "Solana"]);
        wizard.remove_skill("anchor").unwrap();
        wizard.remove_skill("Go").unwrap();
        assert_eq!(skills(&wizard), vec!["Rust", "Solana"]);
    }

    #[test]
    fn test_publish_assigns_identity_and_resets() {
        let mut wizard = wizard_at_review();
        let posting = wizard.publish().unwrap();

        assert!(posting.id.starts_with("job-"));
        assert_ne!(posting.id, DRAFT_ID);
        assert_eq!(posting.match_rating, Some(0.0));
        assert_eq!(posting.logo_url.as_deref(), Some(PUBLISHED_LOGO_URL));
        assert_eq!(wizard.stage(), &WizardStage::Input);
        assert!(wizard.draft().is_none());
        assert!(!wizard.is_degraded());
    }

    #[test]
    fn test_abandon_discards_in_flight_answer() {
        let mut wizard = Wizard::new();
        let ticket = wizard.begin_analysis(text_only("demo")).unwrap().unwrap();

        wizard.abandon();
        assert!(!wizard.is_busy());

        let applied = wizard.finish_analysis(ticket, Assisted::generated(sample_analysis()));
        assert!(!applied);
        assert_eq!(wizard.stage().number(), 1);
    }

    #[test]
    fn test_fallback_answer_marks_wizard_degraded() {
        let mut wizard = Wizard::new();
        let ticket = wizard.begin_analysis(text_only("demo")).unwrap().unwrap();
        wizard.finish_analysis(ticket, Assisted::fallback(sample_analysis()));
        assert!(wizard.is_degraded());
    }
}
