//! Domain records shared by the wizard, intake, apply and upskill flows.

pub mod analysis;
pub mod application;
pub mod candidate;
pub mod job;
pub mod learning;
pub mod user;

pub use analysis::AnalysisResult;
pub use application::{Application, ApplicationStatus};
pub use candidate::{CandidateAssessment, CandidateProfile, CandidateStatus, Project, RadarScores, SubScore};
pub use job::{EmploymentType, JobPosting, PostingDraft, TechPartner};
pub use learning::{ChatMessage, LearningModule};
pub use user::{Role, User};
