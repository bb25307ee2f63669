//! Posting wizard: Input → Analysis → Details → Review, then publish.
//!
//! `machine` holds the pure state transitions; this module drives them
//! against the AI gateway and the store.

use anyhow::anyhow;
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::gateway::FailOpen;
use crate::models::{AnalysisResult, JobPosting};
use crate::store::AppStore;

pub mod handlers;
pub mod machine;
pub mod registry;

use machine::{AnalyzeInput, DetailsForm, Wizard, WizardError};
use registry::WizardHandle;

impl From<WizardError> for AppError {
    fn from(e: WizardError) -> Self {
        match e {
            WizardError::Busy => AppError::Busy(e.to_string()),
            WizardError::WrongStage { .. } => AppError::Conflict(e.to_string()),
        }
    }
}

/// What clients render for a wizard run.
#[derive(Debug, Serialize)]
pub struct WizardView {
    pub id: Uuid,
    pub stage: u8,
    pub stage_label: &'static str,
    pub busy: bool,
    pub analysis: Option<AnalysisResult>,
    pub draft: Option<JobPosting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degraded: Option<bool>,
}

impl WizardView {
    pub fn of(id: Uuid, wizard: &Wizard, surface_degraded: bool) -> Self {
        Self {
            id,
            stage: wizard.stage().number(),
            stage_label: wizard.stage().label(),
            busy: wizard.is_busy(),
            analysis: wizard.analysis().cloned(),
            draft: wizard.draft().cloned(),
            degraded: surface_degraded.then(|| wizard.is_degraded()),
        }
    }
}

/// Stage 1 → 2. The gateway call runs on its own task so a dropped request
/// cannot leave the wizard stuck busy.
pub async fn analyze(
    handle: WizardHandle,
    gateway: FailOpen,
    input: AnalyzeInput,
) -> Result<(), AppError> {
    let ticket = handle.lock().await.begin_analysis(input)?;
    let Some(ticket) = ticket else {
        return Ok(());
    };

    tokio::spawn(async move {
        let analysis = gateway.analyze_context(&ticket.raw_input).await;
        handle.lock().await.finish_analysis(ticket, analysis);
    })
    .await
    .map_err(|e| AppError::Internal(anyhow!("analysis task failed: {e}")))
}

/// Stage 2 → 3.
pub async fn confirm(handle: &WizardHandle) -> Result<(), AppError> {
    handle.lock().await.confirm()?;
    Ok(())
}

/// Stage 3 → 4.
pub async fn generate(
    handle: WizardHandle,
    gateway: FailOpen,
    details: DetailsForm,
) -> Result<(), AppError> {
    let ticket = handle.lock().await.begin_draft(details)?;

    tokio::spawn(async move {
        let draft = gateway.draft_posting(&ticket.analysis, &ticket.notes).await;
        handle.lock().await.finish_draft(ticket, draft);
    })
    .await
    .map_err(|e| AppError::Internal(anyhow!("draft task failed: {e}")))
}

/// Review → Input, listing the finished posting first on the board.
pub async fn publish(handle: &WizardHandle, store: &AppStore) -> Result<JobPosting, AppError> {
    let posting = handle.lock().await.publish()?;
    store.publish_job(posting.clone()).await;
    Ok(posting)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::testing::ScriptedGateway;
    use crate::models::TechPartner;
    use std::sync::Arc;
    use tokio::sync::{Mutex, Notify};

    fn text(context: &str) -> AnalyzeInput {
        AnalyzeInput {
            video_url: String::new(),
            context_text: context.to_string(),
        }
    }

    fn new_handle() -> WizardHandle {
        Arc::new(Mutex::new(Wizard::new()))
    }

    async fn wait_until_busy(handle: &WizardHandle) {
        while !handle.lock().await.is_busy() {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn test_full_run_publishes_and_resets() {
        let store = AppStore::seeded();
        let gateway = FailOpen::new(Arc::new(ScriptedGateway::default()));
        let handle = new_handle();
        let before = store.jobs().await.len();

        analyze(handle.clone(), gateway.clone(), text("wallet demo"))
            .await
            .unwrap();
        assert_eq!(handle.lock().await.stage().number(), 2);
        assert!(handle.lock().await.analysis().is_some());

        confirm(&handle).await.unwrap();
        assert_eq!(handle.lock().await.stage().number(), 3);

        let details = DetailsForm {
            region: "Remote".to_string(),
            partner: TechPartner::NoPartner,
            ..DetailsForm::default()
        };
        generate(handle.clone(), gateway.clone(), details).await.unwrap();
        {
            let wizard = handle.lock().await;
            let draft = wizard.draft().unwrap();
            assert_eq!(wizard.stage().number(), 4);
            assert_eq!(draft.title, "Protocol Engineer");
            assert_eq!(draft.location, "Remote");
            assert_eq!(draft.tech_partner, Some(TechPartner::NoPartner));
        }

        let posting = publish(&handle, &store).await.unwrap();
        let jobs = store.jobs().await;
        assert_eq!(jobs.len(), before + 1);
        assert_eq!(jobs[0].id, posting.id);
        assert_eq!(handle.lock().await.stage().number(), 1);
    }

    #[tokio::test]
    async fn test_failing_gateway_still_advances_with_fallback() {
        let gateway = FailOpen::new(Arc::new(ScriptedGateway::failing()));
        let handle = new_handle();

        analyze(handle.clone(), gateway, text("anything")).await.unwrap();

        let wizard = handle.lock().await;
        assert_eq!(wizard.stage().number(), 2);
        assert_eq!(wizard.analysis().unwrap().category, "General Software");
        assert!(wizard.is_degraded());
    }

    #[tokio::test]
    async fn test_second_analyze_while_in_flight_is_rejected() {
        let hold = Arc::new(Notify::new());
        let scripted = Arc::new(ScriptedGateway::held(hold.clone()));
        let gateway = FailOpen::new(scripted.clone());
        let handle = new_handle();

        let first = tokio::spawn(analyze(handle.clone(), gateway.clone(), text("wallet")));
        wait_until_busy(&handle).await;

        let err = analyze(handle.clone(), gateway.clone(), text("wallet"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Busy(_)));

        hold.notify_one();
        first.await.unwrap().unwrap();
        assert_eq!(handle.lock().await.stage().number(), 2);
        assert_eq!(scripted.call_count(), 1);
    }

    #[tokio::test]
    async fn test_abandon_mid_call_discards_late_answer() {
        let hold = Arc::new(Notify::new());
        let gateway = FailOpen::new(Arc::new(ScriptedGateway::held(hold.clone())));
        let handle = new_handle();

        let first = tokio::spawn(analyze(handle.clone(), gateway, text("wallet")));
        wait_until_busy(&handle).await;

        handle.lock().await.abandon();
        hold.notify_one();
        first.await.unwrap().unwrap();

        let wizard = handle.lock().await;
        assert_eq!(wizard.stage().number(), 1);
        assert!(!wizard.is_busy());
        assert!(wizard.analysis().is_none());
    }

    #[tokio::test]
    async fn test_blank_input_does_not_call_gateway() {
        let scripted = Arc::new(ScriptedGateway::default());
        let gateway = FailOpen::new(scripted.clone());
        let handle = new_handle();

        analyze(handle.clone(), gateway, AnalyzeInput::default())
            .await
            .unwrap();

        assert_eq!(scripted.call_count(), 0);
        assert_eq!(handle.lock().await.stage().number(), 1);
    }

    #[test]
    fn test_view_hides_degraded_unless_surfaced() {
        let wizard = Wizard::new();
        let id = Uuid::new_v4();
        assert_eq!(WizardView::of(id, &wizard, false).degraded, None);
        assert_eq!(WizardView::of(id, &wizard, true).degraded, Some(false));
    }
}
