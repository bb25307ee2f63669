use std::sync::Arc;

use crate::auth::IdentityProvider;
use crate::config::Config;
use crate::gateway::FailOpen;
use crate::intake::IntakeGate;
use crate::store::AppStore;
use crate::wizard::registry::WizardRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<AppStore>,
    pub wizards: Arc<WizardRegistry>,
    /// Every AI call goes through here; failures come back as fallbacks.
    pub gateway: FailOpen,
    /// Pluggable login backend. Default: `DemoIdentityProvider`.
    pub identity: Arc<dyn IdentityProvider>,
    pub intake_gate: Arc<IntakeGate>,
    pub config: Config,
}

impl AppState {
    pub fn new(
        store: AppStore,
        gateway: FailOpen,
        identity: Arc<dyn IdentityProvider>,
        config: Config,
    ) -> Self {
        Self {
            store: Arc::new(store),
            wizards: Arc::new(WizardRegistry::default()),
            gateway,
            identity,
            intake_gate: Arc::new(IntakeGate::default()),
            config,
        }
    }
}
