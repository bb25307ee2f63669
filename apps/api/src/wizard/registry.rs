use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::info;
use uuid::Uuid;

use crate::wizard::machine::Wizard;

pub type WizardHandle = Arc<Mutex<Wizard>>;

/// Live wizard runs, one per open posting-creation screen.
#[derive(Default)]
pub struct WizardRegistry {
    sessions: RwLock<HashMap<Uuid, WizardHandle>>,
}

impl WizardRegistry {
    pub async fn create(&self) -> (Uuid, WizardHandle) {
        let id = Uuid::new_v4();
        let handle = Arc::new(Mutex::new(Wizard::new()));
        self.sessions.write().await.insert(id, Arc::clone(&handle));
        info!(wizard_id = %id, "Wizard session opened");
        (id, handle)
    }

    pub async fn get(&self, id: Uuid) -> Option<WizardHandle> {
        self.sessions.read().await.get(&id).cloned()
    }

    /// Drops the session. A gateway call still in flight finishes against
    /// its own handle and is then discarded with it.
    pub async fn close(&self, id: Uuid) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            info!(wizard_id = %id, "Wizard session closed");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_then_get_returns_same_session() {
        let registry = WizardRegistry::default();
        let (id, handle) = registry.create().await;
        let fetched = registry.get(id).await.unwrap();
        assert!(Arc::ptr_eq(&handle, &fetched));
    }

    #[tokio::test]
    async fn test_close_forgets_session() {
        let registry = WizardRegistry::default();
        let (id, _) = registry.create().await;

        assert!(registry.close(id).await);
        assert!(registry.get(id).await.is_none());
        assert!(!registry.close(id).await);
    }

    #[tokio::test]
    async fn test_unknown_id_is_none() {
        let registry = WizardRegistry::default();
        assert!(registry.get(Uuid::new_v4()).await.is_none());
    }
}
