use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use tracing::debug;
use uuid::Uuid;

use super::WizardController;
use crate::db::BriefingRepository;
use crate::drafts::{DraftSlot, DraftStore};
use crate::storage::BlobStorage;

const MAX_OPEN_WIZARDS: u64 = 10_000;

/// Live wizards keyed by client id. Idle wizards are dropped after the TTL;
/// their answers survive in the draft slot and are re-hydrated on the next
/// visit.
#[derive(Clone)]
pub struct WizardSessions {
    sessions: Cache<Uuid, Arc<WizardController>>,
    slot: Arc<dyn DraftSlot>,
    records: Arc<dyn BriefingRepository>,
    storage: Arc<dyn BlobStorage>,
}

impl WizardSessions {
    pub fn new(
        slot: Arc<dyn DraftSlot>,
        records: Arc<dyn BriefingRepository>,
        storage: Arc<dyn BlobStorage>,
        idle_ttl: Duration,
    ) -> Self {
        let sessions = Cache::builder()
            .time_to_idle(idle_ttl)
            .max_capacity(MAX_OPEN_WIZARDS)
            .build();

        Self {
            sessions,
            slot,
            records,
            storage,
        }
    }

    /// The client's wizard, mounting it from the draft slot if needed.
    pub async fn open(&self, client_id: Uuid) -> Arc<WizardController> {
        self.sessions
            .get_with(client_id, async {
                debug!(%client_id, "Mounting wizard");
                let drafts = DraftStore::new(self.slot.clone(), client_id);
                Arc::new(
                    WizardController::mount(drafts, self.records.clone(), self.storage.clone())
                        .await,
                )
            })
            .await
    }

    /// Forget the client's wizard, e.g. after it has been submitted.
    pub async fn close(&self, client_id: Uuid) {
        self.sessions.invalidate(&client_id).await;
    }
}
