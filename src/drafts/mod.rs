//! Best-effort persistence of the wizard's partial answers.
//!
//! The store never fails from the caller's point of view: slot errors and
//! unparsable content are logged and treated as "no draft", so the wizard
//! keeps working when persistence is unavailable.

pub mod memory;
pub mod redis_slot;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::SlotError;
use crate::models::draft::{BriefingDraft, BriefingPatch};

pub use memory::MemorySlot;
pub use redis_slot::RedisSlot;

/// Fixed name of the draft slot; each client gets `briefing-progress:{client_id}`.
pub const DRAFT_STORAGE_KEY: &str = "briefing-progress";

/// A durable text slot addressed by key.
#[async_trait]
pub trait DraftSlot: Send + Sync {
    async fn read(&self, key: &str) -> Result<Option<String>, SlotError>;
    async fn write(&self, key: &str, value: String) -> Result<(), SlotError>;
    async fn remove(&self, key: &str) -> Result<(), SlotError>;
}

/// One client's draft, serialized as JSON text in a [`DraftSlot`].
#[derive(Clone)]
pub struct DraftStore {
    slot: Arc<dyn DraftSlot>,
    key: String,
}

impl DraftStore {
    pub fn new(slot: Arc<dyn DraftSlot>, client_id: Uuid) -> Self {
        Self {
            slot,
            key: format!("{DRAFT_STORAGE_KEY}:{client_id}"),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Merge `patch` into the stored draft and write the result back.
    pub async fn save(&self, patch: impl Into<BriefingPatch>) {
        let mut stored = self.load().await;
        stored.merge(patch);

        let text = match serde_json::to_string(&stored) {
            Ok(text) => text,
            Err(e) => {
                warn!(key = %self.key, "Error serializing briefing progress: {e}");
                return;
            }
        };

        if let Err(e) = self.slot.write(&self.key, text).await {
            warn!(key = %self.key, "Error saving briefing progress: {e}");
        }
    }

    /// The stored draft, or an empty one when nothing usable is stored.
    pub async fn load(&self) -> BriefingDraft {
        match self.slot.read(&self.key).await {
            Ok(Some(text)) => serde_json::from_str(&text).unwrap_or_else(|e| {
                warn!(key = %self.key, "Discarding unreadable briefing progress: {e}");
                BriefingDraft::default()
            }),
            Ok(None) => BriefingDraft::default(),
            Err(e) => {
                warn!(key = %self.key, "Error loading briefing progress: {e}");
                BriefingDraft::default()
            }
        }
    }

    pub async fn clear(&self) {
        match self.slot.remove(&self.key).await {
            Ok(()) => debug!(key = %self.key, "Cleared briefing progress"),
            Err(e) => warn!(key = %self.key, "Error clearing briefing progress: {e}"),
        }
    }
}
