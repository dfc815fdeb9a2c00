use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::DraftSlot;
use crate::error::SlotError;

/// Process-local slot. Drafts are lost on restart.
#[derive(Default)]
pub struct MemorySlot {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

#[async_trait]
impl DraftSlot for MemorySlot {
    async fn read(&self, key: &str) -> Result<Option<String>, SlotError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn write(&self, key: &str, value: String) -> Result<(), SlotError> {
        self.entries.lock().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), SlotError> {
        self.entries.lock().await.remove(key);
        Ok(())
    }
}
