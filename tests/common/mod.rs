//! In-memory stand-ins for the database, the logo bucket and the draft slot.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use redis::{ErrorKind, RedisError};
use sea_orm::DbErr;
use uuid::Uuid;

use briefing_backend::db::BriefingRepository;
use briefing_backend::drafts::{DraftSlot, DraftStore, MemorySlot};
use briefing_backend::error::{RepositoryError, SlotError, StorageError};
use briefing_backend::models::briefings::{Model as Briefing, NewBriefing, ProjectType};
use briefing_backend::storage::BlobStorage;
use briefing_backend::wizard::WizardController;

pub const PUBLIC_BASE: &str = "https://test.supabase.co/storage/v1/object/public/briefing-logos";

/// Briefing collection kept in a vector. Each insert yields once so that
/// concurrent submits actually interleave.
#[derive(Default)]
pub struct FakeRecords {
    pub rows: Mutex<Vec<Briefing>>,
    pub inserted: Mutex<Vec<NewBriefing>>,
    pub deleted: Mutex<Vec<Uuid>>,
    pub insert_calls: AtomicUsize,
    pub fail_insert: AtomicBool,
    pub fail_list: AtomicBool,
    pub fail_delete: AtomicBool,
    pub fail_logo_lookup: AtomicBool,
}

impl FakeRecords {
    pub fn with_rows(rows: Vec<Briefing>) -> Self {
        Self {
            rows: Mutex::new(rows),
            ..Default::default()
        }
    }

    pub fn inserts(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    pub fn last_inserted(&self) -> Option<NewBriefing> {
        self.inserted.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl BriefingRepository for FakeRecords {
    async fn insert(&self, briefing: NewBriefing) -> Result<Briefing, RepositoryError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;

        if self.fail_insert.load(Ordering::SeqCst) {
            return Err(db_error("insert rejected"));
        }

        self.inserted.lock().unwrap().push(briefing.clone());
        let row = stored(Uuid::new_v4(), briefing);
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn list(&self) -> Result<Vec<Briefing>, RepositoryError> {
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(db_error("connection refused"));
        }
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Briefing>, RepositoryError> {
        Ok(self.rows.lock().unwrap().iter().find(|b| b.id == id).cloned())
    }

    async fn logo_url(&self, id: Uuid) -> Result<Option<String>, RepositoryError> {
        if self.fail_logo_lookup.load(Ordering::SeqCst) {
            return Err(db_error("lookup failed"));
        }
        Ok(self.find(id).await?.and_then(|b| b.logo_url))
    }

    async fn delete(&self, id: Uuid) -> Result<u64, RepositoryError> {
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(db_error("permission denied"));
        }
        self.deleted.lock().unwrap().push(id);
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|b| b.id != id);
        Ok((before - rows.len()) as u64)
    }
}

/// Bucket kept in a map, recording every upload and removal.
#[derive(Default)]
pub struct FakeStorage {
    pub objects: Mutex<HashMap<String, Vec<u8>>>,
    pub uploads: Mutex<Vec<(String, Option<String>)>>,
    pub removals: Mutex<Vec<Vec<String>>>,
    pub fail_upload: AtomicBool,
    pub fail_remove: AtomicBool,
}

impl FakeStorage {
    pub fn with_object(name: &str, bytes: &[u8]) -> Self {
        let storage = Self::default();
        storage
            .objects
            .lock()
            .unwrap()
            .insert(name.to_string(), bytes.to_vec());
        storage
    }

    pub fn uploaded_names(&self) -> Vec<String> {
        self.uploads
            .lock()
            .unwrap()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn removed(&self) -> Vec<Vec<String>> {
        self.removals.lock().unwrap().clone()
    }
}

#[async_trait]
impl BlobStorage for FakeStorage {
    async fn upload(
        &self,
        name: &str,
        bytes: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<String, StorageError> {
        if self.fail_upload.load(Ordering::SeqCst) {
            return Err(StorageError::Status {
                status: 413,
                message: "Payload too large".to_string(),
            });
        }
        self.uploads
            .lock()
            .unwrap()
            .push((name.to_string(), content_type.map(str::to_string)));
        self.objects.lock().unwrap().insert(name.to_string(), bytes);
        Ok(name.to_string())
    }

    fn public_url(&self, path: &str) -> String {
        format!("{PUBLIC_BASE}/{path}")
    }

    async fn remove(&self, names: &[String]) -> Result<(), StorageError> {
        self.removals.lock().unwrap().push(names.to_vec());
        if self.fail_remove.load(Ordering::SeqCst) {
            return Err(StorageError::Status {
                status: 503,
                message: "bucket offline".to_string(),
            });
        }
        let mut objects = self.objects.lock().unwrap();
        for name in names {
            objects.remove(name);
        }
        Ok(())
    }

    async fn download(&self, name: &str) -> Result<Vec<u8>, StorageError> {
        self.objects
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| StorageError::Status {
                status: 404,
                message: "Object not found".to_string(),
            })
    }
}

fn db_error(message: &str) -> RepositoryError {
    RepositoryError::Db(DbErr::Custom(message.to_string()))
}

fn slot_error(message: &'static str) -> SlotError {
    SlotError::Redis(RedisError::from((ErrorKind::IoError, message)))
}

/// A slot whose every operation fails.
pub struct FailingSlot;

#[async_trait]
impl DraftSlot for FailingSlot {
    async fn read(&self, _key: &str) -> Result<Option<String>, SlotError> {
        Err(slot_error("storage disabled"))
    }

    async fn write(&self, _key: &str, _value: String) -> Result<(), SlotError> {
        Err(slot_error("quota exceeded"))
    }

    async fn remove(&self, _key: &str) -> Result<(), SlotError> {
        Err(slot_error("storage disabled"))
    }
}

/// Everything a wizard needs, with handles kept for assertions.
pub struct Harness {
    pub client_id: Uuid,
    pub slot: Arc<MemorySlot>,
    pub records: Arc<FakeRecords>,
    pub storage: Arc<FakeStorage>,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            client_id: Uuid::new_v4(),
            slot: Arc::new(MemorySlot::new()),
            records: Arc::new(FakeRecords::default()),
            storage: Arc::new(FakeStorage::default()),
        }
    }

    pub fn drafts(&self) -> DraftStore {
        DraftStore::new(self.slot.clone(), self.client_id)
    }

    pub async fn mount(&self) -> WizardController {
        WizardController::mount(self.drafts(), self.records.clone(), self.storage.clone()).await
    }
}

/// A stored row built the way the database would fill it in.
pub fn stored(id: Uuid, new: NewBriefing) -> Briefing {
    Briefing {
        id,
        created_at: Utc::now(),
        contact_name: new.contact_name,
        contact_phone: new.contact_phone,
        contact_email: new.contact_email,
        project_name: new.project_name.unwrap_or_default(),
        project_type: new.project_type.unwrap_or(ProjectType::Outro),
        project_description: new.project_description.unwrap_or_default(),
        has_domain: new.has_domain.unwrap_or(false),
        domain_name: new.domain_name,
        products: new.products,
        has_logo: new.has_logo.unwrap_or(false),
        logo_url: new.logo_url,
        brand_colors: new.brand_colors,
        visual_references: new.visual_references,
        design_style: new.design_style,
        pages_needed: new.pages_needed,
        other_pages: new.other_pages,
        functionalities: new.functionalities,
        custom_functionalities: new.custom_functionalities,
        other_functionalities: new.other_functionalities,
        integrations: new.integrations,
        launch_deadline: new.launch_deadline,
        budget: new.budget,
        has_content: new.has_content,
        needs_maintenance: new.needs_maintenance,
        who_manages: new.who_manages,
        additional_info: new.additional_info,
    }
}

/// A minimal stored briefing created at a fixed instant.
pub fn sample_briefing(project_name: &str) -> Briefing {
    let mut row = stored(
        Uuid::new_v4(),
        NewBriefing {
            project_name: Some(project_name.to_string()),
            project_type: Some(ProjectType::Institucional),
            project_description: Some("Site para apresentar a empresa".to_string()),
            ..Default::default()
        },
    );
    row.created_at = Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap();
    row
}
