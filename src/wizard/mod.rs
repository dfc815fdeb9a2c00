//! The briefing wizard: five steps over one partial record, persisted to the
//! client's draft slot on every change and submitted once at the end.

pub mod sessions;
pub mod steps;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{error, info};
use uuid::Uuid;

use crate::catalog::{self, DesignStyle, OptionItem, STEPS, StepInfo};
use crate::db::BriefingRepository;
use crate::drafts::DraftStore;
use crate::error::WizardError;
use crate::models::briefings::NewBriefing;
use crate::models::draft::{BriefingDraft, BriefingPatch, LogoFile};
use crate::storage::BlobStorage;

pub use sessions::WizardSessions;
pub use steps::StepAction;

pub const STEP_COUNT: u8 = STEPS.len() as u8;

#[derive(Debug, Default)]
struct WizardState {
    current_step: u8,
    form_data: BriefingDraft,
    submitted: Option<Uuid>,
}

/// Point-in-time copy of a wizard's state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardSnapshot {
    pub current_step: u8,
    pub form_data: BriefingDraft,
    pub is_submitting: bool,
    pub has_logo_file: bool,
}

/// Result of a successful submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: Uuid,
    pub logo_url: Option<String>,
}

pub struct WizardController {
    drafts: DraftStore,
    records: Arc<dyn BriefingRepository>,
    storage: Arc<dyn BlobStorage>,
    state: Mutex<WizardState>,
    submitting: AtomicBool,
}

/// Clears the in-flight flag however `submit` exits.
struct SubmittingFlag<'a>(&'a AtomicBool);

impl Drop for SubmittingFlag<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl WizardController {
    /// Start a wizard at step 1, hydrated from whatever the draft slot holds.
    pub async fn mount(
        drafts: DraftStore,
        records: Arc<dyn BriefingRepository>,
        storage: Arc<dyn BlobStorage>,
    ) -> Self {
        let form_data = drafts.load().await;

        Self {
            drafts,
            records,
            storage,
            state: Mutex::new(WizardState {
                current_step: 1,
                form_data,
                submitted: None,
            }),
            submitting: AtomicBool::new(false),
        }
    }

    pub async fn snapshot(&self) -> WizardSnapshot {
        let state = self.state.lock().await;
        WizardSnapshot {
            current_step: state.current_step,
            form_data: state.form_data.clone(),
            is_submitting: self.is_submitting(),
            has_logo_file: state.form_data.logo_file.is_some(),
        }
    }

    pub async fn current_step(&self) -> u8 {
        self.state.lock().await.current_step
    }

    pub async fn form_data(&self) -> BriefingDraft {
        self.state.lock().await.form_data.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    /// Shallow-merge `patch` into the answers and persist the whole snapshot.
    pub async fn update_form_data(&self, patch: impl Into<BriefingPatch>) {
        let mut state = self.state.lock().await;
        state.form_data.merge(patch);
        // Saved under the lock so the slot sees updates in order.
        self.persist(&state.form_data).await;
    }

    /// Apply a step gesture. Returns `false` when it changed nothing.
    pub async fn apply(&self, action: StepAction) -> bool {
        let mut state = self.state.lock().await;
        let Some(patch) = action.patch_for(&state.form_data) else {
            return false;
        };
        state.form_data.merge(patch);
        self.persist(&state.form_data).await;
        true
    }

    /// Move forward one step; `false` at the last step.
    pub async fn go_next(&self) -> bool {
        let mut state = self.state.lock().await;
        if state.current_step >= STEP_COUNT {
            return false;
        }
        state.current_step += 1;
        true
    }

    /// Move back one step; `false` at the first step.
    pub async fn go_previous(&self) -> bool {
        let mut state = self.state.lock().await;
        if state.current_step <= 1 {
            return false;
        }
        state.current_step -= 1;
        true
    }

    /// Upload the logo (if any), insert the briefing, then clear the draft.
    ///
    /// Only one submit runs at a time; a second call while one is pending
    /// fails with [`WizardError::SubmissionInProgress`]. On any failure the
    /// draft is kept so the user can retry.
    pub async fn submit(&self) -> Result<Submission, WizardError> {
        if self.submitting.swap(true, Ordering::AcqRel) {
            return Err(WizardError::SubmissionInProgress);
        }
        let _flag = SubmittingFlag(&self.submitting);

        let form_data = {
            let state = self.state.lock().await;
            if let Some(id) = state.submitted {
                return Err(WizardError::AlreadySubmitted(id));
            }
            state.form_data.clone()
        };

        let logo_url = match &form_data.logo_file {
            Some(logo) => Some(self.upload_logo(logo).await?),
            None => form_data.logo_url.clone(),
        };

        let briefing = NewBriefing::from_draft(form_data, logo_url.clone());
        let stored = self.records.insert(briefing).await.map_err(|e| {
            error!("Error submitting briefing: {e}");
            WizardError::Insert(e)
        })?;

        self.drafts.clear().await;
        self.state.lock().await.submitted = Some(stored.id);
        info!(id = %stored.id, "Briefing submitted");

        Ok(Submission {
            id: stored.id,
            logo_url,
        })
    }

    /// The slot mirrors `form_data` exactly, cleared fields included.
    async fn persist(&self, form_data: &BriefingDraft) {
        self.drafts.save(BriefingPatch::replacing(form_data)).await;
    }

    async fn upload_logo(&self, logo: &LogoFile) -> Result<String, WizardError> {
        let name = logo_object_name(logo, Utc::now());
        let path = self
            .storage
            .upload(&name, logo.bytes.clone(), logo.content_type.as_deref())
            .await
            .map_err(|e| {
                error!(name = %name, "Error uploading logo: {e}");
                WizardError::Upload(e)
            })?;

        Ok(self.storage.public_url(&path))
    }
}

/// Bucket object name for a logo uploaded at `now`: `{unix_millis}.{ext}`.
pub fn logo_object_name(logo: &LogoFile, now: DateTime<Utc>) -> String {
    format!("{}.{}", now.timestamp_millis(), logo.extension())
}

/// What the wizard endpoints return: the snapshot plus everything needed to
/// draw the current step.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardView {
    pub client_id: Uuid,
    pub current_step: u8,
    pub step_count: u8,
    pub progress: u8,
    pub step: StepInfo,
    pub steps: &'static [StepInfo],
    pub form_data: BriefingDraft,
    pub is_submitting: bool,
    pub has_logo_file: bool,
    pub missing_required: Vec<&'static str>,
    pub options: StepOptions,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepOptions {
    pub site_noun: &'static str,
    pub design_styles: &'static [DesignStyle],
    pub functionalities: &'static [OptionItem],
    pub pages: &'static [OptionItem],
    pub max_brand_colors: usize,
    pub default_new_color: &'static str,
}

impl WizardView {
    pub fn new(client_id: Uuid, snapshot: WizardSnapshot) -> Self {
        let current_step = snapshot.current_step.clamp(1, STEP_COUNT);
        let project_type = snapshot.form_data.project_type;
        let progress = (f64::from(current_step) / f64::from(STEP_COUNT) * 100.0).round() as u8;

        Self {
            client_id,
            current_step,
            step_count: STEP_COUNT,
            progress,
            step: STEPS[usize::from(current_step) - 1],
            steps: &STEPS,
            missing_required: steps::missing_required(current_step, &snapshot.form_data),
            options: StepOptions {
                site_noun: catalog::site_noun(project_type),
                design_styles: catalog::design_styles(project_type),
                functionalities: catalog::functionalities(project_type),
                pages: &catalog::PAGE_OPTIONS,
                max_brand_colors: catalog::MAX_BRAND_COLORS,
                default_new_color: catalog::DEFAULT_NEW_COLOR,
            },
            form_data: snapshot.form_data,
            is_submitting: snapshot.is_submitting,
            has_logo_file: snapshot.has_logo_file,
        }
    }
}
