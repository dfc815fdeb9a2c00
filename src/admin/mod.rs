pub mod view;

use tracing::{error, info, warn};
use uuid::Uuid;

use crate::db::BriefingRepository;
use crate::models::briefings::DeleteOutcome;
use crate::storage::{BlobStorage, object_name_from_url};

pub use view::{BriefingCard, BriefingDetail};

/// Delete a briefing together with its logo.
///
/// Logo removal is best-effort: a failed lookup or removal is logged and the
/// row is deleted regardless. Only the row delete decides the outcome.
pub async fn delete_briefing(
    records: &dyn BriefingRepository,
    storage: &dyn BlobStorage,
    id: Uuid,
) -> DeleteOutcome {
    let logo_url = records.logo_url(id).await.unwrap_or_else(|e| {
        warn!(%id, "Could not look up logo of briefing: {e}");
        None
    });

    if let Some(name) = logo_url.as_deref().and_then(object_name_from_url) {
        if let Err(e) = storage.remove(&[name.to_string()]).await {
            warn!(%id, name, "Logo removal failed: {e}");
        }
    }

    match records.delete(id).await {
        Ok(rows) => {
            info!(%id, rows, "Briefing deleted");
            DeleteOutcome::ok()
        }
        Err(e) => {
            error!(%id, "Error deleting briefing: {e}");
            DeleteOutcome::failed(e.to_string())
        }
    }
}
