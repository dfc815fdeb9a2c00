use actix_web::{HttpResponse, Responder, web};
use tracing::error;
use uuid::Uuid;

use crate::admin;
use crate::db::BriefingRepository;
use crate::storage::BlobStorage;

/// GET /api/briefings: every stored briefing, newest first.
pub async fn get_briefings(records: web::Data<dyn BriefingRepository>) -> impl Responder {
    match records.list().await {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(e) => {
            error!("Error fetching briefings: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Failed to fetch briefings: {e}"),
            }))
        }
    }
}

/// GET /api/briefings/{id}: a single briefing.
pub async fn get_briefing(
    records: web::Data<dyn BriefingRepository>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match records.find(id).await {
        Ok(Some(item)) => HttpResponse::Ok().json(item),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Briefing {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// DELETE /api/briefings/{id}: delete a briefing and its logo.
pub async fn delete_briefing(
    records: web::Data<dyn BriefingRepository>,
    storage: web::Data<dyn BlobStorage>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let outcome = admin::delete_briefing(
        records.get_ref(),
        storage.get_ref(),
        path.into_inner(),
    )
    .await;

    if outcome.success {
        HttpResponse::Ok().json(outcome)
    } else {
        HttpResponse::InternalServerError().json(outcome)
    }
}
