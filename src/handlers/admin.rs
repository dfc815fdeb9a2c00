use actix_web::http::header::ContentDisposition;
use actix_web::{HttpResponse, web};
use tracing::{error, warn};
use uuid::Uuid;

use crate::admin::view::{count_label, logo_download_name};
use crate::admin::{BriefingCard, BriefingDetail};
use crate::db::BriefingRepository;
use crate::storage::{BlobStorage, object_name_from_url};
use crate::templates::{
    AdminErrorTemplate, BriefingDetailTemplate, BriefingListTemplate, render, render_with,
};

const LIST_ERROR: &str = "Erro ao carregar briefings. Por favor, tente novamente.";
const NOT_FOUND: &str = "Briefing não encontrado.";

/// GET /admin/briefings
pub async fn list_page(records: web::Data<dyn BriefingRepository>) -> HttpResponse {
    match records.list().await {
        Ok(briefings) => {
            let cards: Vec<BriefingCard> = briefings.iter().map(BriefingCard::from).collect();
            render(&BriefingListTemplate {
                count_label: count_label(cards.len()),
                cards,
            })
        }
        Err(e) => {
            error!("Error fetching briefings: {e}");
            render_with(
                HttpResponse::InternalServerError(),
                &AdminErrorTemplate {
                    message: LIST_ERROR,
                },
            )
        }
    }
}

/// GET /admin/briefings/{id}
pub async fn detail_page(
    records: web::Data<dyn BriefingRepository>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    match records.find(path.into_inner()).await {
        Ok(Some(briefing)) => render(&BriefingDetailTemplate {
            detail: BriefingDetail::from(&briefing),
        }),
        Ok(None) => render_with(
            HttpResponse::NotFound(),
            &AdminErrorTemplate { message: NOT_FOUND },
        ),
        Err(e) => {
            error!("Error fetching briefing: {e}");
            render_with(
                HttpResponse::InternalServerError(),
                &AdminErrorTemplate {
                    message: LIST_ERROR,
                },
            )
        }
    }
}

/// GET /admin/briefings/{id}/logo: the stored logo as an attachment named
/// after the project.
pub async fn download_logo(
    records: web::Data<dyn BriefingRepository>,
    storage: web::Data<dyn BlobStorage>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let id = path.into_inner();

    let briefing = match records.find(id).await {
        Ok(Some(b)) => b,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Briefing {id} not found"),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    let Some(name) = briefing.logo_url.as_deref().and_then(object_name_from_url) else {
        return HttpResponse::NotFound().json(serde_json::json!({
            "error": "Briefing has no logo",
        }));
    };

    match storage.download(name).await {
        Ok(bytes) => HttpResponse::Ok()
            .content_type(image_content_type(name))
            .insert_header(ContentDisposition::attachment(logo_download_name(
                &briefing.project_name,
            )))
            .body(bytes),
        Err(e) => {
            warn!(%id, name, "Logo download failed: {e}");
            HttpResponse::BadGateway().json(serde_json::json!({
                "error": format!("Failed to download logo: {e}"),
            }))
        }
    }
}

fn image_content_type(name: &str) -> &'static str {
    let ext = name.rsplit('.').next().unwrap_or_default().to_lowercase();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
