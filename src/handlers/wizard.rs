use actix_web::http::header::CONTENT_TYPE;
use actix_web::{HttpRequest, HttpResponse, Responder, web};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::WizardError;
use crate::models::draft::{BriefingPatch, LogoFile};
use crate::wizard::{StepAction, WizardController, WizardSessions, WizardView};

/// Shown to the user whenever a submission fails; the draft is kept.
pub const SUBMIT_ERROR_MESSAGE: &str = "Erro ao enviar briefing. Por favor, tente novamente.";

async fn view_of(client_id: Uuid, wizard: &WizardController) -> WizardView {
    WizardView::new(client_id, wizard.snapshot().await)
}

/// POST /api/wizard: start a wizard for a new client.
pub async fn create_wizard(sessions: web::Data<WizardSessions>) -> impl Responder {
    let client_id = Uuid::new_v4();
    let wizard = sessions.open(client_id).await;
    HttpResponse::Created().json(view_of(client_id, &wizard).await)
}

/// GET /api/wizard/{client_id}: current state, resuming any saved draft.
pub async fn get_wizard(
    sessions: web::Data<WizardSessions>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let client_id = path.into_inner();
    let wizard = sessions.open(client_id).await;
    HttpResponse::Ok().json(view_of(client_id, &wizard).await)
}

/// PATCH /api/wizard/{client_id}: merge edited fields into the answers.
pub async fn update_wizard(
    sessions: web::Data<WizardSessions>,
    path: web::Path<Uuid>,
    body: web::Json<BriefingPatch>,
) -> impl Responder {
    let client_id = path.into_inner();
    let wizard = sessions.open(client_id).await;
    wizard.update_form_data(body.into_inner()).await;
    HttpResponse::Ok().json(view_of(client_id, &wizard).await)
}

/// POST /api/wizard/{client_id}/actions: apply a step gesture (tags, colours, checklists).
pub async fn apply_action(
    sessions: web::Data<WizardSessions>,
    path: web::Path<Uuid>,
    body: web::Json<StepAction>,
) -> impl Responder {
    let client_id = path.into_inner();
    let wizard = sessions.open(client_id).await;
    wizard.apply(body.into_inner()).await;
    HttpResponse::Ok().json(view_of(client_id, &wizard).await)
}

#[derive(Debug, Deserialize)]
pub struct LogoQuery {
    pub file_name: String,
}

/// PUT /api/wizard/{client_id}/logo?file_name=…: attach the logo file; the
/// raw request body is the image.
pub async fn upload_logo(
    sessions: web::Data<WizardSessions>,
    path: web::Path<Uuid>,
    query: web::Query<LogoQuery>,
    req: HttpRequest,
    body: web::Bytes,
) -> impl Responder {
    let client_id = path.into_inner();
    let file_name = query.into_inner().file_name;

    if body.is_empty() || file_name.trim().is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "A logo upload needs a file name and a non-empty body",
        }));
    }

    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let wizard = sessions.open(client_id).await;
    wizard
        .update_form_data(BriefingPatch {
            logo_file: Some(Some(LogoFile {
                file_name,
                content_type,
                bytes: body.to_vec(),
            })),
            ..Default::default()
        })
        .await;

    HttpResponse::Ok().json(view_of(client_id, &wizard).await)
}

/// POST /api/wizard/{client_id}/next
pub async fn next_step(
    sessions: web::Data<WizardSessions>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let client_id = path.into_inner();
    let wizard = sessions.open(client_id).await;
    wizard.go_next().await;
    HttpResponse::Ok().json(view_of(client_id, &wizard).await)
}

/// POST /api/wizard/{client_id}/previous
pub async fn previous_step(
    sessions: web::Data<WizardSessions>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let client_id = path.into_inner();
    let wizard = sessions.open(client_id).await;
    wizard.go_previous().await;
    HttpResponse::Ok().json(view_of(client_id, &wizard).await)
}

/// POST /api/wizard/{client_id}/submit: store the briefing and hand back
/// the confirmation page URL.
pub async fn submit_wizard(
    sessions: web::Data<WizardSessions>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let client_id = path.into_inner();
    let wizard = sessions.open(client_id).await;

    match wizard.submit().await {
        Ok(submission) => {
            sessions.close(client_id).await;
            HttpResponse::Created().json(serde_json::json!({
                "id": submission.id,
                "logoUrl": submission.logo_url,
                "redirect": format!("/success?id={}", submission.id),
            }))
        }
        Err(WizardError::SubmissionInProgress) => HttpResponse::Conflict().json(serde_json::json!({
            "error": "Briefing is already being submitted",
        })),
        Err(WizardError::AlreadySubmitted(id)) => HttpResponse::Conflict().json(serde_json::json!({
            "error": "Briefing was already submitted",
            "id": id,
        })),
        Err(e) => HttpResponse::BadGateway().json(serde_json::json!({
            "error": SUBMIT_ERROR_MESSAGE,
            "detail": e.to_string(),
        })),
    }
}
