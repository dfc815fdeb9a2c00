use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::templates::{SuccessTemplate, render};

/// Where the wizard front end lives; the confirmation page links back to it.
#[derive(Debug, Clone)]
pub struct WizardLink(pub String);

#[derive(Debug, Deserialize)]
pub struct SuccessQuery {
    pub id: Option<String>,
}

/// GET /success?id=…: confirmation page after a submit.
pub async fn success_page(
    link: web::Data<WizardLink>,
    query: web::Query<SuccessQuery>,
) -> HttpResponse {
    let id = query.into_inner().id.filter(|id| !id.trim().is_empty());
    render(&SuccessTemplate {
        id,
        wizard_url: link.0.clone(),
    })
}
