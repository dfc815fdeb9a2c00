use actix_web::HttpResponse;
use askama::Template;
use tracing::error;

use crate::admin::view::{BriefingCard, BriefingDetail, EntryValue};

#[derive(Template)]
#[template(path = "admin/briefings.html")]
pub struct BriefingListTemplate {
    pub cards: Vec<BriefingCard>,
    pub count_label: String,
}

#[derive(Template)]
#[template(path = "admin/briefing_detail.html")]
pub struct BriefingDetailTemplate {
    pub detail: BriefingDetail,
}

#[derive(Template)]
#[template(path = "admin/error.html")]
pub struct AdminErrorTemplate {
    pub message: &'static str,
}

#[derive(Template)]
#[template(path = "success.html")]
pub struct SuccessTemplate {
    pub id: Option<String>,
    pub wizard_url: String,
}

/// Render a page, answering 500 if the template itself fails.
pub fn render<T: Template>(template: &T) -> HttpResponse {
    render_with(HttpResponse::Ok(), template)
}

pub fn render_with<T: Template>(
    mut builder: actix_web::HttpResponseBuilder,
    template: &T,
) -> HttpResponse {
    match template.render() {
        Ok(html) => builder.content_type("text/html; charset=utf-8").body(html),
        Err(e) => {
            error!("Template error: {e}");
            HttpResponse::InternalServerError().body("Internal Server Error")
        }
    }
}
