pub mod admin;
pub mod briefings;
pub mod success;
pub mod wizard;

use actix_web::web;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Wizard (one session per client id) ──
    cfg.service(web::resource("/api/wizard").route(web::post().to(wizard::create_wizard)));
    cfg.service(
        web::scope("/api/wizard/{client_id}")
            .route("", web::get().to(wizard::get_wizard))
            .route("", web::patch().to(wizard::update_wizard))
            .route("/actions", web::post().to(wizard::apply_action))
            .route("/logo", web::put().to(wizard::upload_logo))
            .route("/next", web::post().to(wizard::next_step))
            .route("/previous", web::post().to(wizard::previous_step))
            .route("/submit", web::post().to(wizard::submit_wizard)),
    );

    // ── Stored briefings ──
    cfg.service(web::resource("/api/briefings").route(web::get().to(briefings::get_briefings)));
    cfg.service(
        web::resource("/api/briefings/{id}")
            .route(web::get().to(briefings::get_briefing))
            .route(web::delete().to(briefings::delete_briefing)),
    );

    // ── Pages ──
    cfg.service(
        web::scope("/admin/briefings")
            .route("", web::get().to(admin::list_page))
            .route("/{id}", web::get().to(admin::detail_page))
            .route("/{id}/logo", web::get().to(admin::download_logo)),
    );
    cfg.route("/success", web::get().to(success::success_page));
}
