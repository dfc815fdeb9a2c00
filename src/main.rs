use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use briefing_backend::config::AppConfig;
use briefing_backend::db::BriefingRepository;
use briefing_backend::drafts::{DraftSlot, MemorySlot, RedisSlot};
use briefing_backend::handlers::success::WizardLink;
use briefing_backend::storage::{BlobStorage, SupabaseStorage};
use briefing_backend::wizard::WizardSessions;
use briefing_backend::{create_pool, handlers};
use dotenv::dotenv;
use migration::{Migrator, MigratorTrait};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = AppConfig::from_env().map_err(io::Error::other)?;

    let db = create_pool(&config.database_url)
        .await
        .map_err(io::Error::other)?;
    if config.run_migrations {
        Migrator::up(&db, None).await.map_err(io::Error::other)?;
        tracing::info!("Migrations applied");
    }
    let records: Arc<dyn BriefingRepository> = Arc::new(db);

    let slot: Arc<dyn DraftSlot> = match &config.redis_url {
        Some(url) => match RedisSlot::new(url, config.draft_ttl).await {
            Ok(slot) => {
                tracing::info!("Connected to Redis");
                Arc::new(slot)
            }
            Err(e) => {
                tracing::warn!("Redis unavailable ({e}); keeping drafts in memory");
                Arc::new(MemorySlot::new())
            }
        },
        None => {
            tracing::warn!("REDIS_URL not set; keeping drafts in memory");
            Arc::new(MemorySlot::new())
        }
    };

    let storage: Arc<dyn BlobStorage> = Arc::new(SupabaseStorage::new(
        &config.supabase_url,
        &config.supabase_service_key,
        &config.storage_bucket,
    ));

    let sessions = web::Data::new(WizardSessions::new(
        slot,
        records.clone(),
        storage.clone(),
        config.session_ttl,
    ));
    let records_data = web::Data::from(records);
    let storage_data = web::Data::from(storage);
    let max_logo_bytes = config.max_logo_bytes;
    let wizard_link = web::Data::new(WizardLink(config.wizard_url.clone()));

    let bind_addr = config.bind_addr();
    tracing::info!("Server running at http://{bind_addr}");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(web::PayloadConfig::new(max_logo_bytes))
            .app_data(sessions.clone())
            .app_data(records_data.clone())
            .app_data(storage_data.clone())
            .app_data(wizard_link.clone())
            .configure(handlers::init_routes)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
