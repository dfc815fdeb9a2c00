use std::env;
use std::time::Duration;

use crate::error::ConfigError;

const DEFAULT_BUCKET: &str = "briefing-logos";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SESSION_TTL_SECS: u64 = 3600;
const DEFAULT_MAX_LOGO_BYTES: usize = 5 * 1024 * 1024;
const DEFAULT_WIZARD_URL: &str = "/";

/// Everything the service reads from the environment at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    /// Draft slots fall back to process memory when unset.
    pub redis_url: Option<String>,
    pub supabase_url: String,
    pub supabase_service_key: String,
    pub storage_bucket: String,
    pub port: u16,
    pub draft_ttl: Option<Duration>,
    pub session_ttl: Duration,
    pub max_logo_bytes: usize,
    /// Wizard front end, served outside this service.
    pub wizard_url: String,
    pub run_migrations: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let supabase_url = required("SUPABASE_URL")?;
        if !supabase_url.starts_with("https://") && !supabase_url.starts_with("http://") {
            return Err(ConfigError::Invalid {
                key: "SUPABASE_URL",
                value: supabase_url,
            });
        }

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            redis_url: optional("REDIS_URL"),
            supabase_url: supabase_url.trim_end_matches('/').to_string(),
            supabase_service_key: required("SUPABASE_SERVICE_KEY")?,
            storage_bucket: optional("STORAGE_BUCKET").unwrap_or_else(|| DEFAULT_BUCKET.to_string()),
            port: parsed("PORT")?.unwrap_or(DEFAULT_PORT),
            draft_ttl: parsed::<u64>("DRAFT_TTL_SECS")?.map(Duration::from_secs),
            session_ttl: Duration::from_secs(
                parsed("WIZARD_SESSION_TTL_SECS")?.unwrap_or(DEFAULT_SESSION_TTL_SECS),
            ),
            max_logo_bytes: parsed("MAX_LOGO_BYTES")?.unwrap_or(DEFAULT_MAX_LOGO_BYTES),
            wizard_url: optional("WIZARD_URL").unwrap_or_else(|| DEFAULT_WIZARD_URL.to_string()),
            run_migrations: parsed("RUN_MIGRATIONS")?.unwrap_or(true),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    optional(key).ok_or(ConfigError::Missing(key))
}

fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parsed<T: std::str::FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match optional(key) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(None),
    }
}
