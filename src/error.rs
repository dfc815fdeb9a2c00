use sea_orm::DbErr;
use uuid::Uuid;

/// Startup configuration problems.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Failures of the key/value slot behind the Draft Store. These never reach
/// the wizard user; the store logs and swallows them.
#[derive(Debug, thiserror::Error)]
pub enum SlotError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),
}

/// Failures of the briefing record collection.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Db(#[from] DbErr),
}

/// Failures of the logo bucket.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Storage responded with HTTP {status}: {message}")]
    Status { status: u16, message: String },
}

#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("A submission is already in progress")]
    SubmissionInProgress,

    #[error("Briefing already submitted as {0}")]
    AlreadySubmitted(Uuid),

    #[error("Failed to upload logo: {0}")]
    Upload(#[source] StorageError),

    #[error("Failed to save briefing: {0}")]
    Insert(#[source] RepositoryError),
}
