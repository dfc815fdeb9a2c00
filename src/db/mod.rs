pub mod briefings;

use async_trait::async_trait;
use sea_orm::{Database, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::error::RepositoryError;
use crate::models::briefings::{Model as Briefing, NewBriefing};

/// Create a SeaORM database connection pool.
pub async fn create_pool(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}

/// The stored-briefing collection as the wizard and the admin views see it.
#[async_trait]
pub trait BriefingRepository: Send + Sync {
    async fn insert(&self, briefing: NewBriefing) -> Result<Briefing, RepositoryError>;

    /// All briefings ordered by `created_at` descending.
    async fn list(&self) -> Result<Vec<Briefing>, RepositoryError>;

    async fn find(&self, id: Uuid) -> Result<Option<Briefing>, RepositoryError>;

    async fn logo_url(&self, id: Uuid) -> Result<Option<String>, RepositoryError>;

    /// Number of rows removed.
    async fn delete(&self, id: Uuid) -> Result<u64, RepositoryError>;
}

#[async_trait]
impl BriefingRepository for DatabaseConnection {
    async fn insert(&self, briefing: NewBriefing) -> Result<Briefing, RepositoryError> {
        Ok(briefings::insert_briefing(self, briefing).await?)
    }

    async fn list(&self) -> Result<Vec<Briefing>, RepositoryError> {
        Ok(briefings::get_all_briefings(self).await?)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Briefing>, RepositoryError> {
        Ok(briefings::get_briefing_by_id(self, id).await?)
    }

    async fn logo_url(&self, id: Uuid) -> Result<Option<String>, RepositoryError> {
        Ok(briefings::get_logo_url(self, id).await?)
    }

    async fn delete(&self, id: Uuid) -> Result<u64, RepositoryError> {
        Ok(briefings::delete_briefing(self, id).await?.rows_affected)
    }
}
