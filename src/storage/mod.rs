pub mod supabase;

use async_trait::async_trait;

use crate::error::StorageError;

pub use supabase::SupabaseStorage;

/// The public bucket holding briefing logos.
#[async_trait]
pub trait BlobStorage: Send + Sync {
    /// Store `bytes` under `name` and return the object's path in the bucket.
    async fn upload(
        &self,
        name: &str,
        bytes: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<String, StorageError>;

    fn public_url(&self, path: &str) -> String;

    async fn remove(&self, names: &[String]) -> Result<(), StorageError>;

    async fn download(&self, name: &str) -> Result<Vec<u8>, StorageError>;
}

/// Object name of a public URL: its final path segment, if non-empty.
pub fn object_name_from_url(url: &str) -> Option<&str> {
    url.rsplit('/').next().filter(|name| !name.is_empty())
}
