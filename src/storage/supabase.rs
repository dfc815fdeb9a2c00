use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use super::BlobStorage;
use crate::error::StorageError;

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Supabase Storage REST client for a single bucket.
#[derive(Clone)]
pub struct SupabaseStorage {
    client: reqwest::Client,
    base_url: String,
    bucket: String,
    service_key: String,
}

impl SupabaseStorage {
    pub fn new(supabase_url: &str, service_key: &str, bucket: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: supabase_url.trim_end_matches('/').to_string(),
            bucket: bucket.to_string(),
            service_key: service_key.to_string(),
        }
    }

    fn object_url(&self, name: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.base_url, self.bucket, name)
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
    }

    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, StorageError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<unreadable body: {e}>"));
        Err(StorageError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl BlobStorage for SupabaseStorage {
    async fn upload(
        &self,
        name: &str,
        bytes: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<String, StorageError> {
        debug!(bucket = %self.bucket, name, len = bytes.len(), "Uploading object");

        let response = self
            .authorized(self.client.post(self.object_url(name)))
            .header(CONTENT_TYPE, content_type.unwrap_or(DEFAULT_CONTENT_TYPE))
            .header("x-upsert", "false")
            .body(bytes)
            .send()
            .await?;
        Self::ensure_success(response).await?;

        Ok(name.to_string())
    }

    fn public_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, path
        )
    }

    async fn remove(&self, names: &[String]) -> Result<(), StorageError> {
        debug!(bucket = %self.bucket, ?names, "Removing objects");

        let url = format!("{}/storage/v1/object/{}", self.base_url, self.bucket);
        let response = self
            .authorized(self.client.delete(url))
            .json(&serde_json::json!({ "prefixes": names }))
            .send()
            .await?;
        Self::ensure_success(response).await?;

        Ok(())
    }

    async fn download(&self, name: &str) -> Result<Vec<u8>, StorageError> {
        let response = self
            .authorized(self.client.get(self.object_url(name)))
            .send()
            .await?;
        let bytes = Self::ensure_success(response).await?.bytes().await?;

        Ok(bytes.to_vec())
    }
}
