use std::time::Duration;

use async_trait::async_trait;
use redis::{Client, RedisError, aio::ConnectionManager};

use super::DraftSlot;
use crate::error::SlotError;

/// Draft slot backed by Redis string keys, optionally expiring.
#[derive(Clone)]
pub struct RedisSlot {
    connection: ConnectionManager,
    ttl: Option<Duration>,
}

impl RedisSlot {
    pub async fn new(redis_url: &str, ttl: Option<Duration>) -> Result<Self, RedisError> {
        let client = Client::open(redis_url)?;
        let connection = ConnectionManager::new(client).await?;
        Ok(Self { connection, ttl })
    }
}

#[async_trait]
impl DraftSlot for RedisSlot {
    async fn read(&self, key: &str) -> Result<Option<String>, SlotError> {
        let value: Option<String> = redis::cmd("GET")
            .arg(key)
            .query_async(&mut self.connection.clone())
            .await?;
        Ok(value)
    }

    async fn write(&self, key: &str, value: String) -> Result<(), SlotError> {
        let mut cmd = redis::cmd("SET");
        cmd.arg(key).arg(value);

        if let Some(ttl) = self.ttl {
            cmd.arg("EX").arg(ttl.as_secs().max(1));
        }

        let _: () = cmd.query_async(&mut self.connection.clone()).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), SlotError> {
        let _: () = redis::cmd("DEL")
            .arg(key)
            .query_async(&mut self.connection.clone())
            .await?;
        Ok(())
    }
}
