//! Redis store backend.
//!
//! Production client for an external redis instance. The four trait
//! primitives map one-to-one onto GET, SMEMBERS, RPUSH and LRANGE.
//! Connections are pooled through `ConnectionManager`, which also
//! reconnects transparently after a dropped connection.

use anyhow::{Context, Result};
use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};

use super::client::KeyValueStore;

pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    /// Connect to redis at `url`, e.g. `redis://127.0.0.1:6379`.
    pub async fn connect(url: &str) -> Result<Self> {
        let client = Client::open(url).with_context(|| format!("Invalid redis url: {}", url))?;
        let conn = ConnectionManager::new(client)
            .await
            .with_context(|| format!("Failed to connect to redis at {}", url))?;

        Ok(Self { conn })
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set_members(&self, key: &str) -> Result<Vec<String>> {
        let mut conn = self.conn.clone();
        let members: Vec<String> = conn.smembers(key).await?;
        Ok(members)
    }

    async fn list_append(&self, key: &str, value: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        conn.rpush::<_, _, ()>(key, value).await?;
        Ok(())
    }

    async fn list_range(&self, key: &str, start: isize, stop: isize) -> Result<Vec<String>> {
        let mut conn = self.conn.clone();
        let entries: Vec<String> = conn.lrange(key, start, stop).await?;
        Ok(entries)
    }
}
