use anyhow::{Context, Result};
use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;

use crate::config::Config;

#[cfg(test)]
pub mod memory;

/// Outcome of a single key lookup against the backing store
///
/// Absence is a regular outcome and is kept apart from failures, which
/// map to different HTTP statuses.
#[derive(Debug)]
pub enum Lookup {
    Found(String),
    NotFound,
    Error(anyhow::Error),
}

/// Operations the HTTP layer needs from the external key-value store
///
/// Implementations must be safe to share across concurrent handlers
/// without any locking on the caller's side.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reachability check. Must not mutate store state.
    async fn ping(&self) -> Result<()>;

    async fn get(&self, key: &str) -> Lookup;

    /// Unconditional overwrite, last write wins, no expiry.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Shareable Redis client for use across async handlers
///
/// Wraps a multiplexed `ConnectionManager`, which reconnects on its own
/// and is cheap to clone for each command.
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    /// Connect to the store described by the configuration and verify
    /// it answers a `PING` before returning.
    pub async fn from_config(config: &Config) -> Result<Self> {
        tracing::info!("Connecting to store at {}:{}", config.store_host, config.store_port);
        Self::connect(&config.store_url()).await
    }

    pub async fn connect(url: &str) -> Result<Self> {
        let client = redis::Client::open(url)
            .with_context(|| format!("Invalid store URL: {}", url))?;

        // Single attempt, no backoff: an unreachable store at startup is fatal.
        let mut first_conn = client
            .get_multiplexed_async_connection()
            .await
            .context("Failed to connect to store")?;
        let _: String = redis::cmd("PING")
            .query_async(&mut first_conn)
            .await
            .context("Store did not answer the startup reachability check")?;

        let conn = ConnectionManager::new(client)
            .await
            .context("Failed to connect to store")?;

        let store = Self { conn };
        tracing::info!("Successfully connected to store");
        Ok(store)
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn ping(&self) -> Result<()> {
        let mut conn = self.conn.clone();
        let reply: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .context("PING failed")?;

        tracing::debug!("Store answered PING with {}", reply);
        Ok(())
    }

    async fn get(&self, key: &str) -> Lookup {
        let mut conn = self.conn.clone();
        let result: redis::RedisResult<Option<String>> = conn.get(key).await;

        match result {
            Ok(Some(value)) => {
                tracing::debug!("Read value for key: {}", key);
                Lookup::Found(value)
            }
            Ok(None) => {
                tracing::debug!("Key not present in store: {}", key);
                Lookup::NotFound
            }
            Err(err) => Lookup::Error(anyhow::Error::new(err).context(format!("GET {} failed", key))),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        let _: () = conn
            .set(key, value)
            .await
            .with_context(|| format!("SET {} failed", key))?;

        tracing::debug!("Stored value for key: {}", key);
        Ok(())
    }
}
