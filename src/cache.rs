//! Redis-backed cache for raw event feed payloads.

use crate::error::{ActivityError, Result};
use anyhow::{anyhow, Result as AnyhowResult};
use async_trait::async_trait;
use log::{debug, error, info};
use redis::{aio::ConnectionManager, AsyncCommands};
use std::fmt;

/// Key namespace for cached event feeds.
pub const EVENTS_KEY_PREFIX: &str = "github_activity";

/// Fixed payload expiry. Entries are never invalidated explicitly.
pub const DEFAULT_TTL_SECS: u64 = 300;

/// Time-bounded payload store. A clean miss is reported as `Ok(None)`,
/// distinct from a connectivity or protocol error.
#[async_trait]
pub trait EventCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>>;
    async fn set_ex(&self, key: &str, value: &[u8], ttl_secs: u64) -> Result<()>;
}

/// A Redis cache client backed by a `ConnectionManager` for automatic
/// reconnection.
#[derive(Clone)]
pub struct Cache {
    conn_manager: ConnectionManager,
    redis_url: String,
}

// ConnectionManager is not Debug, so keep a manual impl.
impl fmt::Debug for Cache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("redis_url", &self.redis_url)
            .field("conn_manager", &"<ConnectionManager instance>")
            .finish()
    }
}

impl Cache {
    pub async fn new(redis_url: &str) -> AnyhowResult<Self> {
        info!("Initializing Redis connection manager for URL: {}", redis_url);
        let client = redis::Client::open(redis_url)?;
        let conn_manager = ConnectionManager::new(client).await.map_err(|e| {
            error!("Failed to create Redis ConnectionManager: {}", e);
            anyhow!("Failed to create Redis ConnectionManager: {}", e)
        })?;
        info!("Redis ConnectionManager initialized successfully");
        Ok(Self {
            conn_manager,
            redis_url: redis_url.to_string(),
        })
    }

    /// Derives the cache key for one username, e.g. `github_activity:octocat`.
    pub fn events_key(username: &str) -> String {
        Self::generate_key(EVENTS_KEY_PREFIX, &[username])
    }

    fn generate_key(prefix: &str, params: &[&str]) -> String {
        let mut key = prefix.to_string();
        for param in params {
            key.push(':');
            key.push_str(param);
        }
        key
    }
}

#[async_trait]
impl EventCache for Cache {
    async fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>> {
        debug!("Attempting to GET cache for key: {}", key);
        let mut conn = self.conn_manager.clone();
        match conn.get::<_, Option<Vec<u8>>>(key).await {
            Ok(Some(bytes)) => {
                debug!("Cache HIT for key: {} ({} bytes)", key, bytes.len());
                Ok(Some(bytes))
            }
            Ok(None) => {
                debug!("Cache MISS for key: {}", key);
                Ok(None)
            }
            Err(e) => {
                error!("Redis GET error for key {}: {}", key, e);
                Err(ActivityError::CacheError(format!(
                    "Redis GET error for key {}: {}",
                    key, e
                )))
            }
        }
    }

    async fn set_ex(&self, key: &str, value: &[u8], ttl_secs: u64) -> Result<()> {
        let mut conn = self.conn_manager.clone();
        match conn.set_ex::<_, _, ()>(key, value, ttl_secs).await {
            Ok(_) => {
                debug!("Cache SETEX success for key: {} with TTL: {}s", key, ttl_secs);
                Ok(())
            }
            Err(e) => {
                error!("Failed to SETEX key '{}' in Redis: {}", key, e);
                Err(ActivityError::CacheError(format!(
                    "Redis SETEX error for key {}: {}",
                    key, e
                )))
            }
        }
    }
}
