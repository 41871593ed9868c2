//! Cache-aside retrieval of the raw event payload.

use crate::api::EventSource;
use crate::cache::{Cache, EventCache};
use crate::error::Result;
use log::{info, warn};
use std::sync::Arc;

/// Decides per call whether the payload comes from the cache or the origin.
/// Without a configured cache every call goes straight to the origin.
pub struct EventFetcher {
    source: Arc<dyn EventSource>,
    cache: Option<Arc<dyn EventCache>>,
    ttl_secs: u64,
}

impl EventFetcher {
    pub fn new(
        source: Arc<dyn EventSource>,
        cache: Option<Arc<dyn EventCache>>,
        ttl_secs: u64,
    ) -> Self {
        Self {
            source,
            cache,
            ttl_secs,
        }
    }

    /// Returns the raw payload bytes for one username.
    ///
    /// Cache hit: cached bytes as-is, no TTL refresh. Clean miss: one origin
    /// fetch, then one cache write; a failed write is surfaced even though the
    /// fetched data is already in hand, so a cache that stopped accepting
    /// writes never goes unnoticed. Any non-miss cache error aborts without
    /// consulting the origin.
    pub async fn fetch_raw(&self, username: &str) -> Result<Vec<u8>> {
        let cache = match &self.cache {
            Some(cache) => cache,
            None => return self.source.fetch_events(username).await,
        };

        let key = Cache::events_key(username);
        match cache.get_raw(&key).await? {
            Some(bytes) => {
                info!("Serving events for {} from cache", username);
                Ok(bytes)
            }
            None => {
                warn!("Cache miss for {}, fetching from origin", username);
                let bytes = self.source.fetch_events(username).await?;
                cache.set_ex(&key, &bytes, self.ttl_secs).await?;
                Ok(bytes)
            }
        }
    }
}
