use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::declare_object_cache_plugin;

declare_object_cache_plugin!("moka", MokaCacheWrapper);

pub struct MokaCacheWrapper {
    inner: Cache<String, String>,
}

impl Default for MokaCacheWrapper {
    fn default() -> Self {
        Self::new().expect("MokaCacheWrapper initialization failed, check the cache configuration")
    }
}

impl MokaCacheWrapper {
    pub fn new() -> Result<Self, String> {
        let config = AppConfig::get();
        let inner = Cache::builder()
            .max_capacity(config.cache.memory.max_capacity)
            .time_to_live(std::time::Duration::from_secs(config.cache.default_ttl))
            .build();

        debug!(
            "MokaCacheWrapper initialized with max capacity: {}",
            config.cache.memory.max_capacity
        );
        Ok(Self { inner })
    }
}

#[async_trait]
impl ObjectCache for MokaCacheWrapper {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        if let Some(value) = self.inner.get(key).await {
            debug!("Successfully retrieved key: {}", key);
            CacheResult::Found(value)
        } else {
            debug!("Key not found in cache: {}", key);
            CacheResult::NotFound
        }
    }

    async fn insert_raw(&self, key: String, value: String, ttl: u64) {
        // The TTL policy is set globally when the cache is built, so the
        // per-item ttl argument is ignored here.
        self.inner.insert(key, value).await;

        if ttl != 0 {
            tracing::debug!("Moka cache ignores per-item TTL, using global TTL configuration");
        }
    }

    async fn remove(&self, key: &str) {
        self.inner.invalidate(key).await;
    }

    async fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrapper() -> MokaCacheWrapper {
        MokaCacheWrapper {
            inner: Cache::builder().max_capacity(64).build(),
        }
    }

    #[tokio::test]
    async fn consumed_keys_cannot_be_replayed() {
        let cache = wrapper();
        let key = "password_reset:user@example.com";

        cache.insert_raw(key.to_string(), "483920".to_string(), 600).await;
        assert_eq!(
            cache.get_raw(key).await,
            CacheResult::Found("483920".to_string())
        );

        cache.remove(key).await;
        assert_eq!(cache.get_raw(key).await, CacheResult::NotFound);
    }
}
