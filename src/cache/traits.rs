use async_trait::async_trait;

/// Outcome of a cache lookup. `ExistsButNoValue` covers transport errors
/// where the key's state could not be determined; callers treat it as a
/// miss without removing anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
    ExistsButNoValue,
}

impl<T> CacheResult<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            CacheResult::Found(value) => Some(value),
            _ => None,
        }
    }
}

/// String-keyed object cache. Values are serialized by the caller so
/// backends only move strings around.
#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;

    /// `ttl` is in seconds; 0 means the backend default.
    async fn insert_raw(&self, key: String, value: String, ttl: u64);

    async fn remove(&self, key: &str);

    async fn invalidate_all(&self);
}
