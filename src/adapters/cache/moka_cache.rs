//! `KeyedExpiringCache` backed by a moka future cache.
//!
//! Entries use `time_to_idle`, so every read hit pushes expiry out by the
//! full idle window.

use async_trait::async_trait;
use moka::future::Cache;
use std::hash::Hash;
use std::time::Duration;

use crate::domain::ports::KeyedExpiringCache;

/// Default idle window for cached entries (10 minutes).
pub const DEFAULT_IDLE_SECS: u64 = 600;

/// Default maximum number of cached entries.
pub const DEFAULT_MAX_CAPACITY: u64 = 10_000;

/// Sliding-expiration cache shared by every request of the process.
pub struct MokaExpiringCache<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    inner: Cache<K, V>,
}

impl<K, V> MokaExpiringCache<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    /// Create a cache with the default idle window and capacity.
    pub fn new() -> Self {
        Self::with_idle(Duration::from_secs(DEFAULT_IDLE_SECS), DEFAULT_MAX_CAPACITY)
    }

    /// Create with a custom idle window.
    pub fn with_idle(idle: Duration, max_capacity: u64) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_idle(idle)
            .build();

        Self { inner }
    }

    /// Approximate number of live entries.
    #[cfg(test)]
    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }

    /// Flush pending maintenance so `entry_count` reflects recent writes.
    #[cfg(test)]
    pub async fn sync(&self) {
        self.inner.run_pending_tasks().await;
    }
}

impl<K, V> Default for MokaExpiringCache<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<K, V> KeyedExpiringCache<K, V> for MokaExpiringCache<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &K) -> Option<V> {
        self.inner.get(key).await
    }

    async fn insert(&self, key: K, value: V) {
        self.inner.insert(key, value).await;
    }

    async fn invalidate(&self, key: &K) {
        self.inner.invalidate(key).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache(idle_ms: u64) -> MokaExpiringCache<String, u32> {
        MokaExpiringCache::with_idle(Duration::from_millis(idle_ms), 100)
    }

    #[tokio::test]
    async fn test_insert_get_invalidate() {
        let cache = cache(60_000);
        let key = "branches#docs".to_string();

        assert_eq!(cache.get(&key).await, None);
        cache.insert(key.clone(), 7).await;
        assert_eq!(cache.get(&key).await, Some(7));

        cache.invalidate(&key).await;
        assert_eq!(cache.get(&key).await, None);

        // Invalidating a missing key is a no-op
        cache.invalidate(&key).await;
        assert_eq!(cache.get(&key).await, None);
    }

    #[tokio::test]
    async fn test_read_hit_extends_idle_window() {
        let cache = cache(400);
        let key = "branches#docs".to_string();
        cache.insert(key.clone(), 1).await;

        // Each hit lands inside the idle window, keeping the entry alive past
        // the point where an absolute TTL would have expired it.
        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(cache.get(&key).await, Some(1));
        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(cache.get(&key).await, Some(1));

        tokio::time::sleep(Duration::from_millis(800)).await;
        assert_eq!(cache.get(&key).await, None);
    }

    #[tokio::test]
    async fn test_entry_count_after_sync() {
        let cache = cache(60_000);
        cache.insert("a".to_string(), 1).await;
        cache.insert("b".to_string(), 2).await;
        cache.sync().await;
        assert_eq!(cache.entry_count(), 2);
    }
}
