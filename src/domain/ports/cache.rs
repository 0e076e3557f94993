use std::hash::Hash;

use async_trait::async_trait;

/// Concurrent key/value store whose entries expire after a period of disuse.
///
/// A successful `get` counts as an access and restarts the entry's idle
/// window. `invalidate` removes the entry outright and is a no-op for
/// missing keys.
#[async_trait]
pub trait KeyedExpiringCache<K, V>: Send + Sync
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &K) -> Option<V>;

    async fn insert(&self, key: K, value: V);

    async fn invalidate(&self, key: &K);
}
