//! Cache-aside store for per-project branch collections.
//!
//! Only the full collection of a project is cached. Entries slide: every hit
//! restarts the idle window. Writes drop the entry through [`BranchCache::invalidate`].
//!
//! There is no single-flight coalescing. Concurrent misses on one project may
//! each run the loader and the last insert wins. A read that loaded a snapshot
//! before a concurrent write invalidated the entry can still insert that
//! snapshot afterwards; it lives until the next write or idle expiry.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::adapters::cache::MokaExpiringCache;
use crate::domain::errors::GatewayResult;
use crate::domain::models::{Branch, CacheConfig, EnrichedBranch};
use crate::domain::ports::KeyedExpiringCache;
use crate::services::config_extractor;

/// Shared, immutable snapshot of a project's enriched branches.
pub type BranchList = Arc<Vec<EnrichedBranch>>;

/// Key prefix scoping branch collections inside the shared cache.
const CACHE_SCOPE: &str = "BranchesService#";

/// Process-wide store of enriched branch collections, one entry per project.
pub struct BranchCache {
    store: Arc<dyn KeyedExpiringCache<String, BranchList>>,
}

impl BranchCache {
    pub fn new(store: Arc<dyn KeyedExpiringCache<String, BranchList>>) -> Self {
        Self { store }
    }

    /// Build a moka-backed cache from configuration.
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(Arc::new(MokaExpiringCache::with_idle(
            Duration::from_secs(config.branches_idle_secs),
            config.max_capacity,
        )))
    }

    pub fn cache_key(project_id: &str) -> String {
        format!("{CACHE_SCOPE}{project_id}")
    }

    /// Return the cached collection for `project_id`, loading and enriching it on a miss.
    ///
    /// Nothing is cached when the loader or the enrichment of any branch fails.
    pub async fn get_or_load<F, Fut>(
        &self,
        project_id: &str,
        loader: F,
    ) -> GatewayResult<Vec<EnrichedBranch>>
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = GatewayResult<Vec<Branch>>> + Send,
    {
        let key = Self::cache_key(project_id);

        if let Some(cached) = self.store.get(&key).await {
            debug!(project_id, branches = cached.len(), "branch cache hit");
            return Ok((*cached).clone());
        }

        debug!(project_id, "branch cache miss, loading from downstream");
        let branches = loader().await?;
        let enriched = branches
            .into_iter()
            .map(config_extractor::enrich)
            .collect::<GatewayResult<Vec<_>>>()?;

        self.store.insert(key, Arc::new(enriched.clone())).await;
        Ok(enriched)
    }

    /// Drop the cached collection of `project_id`, if any.
    pub async fn invalidate(&self, project_id: &str) {
        self.store.invalidate(&Self::cache_key(project_id)).await;
        debug!(project_id, "branch cache entry invalidated");
    }

    /// Cached collection without loading on a miss. Counts as a hit when present.
    pub async fn cached(&self, project_id: &str) -> Option<BranchList> {
        self.store.get(&Self::cache_key(project_id)).await
    }
}
