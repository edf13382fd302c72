use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::models::{Query, Recommendation};

/// In-memory cache of recommendations
///
/// Predictions are a pure function of the query and the loaded model, so a
/// cached entry stays valid until it expires. A capacity of zero disables
/// caching entirely.
#[derive(Clone)]
pub struct RecommendationCache {
    inner: Option<moka::future::Cache<Query, Recommendation>>,
    ttl_secs: u64,
}

impl RecommendationCache {
    /// Create a new cache
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let inner = (capacity > 0).then(|| {
            moka::future::CacheBuilder::new(capacity)
                .time_to_live(Duration::from_secs(ttl_secs))
                .build()
        });

        Self { inner, ttl_secs }
    }

    /// Cache that never stores anything
    pub fn disabled() -> Self {
        Self::new(0, 0)
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }

    pub async fn get(&self, query: &Query) -> Option<Recommendation> {
        let cache = self.inner.as_ref()?;
        let hit = cache.get(query).await;
        if hit.is_some() {
            tracing::trace!("Recommendation cache hit: {:?}", query);
        }
        hit
    }

    pub async fn insert(&self, query: Query, recommendation: Recommendation) {
        if let Some(cache) = &self.inner {
            cache.insert(query, recommendation).await;
        }
    }

    pub fn invalidate_all(&self) {
        if let Some(cache) = &self.inner {
            cache.invalidate_all();
        }
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            enabled: self.is_enabled(),
            entries: self.inner.as_ref().map_or(0, |c| c.entry_count()),
            ttl_secs: self.ttl_secs,
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub enabled: bool,
    pub entries: u64,
    pub ttl_secs: u64,
}
