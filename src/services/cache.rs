use crate::core::AiExtractor;
use crate::models::Criteria;
use async_trait::async_trait;
use std::time::Duration;

/// Memoizing wrapper around a model extractor
///
/// Identical queries (after lower-casing and trimming) reuse the earlier
/// answer until the TTL expires. Empty answers are not stored, so a query
/// that hit a transient failure is retried the next time it arrives.
pub struct CachedExtractor<E> {
    inner: E,
    cache: moka::future::Cache<String, Criteria>,
}

impl<E: AiExtractor> CachedExtractor<E> {
    pub fn new(inner: E, max_entries: u64, ttl_secs: u64) -> Self {
        let cache = moka::future::CacheBuilder::new(max_entries)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { inner, cache }
    }

    /// Approximate number of cached answers
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }
}

#[async_trait]
impl<E: AiExtractor> AiExtractor for CachedExtractor<E> {
    async fn extract(&self, text: &str) -> Criteria {
        let key = CacheKey::criteria(text);

        if let Some(criteria) = self.cache.get(&key).await {
            tracing::trace!("Criteria cache hit: {}", key);
            return criteria;
        }

        let criteria = self.inner.extract(text).await;

        if !criteria.is_empty() {
            self.cache.insert(key, criteria.clone()).await;
        }

        criteria
    }
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Build a cache key for extracted criteria
    pub fn criteria(text: &str) -> String {
        format!("criteria:{}", text.trim().to_lowercase())
    }
}
