use crate::config::{AiSettings, CacheSettings};
use crate::core::AiExtractor;
use crate::models::Criteria;
use crate::services::{CachedExtractor, GeminiClient};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Extractor used when no language model is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledExtractor;

#[async_trait]
impl AiExtractor for DisabledExtractor {
    async fn extract(&self, _text: &str) -> Criteria {
        Criteria::default()
    }
}

/// Build the model extractor described by the settings
///
/// Falls back to [`DisabledExtractor`] when extraction is switched off, no
/// API key is set, or the HTTP client cannot be built; searches then rely
/// on rule-based extraction alone.
pub fn build_extractor(ai: &AiSettings, cache: &CacheSettings) -> Arc<dyn AiExtractor> {
    if !ai.enabled {
        tracing::info!("Model extraction disabled by configuration");
        return Arc::new(DisabledExtractor);
    }

    let api_key = match ai.api_key.as_deref().map(str::trim) {
        Some(key) if !key.is_empty() => key.to_string(),
        _ => {
            tracing::warn!("No Gemini API key configured, model extraction disabled");
            return Arc::new(DisabledExtractor);
        }
    };

    let client = match GeminiClient::new(
        ai.endpoint.clone(),
        api_key,
        ai.model.clone(),
        Duration::from_secs(ai.timeout_secs),
    ) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to create Gemini client ({}), model extraction disabled", e);
            return Arc::new(DisabledExtractor);
        }
    };

    tracing::info!(
        "Gemini extraction enabled (model: {}, cache: {} entries, TTL: {}s)",
        ai.model,
        cache.max_entries,
        cache.ttl_secs
    );

    Arc::new(CachedExtractor::new(client, cache.max_entries, cache.ttl_secs))
}
