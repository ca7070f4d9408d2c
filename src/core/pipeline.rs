use crate::core::{
    catalog::Catalog,
    engine::FilterEngine,
    extract::extract_criteria,
    merge::merge_criteria,
    projector::project,
};
use crate::models::{Criteria, FilterReport, InfluencerResult};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Loose, model-backed criteria extraction
///
/// Implementations must never fail: any error (transport, timeout, quota,
/// unparseable output) is returned as empty criteria, the same as a model
/// that found nothing.
#[async_trait]
pub trait AiExtractor: Send + Sync {
    async fn extract(&self, text: &str) -> Criteria;
}

/// Errors surfaced by the search pipeline
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("Invalid limit: {0} (must be at least 1)")]
    InvalidLimit(usize),
}

/// Outcome of a resolved search
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub criteria: Criteria,
    pub filter_report: FilterReport,
    pub total_matches: usize,
    pub returned_results: Vec<InfluencerResult>,
}

/// Resolves free text into criteria and searches the catalog
///
/// # Pipeline Stages
/// 1. Rule-based extraction and model extraction of the raw text
/// 2. Merge, rule-based values winning conflicts
/// 3. Filter and rank against the catalog
/// 4. Truncate and project to the public shape
#[derive(Clone)]
pub struct SearchPipeline {
    catalog: Arc<Catalog>,
    ai: Arc<dyn AiExtractor>,
    engine: FilterEngine,
}

impl SearchPipeline {
    pub fn new(catalog: Arc<Catalog>, ai: Arc<dyn AiExtractor>) -> Self {
        Self {
            catalog,
            ai,
            engine: FilterEngine::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Turn a raw query into criteria
    pub async fn resolve(&self, raw_text: &str) -> Criteria {
        // Both extractions finish before the merge; their order is irrelevant
        let manual = extract_criteria(raw_text);
        let ai = self.ai.extract(raw_text).await;

        tracing::debug!("Extracted criteria - manual: {:?}, ai: {:?}", manual, ai);

        merge_criteria(ai, manual)
    }

    /// Resolve a raw query and return at most `limit` ranked results
    pub async fn resolve_and_search(
        &self,
        raw_text: &str,
        limit: usize,
    ) -> Result<SearchOutcome, SearchError> {
        if limit == 0 {
            return Err(SearchError::InvalidLimit(limit));
        }

        let criteria = self.resolve(raw_text).await;
        let result = self.engine.search(&self.catalog, &criteria);
        let returned_results = project(&result.records, limit);

        Ok(SearchOutcome {
            criteria,
            filter_report: result.report,
            total_matches: result.records.len(),
            returned_results,
        })
    }
}
