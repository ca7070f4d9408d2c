//! Influencer Search - natural-language search over an influencer catalog
//!
//! Free-text queries are turned into structured criteria by a rule-based
//! extractor and a language-model extractor, merged with the rules taking
//! precedence, then applied to the catalog as ordered filters with
//! engagement-first ranking.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{AiExtractor, Catalog, FilterEngine, SearchOutcome, SearchPipeline, extract_criteria, merge_criteria, project};
pub use crate::models::{AgeRange, Criteria, FilterReport, InfluencerRecord, InfluencerResult, SearchRequest, SearchResponse};
