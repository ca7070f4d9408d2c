use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use crate::models::domain::{Criteria, FilterReport, InfluencerResult};

/// Response for the search endpoint
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub prompt: String,
    pub interpreted_criteria: Criteria,
    pub filters_applied: FilterReport,
    pub total_matches: usize,
    pub results_returned: usize,
    pub influencers: Vec<InfluencerResult>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub influencers_loaded: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Follower count summary over the whole catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowerStats {
    pub min: u64,
    pub max: u64,
    pub mean: u64,
}

/// Dataset statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_influencers: usize,
    pub gender_distribution: BTreeMap<String, usize>,
    pub platform_distribution: BTreeMap<String, usize>,
    pub category_distribution: BTreeMap<String, usize>,
    pub follower_stats: FollowerStats,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
