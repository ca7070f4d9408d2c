use crate::models::{FollowerStats, InfluencerRecord, StatsResponse};
use std::collections::BTreeMap;

/// Read-only, in-memory influencer table
///
/// Built once at startup and shared behind an `Arc`; nothing mutates it
/// afterwards, so concurrent searches need no synchronization.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<InfluencerRecord>,
}

impl Catalog {
    pub fn new(records: Vec<InfluencerRecord>) -> Self {
        Self { records }
    }

    /// Placeholder used when loading failed
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[InfluencerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distribution and follower statistics, `None` for an empty catalog
    pub fn stats(&self) -> Option<StatsResponse> {
        if self.records.is_empty() {
            return None;
        }

        let mut gender_distribution = BTreeMap::new();
        let mut platform_distribution = BTreeMap::new();
        let mut category_distribution = BTreeMap::new();

        for record in &self.records {
            *gender_distribution.entry(record.gender.clone()).or_insert(0) += 1;
            *platform_distribution.entry(record.platform.clone()).or_insert(0) += 1;
            *category_distribution.entry(record.category.clone()).or_insert(0) += 1;
        }

        let followers = self.records.iter().map(|r| r.total_followers);
        let min = followers.clone().min().unwrap_or(0);
        let max = followers.clone().max().unwrap_or(0);
        let total: u128 = followers.map(u128::from).sum();
        let mean = (total / self.records.len() as u128) as u64;

        Some(StatsResponse {
            total_influencers: self.records.len(),
            gender_distribution,
            platform_distribution,
            category_distribution,
            follower_stats: FollowerStats { min, max, mean },
        })
    }
}
