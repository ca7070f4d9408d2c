use crate::models::InfluencerRecord;
use std::cmp::Ordering;

/// Ranking order: engagement descending, then followers descending
///
/// Engagement predicts campaign performance better than reach, so it leads;
/// followers only break ties.
#[inline]
pub fn compare_by_rank(a: &InfluencerRecord, b: &InfluencerRecord) -> Ordering {
    b.overall_engagement
        .partial_cmp(&a.overall_engagement)
        .unwrap_or(Ordering::Equal)
        .then_with(|| b.total_followers.cmp(&a.total_followers))
}

/// Sort in place; stable, so equal records keep catalog order
pub fn rank(records: &mut [&InfluencerRecord]) {
    records.sort_by(|a, b| compare_by_rank(a, b));
}
