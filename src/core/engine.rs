use crate::core::{
    catalog::Catalog,
    filters::{build_filters, matches_all},
    ranking::rank,
};
use crate::models::{Criteria, FilterReport, InfluencerRecord};

/// Result of a catalog search
#[derive(Debug)]
pub struct SearchResult<'a> {
    /// Matching records in rank order
    pub records: Vec<&'a InfluencerRecord>,
    pub report: FilterReport,
}

/// Applies merged criteria to the catalog
///
/// # Pipeline Stages
/// 1. Resolve criteria into ordered filters (normalizing aliases, clamping ages)
/// 2. Keep records passing every filter
/// 3. Rank by engagement, then followers
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterEngine;

impl FilterEngine {
    pub fn new() -> Self {
        Self
    }

    /// Search the catalog with the given criteria
    ///
    /// An empty catalog is reported, not treated as an error: the result is
    /// empty and the report says the catalog is not loaded.
    pub fn search<'a>(&self, catalog: &'a Catalog, criteria: &Criteria) -> SearchResult<'a> {
        if catalog.is_empty() {
            tracing::warn!("Search requested against an empty catalog");
            return SearchResult {
                records: Vec::new(),
                report: FilterReport::catalog_unavailable(),
            };
        }

        let filters = build_filters(criteria);

        let mut report = FilterReport::new();
        for filter in &filters {
            report.push(filter.describe());
        }

        let mut records: Vec<&InfluencerRecord> = catalog
            .records()
            .iter()
            .filter(|record| matches_all(record, &filters))
            .collect();

        rank(&mut records);

        tracing::debug!(
            "Search matched {} of {} records ({})",
            records.len(),
            catalog.len(),
            report
        );

        SearchResult { records, report }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AgeRange;

    fn create_record(name: &str, gender: &str, age: u32, followers: u64, engagement: f64, rate: f64) -> InfluencerRecord {
        InfluencerRecord {
            name: name.to_string(),
            category: "fitness".to_string(),
            content_type: "reels".to_string(),
            platform: "ig".to_string(),
            total_followers: followers,
            overall_engagement: engagement,
            rate,
            age,
            gender: gender.to_string(),
            email: format!("{}@example.com", name),
            phone: "555-0100".to_string(),
        }
    }

    fn create_catalog() -> Catalog {
        Catalog::new(vec![
            create_record("a", "female", 25, 10_000, 3.0, 5000.0),
            create_record("b", "male", 40, 80_000, 6.0, 12000.0),
            create_record("c", "female", 17, 50_000, 9.0, 2000.0),
            create_record("d", "female", 64, 20_000, 3.0, 7000.0),
        ])
    }

    #[test]
    fn test_search_no_criteria_returns_all_ranked() {
        let catalog = create_catalog();
        let result = FilterEngine::new().search(&catalog, &Criteria::default());

        let names: Vec<&str> = result.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["c", "b", "d", "a"]);
        assert_eq!(result.report.to_string(), "no filters");
    }

    #[test]
    fn test_search_clamps_age_range() {
        let catalog = create_catalog();
        let criteria = Criteria {
            age_range: Some(AgeRange::new(10, 70)),
            ..Default::default()
        };

        let result = FilterEngine::new().search(&catalog, &criteria);

        // The 17 year old falls below the clamped floor of 18
        assert_eq!(result.records.len(), 3);
        assert!(result.records.iter().all(|r| r.age >= 18 && r.age <= 65));
        assert_eq!(result.report.to_string(), "age: 18-65");
    }

    #[test]
    fn test_search_one_sided_age_outside_platform() {
        let catalog = Catalog::new(vec![
            create_record("eighteen", "female", 18, 10_000, 3.0, 5000.0),
            create_record("sixtyfive", "male", 65, 10_000, 4.0, 5000.0),
        ]);

        for query in ["creators over 70", "creators under 10"] {
            let criteria = crate::core::extract::extract_criteria(query);
            let result = FilterEngine::new().search(&catalog, &criteria);

            assert!(result.records.is_empty(), "{} matched records", query);
            assert_eq!(result.report.to_string(), "age: outside 18-65");
        }
    }

    #[test]
    fn test_search_combines_filters() {
        let catalog = create_catalog();
        let criteria = Criteria {
            gender: Some("female".to_string()),
            max_budget: Some(7000.0),
            ..Default::default()
        };

        let result = FilterEngine::new().search(&catalog, &criteria);

        let names: Vec<&str> = result.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["c", "d", "a"]);
        assert_eq!(result.report.entries(), ["gender: female", "max budget: ₹7,000.00"]);
    }

    #[test]
    fn test_search_empty_catalog() {
        let catalog = Catalog::empty();
        let result = FilterEngine::new().search(&catalog, &Criteria::default());

        assert!(result.records.is_empty());
        assert_eq!(result.report.to_string(), "catalog not loaded");
    }

    #[test]
    fn test_search_no_matches_still_reports_filters() {
        let catalog = create_catalog();
        let criteria = Criteria {
            platform: Some("tiktok".to_string()),
            ..Default::default()
        };

        let result = FilterEngine::new().search(&catalog, &criteria);

        assert!(result.records.is_empty());
        assert_eq!(result.report.to_string(), "platform: tiktok");
    }
}
