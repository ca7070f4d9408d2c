use crate::models::Criteria;

/// Combine model-extracted and rule-extracted criteria
///
/// Rule-based (`manual`) values win wherever both sides set a field; fields
/// set on only one side pass through. Values are not validated here.
pub fn merge_criteria(ai: Criteria, manual: Criteria) -> Criteria {
    Criteria {
        category: manual.category.or(ai.category),
        content_type: manual.content_type.or(ai.content_type),
        platform: manual.platform.or(ai.platform),
        min_followers: manual.min_followers.or(ai.min_followers),
        max_followers: manual.max_followers.or(ai.max_followers),
        min_engagement: manual.min_engagement.or(ai.min_engagement),
        max_budget: manual.max_budget.or(ai.max_budget),
        age_range: manual.age_range.or(ai.age_range),
        gender: manual.gender.or(ai.gender),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AgeRange;

    #[test]
    fn test_manual_wins_on_conflict() {
        let ai = Criteria {
            age_range: Some(AgeRange::new(13, 19)),
            platform: Some("youtube".to_string()),
            ..Default::default()
        };
        let manual = Criteria {
            age_range: Some(AgeRange::new(18, 22)),
            ..Default::default()
        };

        let merged = merge_criteria(ai, manual);
        assert_eq!(merged.age_range, Some(AgeRange::new(18, 22)));
        assert_eq!(merged.platform.as_deref(), Some("youtube"));
    }

    #[test]
    fn test_empty_ai_keeps_manual() {
        let manual = Criteria {
            gender: Some("male".to_string()),
            category: Some("tech".to_string()),
            ..Default::default()
        };

        assert_eq!(merge_criteria(Criteria::default(), manual.clone()), manual);
    }

    #[test]
    fn test_ai_only_fields_pass_through() {
        let ai = Criteria {
            max_budget: Some(7000.0),
            min_followers: Some(50_000),
            ..Default::default()
        };

        let merged = merge_criteria(ai.clone(), Criteria::default());
        assert_eq!(merged, ai);
    }
}
