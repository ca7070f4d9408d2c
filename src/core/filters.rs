use crate::core::canonical::{resolve_category, resolve_gender, resolve_platform};
use crate::models::{AgeRange, Criteria, InfluencerRecord, MAX_PLATFORM_AGE, MIN_PLATFORM_AGE};

/// A single resolved search predicate
///
/// Values are normalized when the filter is built, so the same filter
/// produces both the match decision and its report entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Category(String),
    Platform(String),
    Gender(String),
    /// `None` when the requested ages miss the platform range entirely
    Age(Option<AgeRange>),
    MinFollowers(u64),
    MaxFollowers(u64),
    MinEngagement(f64),
    MaxBudget(f64),
}

impl Filter {
    #[inline]
    pub fn matches(&self, record: &InfluencerRecord) -> bool {
        match self {
            Filter::Category(category) => record.category == *category,
            Filter::Platform(platform) => record.platform == *platform,
            Filter::Gender(gender) => record.gender == *gender,
            Filter::Age(Some(range)) => range.contains(i64::from(record.age)),
            Filter::Age(None) => false,
            Filter::MinFollowers(min) => record.total_followers >= *min,
            Filter::MaxFollowers(max) => record.total_followers <= *max,
            Filter::MinEngagement(min) => record.overall_engagement >= *min,
            Filter::MaxBudget(max) => record.rate <= *max,
        }
    }

    /// Report entry for this filter
    pub fn describe(&self) -> String {
        match self {
            Filter::Category(category) => format!("category: {}", category),
            Filter::Platform(platform) => format!("platform: {}", platform),
            Filter::Gender(gender) => format!("gender: {}", gender),
            Filter::Age(Some(range)) => format!("age: {}-{}", range.min, range.max),
            Filter::Age(None) => format!("age: outside {}-{}", MIN_PLATFORM_AGE, MAX_PLATFORM_AGE),
            Filter::MinFollowers(min) => format!("min followers: {}", group_thousands(*min)),
            Filter::MaxFollowers(max) => format!("max followers: {}", group_thousands(*max)),
            Filter::MinEngagement(min) => format!("min engagement: {:?}%", min),
            Filter::MaxBudget(max) => format!("max budget: ₹{}", format_amount(*max)),
        }
    }
}

/// Turn merged criteria into filters, in application order:
/// category, platform, gender, age, followers, engagement, budget
pub fn build_filters(criteria: &Criteria) -> Vec<Filter> {
    let mut filters = Vec::new();

    if let Some(category) = &criteria.category {
        filters.push(Filter::Category(resolve_category(category)));
    }
    if let Some(platform) = &criteria.platform {
        filters.push(Filter::Platform(resolve_platform(platform)));
    }
    if let Some(gender) = &criteria.gender {
        filters.push(Filter::Gender(resolve_gender(gender)));
    }
    if let Some(range) = &criteria.age_range {
        filters.push(Filter::Age(range.clamp_to_platform()));
    }
    if let Some(min) = criteria.min_followers {
        filters.push(Filter::MinFollowers(min));
    }
    if let Some(max) = criteria.max_followers {
        filters.push(Filter::MaxFollowers(max));
    }
    if let Some(min) = criteria.min_engagement {
        filters.push(Filter::MinEngagement(min));
    }
    if let Some(max) = criteria.max_budget {
        filters.push(Filter::MaxBudget(max));
    }

    filters
}

/// Check a record against every filter
#[inline]
pub fn matches_all(record: &InfluencerRecord, filters: &[Filter]) -> bool {
    filters.iter().all(|f| f.matches(record))
}

/// 1234567 -> "1,234,567"
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// 7000.0 -> "7,000.00"
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let whole = whole.parse::<u64>().map(group_thousands).unwrap_or_else(|_| whole.to_string());
    let sign = if value < 0.0 { "-" } else { "" };

    format!("{}{}.{}", sign, whole, cents)
}
