use serde::{Deserialize, Serialize};

/// Lowest age the platform works with
pub const MIN_PLATFORM_AGE: i64 = 18;

/// Highest age the platform works with
pub const MAX_PLATFORM_AGE: i64 = 65;

/// One row of the influencer catalog
///
/// String fields other than `name` arrive lower-cased and trimmed from the
/// catalog loader; the search core compares them as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfluencerRecord {
    pub name: String,
    pub category: String,
    pub content_type: String,
    pub platform: String,
    pub total_followers: u64,
    pub overall_engagement: f64,
    pub rate: f64,
    pub age: u32,
    pub gender: String,
    pub email: String,
    pub phone: String,
}

/// Inclusive age range, always ordered so that `min <= max`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(i64, i64)", into = "(i64, i64)")]
pub struct AgeRange {
    pub min: i64,
    pub max: i64,
}

impl AgeRange {
    /// Build a range from two bounds given in either order
    pub fn new(a: i64, b: i64) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Restrict the range to the platform's working ages.
    ///
    /// Returns `None` when the requested range does not overlap [18, 65].
    pub fn clamp_to_platform(&self) -> Option<AgeRange> {
        let min = self.min.max(MIN_PLATFORM_AGE);
        let max = self.max.min(MAX_PLATFORM_AGE);
        (min <= max).then_some(AgeRange { min, max })
    }

    #[inline]
    pub fn contains(&self, age: i64) -> bool {
        age >= self.min && age <= self.max
    }
}

impl From<(i64, i64)> for AgeRange {
    fn from((a, b): (i64, i64)) -> Self {
        AgeRange::new(a, b)
    }
}

impl From<AgeRange> for (i64, i64) {
    fn from(range: AgeRange) -> Self {
        (range.min, range.max)
    }
}

/// Structured search intent extracted from a free-text query
///
/// A `None` field places no constraint on the search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_followers: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_followers: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_engagement: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_range: Option<AgeRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

impl Criteria {
    pub fn is_empty(&self) -> bool {
        *self == Criteria::default()
    }
}

/// Human-readable trace of the filters a search actually applied
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterReport {
    entries: Vec<String>,
}

impl FilterReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report for a search that could not run because the catalog is empty
    pub fn catalog_unavailable() -> Self {
        Self {
            entries: vec!["catalog not loaded".to_string()],
        }
    }

    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Display for FilterReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.entries.is_empty() {
            f.write_str("no filters")
        } else {
            f.write_str(&self.entries.join(", "))
        }
    }
}

impl Serialize for FilterReport {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Contact details in the public result shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
}

/// Public projection of a ranked catalog record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfluencerResult {
    pub name: String,
    pub category: String,
    pub content_type: String,
    pub platform: String,
    pub followers: u64,
    pub engagement: f64,
    pub rate: f64,
    pub age: u32,
    pub gender: String,
    pub contact: Contact,
}
