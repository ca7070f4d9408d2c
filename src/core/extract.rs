use crate::core::canonical::{first_substring_match, CATEGORY_SYNONYMS, GENDER_TRIGGERS, PLATFORM_ALIASES};
use crate::models::{AgeRange, Criteria, MAX_PLATFORM_AGE, MIN_PLATFORM_AGE};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Recognized age phrasings, tried in capture-group order:
/// under N, over N, N-M, N to M, below N, above N
static AGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"under (\d+)|over (\d+)|(\d+)\s*-\s*(\d+)|(\d+)\s*to\s*(\d+)|below (\d+)|above (\d+)")
        .expect("age pattern is valid")
});

/// Extract the high-confidence fields from a raw query
///
/// Pulls gender, age range, platform and category with fixed rules. Never
/// fails; a field with no trigger in the text is left unset.
pub fn extract_criteria(text: &str) -> Criteria {
    let text = text.to_lowercase();

    Criteria {
        gender: extract_gender(&text).map(str::to_string),
        age_range: extract_age_range(&text),
        platform: first_substring_match(PLATFORM_ALIASES, &text).map(str::to_string),
        category: first_substring_match(CATEGORY_SYNONYMS, &text).map(str::to_string),
        ..Default::default()
    }
}

/// Gender triggers are whole words, so "the" never reads as "he".
/// A plural word ("girls", "males") counts as its trigger.
fn extract_gender(text: &str) -> Option<&'static str> {
    let words: Vec<&str> = text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    GENDER_TRIGGERS
        .iter()
        .find(|(_, triggers)| {
            triggers
                .iter()
                .any(|t| words.iter().any(|w| is_trigger_word(w, t)))
        })
        .map(|(gender, _)| *gender)
}

fn is_trigger_word(word: &str, trigger: &str) -> bool {
    word == trigger || word.strip_suffix('s') == Some(trigger)
}

/// One-sided bounds are kept as requested: a limit outside the platform
/// ages yields a range that does not overlap it, instead of being pulled in.
fn at_most(n: i64) -> AgeRange {
    AgeRange::new(MIN_PLATFORM_AGE.min(n), n)
}

fn at_least(n: i64) -> AgeRange {
    AgeRange::new(n, MAX_PLATFORM_AGE.max(n))
}

fn extract_age_range(text: &str) -> Option<AgeRange> {
    let caps = AGE_PATTERN.captures(text)?;

    if let Some(n) = group(&caps, 1) {
        return Some(at_most(n?));
    }
    if let Some(n) = group(&caps, 2) {
        return Some(at_least(n?));
    }
    if let (Some(a), Some(b)) = (group(&caps, 3), group(&caps, 4)) {
        return Some(AgeRange::new(a?, b?));
    }
    if let (Some(a), Some(b)) = (group(&caps, 5), group(&caps, 6)) {
        return Some(AgeRange::new(a?, b?));
    }
    if let Some(n) = group(&caps, 7) {
        return Some(at_most(n?));
    }
    if let Some(n) = group(&caps, 8) {
        return Some(at_least(n?));
    }

    None
}

/// Outer `None`: group did not participate. Inner `None`: number overflowed.
fn group(caps: &Captures<'_>, index: usize) -> Option<Option<i64>> {
    caps.get(index).map(|m| m.as_str().parse().ok())
}
